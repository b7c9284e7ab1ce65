/// Zustand des Terraformer-Fensters.
///
/// Widgets werden nur aktualisiert, solange das Fenster offen ist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Ob das Fenster geöffnet ist
    pub open: bool,
}
