//! Host-Schnittstelle: UI-Kollaborator, gegen den die Anwendungslogik arbeitet.
//!
//! Der Host besitzt Fenster, Widgets und das Tool-System. Die Logik sieht nur
//! den `HostUi`-Trait und schiebt `PanelView`-Snapshots zurück.

mod headless;
mod panel;

pub use headless::{HeadlessHost, Notification};
pub use panel::PanelView;

/// Mauszeiger während ein Werkzeug aktiv ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCursor {
    /// Pipetten-Cursor
    Picker,
}

/// Anfrage zur exklusiven Tool-Aktivierung beim Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolActivation {
    /// Eindeutige Tool-ID
    pub id: &'static str,
    pub cursor: ToolCursor,
}

/// UI-Kollaborator des Hosts.
///
/// Pointer-Events eines aktivierten Tools kommen als `AppIntent::MapPointerDown`
/// zurück; ein Abbruch durch den Host als `AppIntent::ToolCancelledByHost`.
pub trait HostUi {
    /// Zeigt einen Dialog (auch für reine Info-Meldungen genutzt).
    fn show_error(&mut self, title: &str, message: &str);

    /// Aktiviert ein Werkzeug exklusiv; ein zuvor aktives Host-Tool endet damit.
    fn activate_tool(&mut self, activation: ToolActivation);

    /// Beendet das aktive Werkzeug.
    fn cancel_tool(&mut self);

    /// Überträgt den aktuellen Selektionszustand in die Widgets des Panels.
    fn refresh_panel(&mut self, view: &PanelView);
}
