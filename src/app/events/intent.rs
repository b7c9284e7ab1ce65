use crate::app::state::{SpinnerField, ToggleField};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Menüeintrag "Scenery Terraformer" gewählt
    MenuItemActivated,
    /// Fenster wurde vom Host geschlossen
    PanelClosed,
    /// Button "Eyedropper" (Szenerie-Pipette)
    SceneryPickerRequested,
    /// Button "Terrain Picker"
    TerrainPickerRequested,
    /// Pointer-Down auf der Karte während ein Tool aktiv ist
    /// (`None` = Klick ohne Karten-Koordinate)
    MapPointerDown { world_pos: Option<glam::Vec2> },
    /// Host hat das aktive Tool beendet (z.B. anderes Werkzeug gewählt)
    ToolCancelledByHost,
    /// Spinner-Pfeil nach oben
    SpinnerIncremented { field: SpinnerField },
    /// Spinner-Pfeil nach unten
    SpinnerDecremented { field: SpinnerField },
    /// Checkbox umgeschaltet
    CheckboxChanged { field: ToggleField, checked: bool },
    /// Button "Execute Terraforming"
    ExecuteRequested,
}
