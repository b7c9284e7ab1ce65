use crate::app::state::{SpinnerField, SpinnerStep, ToggleField};
use crate::app::tools::PickTool;

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Fenster öffnen und Widgets füllen
    OpenPanel,
    /// Fenster als geschlossen markieren
    ClosePanel,
    /// Pick-Tool exklusiv aktivieren
    ActivatePickTool { tool: PickTool },
    /// Pick-Tool nach Abbruch durch den Host zurücksetzen
    CancelPickTool,
    /// Pick an Welt-Position ausführen
    PickAt { world_pos: Option<glam::Vec2> },
    /// Spinner-Wert ändern
    StepSpinner {
        field: SpinnerField,
        step: SpinnerStep,
    },
    /// Checkbox-Wert setzen
    SetToggle { field: ToggleField, checked: bool },
    /// Terraform-Lauf über die ganze Karte
    ExecuteTerraform,
}
