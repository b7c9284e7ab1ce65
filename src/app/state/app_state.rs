use crate::app::tools::PickToolState;
use crate::app::use_cases::report::TerraformReport;
use crate::app::CommandLog;
use crate::shared::EditorOptions;

use super::{PanelState, SelectionState};

/// Hauptzustand einer Editor-Sitzung
pub struct AppState {
    /// Parameter des Terraform-Laufs
    pub selection: SelectionState,
    /// Zustand der Pick-Tools
    pub pick_tool: PickToolState,
    /// Terraformer-Fenster
    pub panel: PanelState,
    /// Ergebnis des letzten Terraform-Laufs
    pub last_report: Option<TerraformReport>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen App-State; die Selektion startet mit den Werten aus `options`.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            selection: SelectionState::from_options(&options),
            pick_tool: PickToolState::default(),
            panel: PanelState::default(),
            last_report: None,
            command_log: CommandLog::new(),
            options,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
