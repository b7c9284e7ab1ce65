//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::SpinnerStep;
use super::tools::PickTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MenuItemActivated => vec![AppCommand::OpenPanel],
        AppIntent::PanelClosed => vec![AppCommand::ClosePanel],
        AppIntent::SceneryPickerRequested => vec![AppCommand::ActivatePickTool {
            tool: PickTool::Scenery,
        }],
        AppIntent::TerrainPickerRequested => vec![AppCommand::ActivatePickTool {
            tool: PickTool::Terrain,
        }],
        AppIntent::MapPointerDown { world_pos } => {
            // Ohne wartendes Pick-Tool gehört der Klick der normalen Karteninteraktion.
            if state.pick_tool.is_active() {
                vec![AppCommand::PickAt { world_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::ToolCancelledByHost => {
            if state.pick_tool.is_active() {
                vec![AppCommand::CancelPickTool]
            } else {
                vec![]
            }
        }
        AppIntent::SpinnerIncremented { field } => vec![AppCommand::StepSpinner {
            field,
            step: SpinnerStep::Increment,
        }],
        AppIntent::SpinnerDecremented { field } => vec![AppCommand::StepSpinner {
            field,
            step: SpinnerStep::Decrement,
        }],
        AppIntent::CheckboxChanged { field, checked } => {
            vec![AppCommand::SetToggle { field, checked }]
        }
        AppIntent::ExecuteRequested => vec![AppCommand::ExecuteTerraform],
    }
}
