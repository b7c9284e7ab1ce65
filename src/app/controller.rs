//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::MapAccess;
use crate::host::HostUi;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Karte und Host werden pro Aufruf geliehen; der Controller hält keinen eigenen Zustand.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<M: MapAccess>(
        &mut self,
        state: &mut AppState,
        map: &mut M,
        host: &mut dyn HostUi,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, map, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<M: MapAccess>(
        &mut self,
        state: &mut AppState,
        map: &mut M,
        host: &mut dyn HostUi,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Fenster ===
            AppCommand::OpenPanel => handlers::panel::open(state, host),
            AppCommand::ClosePanel => handlers::panel::close(state),

            // === Pick-Tools ===
            AppCommand::ActivatePickTool { tool } => {
                handlers::pick_tool::activate(state, host, tool)
            }
            AppCommand::CancelPickTool => handlers::pick_tool::cancel(state),
            AppCommand::PickAt { world_pos } => {
                handlers::pick_tool::pick_at(state, map, host, world_pos)
            }

            // === Selektion ===
            AppCommand::StepSpinner { field, step } => {
                handlers::selection::step_spinner(state, host, field, step)
            }
            AppCommand::SetToggle { field, checked } => {
                handlers::selection::set_toggle(state, field, checked)
            }

            // === Terraform ===
            AppCommand::ExecuteTerraform => handlers::terraform::execute(state, map, host),
        }

        Ok(())
    }
}
