//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand einer Sitzung (Selektion, Pick-Tool, Fenster).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, PanelState, SelectionState, SpinnerField, SpinnerStep, ToggleField};
pub use tools::{PickError, PickTool, PickToolState};
pub use use_cases::report::TerraformReport;
pub use use_cases::terraform::{execute_terraform, TerraformCounts};
