//! Application State — zentrale Datenhaltung einer Sitzung.

mod app_state;
mod panel;
mod selection;

pub use app_state::AppState;
pub use panel::PanelState;
pub use selection::{SelectionState, SpinnerField, SpinnerStep, ToggleField};
