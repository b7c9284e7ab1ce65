//! Handler für das Terraformer-Fenster.

use crate::app::use_cases;
use crate::app::AppState;
use crate::host::HostUi;

/// Öffnet das Fenster.
pub fn open(state: &mut AppState, host: &mut dyn HostUi) {
    use_cases::panel::open(state, host);
}

/// Markiert das Fenster als geschlossen.
pub fn close(state: &mut AppState) {
    use_cases::panel::close(state);
    log::info!("Terraformer-Fenster geschlossen");
}
