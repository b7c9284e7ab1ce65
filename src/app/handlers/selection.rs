//! Handler für Spinner und Checkboxen der Selektion.

use crate::app::state::{SpinnerField, SpinnerStep, ToggleField};
use crate::app::use_cases;
use crate::app::AppState;
use crate::host::HostUi;

/// Ändert einen Spinner-Wert und aktualisiert das Panel.
pub fn step_spinner(
    state: &mut AppState,
    host: &mut dyn HostUi,
    field: SpinnerField,
    step: SpinnerStep,
) {
    if !state.selection.step(field, step) {
        log::debug!("{:?} {:?}: Wert unveraendert", field, step);
    }
    use_cases::panel::refresh(state, host);
}

/// Setzt eine Checkbox. Das Widget zeigt den neuen Wert bereits an.
pub fn set_toggle(state: &mut AppState, field: ToggleField, checked: bool) {
    state.selection.set_toggle(field, checked);
    log::debug!("{:?} = {}", field, checked);
}
