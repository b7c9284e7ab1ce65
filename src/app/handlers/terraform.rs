//! Handler für den Terraform-Lauf.

use crate::app::use_cases;
use crate::app::use_cases::report::TerraformReport;
use crate::app::AppState;
use crate::core::MapAccess;
use crate::host::HostUi;

/// Führt den Terraform-Lauf aus und meldet das Ergebnis.
pub fn execute<M: MapAccess>(state: &mut AppState, map: &mut M, host: &mut dyn HostUi) {
    let counts = use_cases::terraform::execute_terraform(&state.selection, map);
    let report = TerraformReport {
        counts,
        delete_requested: state.selection.delete_objects,
    };
    use_cases::report::deliver(host, &report);
    state.last_report = Some(report);
}
