//! Handler für die Pipetten-Werkzeuge.

use crate::app::tools::PickTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MapAccess;
use crate::host::HostUi;

/// Aktiviert ein Pick-Tool.
pub fn activate(state: &mut AppState, host: &mut dyn HostUi, tool: PickTool) {
    use_cases::pick::activate(state, host, tool);
}

/// Setzt das Pick-Tool nach Host-Abbruch zurück.
pub fn cancel(state: &mut AppState) {
    use_cases::pick::cancelled_by_host(state);
}

/// Verarbeitet den Klick des wartenden Pick-Tools.
pub fn pick_at<M: MapAccess>(
    state: &mut AppState,
    map: &M,
    host: &mut dyn HostUi,
    world_pos: Option<glam::Vec2>,
) {
    let outcome = use_cases::pick::pointer_down(state, map, host, world_pos);
    log::debug!("Pick-Ergebnis: {:?}", outcome);
}
