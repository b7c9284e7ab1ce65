//! Use-Case: Pipetten-Klick auf die Karte.

use crate::app::tools::{self, PickError, PickTool, PICK_FAILED_TITLE};
use crate::app::AppState;
use crate::core::{MapAccess, TileCoords};
use crate::host::{HostUi, ToolActivation};
use glam::Vec2;

/// Ergebnis eines Pointer-Down während ein Pick-Tool wartet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Kein Pick-Tool aktiv
    NoActiveTool,
    /// Klick ohne gültige Karten-Koordinate; Werkzeug bleibt aktiv
    Ignored,
    /// Wert übernommen, Werkzeug beendet
    Picked(PickTool),
    /// Nichts Passendes auf dem Tile; Werkzeug bleibt aktiv
    Failed(PickError),
}

/// Aktiviert ein Pick-Tool exklusiv beim Host.
pub fn activate(state: &mut AppState, host: &mut dyn HostUi, tool: PickTool) {
    if let Some(previous) = state.pick_tool.activate(tool) {
        log::debug!("Pick-Tool {} durch {} ersetzt", previous.id(), tool.id());
    }
    host.activate_tool(ToolActivation {
        id: tool.id(),
        cursor: tool.cursor(),
    });
    log::info!("Pick-Tool aktiv: {}", tool.id());
}

/// Der Host hat das Werkzeug beendet (z.B. anderes Tool gewählt).
pub fn cancelled_by_host(state: &mut AppState) {
    if let Some(tool) = state.pick_tool.cancel() {
        log::info!("Pick-Tool {} vom Host abgebrochen", tool.id());
    }
}

/// Verarbeitet einen Pointer-Down auf der Karte.
///
/// `world_pos` ist `None`, wenn der Klick keine Karten-Koordinate hat.
pub fn pointer_down<M: MapAccess>(
    state: &mut AppState,
    map: &M,
    host: &mut dyn HostUi,
    world_pos: Option<Vec2>,
) -> PickOutcome {
    let Some(tool) = state.pick_tool.awaiting() else {
        return PickOutcome::NoActiveTool;
    };

    let Some(tile) = world_pos
        .and_then(TileCoords::from_world)
        .and_then(|coords| map.tile(coords))
    else {
        return PickOutcome::Ignored;
    };

    let picked = match tool {
        PickTool::Scenery => tools::pick_scenery(tile).map(|object_id| {
            state.selection.target_object_id = object_id;
            log::info!("Ziel-Objekt gepickt: {}", object_id);
        }),
        PickTool::Terrain => tools::pick_terrain_style(tile).map(|style| {
            state.selection.surface_style_id = style.surface_style;
            state.selection.edge_style_id = style.edge_style;
            state.selection.apply_style = true;
            log::info!(
                "Terrain-Stil gepickt: Oberflaeche {}, Kante {}",
                style.surface_style,
                style.edge_style
            );
        }),
    };

    match picked {
        Ok(()) => {
            super::panel::refresh(state, host);
            state.pick_tool.complete();
            host.cancel_tool();
            PickOutcome::Picked(tool)
        }
        Err(err) => {
            log::warn!("Pick mit {} fehlgeschlagen: {}", tool.id(), err);
            if state.options.show_pick_failures || err == PickError::NoScenery {
                host.show_error(PICK_FAILED_TITLE, &err.to_string());
            }
            PickOutcome::Failed(err)
        }
    }
}
