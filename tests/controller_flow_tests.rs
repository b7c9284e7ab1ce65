use glam::Vec2;
use scenery_terraformer::{AppCommand, AppController, AppIntent, AppState};
use scenery_terraformer::{
    GridMap, HeadlessHost, MapAccess, MapSize, PickTool, SpinnerField, SurfaceElement, Tile,
    TileAccess, TileCoords, TileElement, ToggleField,
};

/// 3x2-Karte: Objekt 5 auf (0,0) und (2,1), Groß-Szenerie 42 auf (1,0).
fn sample_map() -> GridMap {
    GridMap::with_flat_surface(MapSize::new(3, 2), 10)
        .with_tile(
            TileCoords::new(0, 0),
            Tile::new()
                .with(TileElement::Surface(
                    SurfaceElement::flat(10).with_slope(4).with_style(1, 1),
                ))
                .with(TileElement::small_scenery(5)),
        )
        .with_tile(
            TileCoords::new(1, 0),
            Tile::new()
                .with(TileElement::Surface(SurfaceElement::flat(20).with_style(7, 3)))
                .with(TileElement::other("footpath"))
                .with(TileElement::large_scenery(42)),
        )
        .with_tile(
            TileCoords::new(2, 1),
            Tile::new()
                .with(TileElement::small_scenery(5))
                .with(TileElement::Surface(SurfaceElement::flat(6).with_slope(9)))
                .with(TileElement::small_scenery(5)),
        )
}

fn tile_center(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 * 32.0 + 16.0, y as f32 * 32.0 + 16.0)
}

struct Session {
    controller: AppController,
    state: AppState,
    map: GridMap,
    host: HeadlessHost,
}

impl Session {
    fn new(map: GridMap) -> Self {
        Self {
            controller: AppController::new(),
            state: AppState::new(),
            map,
            host: HeadlessHost::new(),
        }
    }

    fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, &mut self.map, &mut self.host, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn surface(&self, x: i32, y: i32) -> SurfaceElement {
        *self
            .map
            .tile(TileCoords::new(x, y))
            .and_then(|tile| tile.surface())
            .expect("Tile sollte eine Oberflaeche haben")
    }
}

#[test]
fn test_menu_item_opens_panel_and_fills_widgets() {
    let mut session = Session::new(sample_map());

    session.send(AppIntent::MenuItemActivated);

    assert!(session.state.panel.open);
    let panel = session.host.panel.as_ref().expect("Panel sollte gefuellt sein");
    assert_eq!(panel.id_spinner, "0");
    assert_eq!(panel.height_spinner, "0");
    assert!(panel.flatten_checkbox);
    assert!(!panel.delete_checkbox);
}

#[test]
fn test_spinners_refresh_panel_and_clamp_ids() {
    let mut session = Session::new(sample_map());
    session.send(AppIntent::MenuItemActivated);

    session.send(AppIntent::SpinnerDecremented {
        field: SpinnerField::TargetObject,
    });
    session.send(AppIntent::SpinnerDecremented {
        field: SpinnerField::HeightDelta,
    });
    session.send(AppIntent::SpinnerIncremented {
        field: SpinnerField::SurfaceStyle,
    });

    assert_eq!(session.state.selection.target_object_id, 0);
    assert_eq!(session.state.selection.height_delta, -1);
    assert_eq!(session.state.selection.surface_style_id, 1);

    let panel = session.host.panel.as_ref().expect("Panel sollte gefuellt sein");
    assert_eq!(panel.height_spinner, "-1");
    assert_eq!(panel.surface_spinner, "1");
    // Öffnen + drei Spinner-Klicks
    assert_eq!(session.host.refresh_count, 4);
}

#[test]
fn test_checkbox_changes_do_not_refresh_panel() {
    let mut session = Session::new(sample_map());
    session.send(AppIntent::MenuItemActivated);

    session.send(AppIntent::CheckboxChanged {
        field: ToggleField::DeleteObjects,
        checked: true,
    });

    assert!(session.state.selection.delete_objects);
    assert_eq!(session.host.refresh_count, 1);
}

#[test]
fn test_scenery_picker_flow_sets_target_and_deactivates() {
    let mut session = Session::new(sample_map());
    session.send(AppIntent::MenuItemActivated);

    session.send(AppIntent::SceneryPickerRequested);
    let tool = session.host.active_tool.expect("Tool sollte aktiv sein");
    assert_eq!(tool.id, "scenery-picker");

    session.send(AppIntent::MapPointerDown {
        world_pos: Some(tile_center(1, 0)),
    });

    assert_eq!(session.state.selection.target_object_id, 42);
    assert!(!session.state.pick_tool.is_active());
    assert!(session.host.active_tool.is_none());
    assert_eq!(
        session.host.panel.as_ref().map(|p| p.id_spinner.as_str()),
        Some("42")
    );
}

#[test]
fn test_scenery_picker_failure_keeps_tool_for_retry() {
    let mut session = Session::new(sample_map());

    session.send(AppIntent::SceneryPickerRequested);
    session.send(AppIntent::MapPointerDown {
        world_pos: Some(tile_center(1, 1)),
    });

    assert_eq!(session.state.pick_tool.awaiting(), Some(PickTool::Scenery));
    let note = session
        .host
        .last_notification()
        .expect("Fehlermeldung erwartet");
    assert_eq!(note.title, "Selection Failed");

    session.send(AppIntent::MapPointerDown {
        world_pos: Some(tile_center(2, 1)),
    });
    assert_eq!(session.state.selection.target_object_id, 5);
    assert!(!session.state.pick_tool.is_active());
}

#[test]
fn test_host_cancel_resets_tool_and_later_clicks_are_ignored() {
    let mut session = Session::new(sample_map());

    session.send(AppIntent::TerrainPickerRequested);
    session.send(AppIntent::ToolCancelledByHost);
    assert!(!session.state.pick_tool.is_active());

    session.send(AppIntent::MapPointerDown {
        world_pos: Some(tile_center(1, 0)),
    });
    assert_eq!(session.state.selection.surface_style_id, 0);
    assert!(!session.state.selection.apply_style);

    assert!(!session
        .state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::PickAt { .. })));
}

#[test]
fn test_terrain_picker_then_execute_applies_picked_style() {
    let mut session = Session::new(sample_map());

    session.send(AppIntent::TerrainPickerRequested);
    session.send(AppIntent::MapPointerDown {
        world_pos: Some(tile_center(1, 0)),
    });
    assert!(session.state.selection.apply_style);

    for _ in 0..5 {
        session.send(AppIntent::SpinnerIncremented {
            field: SpinnerField::TargetObject,
        });
    }
    session.send(AppIntent::ExecuteRequested);

    let report = session.state.last_report.expect("Report erwartet");
    assert_eq!(report.counts.modified, 2);
    for (x, y) in [(0, 0), (2, 1)] {
        let surface = session.surface(x, y);
        assert_eq!((surface.surface_style, surface.edge_style), (7, 3));
    }
    assert_eq!(session.surface(1, 1).surface_style, 0);
}

#[test]
fn test_execute_with_delete_reports_counts_and_is_idempotent() {
    let mut session = Session::new(sample_map());
    session.state.selection.target_object_id = 5;
    session.send(AppIntent::CheckboxChanged {
        field: ToggleField::DeleteObjects,
        checked: true,
    });
    session.send(AppIntent::SpinnerIncremented {
        field: SpinnerField::HeightDelta,
    });

    session.send(AppIntent::ExecuteRequested);

    let note = session.host.last_notification().expect("Meldung erwartet");
    assert_eq!(note.title, "Complete");
    assert_eq!(note.message, "Modified 2 tiles. Deleted 3 objects.");
    assert_eq!(session.surface(0, 0).base_height, 12);
    assert_eq!(session.surface(0, 0).slope, 0);
    assert_eq!(session.surface(2, 1).base_height, 8);
    let tile = session
        .map
        .tile(TileCoords::new(2, 1))
        .expect("Tile (2,1) erwartet");
    assert_eq!(tile.num_elements(), 1);

    session.send(AppIntent::ExecuteRequested);
    let note = session.host.last_notification().expect("Meldung erwartet");
    assert_eq!(note.message, "Modified 0 tiles. Deleted 0 objects.");
}

#[test]
fn test_execute_without_match_reports_zero() {
    let mut session = Session::new(sample_map());
    let before = session.map.clone();
    session.state.selection.target_object_id = 999;

    session.send(AppIntent::ExecuteRequested);

    let note = session.host.last_notification().expect("Meldung erwartet");
    assert_eq!(note.message, "Modified 0 tiles.");
    assert_eq!(session.map, before);
}

#[test]
fn test_panel_closed_stops_refresh() {
    let mut session = Session::new(sample_map());
    session.send(AppIntent::MenuItemActivated);
    session.send(AppIntent::PanelClosed);

    session.send(AppIntent::SpinnerIncremented {
        field: SpinnerField::EdgeStyle,
    });

    assert_eq!(session.state.selection.edge_style_id, 1);
    assert_eq!(session.host.refresh_count, 1);
    assert_eq!(
        session.state.command_log.entries().last(),
        Some(&AppCommand::StepSpinner {
            field: SpinnerField::EdgeStyle,
            step: scenery_terraformer::SpinnerStep::Increment,
        })
    );
}
