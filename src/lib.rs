//! Scenery Terraformer Library.
//!
//! Terrain-Batch-Bearbeitung: alle Tiles, die ein gewähltes Szenerie-Objekt
//! enthalten, werden abgeflacht, in der Höhe verschoben und optional neu gestylt.
//! Karte und UI gehören dem Host und werden über `MapAccess` bzw. `HostUi` angebunden.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use app::{
    execute_terraform, AppCommand, AppController, AppIntent, AppState, PickError, PickTool,
    SelectionState, SpinnerField, SpinnerStep, TerraformCounts, TerraformReport, ToggleField,
};
pub use core::{
    ElementKind, GridMap, MapAccess, MapSize, SceneryElement, SurfaceElement, Tile, TileAccess,
    TileCoords, TileElement,
};
pub use host::{HeadlessHost, HostUi, Notification, PanelView, ToolActivation, ToolCursor};
pub use shared::{EditorOptions, PLUGIN_INFO};
