//! Core-Domänentypen: Tiles, Tile-Elemente, Karten-Zugriff und Koordinaten.

pub mod coords;
pub mod tile;
pub mod tile_element;
pub mod tile_map;

pub use coords::{MapSize, TileCoords};
pub use tile::{Tile, TileAccess};
pub use tile_element::{ElementKind, SceneryElement, SurfaceElement, TileElement};
pub use tile_map::{GridMap, MapAccess};
