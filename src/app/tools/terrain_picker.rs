//! Terrain-Pipette: Stil der ersten Oberfläche eines Tiles.

use super::PickError;
use crate::core::TileAccess;

/// Gepickter Terrain-Stil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedStyle {
    pub surface_style: u32,
    pub edge_style: u32,
}

/// Liefert Oberflächen- und Kanten-Stil der ersten Oberfläche (Vorwärts-Scan).
pub fn pick_terrain_style<T: TileAccess>(tile: &T) -> Result<PickedStyle, PickError> {
    tile.surface()
        .map(|surface| PickedStyle {
            surface_style: surface.surface_style,
            edge_style: surface.edge_style,
        })
        .ok_or(PickError::NoSurface)
}
