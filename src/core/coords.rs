//! Koordinaten: Tile-Indizes und Umrechnung aus Welt-Einheiten.

use crate::shared::TILE_SIZE_WORLD;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ganzzahlige Grid-Koordinate eines Tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoords {
    /// Spalte
    pub x: i32,
    /// Zeile
    pub y: i32,
}

impl TileCoords {
    /// Erstellt eine Tile-Koordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rechnet eine Welt-Position in das Tile darunter um (`floor(pos / 32)`).
    ///
    /// Nicht-endliche Positionen liefern `None`.
    pub fn from_world(world_pos: Vec2) -> Option<Self> {
        if !world_pos.is_finite() {
            return None;
        }
        let tile = (world_pos / TILE_SIZE_WORLD).floor();
        Some(Self::new(tile.x as i32, tile.y as i32))
    }
}

/// Ausdehnung der Karte in Tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    pub x: i32,
    pub y: i32,
}

impl MapSize {
    /// Erstellt eine Kartengröße.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Prüft ob eine Koordinate innerhalb der Karte liegt.
    pub fn contains(&self, coords: TileCoords) -> bool {
        coords.x >= 0 && coords.y >= 0 && coords.x < self.x && coords.y < self.y
    }

    /// Anzahl Tiles insgesamt (negative Ausdehnungen zählen als 0).
    pub fn tile_count(&self) -> usize {
        self.x.max(0) as usize * self.y.max(0) as usize
    }

    /// Alle Koordinaten in Zeilen-Reihenfolge (`y` außen, `x` innen).
    pub fn row_major(self) -> impl Iterator<Item = TileCoords> {
        (0..self.y).flat_map(move |y| (0..self.x).map(move |x| TileCoords::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_position_maps_to_tile_by_floor_division() {
        assert_eq!(
            TileCoords::from_world(Vec2::new(0.0, 31.9)),
            Some(TileCoords::new(0, 0))
        );
        assert_eq!(
            TileCoords::from_world(Vec2::new(64.0, 95.0)),
            Some(TileCoords::new(2, 2))
        );
        assert_eq!(
            TileCoords::from_world(Vec2::new(-1.0, 0.0)),
            Some(TileCoords::new(-1, 0))
        );
    }

    #[test]
    fn non_finite_world_position_has_no_tile() {
        assert_eq!(TileCoords::from_world(Vec2::new(f32::NAN, 0.0)), None);
    }

    #[test]
    fn row_major_visits_rows_first() {
        let order: Vec<_> = MapSize::new(2, 2).row_major().collect();
        assert_eq!(
            order,
            vec![
                TileCoords::new(0, 0),
                TileCoords::new(1, 0),
                TileCoords::new(0, 1),
                TileCoords::new(1, 1),
            ]
        );
    }

    #[test]
    fn contains_rejects_out_of_bounds() {
        let size = MapSize::new(3, 2);
        assert!(size.contains(TileCoords::new(2, 1)));
        assert!(!size.contains(TileCoords::new(3, 0)));
        assert!(!size.contains(TileCoords::new(0, -1)));
        assert_eq!(size.tile_count(), 6);
    }
}
