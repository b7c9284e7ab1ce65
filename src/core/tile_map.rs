//! Karten-Zugriff: `MapAccess`-Trait und das In-Memory-Grid `GridMap`.

use super::{MapSize, Tile, TileAccess, TileCoords};
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

/// Zugriff auf das rechteckige Tile-Grid des Hosts.
///
/// Die Größe ist während einer Bearbeitung fest; Tiles werden nur in-place mutiert.
pub trait MapAccess {
    /// Konkreter Tile-Typ des Hosts
    type Tile: TileAccess;

    /// Ausdehnung in Tiles
    fn size(&self) -> MapSize;

    /// Tile an `coords` (`None` außerhalb der Karte)
    fn tile(&self, coords: TileCoords) -> Option<&Self::Tile>;

    /// Mutierbares Tile an `coords` (`None` außerhalb der Karte)
    fn tile_mut(&mut self, coords: TileCoords) -> Option<&mut Self::Tile>;
}

/// In-Memory-Karte, zeilenweise gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    size: MapSize,
    tiles: Vec<Tile>,
}

impl GridMap {
    /// Erstellt eine Karte aus leeren Tiles.
    pub fn new(size: MapSize) -> Self {
        Self {
            size,
            tiles: vec![Tile::new(); size.tile_count()],
        }
    }

    /// Erstellt eine Karte, bei der jedes Tile eine flache Oberfläche mit `base_height` trägt.
    pub fn with_flat_surface(size: MapSize, base_height: i32) -> Self {
        let tile = Tile::new().with(super::TileElement::Surface(
            super::SurfaceElement::flat(base_height),
        ));
        Self {
            size,
            tiles: vec![tile; size.tile_count()],
        }
    }

    /// Parst einen JSON-Dump und prüft die Konsistenz von Größe und Tile-Anzahl.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let map: Self = serde_json::from_str(json).context("Karten-JSON ungueltig")?;
        ensure!(
            map.size.x >= 0 && map.size.y >= 0,
            "Negative Kartengroesse: {:?}",
            map.size
        );
        ensure!(
            map.tiles.len() == map.size.tile_count(),
            "Kartengroesse {}x{} passt nicht zu {} Tiles",
            map.size.x,
            map.size.y,
            map.tiles.len()
        );
        Ok(map)
    }

    /// Serialisiert die Karte als eingerücktes JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Ersetzt das Tile an `coords` (Builder, ignoriert Koordinaten außerhalb).
    pub fn with_tile(mut self, coords: TileCoords, tile: Tile) -> Self {
        if let Some(slot) = self.tile_mut(coords) {
            *slot = tile;
        }
        self
    }

    fn index_of(&self, coords: TileCoords) -> Option<usize> {
        self.size
            .contains(coords)
            .then(|| coords.y as usize * self.size.x as usize + coords.x as usize)
    }
}

impl MapAccess for GridMap {
    type Tile = Tile;

    fn size(&self) -> MapSize {
        self.size
    }

    fn tile(&self, coords: TileCoords) -> Option<&Tile> {
        self.index_of(coords).and_then(|i| self.tiles.get(i))
    }

    fn tile_mut(&mut self, coords: TileCoords) -> Option<&mut Tile> {
        self.index_of(coords).and_then(|i| self.tiles.get_mut(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileElement;

    #[test]
    fn tiles_are_addressed_row_major() {
        let map = GridMap::new(MapSize::new(3, 2)).with_tile(
            TileCoords::new(2, 1),
            Tile::new().with(TileElement::small_scenery(9)),
        );

        let tile = map.tile(TileCoords::new(2, 1)).expect("Tile sollte existieren");
        assert_eq!(tile.num_elements(), 1);
        assert_eq!(
            map.tile(TileCoords::new(1, 1)).map(TileAccess::num_elements),
            Some(0)
        );
        assert!(map.tile(TileCoords::new(3, 0)).is_none());
        assert!(map.tile(TileCoords::new(-1, 0)).is_none());
    }

    #[test]
    fn json_roundtrip_keeps_tiles() {
        let map = GridMap::with_flat_surface(MapSize::new(2, 1), 14)
            .with_tile(TileCoords::new(1, 0), Tile::new().with(TileElement::other("x")));
        let json = map.to_json().expect("Serialisierung sollte gelingen");
        let parsed = GridMap::from_json(&json).expect("JSON sollte parsen");
        assert_eq!(parsed, map);
    }

    #[test]
    fn json_with_wrong_tile_count_is_rejected() {
        let json = r#"{ "size": { "x": 2, "y": 2 }, "tiles": [[]] }"#;
        assert!(GridMap::from_json(json).is_err());
    }
}
