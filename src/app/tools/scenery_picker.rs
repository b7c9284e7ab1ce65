//! Szenerie-Pipette: erste Klein- oder Groß-Szenerie eines Tiles.

use super::PickError;
use crate::core::TileAccess;

/// Liefert die Objekt-ID der ersten Szenerie (Vorwärts-Scan).
pub fn pick_scenery<T: TileAccess>(tile: &T) -> Result<u32, PickError> {
    (0..tile.num_elements())
        .filter_map(|i| tile.element(i))
        .find_map(|el| el.scenery_object_id())
        .ok_or(PickError::NoScenery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SurfaceElement, Tile, TileElement};

    #[test]
    fn first_scenery_wins_regardless_of_position() {
        let tile = Tile::new()
            .with(TileElement::Surface(SurfaceElement::flat(0)))
            .with(TileElement::large_scenery(42))
            .with(TileElement::small_scenery(7));
        assert_eq!(pick_scenery(&tile), Ok(42));
    }

    #[test]
    fn tile_without_scenery_fails() {
        let tile = Tile::new()
            .with(TileElement::Surface(SurfaceElement::flat(0)))
            .with(TileElement::other("footpath"));
        assert_eq!(pick_scenery(&tile), Err(PickError::NoScenery));
    }
}
