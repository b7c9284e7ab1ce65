//! Use-Case: Terraform-Lauf über alle Tiles der Karte.
//!
//! Jedes Tile mit mindestens einer Ziel-Szenerie wird bearbeitet: optional werden
//! die Treffer entfernt, danach wird die erste Oberfläche abgeflacht, in der Höhe
//! verschoben und optional neu gestylt. Tiles ohne Treffer bleiben unberührt.

use crate::app::SelectionState;
use crate::core::{MapAccess, TileAccess, TileElement};
use crate::shared::{HEIGHT_UNITS_PER_STEP, SLOPE_FLAT};

/// Zähler eines Terraform-Laufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerraformCounts {
    /// Tiles, deren Oberfläche geschrieben wurde
    pub modified: usize,
    /// Entfernte Szenerie-Elemente (über alle Tiles)
    pub deleted: usize,
}

/// Ergebnis für ein einzelnes Tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileOutcome {
    /// Keine Ziel-Szenerie auf dem Tile
    NoTarget,
    /// Ziel-Szenerie gefunden, aber keine Oberfläche
    NoSurface { removed: usize },
    /// Oberfläche geschrieben
    Modified { removed: usize },
}

impl TileOutcome {
    /// Anzahl entfernter Elemente
    pub fn removed(self) -> usize {
        match self {
            Self::NoTarget => 0,
            Self::NoSurface { removed } | Self::Modified { removed } => removed,
        }
    }
}

/// Führt den Terraform-Lauf auf allen Tiles aus (Zeilen-Reihenfolge) und mutiert `map` in-place.
pub fn execute_terraform<M: MapAccess>(selection: &SelectionState, map: &mut M) -> TerraformCounts {
    let mut counts = TerraformCounts::default();

    for coords in map.size().row_major() {
        let Some(tile) = map.tile_mut(coords) else {
            continue;
        };

        let outcome = terraform_tile(selection, tile);
        counts.deleted += outcome.removed();
        match outcome {
            TileOutcome::Modified { .. } => counts.modified += 1,
            TileOutcome::NoSurface { .. } => {
                log::debug!("Tile ({}, {}) ohne Oberflaeche uebersprungen", coords.x, coords.y);
            }
            TileOutcome::NoTarget => {}
        }
    }

    log::info!(
        "Terraform fuer Objekt {}: {} Tiles bearbeitet, {} Objekte entfernt",
        selection.target_object_id,
        counts.modified,
        counts.deleted
    );
    counts
}

/// Bearbeitet ein einzelnes Tile.
///
/// Der Treffer-Scan läuft rückwärts, damit Entfernen per Index nur bereits
/// besuchte Indizes verschiebt.
pub fn terraform_tile<T: TileAccess>(selection: &SelectionState, tile: &mut T) -> TileOutcome {
    let target = selection.target_object_id;
    let mut has_target = false;
    let mut removed = 0;

    for index in (0..tile.num_elements()).rev() {
        if !tile.element(index).is_some_and(|el| el.is_scenery_of(target)) {
            continue;
        }
        has_target = true;
        if selection.delete_objects && tile.remove_element(index).is_some() {
            removed += 1;
        }
    }

    if !has_target {
        return TileOutcome::NoTarget;
    }

    let Some(surface) = tile
        .surface_index()
        .and_then(|index| tile.element_mut(index))
        .and_then(TileElement::as_surface_mut)
    else {
        return TileOutcome::NoSurface { removed };
    };

    if selection.flatten_terrain {
        surface.slope = SLOPE_FLAT;
    }

    // Wird auch bei height_delta == 0 geschrieben.
    surface.base_height = surface
        .base_height
        .saturating_add(selection.height_delta.saturating_mul(HEIGHT_UNITS_PER_STEP));

    if selection.apply_style {
        surface.surface_style = selection.surface_style_id;
        surface.edge_style = selection.edge_style_id;
    }

    TileOutcome::Modified { removed }
}
