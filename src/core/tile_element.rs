//! Tile-Elemente: Oberfläche, Klein-/Groß-Szenerie und sonstige Elemente.

use crate::shared::SLOPE_FLAT;
use serde::{Deserialize, Serialize};

/// Art eines Tile-Elements (ohne Nutzdaten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Terrain-Oberfläche
    Surface,
    /// Klein-Szenerie (ein Tile)
    SmallScenery,
    /// Groß-Szenerie (Teilstück eines mehrteiligen Objekts)
    LargeScenery,
    /// Alles andere (Wege, Wände, Bahnen, …)
    Other,
}

/// Terrain-Oberfläche eines Tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceElement {
    /// Basis-Höhe in Roh-Einheiten
    pub base_height: i32,
    /// Neigungsform (Bitmaske, 0 = flach)
    pub slope: u8,
    /// Oberflächen-Stil (Textur-Set)
    pub surface_style: u32,
    /// Kanten-Stil
    pub edge_style: u32,
}

impl SurfaceElement {
    /// Erstellt eine flache Oberfläche mit Stil 0.
    pub fn flat(base_height: i32) -> Self {
        Self {
            base_height,
            slope: SLOPE_FLAT,
            surface_style: 0,
            edge_style: 0,
        }
    }

    /// Setzt die Neigung (Builder).
    pub fn with_slope(mut self, slope: u8) -> Self {
        self.slope = slope;
        self
    }

    /// Setzt Oberflächen- und Kanten-Stil (Builder).
    pub fn with_style(mut self, surface_style: u32, edge_style: u32) -> Self {
        self.surface_style = surface_style;
        self.edge_style = edge_style;
        self
    }

    /// Gibt `true` zurück wenn die Oberfläche flach ist.
    pub fn is_flat(&self) -> bool {
        self.slope == SLOPE_FLAT
    }
}

/// Szenerie-Instanz eines Katalog-Objekts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneryElement {
    /// Katalog-ID des instanziierten Objekts
    pub object_id: u32,
}

/// Ein Element auf einem Tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileElement {
    Surface(SurfaceElement),
    SmallScenery(SceneryElement),
    LargeScenery(SceneryElement),
    /// Nicht näher modelliertes Element; `label` dient nur der Anzeige.
    Other {
        #[serde(default)]
        label: String,
    },
}

impl TileElement {
    /// Kurzform für eine Klein-Szenerie.
    pub fn small_scenery(object_id: u32) -> Self {
        Self::SmallScenery(SceneryElement { object_id })
    }

    /// Kurzform für eine Groß-Szenerie.
    pub fn large_scenery(object_id: u32) -> Self {
        Self::LargeScenery(SceneryElement { object_id })
    }

    /// Kurzform für ein sonstiges Element.
    pub fn other(label: impl Into<String>) -> Self {
        Self::Other {
            label: label.into(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Surface(_) => ElementKind::Surface,
            Self::SmallScenery(_) => ElementKind::SmallScenery,
            Self::LargeScenery(_) => ElementKind::LargeScenery,
            Self::Other { .. } => ElementKind::Other,
        }
    }

    /// Objekt-ID, falls das Element Szenerie ist.
    pub fn scenery_object_id(&self) -> Option<u32> {
        match self {
            Self::SmallScenery(s) | Self::LargeScenery(s) => Some(s.object_id),
            _ => None,
        }
    }

    /// Prüft ob das Element Szenerie mit der gegebenen Objekt-ID ist.
    pub fn is_scenery_of(&self, object_id: u32) -> bool {
        self.scenery_object_id() == Some(object_id)
    }

    pub fn as_surface(&self) -> Option<&SurfaceElement> {
        match self {
            Self::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_surface_mut(&mut self) -> Option<&mut SurfaceElement> {
        match self {
            Self::Surface(s) => Some(s),
            _ => None,
        }
    }
}
