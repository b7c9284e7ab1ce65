//! Pipetten-Werkzeuge, die Parameter für den Terraform-Lauf von der Karte lesen.
//!
//! Die Werkzeuge sind reine Lese-Logik auf einem Tile; die Mutation des
//! Selektionszustands erfolgt zentral in `use_cases::pick`.

mod pick_tool;
/// Szenerie-Pipette
pub mod scenery_picker;
/// Terrain-Pipette
pub mod terrain_picker;

pub use pick_tool::{PickTool, PickToolState};
pub use scenery_picker::pick_scenery;
pub use terrain_picker::{pick_terrain_style, PickedStyle};

/// Fehlgeschlagener Pick. Der Display-Text ist die Dialog-Meldung für den User.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    #[error("No scenery found on this tile.")]
    NoScenery,
    #[error("No terrain surface found on this tile.")]
    NoSurface,
}

/// Dialog-Titel für fehlgeschlagene Picks
pub const PICK_FAILED_TITLE: &str = "Selection Failed";
