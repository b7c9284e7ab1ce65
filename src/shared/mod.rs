//! Geteilte Konstanten und Konfiguration für `core` und `app`.

pub mod options;

pub use options::{EditorOptions, PluginInfo, PLUGIN_INFO};
pub use options::{HEIGHT_UNITS_PER_STEP, SLOPE_FLAT, TILE_SIZE_WORLD};
