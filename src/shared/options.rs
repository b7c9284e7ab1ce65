//! Zentrale Konfiguration für den Scenery Terraformer.
//!
//! `EditorOptions` enthält die beim Sitzungsstart übernommenen Werte.
//! Die `const`-Werte sind feste Eigenschaften der Host-Karte.

use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Kantenlänge eines Tiles in Welt-Einheiten.
pub const TILE_SIZE_WORLD: f32 = 32.0;
/// Roh-Höheneinheiten pro logischer Höhenstufe.
pub const HEIGHT_UNITS_PER_STEP: i32 = 2;
/// Neigungscode einer flachen Oberfläche.
pub const SLOPE_FLAT: u8 = 0;

// ── Plugin ──────────────────────────────────────────────────────────

/// Metadaten des Plugins (Menüeintrag, Fenstertitel, Version).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Metadaten dieses Plugins.
pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "Scenery Terraformer",
    version: env!("CARGO_PKG_VERSION"),
};

/// Laufzeit-Optionen (TOML), werden beim Sitzungsstart in den Selektionszustand übernommen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Startwerte der Selektion ────────────────────────────────
    /// Ziel-Objekte beim Ausführen löschen
    #[serde(default)]
    pub initial_delete_objects: bool,
    /// Terrain beim Ausführen abflachen
    #[serde(default = "default_flatten_terrain")]
    pub initial_flatten_terrain: bool,
    /// Gewählten Terrain-Stil anwenden
    #[serde(default)]
    pub initial_apply_style: bool,

    // ── Pick-Tools ──────────────────────────────────────────────
    /// Terrain-Picker meldet fehlende Oberfläche ebenfalls per Dialog
    /// (Szenerie-Picker meldet immer)
    #[serde(default = "default_show_pick_failures")]
    pub show_pick_failures: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_delete_objects: false,
            initial_flatten_terrain: default_flatten_terrain(),
            initial_apply_style: false,
            show_pick_failures: default_show_pick_failures(),
        }
    }
}

/// Serde-Default: Abflachen ist beim Start aktiv.
fn default_flatten_terrain() -> bool {
    true
}

/// Serde-Default: Terrain-Picker bleibt bei fehlender Oberfläche stumm.
fn default_show_pick_failures() -> bool {
    false
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scenery_terraformer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scenery_terraformer.toml")
    }
}
