//! Scenery Terraformer (Headless).
//!
//! Lädt einen JSON-Dump einer Karte, spielt die Panel-Eingaben als Intents
//! gegen den Controller ab und schreibt die bearbeitete Karte optional zurück.

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use scenery_terraformer::{
    AppController, AppIntent, AppState, EditorOptions, GridMap, HeadlessHost, SelectionState,
    PLUGIN_INFO,
};
use std::path::PathBuf;

/// Batch-Terraforming aller Tiles mit einem bestimmten Szenerie-Objekt.
#[derive(Debug, Parser)]
#[command(name = "scenery-terraformer", version, about)]
struct Cli {
    /// Karte als JSON-Dump
    map: PathBuf,

    /// Ziel-Objekt-ID
    #[arg(long)]
    target: Option<u32>,

    /// Ziel-Objekte beim Ausführen löschen
    #[arg(long)]
    delete: bool,

    /// Höhenänderung in Stufen (darf negativ sein)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    height: i32,

    /// Terrain nicht abflachen
    #[arg(long)]
    no_flatten: bool,

    /// Oberflächen-Stil anwenden
    #[arg(long)]
    surface: Option<u32>,

    /// Kanten-Stil anwenden
    #[arg(long)]
    edge: Option<u32>,

    /// Ziel-Objekt per Pipette an Welt-Position "X,Y" wählen
    #[arg(long, value_parser = parse_world_pos)]
    pick_scenery: Option<Vec2>,

    /// Terrain-Stil per Pipette an Welt-Position "X,Y" wählen
    #[arg(long, value_parser = parse_world_pos)]
    pick_terrain: Option<Vec2>,

    /// Zieldatei für die bearbeitete Karte
    #[arg(long)]
    out: Option<PathBuf>,

    /// Optionen-Datei (Standard: neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_world_pos(raw: &str) -> Result<Vec2, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("Erwartet \"X,Y\", erhalten: {raw}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("X ungueltig: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("Y ungueltig: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("{} v{} startet...", PLUGIN_INFO.name, PLUGIN_INFO.version);

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let json = std::fs::read_to_string(&cli.map)
        .with_context(|| format!("Karte nicht lesbar: {}", cli.map.display()))?;
    let mut map = GridMap::from_json(&json)?;

    let mut state = AppState::with_options(options);
    let mut host = HeadlessHost::new();
    let mut controller = AppController::new();

    apply_cli_selection(&cli, &mut state.selection);

    for intent in pick_intents(&cli) {
        let is_click = matches!(intent, AppIntent::MapPointerDown { .. });
        if let Err(e) = controller.handle_intent(&mut state, &mut map, &mut host, intent) {
            log::error!("Event handling failed: {:#}", e);
        }
        // Nach einem Klick wartet das Tool nur noch, wenn nichts gepickt wurde.
        if is_click && state.pick_tool.is_active() {
            let reason = host
                .last_notification()
                .map_or("kein passendes Element", |note| note.message.as_str());
            anyhow::bail!("Pipette ohne Ergebnis ({reason}), Terraform nicht ausgefuehrt");
        }
    }

    if let Err(e) =
        controller.handle_intent(&mut state, &mut map, &mut host, AppIntent::ExecuteRequested)
    {
        log::error!("Event handling failed: {:#}", e);
    }

    if let Some(note) = host.last_notification() {
        println!("{}", note.message);
    }

    if let Some(out) = &cli.out {
        std::fs::write(out, map.to_json()?)
            .with_context(|| format!("Karte nicht schreibbar: {}", out.display()))?;
        log::info!("Karte gespeichert nach: {}", out.display());
    }

    Ok(())
}

/// Übernimmt die direkt angegebenen Werte in die Selektion.
fn apply_cli_selection(cli: &Cli, selection: &mut SelectionState) {
    if let Some(target) = cli.target {
        selection.target_object_id = target;
    }
    // Flags überschreiben die Startwerte aus den Optionen nur, wenn sie angegeben sind.
    if cli.delete {
        selection.delete_objects = true;
    }
    if cli.no_flatten {
        selection.flatten_terrain = false;
    }
    selection.height_delta = cli.height;
    if cli.surface.is_some() || cli.edge.is_some() {
        selection.apply_style = true;
        selection.surface_style_id = cli.surface.unwrap_or(selection.surface_style_id);
        selection.edge_style_id = cli.edge.unwrap_or(selection.edge_style_id);
    }
}

/// Pipetten-Klicks als Intents, wie sie der Host senden würde.
fn pick_intents(cli: &Cli) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    if let Some(pos) = cli.pick_scenery {
        intents.push(AppIntent::SceneryPickerRequested);
        intents.push(AppIntent::MapPointerDown {
            world_pos: Some(pos),
        });
    }
    if let Some(pos) = cli.pick_terrain {
        intents.push(AppIntent::TerrainPickerRequested);
        intents.push(AppIntent::MapPointerDown {
            world_pos: Some(pos),
        });
    }
    intents
}
