//! Curve Editor (headless).
//!
//! Lädt eine Kurvendatei, berechnet alle Kurven exakt und gibt eine
//! Zusammenfassung aus. Optional wird die normalisierte Sammlung gespeichert.
//!
//! Aufruf: `curve-editor <kurven.json> [ausgabe.json]`

use curve_editor::{AppController, AppIntent, AppState, EditorOptions};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        let mut args = std::env::args().skip(1);
        let Some(input) = args.next() else {
            log::warn!("Keine Kurvendatei angegeben");
            eprintln!("Aufruf: curve-editor <kurven.json> [ausgabe.json]");
            return Ok(());
        };

        controller.handle_intent(&mut state, AppIntent::FileSelected { path: input })?;

        let scene = controller.build_render_scene(&state);
        for curve in state.collection.curves() {
            log::info!("{} ({} Abtastpunkte)", curve.summary(), curve.points().len());
        }
        log::info!("{} von {} Kurven sichtbar", scene.curves.len(), state.curve_count());

        if let Some(output) = args.next() {
            controller.handle_intent(&mut state, AppIntent::SaveFilePathSelected { path: output })?;
        }

        for command in state.command_log.entries() {
            log::debug!("Ausgeführt: {:?}", command);
        }
        log::info!("{} Commands ausgeführt", state.command_log.len());

        Ok(())
    }
}
