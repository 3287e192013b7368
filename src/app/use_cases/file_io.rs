//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.
//!
//! Format: JSON-Array von `CurveRecord`s.

use std::path::Path;

use anyhow::Context;

use crate::app::AppState;
use crate::core::{CurveCollection, CurveRecord};

/// Liest die Datensätze einer Kurvendatei.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<CurveRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei '{}' nicht lesbar", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Datei '{}' ist keine gültige Kurvendatei", path.display()))
}

/// Lädt eine Kurvendatei als neue, exakt berechnete Sammlung.
pub fn load_collection(path: &Path) -> anyhow::Result<CurveCollection> {
    let records = read_records(path)?;
    CurveCollection::from_records(&records)
        .with_context(|| format!("Kurven aus '{}' ungültig", path.display()))
}

/// Schreibt alle Kurven als JSON.
pub fn save_collection(collection: &CurveCollection, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&collection.to_records())?;
    std::fs::write(path, json)
        .with_context(|| format!("Datei '{}' nicht schreibbar", path.display()))?;
    log::info!("{} Kurven gespeichert: {}", collection.len(), path.display());
    Ok(())
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Schlägt das Laden fehl, bleibt die bisherige Sammlung erhalten.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let records = read_records(Path::new(&path))?;
    state.collection.load_records(&records)?;

    // Merke Pfad für späteres Save
    state.ui.current_file_path = Some(path.clone());
    state.ui.status_message = Some(format!("{} Kurven geladen", state.collection.len()));
    log::info!("Kurvendatei geladen: {}", path);
    state.collection.updated();
    Ok(())
}

/// Speichert unter `path` oder, ohne Pfad, unter dem aktuell bekannten Pfad.
pub fn save_current_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let path = path
        .or_else(|| state.ui.current_file_path.clone())
        .ok_or_else(|| anyhow::anyhow!("Keine Datei geladen"))?;
    save_collection(&state.collection, Path::new(&path))?;
    state.ui.current_file_path = Some(path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Curve, CurveKind, Point};

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("curve_editor_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut state = AppState::new();
        let err = save_current_file(&mut state, None).unwrap_err();
        assert!(err.to_string().contains("Keine Datei"));
    }

    #[test]
    fn test_save_and_load_collection() {
        let path = temp_file("roundtrip");
        let mut collection = CurveCollection::new();
        collection.add(
            Curve::with_nodes(
                CurveKind::Bezier,
                vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
            )
            .named("Bogen"),
            false,
        );
        save_collection(&collection, &path).unwrap();

        let loaded = load_collection(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.curves()[0].name, "Bogen");
        assert_eq!(loaded.curves()[0].nodes(), collection.curves()[0].nodes());
        assert!(!loaded.curves()[0].needs_recompute());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_file_keeps_state() {
        let path = temp_file("invalid");
        std::fs::write(&path, "{ kein json").unwrap();
        let mut state = AppState::new();
        state
            .collection
            .add(Curve::new(CurveKind::Polygonal), false);

        let result = load_selected_file(&mut state, path.to_string_lossy().into_owned());
        assert!(result.is_err());
        assert_eq!(state.collection.len(), 1);
        assert_eq!(state.ui.current_file_path, None);
        let _ = std::fs::remove_file(&path);
    }
}
