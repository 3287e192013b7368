//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::curve::{DEFAULT_COLOR, DEFAULT_RESOLUTION};
use crate::core::NodeSpacing;

// ── Interaktion ─────────────────────────────────────────────────────

/// Trefferradius für alle Nächster-Punkt-Tests (Welteinheiten, strikt kleiner).
pub const HIT_THRESHOLD: f64 = 10.0;
/// Versatz einer duplizierten Kurve.
pub const DUPLICATE_OFFSET: [f64; 2] = [20.0, 20.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Trefferradius für Kurven-, Node- und Abtastpunkt-Picks
    #[serde(default = "default_hit_threshold")]
    pub hit_threshold: f64,
    /// Auflösung neu erzeugter Kurven
    #[serde(default = "default_resolution")]
    pub default_resolution: usize,
    /// Versatz beim Duplizieren [x, y]
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset: [f64; 2],
    /// Farbe neu erzeugter Kurven
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Stützstellen-Verteilung neuer Interpolationspolynome
    #[serde(default)]
    pub interpolation_spacing: NodeSpacing,
    /// Node-Marker bei neu erzeugten Kurven sofort anzeigen
    #[serde(default)]
    pub show_nodes_on_create: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_threshold: HIT_THRESHOLD,
            default_resolution: DEFAULT_RESOLUTION,
            duplicate_offset: DUPLICATE_OFFSET,
            default_color: DEFAULT_COLOR.to_string(),
            interpolation_spacing: NodeSpacing::default(),
            show_nodes_on_create: false,
        }
    }
}

fn default_hit_threshold() -> f64 {
    HIT_THRESHOLD
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_duplicate_offset() -> [f64; 2] {
    DUPLICATE_OFFSET
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler werden Standardwerte verwendet.
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

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Standard-Pfad der Optionen-Datei (neben der Binary).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_editor.toml")
    }

    /// Versatz beim Duplizieren als Vektor.
    pub fn duplicate_delta(&self) -> crate::core::Point {
        crate::core::Point::from_array(self.duplicate_offset)
    }

    /// Strikter Treffertest gegen den konfigurierten Radius.
    pub fn is_hit(&self, distance: f64) -> bool {
        distance < self.hit_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let options = EditorOptions {
            hit_threshold: 12.5,
            interpolation_spacing: NodeSpacing::Equidistant,
            show_nodes_on_create: true,
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).unwrap();
        let restored: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(restored, options);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let restored: EditorOptions = toml::from_str("hit_threshold = 4.0\n").unwrap();
        assert_eq!(restored.hit_threshold, 4.0);
        assert_eq!(restored.default_resolution, DEFAULT_RESOLUTION);
        assert_eq!(restored.duplicate_offset, [20.0, 20.0]);
        assert_eq!(restored.default_color, "blue");
    }

    #[test]
    fn test_hit_is_strict() {
        let options = EditorOptions::default();
        assert!(options.is_hit(9.999));
        assert!(!options.is_hit(10.0));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("curve_editor_gibt_es_nicht.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "curve_editor_options_{}.toml",
            std::process::id()
        ));
        let options = EditorOptions {
            default_resolution: 64,
            ..EditorOptions::default()
        };
        options.save_to_file(&path).unwrap();
        let restored = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(restored, options);
    }
}
