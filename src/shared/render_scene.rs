//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie
//! konsumiert. Der Renderer darf den Kernel-Zustand nicht verändern.

use crate::core::{CurveKind, Point};

/// Zeichendaten einer sichtbaren Kurve.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCurve {
    /// Index in der Kurvensammlung
    pub index: usize,
    pub name: String,
    pub kind: CurveKind,
    pub color: String,
    /// Abtastpunkte als Polylinie
    pub points: Vec<Point>,
    /// Node-Marker und Kontrollpolygon (nur wenn eingeblendet)
    pub nodes: Option<Vec<Point>>,
    /// Konvexe Hülle (nur wenn eingeblendet)
    pub hull: Option<Vec<Point>>,
    pub selected: bool,
    /// Punkte stammen aus der schnellen Vorschau-Berechnung
    pub preview: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Sichtbare Kurven in Zeichenreihenfolge
    pub curves: Vec<RenderCurve>,
    /// Bezeichnung des aktuell gedrückten Werkzeugs
    pub active_tool: Option<&'static str>,
    /// Statuszeile
    pub status_message: Option<String>,
    /// Revision der Sammlung, aus der die Szene gebaut wurde
    pub revision: u64,
}

impl RenderScene {
    /// Gibt zurück, ob etwas zu zeichnen ist.
    pub fn has_curves(&self) -> bool {
        !self.curves.is_empty()
    }

    /// Zeichendaten der ausgewählten Kurve.
    pub fn selected(&self) -> Option<&RenderCurve> {
        self.curves.iter().find(|c| c.selected)
    }
}
