use crate::app::tools::ToolControl;
use crate::core::{CurveKind, NodeSpacing, Point};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger auf der Zeichenfläche gedrückt (Kurvenkoordinaten)
    PointerPressed { pos: Point },
    /// Zeiger bewegt
    PointerMoved { pos: Point },
    /// Zeiger losgelassen
    PointerReleased { pos: Point },
    /// Toolbar-Schaltfläche gedrückt oder gelöst
    ToolToggled { control: ToolControl, checked: bool },

    /// Neue, leere Kurve anlegen
    CreateCurveRequested { kind: CurveKind },
    /// Kurve aus der Liste auswählen (`None` hebt die Auswahl auf)
    SelectCurveRequested { index: Option<usize> },
    /// Ausgewählte Kurve entfernen
    RemoveSelectedCurveRequested,

    /// Ausgewählte Kurve verschieben
    TranslateSelectedRequested { delta: Point },
    /// Ausgewählte Kurve um ihren Schwerpunkt skalieren
    ScaleSelectedRequested { factor: f64 },
    /// Ausgewählte Kurve um ihren Schwerpunkt drehen (Grad)
    RotateSelectedRequested { degrees: f64 },
    /// Auflösung der ausgewählten Kurve ändern
    ResolutionChanged { resolution: usize },
    /// Grad der ausgewählten Kurve erhöhen
    RaiseDegreeRequested { by: usize },
    /// Grad der ausgewählten Kurve reduzieren
    ReduceDegreeRequested,
    /// Node-Reihenfolge umkehren
    ReverseNodesRequested,
    /// Stützstellen-Verteilung eines Interpolationspolynoms ändern
    SpacingChanged { spacing: NodeSpacing },

    /// Ausgewählte Kurve ein-/ausblenden
    ToggleHiddenRequested,
    /// Node-Marker der ausgewählten Kurve ein-/ausblenden
    ToggleNodesRequested,
    /// Konvexe Hülle der ausgewählten Kurve ein-/ausblenden
    ToggleHullRequested,

    /// Gewichts-Dialog mit Wert bestätigt
    WeightDialogConfirmed { weight: f64 },
    /// Gewichts-Dialog abgebrochen
    WeightDialogCancelled,

    /// Alle Kurven verwerfen
    NewCollectionRequested,
    /// Datei wurde im Dialog ausgewählt
    FileSelected { path: String },
    /// Unter aktuellem Pfad speichern
    SaveRequested,
    /// Pfad für "Speichern unter" ausgewählt
    SaveFilePathSelected { path: String },
}
