use crate::app::tools::{PointerEvent, ToolControl};
use crate::core::{CurveKind, NodeSpacing, Point};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Zeiger-Ereignis an das aktive Werkzeug
    ToolPointer { event: PointerEvent },
    /// Werkzeug für eine Toolbar-Schaltfläche aktivieren
    SetTool { control: ToolControl },
    /// Aktives Werkzeug beenden (zurück in den Leerlauf)
    ResetTool,

    /// Neue Kurve anlegen
    CreateCurve { kind: CurveKind },
    /// Kurve auswählen
    SelectCurve { index: usize },
    /// Auswahl aufheben
    ClearSelection,
    /// Ausgewählte Kurve entfernen
    RemoveSelectedCurve,

    TranslateSelected { delta: Point },
    ScaleSelected { factor: f64 },
    RotateSelected { degrees: f64 },
    SetResolution { resolution: usize },
    RaiseDegree { by: usize },
    ReduceDegree,
    ReverseNodes,
    SetSpacing { spacing: NodeSpacing },
    ToggleHidden,
    ToggleNodes,
    ToggleHull,

    /// Gewicht eines Nodes einer rationalen Kurve setzen
    SetNodeWeight {
        curve: usize,
        node: usize,
        weight: f64,
    },
    /// Gewichts-Dialog schließen
    CloseWeightDialog,

    /// Alle Kurven verwerfen
    NewCollection,
    /// Kurvendatei laden
    LoadFile { path: String },
    /// Speichern (`None` = aktueller Pfad)
    SaveFile { path: Option<String> },
}
