/// Zustand des Gewichts-Dialogs (Eingabe für rationale Kurven)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Kurve, deren Node gewichtet wird
    pub curve: Option<usize>,
    /// Node-Index in der Kurve
    pub node: Option<usize>,
    /// Vorbelegter Wert (aktuelles Gewicht)
    pub weight: f64,
}

impl WeightDialogState {
    /// Öffnet den Dialog für einen Node.
    pub fn open(&mut self, curve: usize, node: usize, weight: f64) {
        self.visible = true;
        self.curve = Some(curve);
        self.node = Some(node);
        self.weight = weight;
    }

    /// Schließt den Dialog und vergisst das Ziel.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Ziel `(Kurve, Node)`, solange der Dialog offen ist.
    pub fn target(&self) -> Option<(usize, usize)> {
        if !self.visible {
            return None;
        }
        Some((self.curve?, self.node?))
    }
}

/// UI-bezogener Zustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Gewichts-Dialog
    pub weight_dialog: WeightDialogState,
    /// Statusnachricht für die Statusleiste
    pub status_message: Option<String>,
    /// Pfad der aktuell geladenen Datei
    pub current_file_path: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
