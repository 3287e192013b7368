use crate::app::tools::{ToolContext, ToolState};
use crate::app::CommandLog;
use crate::core::CurveCollection;
use crate::shared::EditorOptions;

use super::{ToolbarState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Kurven des Dokuments
    pub collection: CurveCollection,
    /// Aktives Werkzeug der Sammlung (genau eines)
    pub tool: ToolState,
    /// Gedrückte Toolbar-Schaltfläche
    pub toolbar: ToolbarState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Trefferradius, Auflösung, Farben)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            collection: CurveCollection::new(),
            tool: ToolState::Default,
            toolbar: ToolbarState::default(),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Kurven zurück (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.collection.len()
    }

    /// Teilt den State in aktives Werkzeug und dessen Kontext auf.
    pub fn tool_and_context(&mut self) -> (&mut ToolState, ToolContext<'_>) {
        (
            &mut self.tool,
            ToolContext {
                collection: &mut self.collection,
                toolbar: &mut self.toolbar,
                ui: &mut self.ui,
                options: &self.options,
            },
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
