//! Modales Werkzeug-System für die Kurvenbearbeitung.
//!
//! Genau ein `ToolState` ist aktiv. Zeiger-Ereignisse (Drücken, Bewegen,
//! Loslassen) werden an den aktiven Zustand weitergereicht, der die
//! Kurvensammlung verändert und per [`Transition`] den Folgezustand bestimmt.
//! Ein Wechsel ersetzt den Zustand immer vollständig: erst `disable()` des
//! alten, dann `enable()` des neuen Zustands.

/// Werkzeuge auf Kurvenebene (Auswählen, Entfernen, Verschieben, …).
mod curve_tools;
/// Werkzeuge auf Node-Ebene für die gebundene Kurve.
mod node_tools;


use crate::app::state::{ToolbarState, UiState};
use crate::core::{CurveCollection, JoinMethod, Point, ReorderMode};
use crate::shared::EditorOptions;

// ── Typen ────────────────────────────────────────────────────────

/// Toolbar-Schaltfläche, die ein Werkzeug auslöst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolControl {
    SelectCurve,
    RemoveCurve,
    MoveCurve,
    DuplicateCurve,
    AddNode,
    RemoveNode,
    MoveNode,
    ReorderNodes(ReorderMode),
    SplitCurve,
    JoinRightSmooth(JoinMethod),
    SetNodeWeight,
}

impl ToolControl {
    /// Anzeigename für Toolbar und Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            ToolControl::SelectCurve => "Kurve auswählen",
            ToolControl::RemoveCurve => "Kurve entfernen",
            ToolControl::MoveCurve => "Kurve verschieben",
            ToolControl::DuplicateCurve => "Kurve duplizieren",
            ToolControl::AddNode => "Node hinzufügen",
            ToolControl::RemoveNode => "Node entfernen",
            ToolControl::MoveNode => "Node verschieben",
            ToolControl::ReorderNodes(ReorderMode::Swap) => "Nodes tauschen",
            ToolControl::ReorderNodes(ReorderMode::InsertBefore) => "Node davor einfügen",
            ToolControl::ReorderNodes(ReorderMode::InsertAfter) => "Node dahinter einfügen",
            ToolControl::SplitCurve => "Kurve teilen",
            ToolControl::JoinRightSmooth(JoinMethod::C1) => "Glatt anfügen (C1)",
            ToolControl::JoinRightSmooth(JoinMethod::G1) => "Glatt anfügen (G1)",
            ToolControl::SetNodeWeight => "Gewicht setzen",
        }
    }

    /// Braucht das Werkzeug eine ausgewählte Kurve?
    pub fn needs_curve(self) -> bool {
        !matches!(
            self,
            ToolControl::SelectCurve
                | ToolControl::RemoveCurve
                | ToolControl::MoveCurve
                | ToolControl::DuplicateCurve
        )
    }
}

/// Zeiger-Ereignis in Kurvenkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
}

/// Rückgabe eines Ereignis-Handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Zustand bleibt aktiv
    Stay,
    /// Zustand wird ersetzt
    Next(ToolState),
}

/// Ergebnis eines einzelnen Handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Werkzeug bleibt aktiv
    Stay,
    /// Aktion abgeschlossen, zum Folgezustand wechseln
    Done,
}

/// Alles, was ein Werkzeug während eines Ereignisses verändern darf.
pub struct ToolContext<'a> {
    pub collection: &'a mut CurveCollection,
    pub toolbar: &'a mut ToolbarState,
    pub ui: &'a mut UiState,
    pub options: &'a EditorOptions,
}

// ── ToolState ────────────────────────────────────────────────────

/// Aktiver Interaktionsmodus mit seinen Zwischendaten.
///
/// Kurven werden über ihren Index in der Sammlung referenziert; Befehle, die
/// Kurven entfernen oder einfügen, setzen vorher auf `Default` zurück.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolState {
    /// Leerlauf: alle Ereignisse werden ignoriert
    #[default]
    Default,
    SelectCurve,
    RemoveCurve,
    MoveCurve {
        /// Gefangene Kurve (zwischen Drücken und Loslassen)
        captured: Option<usize>,
        /// Letzte Zeigerposition
        anchor: Point,
    },
    DuplicateCurve,
    AddNode {
        curve: usize,
    },
    RemoveNode {
        curve: usize,
    },
    MoveNode {
        curve: usize,
        /// Gefangener Node-Index
        node: Option<usize>,
    },
    ReorderNodes {
        curve: usize,
        mode: ReorderMode,
        /// Erster gewählter Node
        first: Option<usize>,
    },
    SplitCurve {
        curve: usize,
    },
    JoinRightSmooth {
        curve: usize,
        method: JoinMethod,
    },
    SetNodeWeight {
        curve: usize,
    },
}

impl ToolState {
    /// Baut den Zustand für eine Toolbar-Schaltfläche.
    ///
    /// Kurvengebundene Werkzeuge brauchen `curve`; ohne liefert die Funktion `None`.
    pub fn for_control(control: ToolControl, curve: Option<usize>) -> Option<Self> {
        let state = match control {
            ToolControl::SelectCurve => ToolState::SelectCurve,
            ToolControl::RemoveCurve => ToolState::RemoveCurve,
            ToolControl::MoveCurve => ToolState::MoveCurve {
                captured: None,
                anchor: Point::ZERO,
            },
            ToolControl::DuplicateCurve => ToolState::DuplicateCurve,
            ToolControl::AddNode => ToolState::AddNode { curve: curve? },
            ToolControl::RemoveNode => ToolState::RemoveNode { curve: curve? },
            ToolControl::MoveNode => ToolState::MoveNode {
                curve: curve?,
                node: None,
            },
            ToolControl::ReorderNodes(mode) => ToolState::ReorderNodes {
                curve: curve?,
                mode,
                first: None,
            },
            ToolControl::SplitCurve => ToolState::SplitCurve { curve: curve? },
            ToolControl::JoinRightSmooth(method) => ToolState::JoinRightSmooth {
                curve: curve?,
                method,
            },
            ToolControl::SetNodeWeight => ToolState::SetNodeWeight { curve: curve? },
        };
        Some(state)
    }

    /// Zugehörige Toolbar-Schaltfläche (`None` im Leerlauf).
    pub fn control(&self) -> Option<ToolControl> {
        let control = match self {
            ToolState::Default => return None,
            ToolState::SelectCurve => ToolControl::SelectCurve,
            ToolState::RemoveCurve => ToolControl::RemoveCurve,
            ToolState::MoveCurve { .. } => ToolControl::MoveCurve,
            ToolState::DuplicateCurve => ToolControl::DuplicateCurve,
            ToolState::AddNode { .. } => ToolControl::AddNode,
            ToolState::RemoveNode { .. } => ToolControl::RemoveNode,
            ToolState::MoveNode { .. } => ToolControl::MoveNode,
            ToolState::ReorderNodes { mode, .. } => ToolControl::ReorderNodes(*mode),
            ToolState::SplitCurve { .. } => ToolControl::SplitCurve,
            ToolState::JoinRightSmooth { method, .. } => ToolControl::JoinRightSmooth(*method),
            ToolState::SetNodeWeight { .. } => ToolControl::SetNodeWeight,
        };
        Some(control)
    }

    /// Index der gebundenen Kurve.
    pub fn bound_curve(&self) -> Option<usize> {
        match self {
            ToolState::AddNode { curve }
            | ToolState::RemoveNode { curve }
            | ToolState::MoveNode { curve, .. }
            | ToolState::ReorderNodes { curve, .. }
            | ToolState::SplitCurve { curve }
            | ToolState::JoinRightSmooth { curve, .. }
            | ToolState::SetNodeWeight { curve } => Some(*curve),
            _ => None,
        }
    }

    /// Arbeitet das Werkzeug auf einzelnen Nodes?
    pub fn is_node_level(&self) -> bool {
        matches!(
            self,
            ToolState::AddNode { .. }
                | ToolState::RemoveNode { .. }
                | ToolState::MoveNode { .. }
                | ToolState::ReorderNodes { .. }
                | ToolState::SetNodeWeight { .. }
        )
    }

    /// Folgezustand nach einer abgeschlossenen Einmal-Aktion.
    pub fn next_state(&self) -> ToolState {
        ToolState::Default
    }

    /// Aktivierung: Schaltfläche setzen, bei Node-Werkzeugen Nodes einblenden.
    ///
    /// Ein offener Gewichts-Dialog wird geschlossen, da das neue Werkzeug
    /// Kurven entfernen oder einfügen kann.
    pub fn enable(&mut self, ctx: &mut ToolContext) {
        let Some(control) = self.control() else {
            return;
        };
        if ctx.ui.weight_dialog.visible {
            log::debug!("Gewichts-Dialog geschlossen");
            ctx.ui.weight_dialog.close();
        }
        ctx.toolbar.check(control);
        if self.is_node_level() {
            if let Some(curve) = self.bound_curve().and_then(|i| ctx.collection.get_mut(i)) {
                curve.show_nodes = true;
            }
        }
        ctx.ui.status_message = Some(control.label().to_string());
        log::info!("Werkzeug aktiviert: {}", control.label());
    }

    /// Deaktivierung: Schaltfläche lösen, gefangene Kurven/Nodes freigeben.
    pub fn disable(&mut self, ctx: &mut ToolContext) {
        match self {
            ToolState::MoveCurve { captured, .. } => {
                if let Some(curve) = captured.take().and_then(|i| ctx.collection.get_mut(i)) {
                    curve.recompute(crate::core::RecomputeMode::Exact);
                }
            }
            ToolState::MoveNode { curve, node } => {
                if node.take().is_some() {
                    if let Some(curve) = ctx.collection.get_mut(*curve) {
                        curve.recompute(crate::core::RecomputeMode::Exact);
                    }
                }
            }
            ToolState::ReorderNodes { first, .. } => *first = None,
            _ => {}
        }
        if let Some(control) = self.control() {
            ctx.toolbar.uncheck(control);
            log::debug!("Werkzeug deaktiviert: {}", control.label());
        }
    }

    fn resolve(&self, outcome: Outcome) -> Transition {
        match outcome {
            Outcome::Stay => Transition::Stay,
            Outcome::Done => Transition::Next(self.next_state()),
        }
    }

    /// Zeiger gedrückt.
    pub fn on_press(&mut self, point: Point, ctx: &mut ToolContext) -> Transition {
        let outcome = match self {
            ToolState::Default => Outcome::Stay,
            ToolState::SelectCurve => curve_tools::select_press(point, ctx),
            ToolState::RemoveCurve => curve_tools::remove_press(point, ctx),
            ToolState::MoveCurve { captured, anchor } => {
                curve_tools::move_press(captured, anchor, point, ctx)
            }
            ToolState::DuplicateCurve => curve_tools::duplicate_press(point, ctx),
            ToolState::AddNode { curve } => node_tools::add_press(*curve, point, ctx),
            ToolState::RemoveNode { curve } => node_tools::remove_press(*curve, point, ctx),
            ToolState::MoveNode { curve, node } => {
                node_tools::move_press(*curve, node, point, ctx)
            }
            ToolState::ReorderNodes { curve, mode, first } => {
                node_tools::reorder_press(*curve, *mode, first, point, ctx)
            }
            ToolState::SplitCurve { curve } => curve_tools::split_press(*curve, point, ctx),
            ToolState::JoinRightSmooth { curve, method } => {
                curve_tools::join_press(*curve, *method, point, ctx)
            }
            ToolState::SetNodeWeight { curve } => node_tools::weight_press(*curve, point, ctx),
        };
        self.resolve(outcome)
    }

    /// Zeiger bewegt.
    pub fn on_move(&mut self, point: Point, ctx: &mut ToolContext) -> Transition {
        let outcome = match self {
            ToolState::MoveCurve { captured, anchor } => {
                curve_tools::move_drag(*captured, anchor, point, ctx)
            }
            ToolState::MoveNode { curve, node } => node_tools::move_drag(*curve, *node, point, ctx),
            _ => Outcome::Stay,
        };
        self.resolve(outcome)
    }

    /// Zeiger losgelassen.
    pub fn on_release(&mut self, _point: Point, ctx: &mut ToolContext) -> Transition {
        let outcome = match self {
            ToolState::MoveCurve { captured, .. } => curve_tools::move_release(captured, ctx),
            ToolState::MoveNode { curve, node } => node_tools::move_release(*curve, node, ctx),
            _ => Outcome::Stay,
        };
        self.resolve(outcome)
    }
}

// ── Zustandswechsel ──────────────────────────────────────────────

/// Ersetzt den aktiven Zustand: neuen konstruiert übergeben, alten
/// deaktivieren, neuen aktivieren.
pub fn replace_state(current: &mut ToolState, next: ToolState, ctx: &mut ToolContext) {
    let mut old = std::mem::replace(current, next);
    old.disable(ctx);
    current.enable(ctx);
}

/// Leitet ein Zeiger-Ereignis an den aktiven Zustand und führt den
/// resultierenden Wechsel aus.
pub fn dispatch(current: &mut ToolState, event: PointerEvent, ctx: &mut ToolContext) {
    let transition = match event {
        PointerEvent::Press(p) => current.on_press(p, ctx),
        PointerEvent::Move(p) => current.on_move(p, ctx),
        PointerEvent::Release(p) => current.on_release(p, ctx),
    };
    if let Transition::Next(next) = transition {
        replace_state(current, next, ctx);
    }
}
