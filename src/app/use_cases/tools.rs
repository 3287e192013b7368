//! Use-Cases für das modale Werkzeug-System.

use crate::app::tools::{dispatch, replace_state, PointerEvent, ToolControl, ToolState};
use crate::app::AppState;
use crate::core::CurveKind;

/// Leitet ein Zeiger-Ereignis an das aktive Werkzeug weiter.
pub fn pointer(state: &mut AppState, event: PointerEvent) {
    let (tool, mut ctx) = state.tool_and_context();
    dispatch(tool, event, &mut ctx);
}

/// Aktiviert das Werkzeug einer Toolbar-Schaltfläche.
///
/// Kurvengebundene Werkzeuge binden an die ausgewählte Kurve. Ohne Auswahl
/// (oder bei Gewichten ohne rationale Kurve) wird abgelehnt und die
/// Schaltfläche bleibt gelöst.
pub fn set_tool(state: &mut AppState, control: ToolControl) {
    let selected = state.collection.selected_index();

    if control == ToolControl::SetNodeWeight {
        let kind = state.collection.selected_curve().map(|c| c.kind());
        if kind != Some(CurveKind::RationalBezier) {
            refuse(state, control, "Gewichte gibt es nur bei rationalen Bézier-Kurven");
            return;
        }
    }

    let Some(next) = ToolState::for_control(control, selected) else {
        refuse(state, control, "Keine Kurve ausgewählt");
        return;
    };

    let (tool, mut ctx) = state.tool_and_context();
    replace_state(tool, next, &mut ctx);
}

fn refuse(state: &mut AppState, control: ToolControl, reason: &str) {
    log::warn!("{} abgelehnt: {}", control.label(), reason);
    state.toolbar.uncheck(control);
    state.ui.status_message = Some(format!("{}: {}", control.label(), reason));
}

/// Beendet das aktive Werkzeug.
pub fn reset_tool(state: &mut AppState) {
    if state.tool == ToolState::Default {
        return;
    }
    let (tool, mut ctx) = state.tool_and_context();
    replace_state(tool, ToolState::Default, &mut ctx);
}
