//! Handler für das Werkzeug-System (Zeiger-Ereignisse, Werkzeugwechsel).

use crate::app::tools::{PointerEvent, ToolControl};
use crate::app::use_cases;
use crate::app::AppState;

/// Reicht ein Zeiger-Ereignis an das aktive Werkzeug weiter.
pub fn pointer(state: &mut AppState, event: PointerEvent) {
    use_cases::tools::pointer(state, event);
}

/// Aktiviert das Werkzeug zur Schaltfläche.
pub fn set_tool(state: &mut AppState, control: ToolControl) {
    use_cases::tools::set_tool(state, control);
}

/// Zurück in den Leerlauf.
pub fn reset(state: &mut AppState) {
    use_cases::tools::reset_tool(state);
}
