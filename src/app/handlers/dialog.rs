//! Handler für Dialog-Zustand (Gewichts-Dialog).

use crate::app::use_cases;
use crate::app::AppState;

/// Übernimmt das bestätigte Gewicht.
pub fn set_node_weight(
    state: &mut AppState,
    curve: usize,
    node: usize,
    weight: f64,
) -> anyhow::Result<()> {
    use_cases::curves::set_node_weight(state, curve, node, weight)
}

/// Schließt den Gewichts-Dialog.
pub fn close_weight_dialog(state: &mut AppState) {
    state.ui.weight_dialog.close();
}
