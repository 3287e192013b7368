//! Handler für Kurven-Commands außerhalb des Werkzeug-Systems.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurveKind, NodeSpacing, Point};

pub fn create(state: &mut AppState, kind: CurveKind) {
    use_cases::curves::create_curve(state, kind);
}

pub fn select(state: &mut AppState, index: usize) {
    use_cases::curves::select_curve(state, index);
}

pub fn clear_selection(state: &mut AppState) {
    use_cases::curves::clear_selection(state);
}

pub fn remove_selected(state: &mut AppState) {
    use_cases::curves::remove_selected(state);
}

pub fn translate(state: &mut AppState, delta: Point) {
    use_cases::curves::translate_selected(state, delta);
}

pub fn scale(state: &mut AppState, factor: f64) {
    use_cases::curves::scale_selected(state, factor);
}

pub fn rotate(state: &mut AppState, degrees: f64) {
    use_cases::curves::rotate_selected(state, degrees);
}

pub fn set_resolution(state: &mut AppState, resolution: usize) {
    use_cases::curves::set_resolution(state, resolution);
}

pub fn raise_degree(state: &mut AppState, by: usize) {
    use_cases::curves::raise_degree(state, by);
}

pub fn reduce_degree(state: &mut AppState) {
    use_cases::curves::reduce_degree(state);
}

pub fn reverse_nodes(state: &mut AppState) {
    use_cases::curves::reverse_nodes(state);
}

pub fn set_spacing(state: &mut AppState, spacing: NodeSpacing) {
    use_cases::curves::set_spacing(state, spacing);
}

pub fn toggle_hidden(state: &mut AppState) {
    use_cases::curves::toggle_hidden(state);
}

pub fn toggle_nodes(state: &mut AppState) {
    use_cases::curves::toggle_nodes(state);
}

pub fn toggle_hull(state: &mut AppState) {
    use_cases::curves::toggle_hull(state);
}

/// Verwirft alle Kurven.
pub fn new_collection(state: &mut AppState) {
    use_cases::curves::new_collection(state);
}
