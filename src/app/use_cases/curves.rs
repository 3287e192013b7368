//! Use-Cases für Kurven außerhalb des Werkzeug-Systems
//! (Anlegen, Auswahl, Transformationen, Anzeige-Schalter).

use crate::app::AppState;
use crate::core::{Curve, CurveKind, NodeSpacing, Point, RecomputeMode};

/// Legt eine leere Kurve mit den Standardwerten aus den Optionen an und wählt sie aus.
pub fn create_curve(state: &mut AppState, kind: CurveKind) -> usize {
    let options = &state.options;
    let mut curve = match kind {
        CurveKind::InterpolationPolynomial => {
            Curve::interpolation(Vec::new(), options.interpolation_spacing)
        }
        _ => Curve::new(kind),
    }
    .named(state.collection.next_name(kind));
    curve.color = options.default_color.clone();
    curve.show_nodes = options.show_nodes_on_create;
    curve.set_resolution(options.default_resolution);
    curve.recompute(RecomputeMode::Exact);

    log::info!("Kurve angelegt: {}", curve.summary());
    let index = state.collection.add(curve, true);
    state.collection.updated();
    index
}

/// Wählt eine Kurve aus der Liste aus.
pub fn select_curve(state: &mut AppState, index: usize) {
    if index >= state.collection.len() {
        log::warn!(
            "Kurve {} existiert nicht ({} Kurven)",
            index,
            state.collection.len()
        );
        return;
    }
    state.collection.select(index);
    state.collection.updated();
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.collection.deselect();
    state.collection.updated();
}

/// Entfernt die ausgewählte Kurve.
pub fn remove_selected(state: &mut AppState) {
    match state.collection.remove_selected() {
        Some(curve) => {
            log::info!("Kurve entfernt: {}", curve.summary());
            state.collection.updated();
        }
        None => log::warn!("Keine Kurve ausgewählt"),
    }
}

/// Wendet `edit` auf die ausgewählte Kurve an und berechnet sie exakt neu.
fn edit_selected(state: &mut AppState, what: &str, edit: impl FnOnce(&mut Curve)) {
    let Some(curve) = state.collection.selected_curve_mut() else {
        log::warn!("{}: keine Kurve ausgewählt", what);
        return;
    };
    edit(curve);
    if curve.needs_recompute() {
        curve.recompute(RecomputeMode::Exact);
    }
    log::debug!("{}: {}", what, curve.summary());
    state.collection.updated();
}

pub fn translate_selected(state: &mut AppState, delta: Point) {
    edit_selected(state, "Verschieben", |c| c.translate(delta));
}

pub fn scale_selected(state: &mut AppState, factor: f64) {
    edit_selected(state, "Skalieren", |c| c.scale(factor));
}

pub fn rotate_selected(state: &mut AppState, degrees: f64) {
    edit_selected(state, "Drehen", |c| c.rotate(degrees));
}

pub fn set_resolution(state: &mut AppState, resolution: usize) {
    edit_selected(state, "Auflösung", |c| c.set_resolution(resolution));
}

pub fn raise_degree(state: &mut AppState, by: usize) {
    edit_selected(state, "Grad erhöhen", |c| {
        c.raise_degree(by);
    });
}

pub fn reduce_degree(state: &mut AppState) {
    edit_selected(state, "Grad senken", |c| {
        c.reduce_degree();
    });
}

pub fn reverse_nodes(state: &mut AppState) {
    edit_selected(state, "Umkehren", Curve::reverse_nodes);
}

pub fn set_spacing(state: &mut AppState, spacing: NodeSpacing) {
    edit_selected(state, "Stützstellen", |c| {
        if !c.set_spacing(spacing) {
            log::warn!("{} ist kein Interpolationspolynom", c.name);
        }
    });
}

pub fn toggle_hidden(state: &mut AppState) {
    edit_selected(state, "Ausblenden", |c| {
        let hidden = !c.hidden;
        c.hide(hidden);
    });
}

pub fn toggle_nodes(state: &mut AppState) {
    edit_selected(state, "Nodes anzeigen", |c| c.show_nodes = !c.show_nodes);
}

pub fn toggle_hull(state: &mut AppState) {
    edit_selected(state, "Hülle anzeigen", |c| c.show_hull = !c.show_hull);
}

/// Setzt das Gewicht eines Nodes (nur rationale Kurven, Gewicht > 0).
pub fn set_node_weight(
    state: &mut AppState,
    curve: usize,
    node: usize,
    weight: f64,
) -> anyhow::Result<()> {
    let target = state
        .collection
        .get_mut(curve)
        .ok_or_else(|| anyhow::anyhow!("Kurve {} existiert nicht", curve))?;
    if node >= target.nodes().len() {
        anyhow::bail!("Node {} existiert nicht in '{}'", node, target.name);
    }
    target.set_node_weight(node, weight)?;
    target.recompute(RecomputeMode::Exact);
    log::info!("Gewicht von Node {} in '{}' auf {} gesetzt", node, target.name, weight);
    state.collection.updated();
    Ok(())
}

/// Verwirft alle Kurven.
pub fn new_collection(state: &mut AppState) {
    state.collection.clear();
    state.ui.current_file_path = None;
    state.ui.status_message = None;
    state.collection.updated();
    log::info!("Neue, leere Kurvensammlung");
}
