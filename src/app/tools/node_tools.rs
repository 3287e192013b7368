use super::{Outcome, ToolContext};
use crate::core::{Curve, Point, PointHit, RecomputeMode, ReorderMode};

/// Gebundene Kurve; fehlt sie, wird das Werkzeug beendet.
fn bound<'c>(curve: usize, ctx: &'c mut ToolContext) -> Option<&'c mut Curve> {
    let found = ctx.collection.get_mut(curve);
    if found.is_none() {
        log::warn!("Gebundene Kurve {} existiert nicht mehr", curve);
    }
    found
}

/// Nächster Node der Kurve innerhalb des Trefferradius.
fn hit_node(curve: &Curve, point: Point, threshold: f64) -> Option<PointHit> {
    curve
        .nearest_node(point)
        .filter(|hit| hit.distance < threshold)
}

pub(super) fn add_press(curve: usize, point: Point, ctx: &mut ToolContext) -> Outcome {
    let Some(target) = bound(curve, ctx) else {
        return Outcome::Done;
    };
    target.add_node(point);
    target.recompute(RecomputeMode::Exact);
    ctx.collection.updated();
    Outcome::Stay
}

pub(super) fn remove_press(curve: usize, point: Point, ctx: &mut ToolContext) -> Outcome {
    let threshold = ctx.options.hit_threshold;
    let Some(target) = bound(curve, ctx) else {
        return Outcome::Done;
    };
    if let Some(hit) = hit_node(target, point, threshold) {
        target.remove_node(hit.index);
        target.recompute(RecomputeMode::Exact);
        ctx.collection.updated();
    }
    Outcome::Stay
}

pub(super) fn move_press(
    curve: usize,
    node: &mut Option<usize>,
    point: Point,
    ctx: &mut ToolContext,
) -> Outcome {
    let threshold = ctx.options.hit_threshold;
    let Some(target) = bound(curve, ctx) else {
        return Outcome::Done;
    };
    *node = hit_node(target, point, threshold).map(|hit| hit.index);
    Outcome::Stay
}

pub(super) fn move_drag(
    curve: usize,
    node: Option<usize>,
    point: Point,
    ctx: &mut ToolContext,
) -> Outcome {
    let Some(index) = node else {
        return Outcome::Stay;
    };
    let Some(target) = bound(curve, ctx) else {
        return Outcome::Done;
    };
    target.move_node(index, point);
    target.recompute(RecomputeMode::Fast);
    ctx.collection.updated();
    Outcome::Stay
}

pub(super) fn move_release(curve: usize, node: &mut Option<usize>, ctx: &mut ToolContext) -> Outcome {
    if node.take().is_none() {
        return Outcome::Stay;
    }
    let Some(target) = bound(curve, ctx) else {
        return Outcome::Done;
    };
    target.recompute(RecomputeMode::Exact);
    ctx.collection.updated();
    Outcome::Stay
}

pub(super) fn reorder_press(
    curve: usize,
    mode: ReorderMode,
    first: &mut Option<usize>,
    point: Point,
    ctx: &mut ToolContext,
) -> Outcome {
    let threshold = ctx.options.hit_threshold;
    let Some(target) = bound(curve, ctx) else {
        return Outcome::Done;
    };
    let Some(hit) = hit_node(target, point, threshold) else {
        return Outcome::Stay;
    };
    let Some(i) = *first else {
        *first = Some(hit.index);
        log::debug!("Erster Node für Umsortierung: {}", hit.index);
        return Outcome::Stay;
    };

    target.reorder_nodes(i, hit.index, mode);
    target.recompute(RecomputeMode::Exact);
    ctx.collection.updated();
    log::info!("Nodes {} und {} umsortiert ({:?})", i, hit.index, mode);
    Outcome::Done
}

pub(super) fn weight_press(curve: usize, point: Point, ctx: &mut ToolContext) -> Outcome {
    let threshold = ctx.options.hit_threshold;
    let Some(target) = bound(curve, ctx) else {
        return Outcome::Done;
    };
    let Some(hit) = hit_node(target, point, threshold) else {
        return Outcome::Done;
    };
    let Some(weight) = target.weights().map(|w| w[hit.index]) else {
        log::warn!("Kurve '{}' hat keine Gewichte", target.name);
        return Outcome::Done;
    };
    ctx.ui.weight_dialog.open(curve, hit.index, weight);
    Outcome::Done
}
