use super::{Outcome, ToolContext};
use crate::core::{CurveHit, JoinMethod, Point, RecomputeMode};

/// Nächste Kurve innerhalb des Trefferradius.
fn hit_curve(point: Point, ctx: &ToolContext) -> Option<CurveHit> {
    ctx.collection
        .distance_to_nearest_curve(point)
        .filter(|hit| ctx.options.is_hit(hit.distance))
}

pub(super) fn select_press(point: Point, ctx: &mut ToolContext) -> Outcome {
    match hit_curve(point, ctx) {
        Some(hit) => {
            ctx.collection.select(hit.curve);
            log::info!("Kurve {} ausgewählt", hit.curve);
        }
        None => {
            ctx.collection.deselect();
            log::debug!("Kein Treffer, Auswahl aufgehoben");
        }
    }
    ctx.collection.updated();
    Outcome::Done
}

pub(super) fn remove_press(point: Point, ctx: &mut ToolContext) -> Outcome {
    if let Some(hit) = hit_curve(point, ctx) {
        ctx.collection.remove(hit.curve);
        ctx.collection.updated();
    }
    Outcome::Done
}

pub(super) fn move_press(
    captured: &mut Option<usize>,
    anchor: &mut Point,
    point: Point,
    ctx: &mut ToolContext,
) -> Outcome {
    let Some(hit) = hit_curve(point, ctx) else {
        return Outcome::Done;
    };
    *captured = Some(hit.curve);
    *anchor = point;
    log::debug!("Kurve {} gefangen bei {:?}", hit.curve, point);
    Outcome::Stay
}

pub(super) fn move_drag(
    captured: Option<usize>,
    anchor: &mut Point,
    point: Point,
    ctx: &mut ToolContext,
) -> Outcome {
    let Some(curve) = captured.and_then(|i| ctx.collection.get_mut(i)) else {
        return Outcome::Stay;
    };
    curve.translate(point - *anchor);
    curve.recompute(RecomputeMode::Fast);
    *anchor = point;
    ctx.collection.updated();
    Outcome::Stay
}

pub(super) fn move_release(captured: &mut Option<usize>, ctx: &mut ToolContext) -> Outcome {
    if let Some(curve) = captured.take().and_then(|i| ctx.collection.get_mut(i)) {
        curve.recompute(RecomputeMode::Exact);
        ctx.collection.updated();
    }
    Outcome::Done
}

pub(super) fn duplicate_press(point: Point, ctx: &mut ToolContext) -> Outcome {
    let Some(hit) = hit_curve(point, ctx) else {
        return Outcome::Done;
    };
    let Some(original) = ctx.collection.get(hit.curve) else {
        return Outcome::Done;
    };
    let mut copy = original.clone();
    copy.name = format!("{} Kopie", original.name);
    copy.translate(ctx.options.duplicate_delta());
    copy.recompute(RecomputeMode::Exact);
    ctx.collection.add(copy, true);
    ctx.collection.updated();
    Outcome::Done
}

pub(super) fn split_press(curve: usize, point: Point, ctx: &mut ToolContext) -> Outcome {
    let Some(original) = ctx.collection.get(curve) else {
        log::warn!("Gebundene Kurve {} existiert nicht mehr", curve);
        return Outcome::Done;
    };
    let Some(sample) = original
        .nearest_sample(point)
        .filter(|hit| ctx.options.is_hit(hit.distance))
    else {
        return Outcome::Done;
    };
    let Some((mut first, mut second)) = original.split_at_sample(sample.index) else {
        return Outcome::Done;
    };

    first.recompute(RecomputeMode::Exact);
    second.recompute(RecomputeMode::Exact);
    ctx.collection.remove(curve);
    ctx.collection.add(first, false);
    ctx.collection.add(second, false);
    ctx.collection.updated();
    log::info!("Kurve {} bei Abtastpunkt {} geteilt", curve, sample.index);
    Outcome::Done
}

pub(super) fn join_press(
    curve: usize,
    method: JoinMethod,
    point: Point,
    ctx: &mut ToolContext,
) -> Outcome {
    let Some(hit) = ctx
        .collection
        .distance_to_nearest_other_curve(point, curve)
        .filter(|hit| ctx.options.is_hit(hit.distance))
    else {
        return Outcome::Done;
    };
    if ctx.collection.join_right_smooth(curve, hit.curve, method) {
        ctx.collection.updated();
        log::info!("Kurve {} an Kurve {} angefügt ({:?})", hit.curve, curve, method);
    }
    Outcome::Done
}
