//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{Curve, RecomputeMode};
use crate::shared::{RenderCurve, RenderScene};

fn render_curve(index: usize, curve: &Curve) -> RenderCurve {
    RenderCurve {
        index,
        name: curve.name.clone(),
        kind: curve.kind(),
        color: curve.color.clone(),
        points: curve.points().to_vec(),
        nodes: curve.show_nodes.then(|| curve.nodes().to_vec()),
        hull: curve.show_hull.then(|| curve.convex_hull()),
        selected: curve.selected,
        preview: curve.last_recompute() == Some(RecomputeMode::Fast),
    }
}

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Ausgeblendete Kurven fehlen in der Szene; die Reihenfolge entspricht der Sammlung.
pub fn build(state: &AppState) -> RenderScene {
    let curves = state
        .collection
        .curves()
        .iter()
        .enumerate()
        .filter(|(_, curve)| !curve.hidden)
        .map(|(index, curve)| render_curve(index, curve))
        .collect();

    RenderScene {
        curves,
        active_tool: state.toolbar.checked().map(|control| control.label()),
        status_message: state.ui.status_message.clone(),
        revision: state.collection.revision(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Curve, CurveKind, Point, RecomputeMode};

    fn triangle() -> Curve {
        let mut curve = Curve::with_nodes(
            CurveKind::Polygonal,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 5.0),
            ],
        );
        curve.set_resolution(8);
        curve.recompute(RecomputeMode::Exact);
        curve
    }

    #[test]
    fn build_skips_hidden_curves() {
        let mut state = AppState::new();
        state.collection.add(triangle(), false);
        let mut hidden = triangle();
        hidden.hide(true);
        state.collection.add(hidden, false);
        state.collection.add(triangle(), true);

        let scene = build(&state);

        assert_eq!(scene.curves.len(), 2);
        assert_eq!(scene.curves[1].index, 2);
        assert_eq!(scene.selected().map(|c| c.index), Some(2));
        assert_eq!(scene.curves[0].points.len(), 9);
    }

    #[test]
    fn build_includes_overlays_on_demand() {
        let mut state = AppState::new();
        let mut curve = triangle();
        curve.show_nodes = true;
        state.collection.add(curve, false);
        state.collection.add(triangle(), false);
        state.collection.get_mut(1).unwrap().show_hull = true;

        let scene = build(&state);

        assert_eq!(scene.curves[0].nodes.as_ref().map(Vec::len), Some(3));
        assert!(scene.curves[0].hull.is_none());
        assert!(scene.curves[1].nodes.is_none());
        assert_eq!(scene.curves[1].hull.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn build_marks_preview_points() {
        let mut state = AppState::new();
        let mut curve = triangle();
        curve.translate(Point::new(1.0, 0.0));
        curve.recompute(RecomputeMode::Fast);
        state.collection.add(curve, false);

        let scene = build(&state);

        assert!(scene.curves[0].preview);
        assert!(scene.active_tool.is_none());
    }
}
