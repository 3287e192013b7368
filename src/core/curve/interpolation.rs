//! Interpolationspolynom in baryzentrischer Lagrange-Form.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::bezier::binomial;
use crate::core::point::Point;

/// Toleranz, ab der ein Parameter als Stützstelle gilt.
pub const NODE_PARAM_TOLERANCE: f64 = 1e-5;

/// Verteilung der Stützstellen-Parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSpacing {
    /// Tschebyschow-Knoten `cos((2i+1)π / (2n+2))`
    #[default]
    Chebyshev,
    /// Äquidistante Knoten `i / n`
    Equidistant,
}

/// Stützstellen-Parameter und baryzentrische Gewichte für `count` Nodes.
///
/// Konstante Faktoren der Gewichte kürzen sich im Quotienten und entfallen.
pub fn parameters_and_weights(spacing: NodeSpacing, count: usize) -> (Vec<f64>, Vec<f64>) {
    let n = count.saturating_sub(1);
    let sign = |i: usize| if i % 2 == 0 { 1.0 } else { -1.0 };
    match spacing {
        NodeSpacing::Chebyshev => (0..count)
            .map(|i| {
                let angle = (2 * i + 1) as f64 * PI / (2 * n + 2) as f64;
                (angle.cos(), sign(i) * angle.sin())
            })
            .unzip(),
        NodeSpacing::Equidistant => (0..count)
            .map(|i| {
                let t = if n == 0 { 0.0 } else { i as f64 / n as f64 };
                (t, sign(i) * binomial(n, i))
            })
            .unzip(),
    }
}

/// Baryzentrische Auswertung an `t`.
///
/// Liegt `t` näher als [`NODE_PARAM_TOLERANCE`] an einer Stützstelle, wird
/// deren Node direkt zurückgegeben.
pub fn evaluate(nodes: &[Point], ts: &[f64], weights: &[f64], t: f64) -> Point {
    if let Some((k, _)) = ts
        .iter()
        .enumerate()
        .map(|(k, ti)| (k, (ti - t).abs()))
        .filter(|(_, d)| *d < NODE_PARAM_TOLERANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
    {
        return nodes[k];
    }

    let mut numerator = Point::ZERO;
    let mut denominator = 0.0;
    for ((node, ti), wi) in nodes.iter().zip(ts).zip(weights) {
        let factor = wi / (t - ti);
        numerator += *node * factor;
        denominator += factor;
    }
    numerator / denominator
}

/// Abtastung an `count` Parametern über die Spanne der Stützstellen.
pub fn sample(nodes: &[Point], spacing: NodeSpacing, count: usize) -> Vec<Point> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let (ts, weights) = parameters_and_weights(spacing, nodes.len());
    let (start, end) = (ts[0], ts[ts.len() - 1]);
    super::parameters(count)
        .map(|s| evaluate(nodes, &ts, &weights, start + (end - start) * s))
        .collect()
}
