//! Rationale Bézier-Kurven: Auswertung mit Gewichten.
//!
//! Die Auswertung folgt dem rationalen de Casteljau in projizierter Form
//! (`w = (1−u)·w1 + u·w2`, `W = (1−u)·(w1/w)·W1 + u·(w2/w)·W2`).
//! Graderhöhung und -reduktion laufen über homogene Koordinaten `(x·w, y·w, w)`.

use glam::DVec3;

use super::bezier::{self, binomial, CasteljauMemo};
use crate::core::point::Point;

/// Hebt einen gewichteten Punkt in homogene Koordinaten.
fn lift(point: Point, weight: f64) -> DVec3 {
    DVec3::new(point.x * weight, point.y * weight, weight)
}

/// Projiziert einen homogenen Punkt zurück: `(Punkt, Gewicht)`.
fn project(h: DVec3) -> (Point, f64) {
    (Point::new(h.x / h.z, h.y / h.z), h.z)
}

/// Ein Blend-Schritt des rationalen de Casteljau.
#[inline]
fn blend(a: (f64, Point), b: (f64, Point), u: f64) -> (f64, Point) {
    let (w1, p1) = a;
    let (w2, p2) = b;
    let w = (1.0 - u) * w1 + u * w2;
    let p = (1.0 - u) * (w1 / w) * p1 + u * (w2 / w) * p2;
    (w, p)
}

fn casteljau_memo(
    nodes: &[Point],
    weights: &[f64],
    level: usize,
    index: usize,
    step: usize,
    resolution: usize,
    memo: &mut CasteljauMemo,
) -> (f64, Point) {
    if level == 0 {
        return (weights[index], nodes[index]);
    }
    let key = (level, index, step);
    if let Some(value) = memo.get(key) {
        return value;
    }

    let left = casteljau_memo(nodes, weights, level - 1, index, step, resolution, memo);
    let right = casteljau_memo(nodes, weights, level - 1, index + 1, step, resolution, memo);
    let value = blend(left, right, step as f64 / resolution as f64);
    memo.insert(key, value);
    value
}

/// Exakte Abtastung an `resolution + 1` Parametern (rationaler de Casteljau).
pub fn sample_exact(
    nodes: &[Point],
    weights: &[f64],
    resolution: usize,
    memo: &mut CasteljauMemo,
) -> Vec<Point> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let degree = nodes.len() - 1;
    (0..=resolution)
        .map(|step| casteljau_memo(nodes, weights, degree, 0, step, resolution, memo).1)
        .collect()
}

/// Vollständiges rationales de-Casteljau-Dreieck an `t`.
pub fn triangle(nodes: &[Point], weights: &[f64], t: f64) -> Vec<Vec<(f64, Point)>> {
    let mut rows: Vec<Vec<(f64, Point)>> = Vec::with_capacity(nodes.len());
    rows.push(weights.iter().copied().zip(nodes.iter().copied()).collect());
    for level in 1..nodes.len() {
        let row = rows[level - 1]
            .windows(2)
            .map(|w| blend(w[0], w[1], t))
            .collect();
        rows.push(row);
    }
    rows
}

/// Kurvenpunkt an `t` (rationaler de Casteljau ohne Memo).
pub fn de_casteljau(nodes: &[Point], weights: &[f64], t: f64) -> Point {
    let rows = triangle(nodes, weights, t);
    rows[nodes.len() - 1][0].1
}

/// Kurvenpunkt an `t` per Horner-Schema für Zähler und Nenner.
pub fn horner(nodes: &[Point], weights: &[f64], t: f64) -> Point {
    let n = nodes.len() - 1;
    if n == 0 {
        return nodes[0];
    }

    let (u, order): (f64, Box<dyn Iterator<Item = usize>>) = if t <= 0.5 {
        (t / (1.0 - t), Box::new((0..=n).rev()))
    } else {
        ((1.0 - t) / t, Box::new(0..=n))
    };

    let mut numerator = Point::ZERO;
    let mut denominator = 0.0;
    for i in order {
        let coefficient = weights[i] * binomial(n, i);
        numerator = numerator * u + nodes[i] * coefficient;
        denominator = denominator * u + coefficient;
    }
    numerator / denominator
}

/// Schnelle Abtastung an `count` Parametern in [0, 1] (Horner).
pub fn sample_fast(nodes: &[Point], weights: &[f64], count: usize) -> Vec<Point> {
    if nodes.is_empty() {
        return Vec::new();
    }
    super::parameters(count)
        .map(|t| horner(nodes, weights, t))
        .collect()
}

/// Graderhöhung um `m` in homogenen Koordinaten.
pub fn elevate(nodes: &[Point], weights: &[f64], m: usize) -> (Vec<Point>, Vec<f64>) {
    let lifted: Vec<DVec3> = nodes
        .iter()
        .zip(weights)
        .map(|(p, w)| lift(*p, *w))
        .collect();
    bezier::elevate(&lifted, m).into_iter().map(project).unzip()
}

/// Gradreduktion um eins in homogenen Koordinaten (Näherung wie bei Bézier).
///
/// Liefert `None`, wenn dabei ein nicht-positives Gewicht entstehen würde.
pub fn reduce(nodes: &[Point], weights: &[f64]) -> Option<(Vec<Point>, Vec<f64>)> {
    let lifted: Vec<DVec3> = nodes
        .iter()
        .zip(weights)
        .map(|(p, w)| lift(*p, *w))
        .collect();
    let reduced = bezier::reduce(&lifted);
    if reduced.iter().any(|h| h.z <= 0.0 || !h.z.is_finite()) {
        return None;
    }
    Some(reduced.into_iter().map(project).unzip())
}

/// Unterteilt an `t`; Gewichte laufen durch dieselbe Rekursion.
pub fn split(
    nodes: &[Point],
    weights: &[f64],
    t: f64,
) -> ((Vec<Point>, Vec<f64>), (Vec<Point>, Vec<f64>)) {
    let rows = triangle(nodes, weights, t);
    let n = nodes.len() - 1;
    let (first_weights, first_nodes) = (0..=n).map(|k| rows[k][0]).unzip();
    let (second_weights, second_nodes) = (0..=n).map(|k| rows[n - k][k]).unzip();
    ((first_nodes, first_weights), (second_nodes, second_weights))
}
