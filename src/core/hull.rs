//! Konvexe Hülle der Kontrollpunkte (Monotone Chain, O(n log n)).

use super::point::Point;

/// Kreuzprodukt von (a - o) × (b - o).
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a - o).perp_dot(b - o)
}

/// Berechnet die konvexe Hülle gegen den Uhrzeigersinn (mathematisch positiv).
///
/// Kollineare Randpunkte werden verworfen, der Startpunkt wird nicht wiederholt.
/// Weniger als drei Punkte ergeben eine leere Hülle.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return Vec::new();
    }

    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len() * 2);

    // Untere Kette
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    // Obere Kette
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop();
    hull
}
