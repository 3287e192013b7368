//! Geometrie-Primitive für den Kurven-Kernel.
//!
//! Punkte sind `glam::DVec2` (f64), damit die Auswerter auch bei hohem Grad
//! numerisch vergleichbar bleiben. Alle Funktionen liefern neue Werte.

use glam::DVec2;

/// Ein Punkt (bzw. Vektor) in der Zeichenebene.
pub type Point = DVec2;

/// Schwerpunkt einer Punktmenge.
///
/// Vorbedingung: `points` ist nicht leer. Aufrufer prüfen das vorher.
pub fn centroid(points: &[Point]) -> Point {
    debug_assert!(!points.is_empty(), "Schwerpunkt einer leeren Punktmenge");
    let sum = points.iter().fold(Point::ZERO, |acc, p| acc + *p);
    sum / points.len() as f64
}

/// Dreht `point` um `pivot` um `angle` (Radiant, mathematisch positiv).
pub fn rotate_about(point: Point, pivot: Point, angle: f64) -> Point {
    pivot + Point::from_angle(angle).rotate(point - pivot)
}

/// Skaliert `point` relativ zu `pivot` um `factor`.
pub fn scale_about(point: Point, pivot: Point, factor: f64) -> Point {
    pivot + (point - pivot) * factor
}

/// Lineare Interpolation `(1 - t)·a + t·b`.
#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    (1.0 - t) * a + t * b
}

/// Index und Distanz des nächstgelegenen Punkts einer Folge.
///
/// Bei exakt gleicher Distanz gewinnt der kleinere Index.
pub fn nearest_in(points: &[Point], target: Point) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, p) in points.iter().enumerate() {
        let distance = p.distance(target);
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid_of_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&square), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate_about(
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            std::f64::consts::FRAC_PI_2,
        );
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_about_pivot() {
        let p = scale_about(Point::new(3.0, 1.0), Point::new(1.0, 1.0), 0.5);
        assert_eq!(p, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_nearest_in_prefers_lower_index_on_tie() {
        let points = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0)];
        let (index, distance) = nearest_in(&points, Point::ZERO).expect("Treffer erwartet");
        assert_eq!(index, 0);
        assert_relative_eq!(distance, 1.0);
        assert!(nearest_in(&[], Point::ZERO).is_none());
    }
}
