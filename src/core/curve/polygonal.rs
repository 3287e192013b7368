//! Polygonzug: stückweise lineare Abtastung entlang der Node-Folge.
//!
//! Parametrisiert wird über den Node-Index (nicht über die Bogenlänge):
//! `t = 0` ist der erste, `t = 1` der letzte Node, jeder Abschnitt erhält das
//! gleiche Parameterintervall.

use crate::core::point::{lerp, Point};

/// Abschnitt und lokaler Anteil für den globalen Parameter `t`.
fn locate(len: usize, t: f64) -> (usize, f64) {
    let segments = (len - 1) as f64;
    let s = (t.clamp(0.0, 1.0) * segments).max(0.0);
    let index = (s.floor() as usize).min(len - 2);
    (index, s - index as f64)
}

/// Punkt auf dem Polygonzug bei Parameter `t`.
///
/// Vorbedingung: mindestens ein Node.
pub fn evaluate(nodes: &[Point], t: f64) -> Point {
    if nodes.len() == 1 {
        return nodes[0];
    }
    let (index, frac) = locate(nodes.len(), t);
    lerp(nodes[index], nodes[index + 1], frac)
}

/// Gleichmäßige Abtastung an `count` Parametern.
pub fn sample(nodes: &[Point], count: usize) -> Vec<Point> {
    match nodes.len() {
        0 => Vec::new(),
        1 => vec![nodes[0]],
        _ => super::parameters(count).map(|t| evaluate(nodes, t)).collect(),
    }
}

/// Schneidet den Polygonzug bei `t`; beide Hälften enthalten den Schnittpunkt.
///
/// Vorbedingung: mindestens zwei Nodes.
pub fn split(nodes: &[Point], t: f64) -> (Vec<Point>, Vec<Point>) {
    let (index, frac) = locate(nodes.len(), t);
    let cut = lerp(nodes[index], nodes[index + 1], frac);

    let mut first = nodes[..=index].to_vec();
    if first.last() != Some(&cut) {
        first.push(cut);
    }

    let rest = &nodes[index + 1..];
    let rest = if rest.first() == Some(&cut) { &rest[1..] } else { rest };
    let mut second = Vec::with_capacity(rest.len() + 1);
    second.push(cut);
    second.extend_from_slice(rest);
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 30.0),
        ]
    }

    #[test]
    fn test_parameter_follows_node_index_not_arc_length() {
        // Zweiter Abschnitt ist dreimal so lang, bekommt aber dasselbe Intervall
        let p = evaluate(&zigzag(), 0.5);
        assert_eq!(p, Point::new(10.0, 0.0));
        let q = evaluate(&zigzag(), 0.75);
        assert_eq!(q, Point::new(10.0, 15.0));
    }

    #[test]
    fn test_sample_hits_endpoints() {
        let points = sample(&zigzag(), 5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[4], Point::new(10.0, 30.0));
    }

    #[test]
    fn test_split_inside_segment() {
        let (first, second) = split(&zigzag(), 0.25);
        assert_eq!(first, vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
        assert_eq!(
            second,
            vec![
                Point::new(5.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 30.0)
            ]
        );
    }
}
