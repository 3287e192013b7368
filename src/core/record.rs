//! Serialisierbare Darstellung einer Kurve für die Persistenz.
//!
//! Abtastpunkte werden nie gespeichert; sie entstehen nach dem Laden durch
//! eine exakte Neuberechnung.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::curve::{Curve, CurveKind, NodeSpacing, DEFAULT_COLOR};
use super::point::Point;

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Flacher Datensatz `{name, kind, color, nodes, weights?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CurveKind,
    #[serde(default = "default_color")]
    pub color: String,
    pub nodes: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<NodeSpacing>,
}

impl Curve {
    /// Erzeugt den Persistenz-Datensatz dieser Kurve.
    pub fn to_record(&self) -> CurveRecord {
        CurveRecord {
            name: self.name.clone(),
            kind: self.kind(),
            color: self.color.clone(),
            nodes: self.nodes().to_vec(),
            weights: self.weights().map(<[f64]>::to_vec),
            resolution: Some(self.resolution()),
            spacing: self.spacing(),
        }
    }

    /// Baut eine Kurve aus einem Datensatz; `points` bleiben bis zur
    /// Neuberechnung leer.
    pub fn from_record(record: &CurveRecord) -> anyhow::Result<Curve> {
        let nodes = record.nodes.clone();
        let mut curve = match record.kind {
            CurveKind::RationalBezier => {
                let weights = record
                    .weights
                    .clone()
                    .unwrap_or_else(|| vec![1.0; nodes.len()]);
                Curve::rational(nodes, weights)
                    .with_context(|| format!("Kurve '{}' ist ungültig", record.name))?
            }
            CurveKind::InterpolationPolynomial => {
                Curve::interpolation(nodes, record.spacing.unwrap_or_default())
            }
            kind => {
                if record.weights.is_some() {
                    log::warn!(
                        "Gewichte für Kurve '{}' ({}) werden ignoriert",
                        record.name,
                        kind.label()
                    );
                }
                Curve::with_nodes(kind, nodes)
            }
        };

        if !record.name.is_empty() {
            curve.name = record.name.clone();
        }
        curve.color = record.color.clone();
        if let Some(resolution) = record.resolution {
            curve.set_resolution(resolution);
        }
        Ok(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::RecomputeMode;

    fn sample_nodes() -> Vec<Point> {
        vec![
            Point::new(50.0, 170.0),
            Point::new(150.0, 370.0),
            Point::new(250.0, 35.0),
            Point::new(400.0, 320.0),
        ]
    }

    fn all_kinds() -> Vec<Curve> {
        let mut curves: Vec<Curve> = CurveKind::ALL
            .iter()
            .map(|kind| Curve::with_nodes(*kind, sample_nodes()))
            .collect();
        curves.push(Curve::rational(sample_nodes(), vec![1.0, 0.25, 3.5, 1.0]).unwrap());
        curves.push(Curve::interpolation(sample_nodes(), NodeSpacing::Equidistant));
        curves
    }

    #[test]
    fn test_record_round_trip_for_every_kind() {
        for original in all_kinds() {
            let record = original.to_record();
            let restored = Curve::from_record(&record).unwrap();
            assert_eq!(restored.kind(), original.kind());
            assert_eq!(restored.nodes(), original.nodes());
            assert_eq!(restored.weights(), original.weights());
            assert_eq!(restored.spacing(), original.spacing());
            assert_eq!(restored.name, original.name);
            assert!(restored.points().is_empty());
        }
    }

    #[test]
    fn test_json_round_trip_keeps_exact_values() {
        let mut original = Curve::rational(sample_nodes(), vec![0.1, 0.2, 0.3, 1e-3]).unwrap();
        original.set_resolution(77);
        original.recompute(RecomputeMode::Exact);
        let json = serde_json::to_string(&original.to_record()).unwrap();
        let record: CurveRecord = serde_json::from_str(&json).unwrap();
        let restored = Curve::from_record(&record).unwrap();
        assert_eq!(restored.nodes(), original.nodes());
        assert_eq!(restored.weights(), original.weights());
        assert_eq!(restored.resolution(), 77);
    }

    #[test]
    fn test_minimal_record_loads_with_defaults() {
        let json = r#"{"name": "Alt", "type": "rational_bezier", "color": "red",
                       "nodes": [[0.0, 0.0], [1.0, 2.0]]}"#;
        let record: CurveRecord = serde_json::from_str(json).unwrap();
        let curve = Curve::from_record(&record).unwrap();
        assert_eq!(curve.weights(), Some(&[1.0, 1.0][..]));
        assert_eq!(curve.color, "red");
        assert_eq!(curve.resolution(), crate::core::curve::DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_mismatched_weights_are_rejected() {
        let record = CurveRecord {
            name: "Kaputt".into(),
            kind: CurveKind::RationalBezier,
            color: "blue".into(),
            nodes: sample_nodes(),
            weights: Some(vec![1.0, 2.0]),
            resolution: None,
            spacing: None,
        };
        assert!(Curve::from_record(&record).is_err());

        let negative = CurveRecord {
            weights: Some(vec![1.0, 1.0, -2.0, 1.0]),
            ..record
        };
        assert!(Curve::from_record(&negative).is_err());
    }
}
