//! Core-Domänentypen: Punkte, Kurven-Kernel, Datensätze und Kurvensammlung.

pub mod collection;
/// Kurven-Kernel
///
/// - Curve: Nodes, abgeleitete Abtastpunkte, Transformationen
/// - Varianten: Bézier, rationale Bézier, Polygonzug, kubischer Spline, Interpolationspolynom
pub mod curve;
pub mod hull;
pub mod point;
pub mod record;

pub use collection::{CurveCollection, CurveHit, UpdateListener};
pub use curve::{
    Curve, CurveKind, JoinMethod, NodeSpacing, PointHit, RecomputeMode, ReorderMode,
    DEFAULT_RESOLUTION,
};
pub use point::Point;
pub use record::CurveRecord;
