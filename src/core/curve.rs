//! Kurven-Kernel: eine Kurve mit Nodes, abgeleiteten Abtastpunkten und
//! Metadaten für Darstellung und Interaktion.
//!
//! Die Variante (Bézier, rational, Polygonzug, Spline, Interpolationspolynom)
//! steckt in einem geschlossenen Enum und wird per `match` dispatcht.
//! Mutationen ändern nur die Nodes und erhöhen die Revision; `points` wird
//! ausschließlich durch [`Curve::recompute`] neu berechnet.

pub mod bezier;
pub mod cubic_spline;
pub mod interpolation;
pub mod polygonal;
pub mod rational;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::core::hull;
use crate::core::point::{centroid, nearest_in, rotate_about, scale_about, Point};
use bezier::CasteljauMemo;
pub use interpolation::NodeSpacing;

/// Standard-Auflösung (Anzahl Intervalle der exakten Abtastung).
pub const DEFAULT_RESOLUTION: usize = 500;
/// Untergrenze der Abtastpunkte im schnellen Modus.
pub const FAST_MIN_SAMPLES: usize = 20;
/// Teiler der Auflösung im schnellen Modus.
pub const FAST_RESOLUTION_DIVISOR: usize = 10;
/// Standardfarbe neuer Kurven.
pub const DEFAULT_COLOR: &str = "blue";
/// Obergrenze der Auflösung (Abtastpunkte pro Kurve minus eins).
pub const MAX_RESOLUTION: usize = 100_000;

/// `count` gleichmäßig verteilte Parameter in [0, 1] (mindestens einer).
pub(crate) fn parameters(count: usize) -> impl Iterator<Item = f64> {
    let denom = count.saturating_sub(1).max(1) as f64;
    (0..count.max(1)).map(move |i| i as f64 / denom)
}

/// Kurventyp, bei der Erzeugung festgelegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Bezier,
    RationalBezier,
    Polygonal,
    CubicSpline,
    InterpolationPolynomial,
}

impl CurveKind {
    /// Alle Kurventypen in Anzeige-Reihenfolge.
    pub const ALL: [CurveKind; 5] = [
        CurveKind::Bezier,
        CurveKind::RationalBezier,
        CurveKind::Polygonal,
        CurveKind::CubicSpline,
        CurveKind::InterpolationPolynomial,
    ];

    /// Anzeigename für Kurvennamen und Statusmeldungen.
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Bezier => "Bezier",
            CurveKind::RationalBezier => "RationalBezier",
            CurveKind::Polygonal => "Polygonal",
            CurveKind::CubicSpline => "CubicSpline",
            CurveKind::InterpolationPolynomial => "Polynomial",
        }
    }

    /// Gehört der Typ zur Bézier-Familie (Graderhöhung, Teilung)?
    pub fn is_bezier_family(self) -> bool {
        matches!(self, CurveKind::Bezier | CurveKind::RationalBezier)
    }
}

/// Qualitätsstufe der Neuberechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeMode {
    /// Volle Auflösung: `resolution + 1` Abtastpunkte
    Exact,
    /// Grobe Vorschau während eines Drags
    Fast,
}

/// Art der Node-Umsortierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderMode {
    Swap,
    InsertBefore,
    InsertAfter,
}

/// Stetigkeit beim glatten Anfügen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinMethod {
    /// Tangente wird mit Richtung und Länge übernommen
    C1,
    /// Nur die Richtung wird übernommen, die eigene Länge bleibt
    G1,
}

/// Treffer einer Nächster-Punkt-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    pub index: usize,
    pub distance: f64,
}

impl PointHit {
    fn from_pair((index, distance): (usize, f64)) -> Self {
        Self { index, distance }
    }
}

/// Variantenspezifische Daten.
#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Bezier,
    RationalBezier { weights: Vec<f64> },
    Polygonal,
    CubicSpline,
    InterpolationPolynomial { spacing: NodeSpacing },
}

impl Shape {
    fn empty(kind: CurveKind) -> Self {
        match kind {
            CurveKind::Bezier => Shape::Bezier,
            CurveKind::RationalBezier => Shape::RationalBezier {
                weights: Vec::new(),
            },
            CurveKind::Polygonal => Shape::Polygonal,
            CurveKind::CubicSpline => Shape::CubicSpline,
            CurveKind::InterpolationPolynomial => Shape::InterpolationPolynomial {
                spacing: NodeSpacing::default(),
            },
        }
    }

    fn kind(&self) -> CurveKind {
        match self {
            Shape::Bezier => CurveKind::Bezier,
            Shape::RationalBezier { .. } => CurveKind::RationalBezier,
            Shape::Polygonal => CurveKind::Polygonal,
            Shape::CubicSpline => CurveKind::CubicSpline,
            Shape::InterpolationPolynomial { .. } => CurveKind::InterpolationPolynomial,
        }
    }
}

/// Prüft ein Gewicht auf Gültigkeit (endlich und positiv).
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Umsortierung einer Folge; für Nodes und Gewichte identisch.
fn reorder<T: Copy>(items: &mut Vec<T>, i: usize, j: usize, mode: ReorderMode) {
    assert!(
        i < items.len() && j < items.len(),
        "Node-Index außerhalb des Bereichs: ({i}, {j}) bei {} Nodes",
        items.len()
    );
    let item = items[i];
    match mode {
        ReorderMode::Swap => items.swap(i, j),
        ReorderMode::InsertBefore => {
            items.insert(j, item);
            items.remove(if j <= i { i + 1 } else { i });
        }
        ReorderMode::InsertAfter => {
            items.insert(j + 1, item);
            items.remove(if j < i { i + 1 } else { i });
        }
    }
}

/// Eine ebene parametrische Kurve.
///
/// `points` ist abgeleitet und nur nach einem expliziten
/// [`recompute`](Curve::recompute) gültig; [`needs_recompute`](Curve::needs_recompute)
/// zeigt an, ob Nodes oder Auflösung seitdem geändert wurden.
/// `clone()` erzeugt eine vollständig unabhängige Kopie.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Anzeigename
    pub name: String,
    /// Farbe als Name oder Hex-String (nur für den Renderer)
    pub color: String,
    /// Gehört die Kurve zur aktuellen Auswahl?
    pub selected: bool,
    /// Ausgeblendete Kurven werden weder gezeichnet noch getroffen
    pub hidden: bool,
    /// Node-Marker und Kontrollpolygon anzeigen
    pub show_nodes: bool,
    /// Konvexe Hülle anzeigen
    pub show_hull: bool,
    shape: Shape,
    nodes: Vec<Point>,
    points: Vec<Point>,
    resolution: usize,
    revision: u64,
    computed_revision: Option<u64>,
    last_recompute: Option<RecomputeMode>,
    memo: CasteljauMemo,
}

impl Curve {
    /// Erstellt eine leere Kurve des gegebenen Typs.
    pub fn new(kind: CurveKind) -> Self {
        Self {
            name: kind.label().to_string(),
            color: DEFAULT_COLOR.to_string(),
            selected: false,
            hidden: false,
            show_nodes: false,
            show_hull: false,
            shape: Shape::empty(kind),
            nodes: Vec::new(),
            points: Vec::new(),
            resolution: DEFAULT_RESOLUTION,
            revision: 0,
            computed_revision: None,
            last_recompute: None,
            memo: CasteljauMemo::default(),
        }
    }

    /// Erstellt eine Kurve mit Nodes; rationale Kurven erhalten Gewicht 1.
    pub fn with_nodes(kind: CurveKind, nodes: Vec<Point>) -> Self {
        let mut curve = Self::new(kind);
        if let Shape::RationalBezier { weights } = &mut curve.shape {
            *weights = vec![1.0; nodes.len()];
        }
        curve.nodes = nodes;
        curve
    }

    /// Erstellt eine rationale Bézier-Kurve mit expliziten Gewichten.
    pub fn rational(nodes: Vec<Point>, weights: Vec<f64>) -> anyhow::Result<Self> {
        if nodes.len() != weights.len() {
            anyhow::bail!(
                "Anzahl Gewichte ({}) passt nicht zur Anzahl Nodes ({})",
                weights.len(),
                nodes.len()
            );
        }
        if let Some(bad) = weights.iter().find(|w| !is_valid_weight(**w)) {
            anyhow::bail!("Ungültiges Gewicht: {bad} (erwartet endlich und > 0)");
        }
        let mut curve = Self::new(CurveKind::RationalBezier);
        curve.shape = Shape::RationalBezier { weights };
        curve.nodes = nodes;
        Ok(curve)
    }

    /// Erstellt ein Interpolationspolynom mit gewählter Stützstellen-Verteilung.
    pub fn interpolation(nodes: Vec<Point>, spacing: NodeSpacing) -> Self {
        let mut curve = Self::new(CurveKind::InterpolationPolynomial);
        curve.shape = Shape::InterpolationPolynomial { spacing };
        curve.nodes = nodes;
        curve
    }

    /// Setzt den Namen (Builder-Stil).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(&self) -> CurveKind {
        self.shape.kind()
    }

    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Gewichte (nur rationale Kurven).
    pub fn weights(&self) -> Option<&[f64]> {
        match &self.shape {
            Shape::RationalBezier { weights } => Some(weights.as_slice()),
            _ => None,
        }
    }

    /// Stützstellen-Verteilung (nur Interpolationspolynom).
    pub fn spacing(&self) -> Option<NodeSpacing> {
        match &self.shape {
            Shape::InterpolationPolynomial { spacing } => Some(*spacing),
            _ => None,
        }
    }

    /// Zuletzt berechnete Abtastpunkte.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Änderungszähler für Nodes, Gewichte und Auflösung.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Modus der letzten Neuberechnung (`None` vor der ersten).
    pub fn last_recompute(&self) -> Option<RecomputeMode> {
        self.last_recompute
    }

    /// Wurden Nodes/Gewichte/Auflösung seit der letzten Berechnung geändert?
    pub fn needs_recompute(&self) -> bool {
        self.computed_revision != Some(self.revision)
    }

    /// Größe der internen de-Casteljau-Memo-Tabelle.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.memo.clear();
    }

    // ── Node-Operationen ────────────────────────────────────────────

    /// Hängt einen Node an (rationale Kurven: Gewicht 1).
    pub fn add_node(&mut self, point: Point) {
        self.nodes.push(point);
        if let Shape::RationalBezier { weights } = &mut self.shape {
            weights.push(1.0);
        }
        self.touch();
    }

    /// Entfernt den Node an `index` und gibt ihn zurück.
    pub fn remove_node(&mut self, index: usize) -> Point {
        let removed = self.nodes.remove(index);
        if let Shape::RationalBezier { weights } = &mut self.shape {
            weights.remove(index);
        }
        self.touch();
        removed
    }

    /// Verschiebt den Node an `index` auf `point`.
    pub fn move_node(&mut self, index: usize, point: Point) {
        self.nodes[index] = point;
        self.touch();
    }

    /// Sortiert Node `i` relativ zu Node `j` um.
    ///
    /// `Swap` tauscht beide; `InsertBefore`/`InsertAfter` fügen eine Kopie von
    /// `i` vor bzw. hinter `j` ein und entfernen danach das Original, wobei der
    /// Entfernungsindex die Verschiebung durch das Einfügen berücksichtigt.
    pub fn reorder_nodes(&mut self, i: usize, j: usize, mode: ReorderMode) {
        reorder(&mut self.nodes, i, j, mode);
        if let Shape::RationalBezier { weights } = &mut self.shape {
            reorder(weights, i, j, mode);
        }
        self.touch();
    }

    /// Kehrt die Node-Reihenfolge um.
    pub fn reverse_nodes(&mut self) {
        self.nodes.reverse();
        if let Shape::RationalBezier { weights } = &mut self.shape {
            weights.reverse();
        }
        self.touch();
    }

    /// Setzt das Gewicht eines Nodes (nur rationale Kurven).
    pub fn set_node_weight(&mut self, index: usize, weight: f64) -> anyhow::Result<()> {
        if !is_valid_weight(weight) {
            anyhow::bail!("Ungültiges Gewicht: {weight} (erwartet endlich und > 0)");
        }
        let Shape::RationalBezier { weights } = &mut self.shape else {
            anyhow::bail!("Kurve '{}' hat keine Gewichte", self.name);
        };
        weights[index] = weight;
        self.touch();
        Ok(())
    }

    /// Setzt die Auflösung (begrenzt auf `1..=MAX_RESOLUTION`).
    pub fn set_resolution(&mut self, resolution: usize) {
        if resolution == 0 || resolution > MAX_RESOLUTION {
            log::warn!(
                "Auflösung {} außerhalb von 1..={}, wird begrenzt",
                resolution,
                MAX_RESOLUTION
            );
        }
        let resolution = resolution.clamp(1, MAX_RESOLUTION);
        if resolution != self.resolution {
            self.resolution = resolution;
            self.touch();
        }
    }

    /// Setzt die Stützstellen-Verteilung eines Interpolationspolynoms.
    pub fn set_spacing(&mut self, spacing: NodeSpacing) -> bool {
        let Shape::InterpolationPolynomial { spacing: current } = &mut self.shape else {
            log::warn!("Stützstellen-Verteilung nur für Interpolationspolynome");
            return false;
        };
        *current = spacing;
        self.touch();
        true
    }

    pub fn hide(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    // ── Affine Transformationen ─────────────────────────────────────

    /// Verschiebt alle Nodes um `delta`.
    pub fn translate(&mut self, delta: Point) {
        if self.nodes.is_empty() {
            return;
        }
        for node in &mut self.nodes {
            *node += delta;
        }
        self.touch();
    }

    /// Skaliert um den Node-Schwerpunkt.
    pub fn scale(&mut self, factor: f64) {
        if self.nodes.is_empty() {
            return;
        }
        let pivot = centroid(&self.nodes);
        for node in &mut self.nodes {
            *node = scale_about(*node, pivot, factor);
        }
        self.touch();
    }

    /// Dreht um den Node-Schwerpunkt (Winkel in Grad).
    pub fn rotate(&mut self, theta_degrees: f64) {
        if self.nodes.is_empty() {
            return;
        }
        let pivot = centroid(&self.nodes);
        let angle = theta_degrees.to_radians();
        for node in &mut self.nodes {
            *node = rotate_about(*node, pivot, angle);
        }
        self.touch();
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Anzahl Abtastpunkte im schnellen Modus (nie dichter als exakt).
    pub fn fast_sample_count(&self) -> usize {
        (self.resolution / FAST_RESOLUTION_DIVISOR)
            .max(FAST_MIN_SAMPLES)
            .min(self.resolution + 1)
    }

    /// Berechnet `points` neu.
    pub fn recompute(&mut self, mode: RecomputeMode) {
        let count = match mode {
            RecomputeMode::Exact => self.resolution + 1,
            RecomputeMode::Fast => self.fast_sample_count(),
        };
        let nodes = &self.nodes;

        self.points = match (&self.shape, mode) {
            (Shape::Bezier, RecomputeMode::Exact) => {
                self.memo.prepare(self.revision, self.resolution);
                bezier::sample_exact(nodes, self.resolution, &mut self.memo)
            }
            (Shape::Bezier, RecomputeMode::Fast) => bezier::sample_fast(nodes, count),
            (Shape::RationalBezier { weights }, RecomputeMode::Exact) => {
                self.memo.prepare(self.revision, self.resolution);
                rational::sample_exact(nodes, weights, self.resolution, &mut self.memo)
            }
            (Shape::RationalBezier { weights }, RecomputeMode::Fast) => {
                rational::sample_fast(nodes, weights, count)
            }
            (Shape::Polygonal, _) => polygonal::sample(nodes, count),
            (Shape::CubicSpline, _) => cubic_spline::sample(nodes, count),
            (Shape::InterpolationPolynomial { spacing }, _) => {
                interpolation::sample(nodes, *spacing, count)
            }
        };

        self.computed_revision = Some(self.revision);
        self.last_recompute = Some(mode);
        log::debug!(
            "Kurve '{}' neu berechnet ({:?}): {} Punkte",
            self.name,
            mode,
            self.points.len()
        );
    }

    /// Wertet die Kurve direkt am Parameter `t ∈ [0, 1]` aus.
    ///
    /// Beim Interpolationspolynom wird `t` auf die Spanne der Stützstellen
    /// abgebildet, beim Spline mit weniger als drei Nodes auf den Polygonzug.
    pub fn evaluate(&self, t: f64) -> Option<Point> {
        if self.nodes.is_empty() {
            return None;
        }
        let nodes = &self.nodes;
        let point = match &self.shape {
            Shape::Bezier => bezier::de_casteljau(nodes, t),
            Shape::RationalBezier { weights } => rational::de_casteljau(nodes, weights, t),
            Shape::Polygonal => polygonal::evaluate(nodes, t),
            Shape::CubicSpline if nodes.len() < cubic_spline::MIN_NODES => {
                polygonal::evaluate(nodes, t)
            }
            Shape::CubicSpline => {
                let ts = cubic_spline::uniform_parameters(nodes.len());
                let m = cubic_spline::second_derivatives(&ts, nodes);
                cubic_spline::evaluate(&ts, nodes, &m, t)
            }
            Shape::InterpolationPolynomial { spacing } => {
                let (ts, ws) = interpolation::parameters_and_weights(*spacing, nodes.len());
                let (start, end) = (ts[0], ts[ts.len() - 1]);
                interpolation::evaluate(nodes, &ts, &ws, start + (end - start) * t)
            }
        };
        Some(point)
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Nächstgelegener Node (`None` ohne Nodes).
    pub fn nearest_node(&self, target: Point) -> Option<PointHit> {
        nearest_in(&self.nodes, target).map(PointHit::from_pair)
    }

    /// Nächstgelegener Abtastpunkt (`None` ohne Punkte).
    pub fn nearest_sample(&self, target: Point) -> Option<PointHit> {
        nearest_in(&self.points, target).map(PointHit::from_pair)
    }

    /// Distanz zum nächsten Abtastpunkt, `f64::INFINITY` ohne Punkte.
    pub fn distance_to_nearest_sample(&self, target: Point) -> f64 {
        self.nearest_sample(target)
            .map_or(f64::INFINITY, |hit| hit.distance)
    }

    /// Konvexe Hülle der Nodes (leer bei weniger als drei).
    pub fn convex_hull(&self) -> Vec<Point> {
        hull::convex_hull(&self.nodes)
    }

    /// Kurvenparameter des Abtastpunkts `index` in [0, 1].
    pub fn sample_parameter(&self, index: usize) -> f64 {
        let denom = self.points.len().saturating_sub(1).max(1);
        index as f64 / denom as f64
    }

    /// Kurzbeschreibung für Listen und Logs.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | {} Nodes",
            self.name,
            self.kind().label(),
            self.nodes.len()
        )
    }

    // ── Grad, Teilung, Verbindung ───────────────────────────────────

    /// Erhöht den Grad um `m` ohne Formänderung (nur Bézier-Familie).
    pub fn raise_degree(&mut self, m: usize) -> bool {
        if self.nodes.is_empty() {
            log::warn!("Graderhöhung ohne Nodes nicht möglich");
            return false;
        }
        let kind = self.kind();
        match &mut self.shape {
            Shape::Bezier => self.nodes = bezier::elevate(&self.nodes, m),
            Shape::RationalBezier { weights } => {
                let (nodes, new_weights) = rational::elevate(&self.nodes, weights, m);
                self.nodes = nodes;
                *weights = new_weights;
            }
            _ => {
                log::warn!("Graderhöhung für {} nicht unterstützt", kind.label());
                return false;
            }
        }
        self.touch();
        true
    }

    /// Senkt den Grad um eins (Näherung, nur Bézier-Familie, ab drei Nodes).
    pub fn reduce_degree(&mut self) -> bool {
        if self.nodes.len() < 3 {
            log::warn!(
                "Gradreduktion braucht mindestens 3 Nodes (vorhanden: {})",
                self.nodes.len()
            );
            return false;
        }
        let kind = self.kind();
        match &mut self.shape {
            Shape::Bezier => self.nodes = bezier::reduce(&self.nodes),
            Shape::RationalBezier { weights } => {
                let Some((nodes, new_weights)) = rational::reduce(&self.nodes, weights) else {
                    log::warn!("Gradreduktion ergäbe nicht-positive Gewichte, abgebrochen");
                    return false;
                };
                self.nodes = nodes;
                *weights = new_weights;
            }
            _ => {
                log::warn!("Gradreduktion für {} nicht unterstützt", kind.label());
                return false;
            }
        }
        self.touch();
        true
    }

    /// Neue Kurve mit gleichen Metadaten und anderer Geometrie.
    fn derive(&self, shape: Shape, nodes: Vec<Point>, suffix: &str) -> Curve {
        let mut curve = Curve::new(shape.kind());
        curve.name = format!("{} {}", self.name, suffix);
        curve.color = self.color.clone();
        curve.show_nodes = self.show_nodes;
        curve.show_hull = self.show_hull;
        curve.resolution = self.resolution;
        curve.shape = shape;
        curve.nodes = nodes;
        curve
    }

    /// Teilt die Kurve an `t` in zwei Kurven gleichen Typs.
    ///
    /// Unterstützt Bézier, rationale Bézier und Polygonzug mit mindestens zwei Nodes.
    pub fn split_at(&self, t: f64) -> Option<(Curve, Curve)> {
        if self.nodes.len() < 2 {
            log::warn!("Teilen braucht mindestens 2 Nodes");
            return None;
        }
        let t = t.clamp(0.0, 1.0);
        let halves = match &self.shape {
            Shape::Bezier => {
                let (a, b) = bezier::split(&self.nodes, t);
                (
                    self.derive(Shape::Bezier, a, "(1)"),
                    self.derive(Shape::Bezier, b, "(2)"),
                )
            }
            Shape::RationalBezier { weights } => {
                let ((a, wa), (b, wb)) = rational::split(&self.nodes, weights, t);
                (
                    self.derive(Shape::RationalBezier { weights: wa }, a, "(1)"),
                    self.derive(Shape::RationalBezier { weights: wb }, b, "(2)"),
                )
            }
            Shape::Polygonal => {
                let (a, b) = polygonal::split(&self.nodes, t);
                (
                    self.derive(Shape::Polygonal, a, "(1)"),
                    self.derive(Shape::Polygonal, b, "(2)"),
                )
            }
            _ => {
                log::warn!("Teilen für {} nicht unterstützt", self.kind().label());
                return None;
            }
        };
        Some(halves)
    }

    /// Teilt am Parameter des Abtastpunkts `index`.
    pub fn split_at_sample(&self, index: usize) -> Option<(Curve, Curve)> {
        self.split_at(self.sample_parameter(index))
    }

    /// Fügt `other` glatt an das Ende dieser Kurve an.
    ///
    /// `other` wird verschoben, bis sein erster Node auf dem letzten Node
    /// dieser Kurve liegt. Haben beide mindestens drei Nodes, wird der zweite
    /// Node von `other` an die End-Tangente angepasst. Bei zwei rationalen
    /// Kurven werden zusätzlich die ersten beiden Gewichte von `other` gesetzt.
    pub fn join_right_smooth(&self, other: &mut Curve, method: JoinMethod) -> bool {
        let (Some(&end), Some(&start)) = (self.nodes.last(), other.nodes.first()) else {
            log::warn!("Verbinden braucht Nodes auf beiden Kurven");
            return false;
        };
        other.translate(end - start);

        let own_weights = self.weights().map(<[f64]>::to_vec);
        let smooth = self.nodes.len() >= 3 && other.nodes.len() >= 3;

        if smooth {
            let n = self.nodes.len() - 1;
            let tangent = self.nodes[n] - self.nodes[n - 1];
            let anchor = other.nodes[0];
            other.nodes[1] = match method {
                JoinMethod::C1 => anchor + tangent,
                JoinMethod::G1 => {
                    let length = (other.nodes[1] - anchor).length();
                    anchor + tangent.normalize_or_zero() * length
                }
            };
        }

        if let (Some(own), Shape::RationalBezier { weights }) = (own_weights, &mut other.shape) {
            let last = own[own.len() - 1];
            weights[0] = last;
            if smooth {
                let estimate = 2.0 * last - own[own.len() - 2];
                weights[1] = if is_valid_weight(estimate) { estimate } else { last };
            }
        }

        other.touch();
        log::debug!(
            "Kurve '{}' an '{}' angefügt ({:?})",
            other.name,
            self.name,
            method
        );
        true
    }
}
