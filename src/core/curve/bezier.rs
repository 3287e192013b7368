//! Bézier-Auswerter: de Casteljau (memoisiert), Horner-Schema, Graderhöhung,
//! Gradreduktion und Unterteilung.
//!
//! Die Funktionen arbeiten auf reinen Kontrollpunkt-Slices. Graderhöhung und
//! Gradreduktion sind generisch über den Koordinatentyp, damit die rationale
//! Variante dieselben Rekursionen in homogenen Koordinaten nutzen kann.

use std::collections::HashMap;
use std::ops::{Add, Mul};

use crate::core::point::{lerp, Point};

/// Binomialkoeffizient `n über k` als f64 (multiplikativ, ohne Fakultäten).
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Memo-Tabelle der de-Casteljau-Rekursion.
///
/// Schlüssel ist `(Stufe, Index, Schritt)`, der Parameter ergibt sich aus
/// `Schritt / Auflösung`. Der Inhalt gilt nur für eine Kombination aus
/// Kurven-Revision und Auflösung und wird bei jeder Abweichung verworfen.
/// Der Gewichtsanteil ist bei nicht-rationalen Kurven immer 1.
#[derive(Debug, Clone, Default)]
pub struct CasteljauMemo {
    revision: Option<u64>,
    resolution: usize,
    entries: HashMap<(usize, usize, usize), (f64, Point)>,
}

impl CasteljauMemo {
    /// Verwirft den Inhalt, falls er zu einer anderen Revision/Auflösung gehört.
    pub fn prepare(&mut self, revision: u64, resolution: usize) {
        if self.revision != Some(revision) || self.resolution != resolution {
            self.entries.clear();
            self.revision = Some(revision);
            self.resolution = resolution;
        }
    }

    /// Leert die Tabelle vollständig.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision = None;
    }

    /// Anzahl der gespeicherten Zwischenwerte.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Zwischenwerte gespeichert sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(super) fn get(&self, key: (usize, usize, usize)) -> Option<(f64, Point)> {
        self.entries.get(&key).copied()
    }

    pub(super) fn insert(&mut self, key: (usize, usize, usize), value: (f64, Point)) {
        self.entries.insert(key, value);
    }
}

/// Rekursiver de-Casteljau-Schritt `B[level][index]` an `step / resolution`.
fn casteljau_memo(
    nodes: &[Point],
    level: usize,
    index: usize,
    step: usize,
    resolution: usize,
    memo: &mut CasteljauMemo,
) -> Point {
    if level == 0 {
        return nodes[index];
    }
    let key = (level, index, step);
    if let Some((_, point)) = memo.get(key) {
        return point;
    }

    let left = casteljau_memo(nodes, level - 1, index, step, resolution, memo);
    let right = casteljau_memo(nodes, level - 1, index + 1, step, resolution, memo);
    let t = step as f64 / resolution as f64;
    let point = lerp(left, right, t);
    memo.insert(key, (1.0, point));
    point
}

/// Exakte Abtastung an `resolution + 1` äquidistanten Parametern (de Casteljau).
pub fn sample_exact(nodes: &[Point], resolution: usize, memo: &mut CasteljauMemo) -> Vec<Point> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let degree = nodes.len() - 1;
    (0..=resolution)
        .map(|step| casteljau_memo(nodes, degree, 0, step, resolution, memo))
        .collect()
}

/// Vollständiges de-Casteljau-Dreieck an `t`: `triangle[k][i] = B[k][i]`.
pub fn triangle(nodes: &[Point], t: f64) -> Vec<Vec<Point>> {
    let mut rows = Vec::with_capacity(nodes.len());
    rows.push(nodes.to_vec());
    for level in 1..nodes.len() {
        let prev = &rows[level - 1];
        let row: Vec<Point> = prev.windows(2).map(|w| lerp(w[0], w[1], t)).collect();
        rows.push(row);
    }
    rows
}

/// Kurvenpunkt an `t` nach de Casteljau (ohne Memo).
pub fn de_casteljau(nodes: &[Point], t: f64) -> Point {
    let mut row = nodes.to_vec();
    for len in (1..nodes.len()).rev() {
        for i in 0..len {
            row[i] = lerp(row[i], row[i + 1], t);
        }
    }
    row[0]
}

/// Kurvenpunkt an `t` per Horner-Schema über den Bernstein-Koeffizienten.
///
/// Für `t <= 0.5` wird nach `u = t / (1 - t)` entwickelt, sonst nach
/// `u = (1 - t) / t`, damit `u <= 1` bleibt.
pub fn horner(nodes: &[Point], t: f64) -> Point {
    let n = nodes.len() - 1;
    if n == 0 {
        return nodes[0];
    }

    if t <= 0.5 {
        let s = 1.0 - t;
        let u = t / s;
        let mut acc = nodes[n];
        for i in (0..n).rev() {
            acc = acc * u + nodes[i] * binomial(n, i);
        }
        acc * s.powi(n as i32)
    } else {
        let u = (1.0 - t) / t;
        let mut acc = nodes[0];
        for (i, node) in nodes.iter().enumerate().skip(1) {
            acc = acc * u + *node * binomial(n, i);
        }
        acc * t.powi(n as i32)
    }
}

/// Schnelle Abtastung an `count` Parametern in [0, 1] (Horner).
pub fn sample_fast(nodes: &[Point], count: usize) -> Vec<Point> {
    if nodes.is_empty() {
        return Vec::new();
    }
    super::parameters(count).map(|t| horner(nodes, t)).collect()
}

/// Graderhöhung um `m` (Blossoming-Rekursion).
///
/// `Q_i = Σ_j C(n,j)·C(m,i-j) / C(n+m,i) · P_j`; die Form bleibt identisch.
pub fn elevate<T>(control: &[T], m: usize) -> Vec<T>
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    if control.is_empty() || m == 0 {
        return control.to_vec();
    }
    let n = control.len() - 1;
    (0..=n + m)
        .map(|i| {
            let lo = i.saturating_sub(m);
            let hi = i.min(n);
            let scale = binomial(n + m, i);
            let mut acc = control[lo] * (binomial(n, lo) * binomial(m, i - lo) / scale);
            for j in lo + 1..=hi {
                acc = acc + control[j] * (binomial(n, j) * binomial(m, i - j) / scale);
            }
            acc
        })
        .collect()
}

/// Gradreduktion um eins (Näherung).
///
/// Zwei Schätzungen der neuen Kontrollpunkte werden per Vorwärts-Rekursion vom
/// Anfang und Rückwärts-Rekursion vom Ende gebildet und in der Mitte gemittelt.
/// Exakt nur, wenn die Kurve aus einer Graderhöhung stammt; ansonsten ändert
/// sich die Form. Bei Grad 2 wird auch der Endpunkt gemittelt.
///
/// Vorbedingung: mindestens drei Kontrollpunkte.
pub fn reduce<T>(control: &[T]) -> Vec<T>
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    debug_assert!(control.len() >= 3, "Gradreduktion braucht Grad >= 2");
    let n = control.len() - 1;
    let nf = n as f64;
    let half = n / 2;

    // Vorwärts: Q_i = (n·P_i − i·Q_{i−1}) / (n − i)
    let mut forward = Vec::with_capacity(half + 1);
    forward.push(control[0]);
    for i in 1..=half {
        let q = (control[i] * nf + forward[i - 1] * -(i as f64)) * (1.0 / (n - i) as f64);
        forward.push(q);
    }

    // Rückwärts: R_{i−1} = (n·P_i − (n − i)·R_i) / i
    let mut backward = vec![control[n]; n];
    for i in (half + 1..n).rev() {
        backward[i - 1] =
            (control[i] * nf + backward[i] * -((n - i) as f64)) * (1.0 / i as f64);
    }

    let mut result = Vec::with_capacity(n);
    result.extend_from_slice(&forward[..half]);
    result.push((forward[half] + backward[half]) * 0.5);
    result.extend_from_slice(&backward[half + 1..]);
    result
}

/// Unterteilt die Kurve an `t` in zwei Bézier-Kurven gleichen Grades.
///
/// Linke Hälfte: `B[k][0]`, rechte Hälfte: `B[n−k][k]` (vom Teilungspunkt
/// bis zum letzten Kontrollpunkt).
pub fn split(nodes: &[Point], t: f64) -> (Vec<Point>, Vec<Point>) {
    let rows = triangle(nodes, t);
    let n = nodes.len() - 1;
    let first = (0..=n).map(|k| rows[k][0]).collect();
    let second = (0..=n).map(|k| rows[n - k][k]).collect();
    (first, second)
}
