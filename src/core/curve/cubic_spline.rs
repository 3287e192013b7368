//! Natürlicher kubischer Spline durch die Nodes (Parameter gleichmäßig in [0, 1]).
//!
//! Die zweiten Ableitungen werden mit dem Thomas-Algorithmus bestimmt
//! (Tridiagonalsystem, natürliche Randbedingung `M_0 = M_{n−1} = 0`).
//! Beide Koordinaten werden gemeinsam gelöst, da die Matrix nur von den
//! Parametern abhängt.

use crate::core::point::Point;

/// Mindestanzahl an Nodes für eine echte Spline-Interpolation.
pub const MIN_NODES: usize = 3;

/// Gleichmäßige Parameter `t_i = i / (n − 1)`.
pub fn uniform_parameters(count: usize) -> Vec<f64> {
    super::parameters(count).collect()
}

/// Zweite Ableitungen `M_i` des natürlichen Splines durch `(ts[i], ys[i])`.
///
/// Vorbedingung: `ts` streng monoton, `ts.len() == ys.len() >= 3`.
pub fn second_derivatives(ts: &[f64], ys: &[Point]) -> Vec<Point> {
    let n = ts.len();
    let h: Vec<f64> = ts.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<Point> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    // Innere Gleichungen i = 1..n-2:
    // h[i-1]·M[i-1] + 2(h[i-1]+h[i])·M[i] + h[i]·M[i+1] = 6·(slope[i] − slope[i-1])
    let inner = n - 2;
    let mut c_prime = vec![0.0; inner];
    let mut d_prime = vec![Point::ZERO; inner];

    // Vorwärts-Elimination
    for k in 0..inner {
        let i = k + 1;
        let a = h[i - 1];
        let b = 2.0 * (h[i - 1] + h[i]);
        let c = h[i];
        let d = 6.0 * (slope[i] - slope[i - 1]);
        if k == 0 {
            c_prime[k] = c / b;
            d_prime[k] = d / b;
        } else {
            let denom = b - a * c_prime[k - 1];
            c_prime[k] = c / denom;
            d_prime[k] = (d - a * d_prime[k - 1]) / denom;
        }
    }

    // Rückwärts-Substitution
    let mut m = vec![Point::ZERO; n];
    for k in (0..inner).rev() {
        let next = m[k + 2];
        m[k + 1] = d_prime[k] - c_prime[k] * next;
    }
    m
}

/// Wertet den Spline an `t` aus (Intervall per Binärsuche).
pub fn evaluate(ts: &[f64], ys: &[Point], m: &[Point], t: f64) -> Point {
    let n = ts.len();
    let k = ts.partition_point(|&x| x < t).clamp(1, n - 1);

    let (x0, x1) = (ts[k - 1], ts[k]);
    let (y0, y1) = (ys[k - 1], ys[k]);
    let (m0, m1) = (m[k - 1], m[k]);
    let h = x1 - x0;

    m0 / (6.0 * h) * (x1 - t).powi(3)
        + m1 / (6.0 * h) * (t - x0).powi(3)
        + (y1 / h - m1 * h / 6.0) * (t - x0)
        + (y0 / h - m0 * h / 6.0) * (x1 - t)
}

/// Abtastung an `count` Parametern; unter drei Nodes sind die Nodes selbst das Ergebnis.
pub fn sample(nodes: &[Point], count: usize) -> Vec<Point> {
    if nodes.len() < MIN_NODES {
        return nodes.to_vec();
    }
    let ts = uniform_parameters(nodes.len());
    let m = second_derivatives(&ts, nodes);
    super::parameters(count)
        .map(|t| evaluate(&ts, nodes, &m, t))
        .collect()
}
