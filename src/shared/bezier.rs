//! Bézier-Kurven beliebigen Grades über die Bernstein-Basis.
//!
//! `B(t) = Σ C(n,i) · tⁱ · (1-t)ⁿ⁻ⁱ · Pᵢ` für `t ∈ [0, 1]`.
//! Zusätzlich Ableitungen (Hodograph) und Krümmung `κ(t) = |B'' × B'| / |B'|³`.

use glam::DVec3;

use crate::core::{CurveError, Result};

/// Binomialkoeffizienten `C(n, 0..=n)` über die Pascal-Rekursion in `f64`.
///
/// Kein Integer-Überlauf bei hohen Graden; bis n ≈ 56 exakt darstellbar.
pub fn binomial_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    row.push(1.0);
    for _ in 0..n {
        let mut prev = 1.0;
        for entry in row.iter_mut().skip(1) {
            let current = *entry;
            *entry += prev;
            prev = current;
        }
        row.push(1.0);
    }
    row
}

/// Bernstein-Summe ohne Vorbedingungsprüfung (`control` darf 1 Punkt enthalten).
fn bernstein_sum(control: &[DVec3], coefficients: &[f64], t: f64) -> DVec3 {
    let n = control.len() - 1;
    let inv = 1.0 - t;
    control
        .iter()
        .zip(coefficients)
        .enumerate()
        .fold(DVec3::ZERO, |acc, (i, (p, c))| {
            let weight = c * t.powi(i as i32) * inv.powi((n - i) as i32);
            acc + weight * *p
        })
}

fn check_control(control: &[DVec3]) -> Result<()> {
    if control.len() < 2 {
        return Err(CurveError::InsufficientControlPoints {
            got: control.len(),
        });
    }
    Ok(())
}

/// Wertet die Kurve an einer einzelnen Stelle `t` aus.
pub fn evaluate(control: &[DVec3], t: f64) -> Result<DVec3> {
    check_control(control)?;
    let coefficients = binomial_row(control.len() - 1);
    Ok(bernstein_sum(control, &coefficients, t))
}

/// Tastet die Kurve an `n_times` gleichverteilten Parametern `t_k = k / (n_times - 1)` ab.
///
/// `P(0)` und `P(1)` sind exakt der erste bzw. letzte Kontrollpunkt.
pub fn sample(control: &[DVec3], n_times: usize) -> Result<Vec<DVec3>> {
    check_control(control)?;
    if n_times < 2 {
        return Err(CurveError::InvalidSampleCount { got: n_times });
    }

    let coefficients = binomial_row(control.len() - 1);
    let last = (n_times - 1) as f64;
    Ok((0..n_times)
        .map(|k| bernstein_sum(control, &coefficients, k as f64 / last))
        .collect())
}

/// Gerade Sehne `a → b` mit `n_times` gleichverteilten Punkten.
pub fn sample_line(a: DVec3, b: DVec3, n_times: usize) -> Result<Vec<DVec3>> {
    sample(&[a, b], n_times)
}

/// Kontrollpunkte der Ableitungskurve: `n · (Pᵢ₊₁ − Pᵢ)`, Grad `n − 1`.
///
/// Für einen einzelnen Punkt ist das Ergebnis leer.
pub fn derivative_points(control: &[DVec3]) -> Vec<DVec3> {
    let n = control.len().saturating_sub(1) as f64;
    control.windows(2).map(|w| n * (w[1] - w[0])).collect()
}

fn eval_or_zero(control: &[DVec3], t: f64) -> DVec3 {
    if control.is_empty() {
        return DVec3::ZERO;
    }
    bernstein_sum(control, &binomial_row(control.len() - 1), t)
}

/// Erste Ableitung `B'(t)` (nicht normalisiert).
pub fn tangent(control: &[DVec3], t: f64) -> Result<DVec3> {
    check_control(control)?;
    Ok(eval_or_zero(&derivative_points(control), t))
}

/// Krümmung `κ(t) = |B''(t) × B'(t)| / |B'(t)|³`.
///
/// Gibt 0 zurück, wenn `B'(t)` verschwindet; Grad 1 ist überall 0.
pub fn curvature(control: &[DVec3], t: f64) -> Result<f64> {
    check_control(control)?;
    let first = derivative_points(control);
    let second = derivative_points(&first);

    let d1 = eval_or_zero(&first, t);
    let d2 = eval_or_zero(&second, t);

    let speed = d1.length();
    if speed == 0.0 {
        return Ok(0.0);
    }
    Ok(d2.cross(d1).length() / (speed * speed * speed))
}
