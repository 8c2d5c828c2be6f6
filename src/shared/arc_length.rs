//! Arc-Length-Hilfsfunktionen für abgetastete Kurven (Polylines).

use glam::DVec3;

use crate::core::{CurveError, Result};

/// Länge einer Polyline (Summe der Sehnen).
pub fn polyline_length(points: &[DVec3]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Kumulierte Sehnenlängen, beginnend bei 0 (gleiche Länge wie `points`).
pub fn cumulative_lengths(points: &[DVec3]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut cumulative = 0.0;
    if !points.is_empty() {
        lengths.push(0.0);
    }
    for w in points.windows(2) {
        cumulative += w[0].distance(w[1]);
        lengths.push(cumulative);
    }
    lengths
}

/// Verteilt `num_points` Punkte mit gleichem Bogenlängen-Abstand entlang `curve`.
///
/// Stückweise lineare Interpolation über die kumulierte Sehnenlänge.
/// Erster und letzter Punkt werden exakt übernommen.
pub fn resample_equidistant(curve: &[DVec3], num_points: usize) -> Result<Vec<DVec3>> {
    if num_points < 2 {
        return Err(CurveError::InvalidSampleCount { got: num_points });
    }
    if curve.len() < 2 {
        return Err(CurveError::DegenerateCurve);
    }

    let arc_lengths = cumulative_lengths(curve);
    let last_idx = curve.len() - 1;
    let total = arc_lengths[last_idx];
    if total <= 0.0 || !total.is_finite() {
        return Err(CurveError::DegenerateCurve);
    }

    let spacing = total / (num_points - 1) as f64;
    let mut result = Vec::with_capacity(num_points);
    result.push(curve[0]);

    for k in 1..num_points - 1 {
        let target = k as f64 * spacing;
        // Erster Index mit arc_length >= target; Segmente der Länge 0 werden so übersprungen
        let idx = arc_lengths
            .partition_point(|&len| len < target)
            .clamp(1, last_idx);

        let len_before = arc_lengths[idx - 1];
        let len_after = arc_lengths[idx];
        let frac = if len_after > len_before {
            (target - len_before) / (len_after - len_before)
        } else {
            0.0
        };
        result.push(curve[idx - 1].lerp(curve[idx], frac));
    }

    result.push(curve[last_idx]);
    Ok(result)
}
