//! Kontrollpunkt-Folgen zwischen zwei Nodes aus deren kumulativen Bearing-Vektoren.
//!
//! ```text
//! P_0            = N1
//! P_d            = N1 + C1 · d/D1                         (d = 1..=D1)
//! P_mid          = α·(N1 + C1) + (1 − α)·(N2 − C2)
//! P_..           = N2 − C2 · d/D2                         (d = D2..=1)
//! P_n            = N2
//! ```

use glam::DVec3;

use crate::core::{CurveError, Result};

/// Standard-Gewicht des mittleren Kontrollpunkts.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Ein Kurvenende: Node-Position, Bearing-Tiefe und kumulativer Vektor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveEnd {
    pub position: DVec3,
    pub depth: usize,
    pub cumulative: DVec3,
}

impl CurveEnd {
    pub fn new(position: DVec3, depth: usize, cumulative: DVec3) -> Self {
        Self {
            position,
            depth,
            cumulative,
        }
    }

    /// Kurvenende ohne Bearing-Daten
    pub fn bare(position: DVec3) -> Self {
        Self::new(position, 0, DVec3::ZERO)
    }
}

/// Baut die Kontrollpunkt-Folge von `start` nach `end`.
///
/// Ohne Bearing-Daten auf beiden Seiten: `[N1, N2]` (Gerade).
/// Sonst `D1 + D2 + 3` Punkte, Bézier-Grad `D1 + D2 + 2`.
pub fn build_control_points(start: &CurveEnd, end: &CurveEnd, alpha: f64) -> Result<Vec<DVec3>> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(CurveError::InvalidInput(format!(
            "alpha muss in [0, 1] liegen, erhalten: {alpha}"
        )));
    }

    let (n1, d1, c1) = (start.position, start.depth, start.cumulative);
    let (n2, d2, c2) = (end.position, end.depth, end.cumulative);

    if d1 == 0 && d2 == 0 {
        return Ok(vec![n1, n2]);
    }

    let mut points = Vec::with_capacity(d1 + d2 + 3);
    points.push(n1);

    for d in 1..=d1 {
        points.push(n1 + c1 * (d as f64 / d1 as f64));
    }

    points.push(alpha * (n1 + c1) + (1.0 - alpha) * (n2 - c2));

    for d in (1..=d2).rev() {
        points.push(n2 - c2 * (d as f64 / d2 as f64));
    }

    points.push(n2);
    Ok(points)
}
