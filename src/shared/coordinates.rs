//! Umrechnung Kugelkoordinaten ↔ kartesisch und sichere Normalisierung.
//!
//! Konvention: `theta` = Azimut in der xy-Ebene, `phi` = Polarwinkel von +z.

use glam::DVec3;

/// `x = r·sinφ·cosθ`, `y = r·sinφ·sinθ`, `z = r·cosφ`.
pub fn to_cartesian(r: f64, theta: f64, phi: f64) -> DVec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    DVec3::new(
        r * sin_phi * cos_theta,
        r * sin_phi * sin_theta,
        r * cos_phi,
    )
}

/// Umkehrung von [`to_cartesian`]: liefert `(r, theta, phi)`.
///
/// Der Ursprung wird auf `(0, 0, 0)` abgebildet.
pub fn to_spherical(v: DVec3) -> (f64, f64, f64) {
    let r = v.length();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let theta = v.y.atan2(v.x);
    let phi = (v.z / r).clamp(-1.0, 1.0).acos();
    (r, theta, phi)
}

/// Einheitsvektor von `v`; der Nullvektor wird unverändert zurückgegeben.
pub fn normalize(v: DVec3) -> DVec3 {
    let norm = v.length();
    if norm == 0.0 {
        v
    } else {
        v / norm
    }
}
