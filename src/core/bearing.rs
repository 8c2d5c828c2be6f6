//! Bearing-Vektoren und ihre Akkumulation zum kumulativen Vektor eines Nodes.
//!
//! Pro Bearing-Vektor mit Rang `d` (0-basiert):
//! `V_d = (d + 1) · (f_x + f_y + f_z) · normalize(to_cartesian(1, θ, φ))`.
//! Die Kraft geht nur als Skalar-Summe ihrer Komponenten ein.

use glam::DVec3;

use super::{CurveError, Result};
use crate::shared::coordinates::{normalize, to_cartesian};

/// Gerichteter, kraftgewichteter Richtungsdeskriptor an einem Node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingVector {
    /// Tiefe `d` (0-basiert), bestimmt die Gewichtung `d + 1`
    pub rank: usize,
    /// Azimut (Radiant)
    pub theta: f64,
    /// Polarwinkel von +z (Radiant)
    pub phi: f64,
    /// Kraft-Komponenten
    pub force: DVec3,
}

impl BearingVector {
    /// Erstellt einen neuen Bearing-Vektor
    pub fn new(rank: usize, theta: f64, phi: f64, force: DVec3) -> Self {
        Self {
            rank,
            theta,
            phi,
            force,
        }
    }

    /// Einheitsrichtung in kartesischen Koordinaten.
    pub fn direction(&self) -> DVec3 {
        normalize(to_cartesian(1.0, self.theta, self.phi))
    }

    /// Beitrag `V_d` dieses Vektors zum kumulativen Vektor.
    pub fn contribution(&self) -> DVec3 {
        (self.rank + 1) as f64 * self.force.element_sum() * self.direction()
    }
}

/// Bearing-Daten eines Nodes: explizit abwesend oder eine geordnete Liste.
///
/// `Absent` und `Present(vec![])` sind gleichwertig (Tiefe 0, Nullvektor).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BearingSet {
    #[default]
    Absent,
    Present(Vec<BearingVector>),
}

impl BearingSet {
    /// Baut ein Set aus `(theta, phi, force)`-Tripeln; die Ränge folgen der Reihenfolge.
    pub fn from_directions(directions: impl IntoIterator<Item = (f64, f64, DVec3)>) -> Self {
        Self::Present(
            directions
                .into_iter()
                .enumerate()
                .map(|(rank, (theta, phi, force))| BearingVector::new(rank, theta, phi, force))
                .collect(),
        )
    }

    /// Prüft, dass der Rang jedes Vektors seiner Listenposition entspricht.
    pub fn validate(&self, node_id: u64) -> Result<()> {
        for (index, bv) in self.vectors().iter().enumerate() {
            if bv.rank != index {
                return Err(CurveError::InvalidRank {
                    node_id,
                    index,
                    rank: bv.rank,
                });
            }
            let finite = bv.theta.is_finite() && bv.phi.is_finite() && bv.force.is_finite();
            if !finite {
                return Err(CurveError::InvalidInput(format!(
                    "Node {node_id}: Bearing-Vektor {index} enthält nicht-endliche Werte"
                )));
            }
        }
        Ok(())
    }

    /// Tiefe `D` (Anzahl Bearing-Vektoren).
    pub fn depth(&self) -> usize {
        self.vectors().len()
    }

    /// Geordnete Bearing-Vektoren (leer bei `Absent`).
    pub fn vectors(&self) -> &[BearingVector] {
        match self {
            Self::Absent => &[],
            Self::Present(vectors) => vectors,
        }
    }

    /// Einzelbeiträge `V_d` je Rang, z.B. zum Zeichnen vom Node nach `node + V_d`.
    pub fn contributions(&self) -> Vec<DVec3> {
        self.vectors().iter().map(BearingVector::contribution).collect()
    }

    /// Kumulativer Vektor `Σ V_d`; exakt `(0, 0, 0)` bei Tiefe 0.
    pub fn cumulative_vector(&self) -> DVec3 {
        match self {
            Self::Absent => DVec3::ZERO,
            Self::Present(vectors) => vectors
                .iter()
                .fold(DVec3::ZERO, |acc, bv| acc + bv.contribution()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_absent_and_empty_sets_are_zero() {
        assert_eq!(BearingSet::Absent.cumulative_vector(), DVec3::ZERO);
        assert_eq!(BearingSet::Present(Vec::new()).cumulative_vector(), DVec3::ZERO);
        assert_eq!(BearingSet::Absent.depth(), 0);
        assert_eq!(BearingSet::Present(Vec::new()).depth(), 0);
    }

    #[test]
    fn test_single_upward_bearing_uses_force_sum() {
        let set = BearingSet::from_directions([(0.0, 0.0, DVec3::ONE)]);
        assert_eq!(set.cumulative_vector(), DVec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_rank_weighting_increases_with_depth() {
        // Beide Vektoren zeigen entlang +x, gleiche Kraft → Gewichte 1 und 2
        let force = DVec3::new(0.5, 0.25, 0.25);
        let set = BearingSet::from_directions([(0.0, FRAC_PI_2, force), (0.0, FRAC_PI_2, force)]);

        let contributions = set.contributions();
        assert!(contributions[0].abs_diff_eq(DVec3::X, 1e-12));
        assert!(contributions[1].abs_diff_eq(2.0 * DVec3::X, 1e-12));
        assert!(set.cumulative_vector().abs_diff_eq(3.0 * DVec3::X, 1e-12));
    }

    #[test]
    fn test_force_orientation_does_not_steer_direction() {
        let a = BearingSet::from_directions([(0.0, 0.0, DVec3::new(3.0, 0.0, 0.0))]);
        let b = BearingSet::from_directions([(0.0, 0.0, DVec3::new(0.0, 0.0, 3.0))]);
        assert_eq!(a.cumulative_vector(), b.cumulative_vector());
    }

    #[test]
    fn test_cumulative_equals_sum_of_contributions() {
        let set = BearingSet::from_directions([
            (0.5, 1.3, DVec3::new(0.6, 0.2, 0.2)),
            (1.0, 1.0, DVec3::new(0.4, 0.4, 0.2)),
        ]);
        let sum: DVec3 = set.contributions().into_iter().sum();
        assert!(set.cumulative_vector().abs_diff_eq(sum, 1e-12));
    }

    #[test]
    fn test_validate_rejects_rank_mismatch() {
        let set = BearingSet::Present(vec![BearingVector::new(1, 0.0, 0.0, DVec3::ONE)]);
        assert_eq!(
            set.validate(7),
            Err(CurveError::InvalidRank {
                node_id: 7,
                index: 0,
                rank: 1
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite_force() {
        let set = BearingSet::from_directions([(0.0, 0.0, DVec3::new(f64::NAN, 0.0, 0.0))]);
        assert!(matches!(set.validate(1), Err(CurveError::InvalidInput(_))));
    }
}
