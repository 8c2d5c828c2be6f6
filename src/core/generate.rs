//! Synthetische Node-Mengen (Fibonacci-Kugel) für Tests und Benchmarks.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use glam::DVec3;

use super::{BearingInput, NodeInput};
use crate::shared::coordinates::{normalize, to_cartesian, to_spherical};

/// Verteilt `count` Nodes gleichmäßig (Goldener Winkel) auf einer Kugel mit Radius `radius`.
///
/// Jeder Node erhält zwei Bearing-Vektoren: radial nach außen und um 45° zu
/// einer Senkrechten gekippt. `strength` ist die Summe der Kraft-Komponenten
/// je Bearing-Vektor.
pub fn fibonacci_sphere(count: usize, radius: f64, strength: f64) -> Vec<NodeInput> {
    let golden = PI * (1.0 + 5f64.sqrt());
    let force = [strength / 3.0; 3];

    (0..count)
        .map(|i| {
            let offset = i as f64 + 0.5;
            let phi = (1.0 - 2.0 * offset / count as f64).clamp(-1.0, 1.0).acos();
            let theta = golden * offset;

            let position = to_cartesian(radius, theta, phi);
            let bearings = outward_directions(position)
                .into_iter()
                .map(|dir| {
                    let (_, theta, phi) = to_spherical(dir);
                    BearingInput { theta, phi, force }
                })
                .collect();

            NodeInput::new(i as u64, radius, theta, phi).with_bearings(bearings)
        })
        .collect()
}

/// Radiale Richtung und eine um 45° davon gekippte Richtung.
fn outward_directions(position: DVec3) -> [DVec3; 2] {
    let radial = normalize(position);

    let mut perpendicular = position.cross(DVec3::X);
    if perpendicular.length_squared() < 1e-12 {
        perpendicular = position.cross(DVec3::Y);
    }
    let tilted = (radial + normalize(perpendicular)) * FRAC_1_SQRT_2;

    [radial, tilted]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeSet;
    use approx::assert_relative_eq;

    #[test]
    fn test_nodes_lie_on_sphere() {
        let set = NodeSet::new(fibonacci_sphere(25, 2.0, 0.6)).expect("Snapshot erwartet");

        assert_eq!(set.len(), 25);
        for node in set.nodes() {
            assert_relative_eq!(node.position.length(), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bearings_point_outward() {
        let inputs = fibonacci_sphere(10, 1.0, 0.6);
        let set = NodeSet::new(inputs).unwrap();

        for i in 0..set.len() {
            assert_eq!(set.bearing_set(i).unwrap().depth(), 2);
            let radial = set.node(i).unwrap().position.normalize();
            let cumulative = set.cumulative_vector(i).unwrap();
            // Gewichte 1 und 2, radialer Anteil: 0.6 · (1 + 2·cos 45°)
            assert_relative_eq!(
                cumulative.dot(radial),
                0.6 * (1.0 + 2.0 * FRAC_1_SQRT_2),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_empty_sphere() {
        assert!(fibonacci_sphere(0, 1.0, 1.0).is_empty());
    }
}
