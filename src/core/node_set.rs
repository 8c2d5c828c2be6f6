//! Unveränderlicher Snapshot aller Nodes mit Bearing-Sets und kumulativen Vektoren.

use std::collections::HashMap;

use glam::DVec3;

use super::{BearingSet, CurveError, Node, NodeInput, Result};

/// Node-Snapshot: Positionen, Bearing-Sets und daraus abgeleitete kumulative Vektoren.
///
/// Alle Felder sind nach der Erstellung read-only; Nodes werden per Index referenziert.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    nodes: Vec<Node>,
    bearings: Vec<BearingSet>,
    cumulative: Vec<DVec3>,
    index_by_id: HashMap<u64, usize>,
}

impl NodeSet {
    /// Baut den Snapshot aus Kugelkoordinaten-Eingaben (Winkel in Radiant).
    pub fn new(inputs: Vec<NodeInput>) -> Result<Self> {
        let mut nodes = Vec::with_capacity(inputs.len());
        let mut bearings = Vec::with_capacity(inputs.len());

        for input in inputs {
            if !(input.r.is_finite() && input.theta.is_finite() && input.phi.is_finite()) {
                return Err(CurveError::InvalidInput(format!(
                    "Node {}: Kugelkoordinaten müssen endlich sein",
                    input.id
                )));
            }

            let set = match input.bearings {
                None => BearingSet::Absent,
                Some(list) => BearingSet::from_directions(
                    list.into_iter()
                        .map(|b| (b.theta, b.phi, DVec3::from_array(b.force))),
                ),
            };

            if let Some(declared) = input.depth {
                if declared < 0 || declared as usize != set.depth() {
                    return Err(CurveError::InvalidDepth {
                        node_id: input.id,
                        declared,
                        actual: set.depth(),
                    });
                }
            }

            nodes.push(Node::from_spherical(
                input.id,
                input.r,
                input.theta,
                input.phi,
            ));
            bearings.push(set);
        }

        Self::from_parts(nodes, bearings)
    }

    /// Baut den Snapshot aus bereits kartesischen Nodes und passenden Bearing-Sets.
    pub fn from_parts(nodes: Vec<Node>, bearings: Vec<BearingSet>) -> Result<Self> {
        if nodes.len() != bearings.len() {
            return Err(CurveError::InvalidInput(format!(
                "{} Nodes, aber {} Bearing-Sets",
                nodes.len(),
                bearings.len()
            )));
        }

        let mut index_by_id = HashMap::with_capacity(nodes.len());
        for (index, (node, set)) in nodes.iter().zip(&bearings).enumerate() {
            if !node.position.is_finite() {
                return Err(CurveError::InvalidInput(format!(
                    "Node {}: Position muss endlich sein",
                    node.id
                )));
            }
            set.validate(node.id)?;
            if index_by_id.insert(node.id, index).is_some() {
                return Err(CurveError::InvalidInput(format!(
                    "doppelte Node-ID {}",
                    node.id
                )));
            }
        }

        let cumulative: Vec<DVec3> = bearings.iter().map(BearingSet::cumulative_vector).collect();
        if let Some(index) = cumulative.iter().position(|c| !c.is_finite()) {
            return Err(CurveError::InvalidInput(format!(
                "Node {}: kumulativer Vektor ist nicht endlich",
                nodes[index].id
            )));
        }

        Ok(Self {
            nodes,
            bearings,
            cumulative,
            index_by_id,
        })
    }

    /// Anzahl Nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true`, wenn der Snapshot keine Nodes enthält
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Alle Nodes in Eingabereihenfolge
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node am Index
    pub fn node(&self, index: usize) -> Result<&Node> {
        self.nodes.get(index).ok_or(CurveError::NodeIndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Index eines Nodes anhand seiner ID
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    /// Bearing-Set des Nodes am Index
    pub fn bearing_set(&self, index: usize) -> Result<&BearingSet> {
        self.bearings.get(index).ok_or(CurveError::NodeIndexOutOfRange {
            index,
            len: self.bearings.len(),
        })
    }

    /// Kumulativer Vektor des Nodes am Index
    pub fn cumulative_vector(&self, index: usize) -> Result<DVec3> {
        self.cumulative
            .get(index)
            .copied()
            .ok_or(CurveError::NodeIndexOutOfRange {
                index,
                len: self.cumulative.len(),
            })
    }

    /// Kartesische Positionen in Index-Reihenfolge
    pub fn positions(&self) -> Vec<DVec3> {
        self.nodes.iter().map(|n| n.position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BearingInput;
    use std::f64::consts::FRAC_PI_2;

    fn upward_bearing() -> BearingInput {
        BearingInput {
            theta: 0.0,
            phi: 0.0,
            force: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn test_node_set_from_spherical_inputs() {
        let set = NodeSet::new(vec![
            NodeInput::new(1, 1.0, 0.0, FRAC_PI_2).with_bearings(vec![upward_bearing()]),
            NodeInput::new(2, 1.0, FRAC_PI_2, FRAC_PI_2),
        ])
        .expect("gültiger Snapshot erwartet");

        assert_eq!(set.len(), 2);
        assert!(set.node(0).unwrap().position.abs_diff_eq(DVec3::X, 1e-12));
        assert_eq!(set.cumulative_vector(0).unwrap(), DVec3::new(0.0, 0.0, 3.0));
        assert_eq!(set.cumulative_vector(1).unwrap(), DVec3::ZERO);
        assert_eq!(set.bearing_set(1).unwrap(), &BearingSet::Absent);
        assert_eq!(set.index_of(2), Some(1));
        assert_eq!(set.index_of(99), None);
    }

    #[test]
    fn test_declared_depth_must_match() {
        let mut input = NodeInput::new(5, 1.0, 0.0, 0.0).with_bearings(vec![upward_bearing()]);
        input.depth = Some(2);

        assert_eq!(
            NodeSet::new(vec![input]).unwrap_err(),
            CurveError::InvalidDepth {
                node_id: 5,
                declared: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_negative_depth_is_rejected() {
        let mut input = NodeInput::new(3, 1.0, 0.0, 0.0);
        input.depth = Some(-1);

        assert!(matches!(
            NodeSet::new(vec![input]),
            Err(CurveError::InvalidDepth { declared: -1, .. })
        ));
    }

    #[test]
    fn test_declared_zero_depth_without_bearings_is_valid() {
        let mut input = NodeInput::new(3, 1.0, 0.0, 0.0);
        input.depth = Some(0);
        assert!(NodeSet::new(vec![input]).is_ok());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = NodeSet::new(vec![
            NodeInput::new(1, 1.0, 0.0, 0.0),
            NodeInput::new(1, 2.0, 0.0, 0.0),
        ]);
        assert!(matches!(result, Err(CurveError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        let result = NodeSet::new(vec![NodeInput::new(1, f64::INFINITY, 0.0, 0.0)]);
        assert!(matches!(result, Err(CurveError::InvalidInput(_))));
    }

    #[test]
    fn test_out_of_range_index() {
        let set = NodeSet::default();
        assert_eq!(
            set.node(0).unwrap_err(),
            CurveError::NodeIndexOutOfRange { index: 0, len: 0 }
        );
    }
}
