//! Core-Domänentypen: Nodes, Bearing-Sets, Snapshot, Spatial-Index, Topologie, Kurvennetz.

pub mod bearing;
pub mod error;
pub mod generate;
pub mod network;
/// Core-Datenmodelle der Kurven-Engine
///
/// - NodeSet: unveränderlicher Snapshot aller Nodes
/// - Node: einzelner Node-Vektor (kartesisch)
/// - BearingSet: geordnete Bearing-Vektoren eines Nodes
pub mod node;
pub mod node_set;
pub mod spatial;
pub mod topology;

pub use bearing::{BearingSet, BearingVector};
pub use error::{CurveError, Result};
pub use generate::fibonacci_sphere;
pub use network::{build_network, build_segment, CurveNetwork, CurveSegment, SegmentKind};
pub use node::{BearingInput, Node, NodeInput};
pub use node_set::NodeSet;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use topology::{select_edges, Edge, EdgeMode, TopologyPolicy};
