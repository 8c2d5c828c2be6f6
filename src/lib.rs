//! NBV Curves Library.
//! Kurven-Engine für Node-Bearing-Vektor-Netze, als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod scene;
pub mod shared;

pub use core::{
    build_network, build_segment, select_edges, BearingInput, BearingSet, BearingVector,
    CurveError, CurveNetwork, CurveSegment, Edge, EdgeMode, Node, NodeInput, NodeSet,
    SegmentKind, TopologyPolicy,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use scene::{load_scene, parse_scene, write_network_json, NetworkExport, Scene};
pub use shared::CurveOptions;
