//! Reine Geometrie-Funktionen und geteilte Konfiguration.
//!
//! Layer-neutral: hängt nur von den Fehlertypen in `core` ab.

pub mod arc_length;
pub mod bezier;
pub mod control_points;
pub mod coordinates;
pub mod options;

pub use control_points::{build_control_points, CurveEnd};
pub use options::{CurveOptions, DEFAULT_ALPHA, DEFAULT_N_TIMES};
