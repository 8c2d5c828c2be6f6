//! Szenen-Import (TOML) und Netz-Export (JSON).
//!
//! Eine Szene besteht aus optionalen `[options]` und einer Liste `[[nodes]]`
//! in Kugelkoordinaten. Winkel sind Radiant, außer `angles_in_degrees = true`.

pub mod parser;
pub mod writer;

pub use parser::{load_scene, parse_scene, Scene, SceneFile};
pub use writer::{save_network_json, write_network_json, NetworkExport};
