//! Parser für Szenen-Dateien im TOML-Format.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{build_network, CurveNetwork, NodeInput, NodeSet};
use crate::shared::CurveOptions;

/// Rohform einer Szenen-Datei, wie sie in TOML steht.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    /// Alle Winkel (Nodes und Bearings) sind in Grad angegeben
    pub angles_in_degrees: bool,
    pub options: CurveOptions,
    pub nodes: Vec<NodeInput>,
}

/// Validierte Szene: Optionen und unveränderlicher Node-Snapshot.
#[derive(Debug, Clone)]
pub struct Scene {
    pub options: CurveOptions,
    pub nodes: NodeSet,
}

impl Scene {
    /// Baut das Kurvennetz mit den Optionen der Szene.
    pub fn build_network(&self) -> Result<CurveNetwork> {
        Ok(build_network(&self.nodes, &self.options)?)
    }
}

/// Parsed eine Szene aus einem TOML-String
pub fn parse_scene(toml_content: &str) -> Result<Scene> {
    let file: SceneFile = toml::from_str(toml_content).context("Szene ist kein gültiges TOML")?;

    file.options
        .validate()
        .context("Ungültige Optionen in [options]")?;

    let inputs: Vec<NodeInput> = if file.angles_in_degrees {
        file.nodes
            .into_iter()
            .map(NodeInput::degrees_to_radians)
            .collect()
    } else {
        file.nodes
    };

    let nodes = NodeSet::new(inputs).context("Ungültige Node-Daten in [[nodes]]")?;
    log::debug!("Szene geparst: {} Nodes", nodes.len());

    Ok(Scene {
        options: file.options,
        nodes,
    })
}

/// Lädt und parsed eine Szenen-Datei
pub fn load_scene(path: &Path) -> Result<Scene> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Szene konnte nicht gelesen werden: {}", path.display()))?;
    let scene = parse_scene(&content)
        .with_context(|| format!("Szene fehlerhaft: {}", path.display()))?;
    log::info!(
        "Szene geladen aus {}: {} Nodes",
        path.display(),
        scene.nodes.len()
    );
    Ok(scene)
}
