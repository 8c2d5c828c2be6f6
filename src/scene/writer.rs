//! Writer für den JSON-Export eines Kurvennetzes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{CurveNetwork, CurveSegment};
use crate::shared::CurveOptions;

/// Exportformat: verwendete Optionen plus alle Segmente.
#[derive(Debug, Serialize)]
pub struct NetworkExport<'a> {
    pub node_count: usize,
    pub options: &'a CurveOptions,
    pub segments: &'a [CurveSegment],
}

impl<'a> NetworkExport<'a> {
    pub fn new(node_count: usize, options: &'a CurveOptions, network: &'a CurveNetwork) -> Self {
        Self {
            node_count,
            options,
            segments: &network.segments,
        }
    }
}

/// Schreibt den Export als formatierten JSON-String
///
/// Punkte erscheinen als `[x, y, z]`-Arrays.
pub fn write_network_json(export: &NetworkExport<'_>) -> Result<String> {
    serde_json::to_string_pretty(export).context("Kurvennetz konnte nicht serialisiert werden")
}

/// Schreibt den Export in eine Datei
pub fn save_network_json(export: &NetworkExport<'_>, path: &Path) -> Result<()> {
    let content = write_network_json(export)?;
    std::fs::write(path, content)
        .with_context(|| format!("Export fehlgeschlagen: {}", path.display()))?;
    log::info!(
        "{} Segmente exportiert nach: {}",
        export.segments.len(),
        path.display()
    );
    Ok(())
}
