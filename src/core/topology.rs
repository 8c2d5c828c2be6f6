//! Topologie-Auswahl: welche Node-Paare werden verbunden.
//!
//! Zwei austauschbare Strategien:
//! - `AllPairs`: jedes ungeordnete Paar `(i, j)`, `i < j`, O(N²), für kleine Node-Mengen
//! - `NearestNeighbors { k }`: je Node die `k` nächsten Nachbarn über einen KD-Tree

use std::collections::BTreeMap;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{CurveError, Result, SpatialIndex, SpatialMatch};

/// Strategie zur Auswahl der Kandidaten-Kanten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum TopologyPolicy {
    /// Alle ungeordneten Paare
    #[default]
    AllPairs,
    /// k nächste Nachbarn je Node (gerichtet)
    NearestNeighbors { k: usize },
}

/// Behandlung der Kantenrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Kanten bleiben gerichtet (Node → Nachbar), asymmetrische Paare bleiben erhalten
    #[default]
    Directed,
    /// Kanten werden symmetrisiert und auf `from < to` dedupliziert
    Undirected,
}

/// Kandidaten-Kante zwischen zwei Node-Indizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    /// Euklidische Distanz der beiden Nodes
    pub distance: f64,
}

/// Wählt die Kanten für `positions` nach `policy` und `mode`.
pub fn select_edges(
    positions: &[DVec3],
    policy: TopologyPolicy,
    mode: EdgeMode,
) -> Result<Vec<Edge>> {
    let edges = match policy {
        TopologyPolicy::AllPairs => all_pairs(positions),
        TopologyPolicy::NearestNeighbors { k } => nearest_neighbor_edges(positions, k)?,
    };

    Ok(match mode {
        EdgeMode::Directed => edges,
        EdgeMode::Undirected => symmetrize(&edges),
    })
}

/// Alle Paare `(i, j)` mit `i < j` in lexikographischer Reihenfolge.
pub fn all_pairs(positions: &[DVec3]) -> Vec<Edge> {
    let n = positions.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge {
                from: i,
                to: j,
                distance: positions[i].distance(positions[j]),
            });
        }
    }
    edges
}

/// Nachbarlisten je Node: genau `k` Einträge bei `N > k`, sonst `N − 1`.
///
/// Der Index wird einmal gebaut und nur gelesen. `k < 1` ist ein Fehler.
pub fn neighbor_lists(positions: &[DVec3], k: usize) -> Result<Vec<Vec<SpatialMatch>>> {
    if k < 1 {
        return Err(CurveError::InvalidNeighborCount { k });
    }

    let available = positions.len().saturating_sub(1);
    let effective_k = if k > available {
        log::debug!(
            "k = {} bei {} Nodes, begrenze auf {} Nachbarn",
            k,
            positions.len(),
            available
        );
        available
    } else {
        k
    };

    let index = SpatialIndex::from_positions(positions);
    Ok((0..positions.len())
        .map(|i| index.neighbors_of(i, effective_k))
        .collect())
}

/// Gerichtete Kanten Node → Nachbar, pro Node nach Distanz sortiert.
pub fn nearest_neighbor_edges(positions: &[DVec3], k: usize) -> Result<Vec<Edge>> {
    let lists = neighbor_lists(positions, k)?;
    Ok(lists
        .into_iter()
        .enumerate()
        .flat_map(|(from, neighbors)| {
            neighbors.into_iter().map(move |m| Edge {
                from,
                to: m.index,
                distance: m.distance,
            })
        })
        .collect())
}

/// Symmetrisiert gerichtete Kanten: jedes Paar genau einmal als `from < to`.
///
/// Schleifen (`from == to`) entfallen.
pub fn symmetrize(edges: &[Edge]) -> Vec<Edge> {
    let mut unique: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for edge in edges {
        if edge.from == edge.to {
            continue;
        }
        let key = (edge.from.min(edge.to), edge.from.max(edge.to));
        unique.entry(key).or_insert(edge.distance);
    }
    unique
        .into_iter()
        .map(|((from, to), distance)| Edge { from, to, distance })
        .collect()
}
