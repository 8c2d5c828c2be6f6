//! Spatial-Index (KD-Tree) für Nachbarschaftsabfragen über Node-Positionen.
//!
//! Der Baum enthält jede Position nur einmal. Nodes an identischer Position
//! werden als Gruppe unter einem Eintrag geführt, sodass beliebig viele
//! zusammenfallende Nodes keinen Bucket überlaufen lassen.

use std::collections::HashMap;

use glam::DVec3;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des gefundenen Nodes im Snapshot
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Positionen eines Snapshots.
///
/// Wird einmal pro Snapshot gebaut; Änderungen erfordern einen neuen Index.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 3>,
    /// Node-Indizes je eindeutiger Position; Item-ID im Baum = Gruppen-Index
    groups: Vec<Vec<usize>>,
    positions: Vec<DVec3>,
}

/// Bit-Schlüssel einer Position; `-0.0` und `0.0` fallen zusammen.
fn position_key(position: DVec3) -> [u64; 3] {
    position.to_array().map(|c| (c + 0.0).to_bits())
}

impl SpatialIndex {
    /// Baut einen neuen Index; `SpatialMatch::index` = Index in `positions`.
    pub fn from_positions(positions: &[DVec3]) -> Self {
        let mut group_by_key: HashMap<[u64; 3], usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut entries: Vec<[f64; 3]> = Vec::new();

        for (index, &position) in positions.iter().enumerate() {
            let group = *group_by_key.entry(position_key(position)).or_insert_with(|| {
                entries.push(position.to_array());
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(index);
        }

        let tree: KdTree<f64, 3> = (&entries).into();

        Self {
            tree,
            groups,
            positions: positions.to_vec(),
        }
    }

    /// Gibt die Anzahl indexierter Positionen zurück (inklusive Duplikate).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Positionen im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Anzahl unterschiedlicher Positionen im Baum.
    pub fn distinct_positions(&self) -> usize {
        self.groups.len()
    }

    /// Findet bis zu `count` nächste Positionen, sortiert nach Distanz (bei Gleichstand nach Index).
    pub fn nearest_n(&self, query: DVec3, count: usize) -> Vec<SpatialMatch> {
        let count = count.min(self.len());
        if count == 0 {
            return Vec::new();
        }

        // Jede Gruppe hat mindestens ein Mitglied: `count` Gruppen reichen immer.
        let group_count = count.min(self.groups.len());
        let mut results = Vec::with_capacity(count);
        for entry in self
            .tree
            .nearest_n::<SquaredEuclidean>(&query.to_array(), group_count)
        {
            let distance = entry.distance.sqrt();
            if let Some(members) = self.groups.get(entry.item as usize) {
                results.extend(
                    members
                        .iter()
                        .map(|&index| SpatialMatch { index, distance }),
                );
            }
        }

        sort_matches(&mut results);
        results.truncate(count);
        results
    }

    /// Die `k` nächsten Nachbarn des Nodes `index`, ohne den Node selbst.
    ///
    /// Liefert `min(k, len − 1)` Treffer; Nodes an identischer Position zählen als Nachbarn.
    pub fn neighbors_of(&self, index: usize, k: usize) -> Vec<SpatialMatch> {
        let Some(&query) = self.positions.get(index) else {
            return Vec::new();
        };

        let mut neighbors = self.nearest_n(query, k.saturating_add(1));
        neighbors.retain(|m| m.index != index);
        neighbors.truncate(k);
        neighbors
    }
}

fn sort_matches(matches: &mut [SpatialMatch]) {
    matches.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.index.cmp(&b.index))
    });
}
