//! Aufbau des Kurvennetzes aus einem Node-Snapshot.
//!
//! Ablauf je Kante: Kontrollpunkte → Bézier-Samples → optional Arc-Length-Resampling.
//! Zu jeder Bézier-Kurve wird zusätzlich die gerade Sehne `N1 → N2` abgetastet.

use glam::DVec3;
use serde::Serialize;

use super::{select_edges, CurveError, NodeSet, Result};
use crate::shared::bezier;
use crate::shared::control_points::{build_control_points, CurveEnd};
use crate::shared::{arc_length, CurveOptions};

/// Art eines Segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Beide Nodes ohne Bearing-Daten
    Straight,
    /// Bézier-Kurve vom Grad `control_points.len() − 1`
    Bezier,
}

/// Ein berechnetes Segment zwischen zwei Nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSegment {
    pub from_id: u64,
    pub to_id: u64,
    pub kind: SegmentKind,
    /// Verwendete Kontrollpunkt-Folge (Start = Node `from`, Ende = Node `to`)
    pub control_points: Vec<DVec3>,
    /// Gerade Sehne `N1 → N2` mit `n_times` Punkten
    pub chord: Vec<DVec3>,
    /// Kurven-Samples (bei `Straight` identisch mit `chord`)
    pub curve: Vec<DVec3>,
    /// Gleichabständige Punkte, falls `resample_points` gesetzt ist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resampled: Option<Vec<DVec3>>,
}

impl CurveSegment {
    /// Bézier-Grad (1 bei geraden Segmenten)
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }
}

/// Ergebnis eines Netz-Aufbaus: ein Segment je Kandidaten-Kante.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurveNetwork {
    pub segments: Vec<CurveSegment>,
}

impl CurveNetwork {
    /// Anzahl Segmente
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true`, wenn keine Segmente vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Anzahl der Bézier-Segmente
    pub fn bezier_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Bezier)
            .count()
    }
}

fn curve_end(set: &NodeSet, index: usize) -> Result<CurveEnd> {
    Ok(CurveEnd::new(
        set.node(index)?.position,
        set.bearing_set(index)?.depth(),
        set.cumulative_vector(index)?,
    ))
}

/// Segment ohne Resampling.
fn sample_segment(
    set: &NodeSet,
    from: usize,
    to: usize,
    options: &CurveOptions,
) -> Result<CurveSegment> {
    let start = curve_end(set, from)?;
    let end = curve_end(set, to)?;

    let control_points = build_control_points(&start, &end, options.alpha)?;
    let chord = bezier::sample_line(start.position, end.position, options.n_times)?;

    let (kind, curve) = if control_points.len() == 2 {
        (SegmentKind::Straight, chord.clone())
    } else {
        (
            SegmentKind::Bezier,
            bezier::sample(&control_points, options.n_times)?,
        )
    };

    Ok(CurveSegment {
        from_id: set.node(from)?.id,
        to_id: set.node(to)?.id,
        kind,
        control_points,
        chord,
        curve,
        resampled: None,
    })
}

/// Baut das Segment zwischen den Nodes `from` und `to` (Indizes im Snapshot).
///
/// Mit gesetztem `resample_points` schlägt eine Kurve der Länge 0 mit
/// [`CurveError::DegenerateCurve`] fehl.
pub fn build_segment(
    set: &NodeSet,
    from: usize,
    to: usize,
    options: &CurveOptions,
) -> Result<CurveSegment> {
    options.validate()?;
    let mut segment = sample_segment(set, from, to, options)?;
    if let Some(points) = options.resample_points {
        segment.resampled = Some(arc_length::resample_equidistant(&segment.curve, points)?);
    }
    Ok(segment)
}

/// Baut das gesamte Netz: Topologie-Auswahl, dann ein Segment je Kante.
///
/// Degenerierte Kurven (Länge 0) werden nicht resampled; das Segment bleibt
/// mit `resampled = None` erhalten.
pub fn build_network(set: &NodeSet, options: &CurveOptions) -> Result<CurveNetwork> {
    options.validate()?;

    let edges = select_edges(&set.positions(), options.topology, options.edge_mode)?;
    let mut segments = Vec::with_capacity(edges.len());

    for edge in &edges {
        let mut segment = sample_segment(set, edge.from, edge.to, options)?;

        if let Some(points) = options.resample_points {
            match arc_length::resample_equidistant(&segment.curve, points) {
                Ok(resampled) => segment.resampled = Some(resampled),
                Err(CurveError::DegenerateCurve) => {
                    log::warn!(
                        "Segment {} → {} hat Länge 0, Resampling übersprungen",
                        segment.from_id,
                        segment.to_id
                    );
                }
                Err(e) => return Err(e),
            }
        }

        segments.push(segment);
    }

    let network = CurveNetwork { segments };
    log::debug!(
        "Kurvennetz: {} Nodes, {} Segmente ({} Bézier)",
        set.len(),
        network.len(),
        network.bezier_count()
    );

    Ok(network)
}
