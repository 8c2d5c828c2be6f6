//! Fehlertypen der Kurven-Engine.

use thiserror::Error;

/// Result-Alias für alle Engine-Operationen.
pub type Result<T> = std::result::Result<T, CurveError>;

/// Lokale, synchrone Fehler. Keiner davon ist transient oder wiederholbar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Kurve mit Gesamtlänge 0 (alle Punkte identisch) an das Resampling übergeben.
    #[error("Kurve ist degeneriert: Gesamtlänge 0, Resampling nicht möglich")]
    DegenerateCurve,

    /// Weniger als zwei Kontrollpunkte für die Bézier-Auswertung.
    #[error("mindestens 2 Kontrollpunkte erforderlich, erhalten: {got}")]
    InsufficientControlPoints { got: usize },

    /// Deklarierte Bearing-Tiefe passt nicht zur Anzahl der Vektoren.
    #[error("Node {node_id}: deklarierte Tiefe {declared}, tatsächlich {actual} Bearing-Vektoren")]
    InvalidDepth {
        node_id: u64,
        declared: i64,
        actual: usize,
    },

    /// Rang eines Bearing-Vektors entspricht nicht seiner Position in der Liste.
    #[error("Node {node_id}: Bearing-Vektor an Position {index} hat Rang {rank}")]
    InvalidRank {
        node_id: u64,
        index: usize,
        rank: usize,
    },

    /// Nachbar-Anzahl `k` ist kleiner als 1.
    #[error("ungültige Nachbar-Anzahl k = {k} (muss >= 1 sein)")]
    InvalidNeighborCount { k: usize },

    /// Sample-Anzahl unter 2 (Kurvenauswertung oder Resampling).
    #[error("mindestens 2 Samples erforderlich, erhalten: {got}")]
    InvalidSampleCount { got: usize },

    /// Node-Index liegt außerhalb des Snapshots.
    #[error("Node-Index {index} außerhalb des Bereichs (Anzahl Nodes: {len})")]
    NodeIndexOutOfRange { index: usize, len: usize },

    /// Sonstige ungültige Eingabe (nicht-endliche Werte, alpha außerhalb [0, 1], doppelte IDs).
    #[error("ungültige Eingabe: {0}")]
    InvalidInput(String),
}
