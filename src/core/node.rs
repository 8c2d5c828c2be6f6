//! Repräsentiert einen Node-Vektor und seine Roh-Eingabedaten.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::shared::coordinates::to_cartesian;

/// Ein Node im 3D-Raum (kartesische Position, nach Erstellung unveränderlich)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Eindeutige Node-ID
    pub id: u64,
    /// Kartesische Position
    pub position: DVec3,
}

impl Node {
    /// Erstellt einen Node direkt aus einer kartesischen Position
    pub fn new(id: u64, position: DVec3) -> Self {
        Self { id, position }
    }

    /// Erstellt einen Node aus Kugelkoordinaten `(r, θ, φ)`
    pub fn from_spherical(id: u64, r: f64, theta: f64, phi: f64) -> Self {
        Self::new(id, to_cartesian(r, theta, phi))
    }
}

/// Eingabe eines Bearing-Vektors (Winkel in Radiant, Kraft als `[fx, fy, fz]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingInput {
    pub theta: f64,
    pub phi: f64,
    pub force: [f64; 3],
}

/// Eingabe eines Nodes in Kugelkoordinaten mit optionalen Bearing-Vektoren.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInput {
    pub id: u64,
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
    /// Optional deklarierte Tiefe; muss zur Anzahl der `bearings` passen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    /// `None` = Node ohne Bearing-Daten
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearings: Option<Vec<BearingInput>>,
}

impl NodeInput {
    /// Node ohne Bearing-Vektoren
    pub fn new(id: u64, r: f64, theta: f64, phi: f64) -> Self {
        Self {
            id,
            r,
            theta,
            phi,
            depth: None,
            bearings: None,
        }
    }

    /// Hängt die Bearing-Vektoren an (Reihenfolge = Rang)
    pub fn with_bearings(mut self, bearings: Vec<BearingInput>) -> Self {
        self.bearings = Some(bearings);
        self
    }

    /// Rechnet alle Winkel (Node und Bearings) von Grad in Radiant um
    pub fn degrees_to_radians(mut self) -> Self {
        self.theta = self.theta.to_radians();
        self.phi = self.phi.to_radians();
        if let Some(bearings) = self.bearings.as_mut() {
            for bearing in bearings.iter_mut() {
                bearing.theta = bearing.theta.to_radians();
                bearing.phi = bearing.phi.to_radians();
            }
        }
        self
    }
}
