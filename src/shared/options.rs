//! Zentrale Konfiguration für den Aufbau eines Kurvennetzes.
//!
//! `CurveOptions` wird explizit an jeden Aufruf übergeben; es gibt keine
//! prozessweiten Parameter. Die `const`-Werte dienen als Defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{CurveError, EdgeMode, Result, TopologyPolicy};

pub use super::control_points::DEFAULT_ALPHA;

// ── Abtastung ───────────────────────────────────────────────────────

/// Standard-Anzahl der Kurvensamples pro Segment.
pub const DEFAULT_N_TIMES: usize = 100;

/// Alle Parameter für Kontrollpunkte, Abtastung, Resampling und Topologie.
/// Kann als TOML-Tabelle gespeichert und geladen werden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    /// Gewicht des mittleren Kontrollpunkts (0 = Endseite, 1 = Startseite)
    pub alpha: f64,
    /// Anzahl der Samples je Kurve (`t_k = k / (n_times − 1)`)
    pub n_times: usize,
    /// Optional: Anzahl gleichabständiger Punkte nach Arc-Length-Resampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resample_points: Option<usize>,
    /// Gerichtete oder symmetrisierte Kanten
    pub edge_mode: EdgeMode,
    /// Kanten-Auswahl (alle Paare oder k-NN)
    pub topology: TopologyPolicy,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            n_times: DEFAULT_N_TIMES,
            resample_points: None,
            edge_mode: EdgeMode::Directed,
            topology: TopologyPolicy::AllPairs,
        }
    }
}

impl CurveOptions {
    /// Prüft alle Werte, bevor irgendetwas berechnet wird.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(CurveError::InvalidInput(format!(
                "alpha muss in [0, 1] liegen, erhalten: {}",
                self.alpha
            )));
        }
        if self.n_times < 2 {
            return Err(CurveError::InvalidSampleCount { got: self.n_times });
        }
        if let Some(points) = self.resample_points {
            if points < 2 {
                return Err(CurveError::InvalidSampleCount { got: points });
            }
        }
        if let TopologyPolicy::NearestNeighbors { k } = self.topology {
            if k < 1 {
                return Err(CurveError::InvalidNeighborCount { k });
            }
        }
        Ok(())
    }

    /// Liest Optionen aus einer TOML-Datei und prüft sie.
    ///
    /// Fehlende Schlüssel erhalten ihre Standardwerte; eine fehlende Datei ist ein Fehler.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        let options: Self = toml::from_str(&content)
            .with_context(|| format!("Optionen sind kein gültiges TOML: {}", path.display()))?;
        options
            .validate()
            .with_context(|| format!("Ungültige Optionen in {}", path.display()))?;

        log::info!("Kurven-Optionen aus {} übernommen", path.display());
        Ok(options)
    }

    /// Schreibt die Optionen als TOML, z.B. als Vorlage für `--options`.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Kurven-Optionen geschrieben nach {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = CurveOptions::default();
        assert_eq!(options.alpha, 0.5);
        assert_eq!(options.n_times, DEFAULT_N_TIMES);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_alpha = CurveOptions {
            alpha: -0.1,
            ..Default::default()
        };
        assert!(bad_alpha.validate().is_err());

        let bad_samples = CurveOptions {
            n_times: 1,
            ..Default::default()
        };
        assert_eq!(
            bad_samples.validate(),
            Err(CurveError::InvalidSampleCount { got: 1 })
        );

        let bad_k = CurveOptions {
            topology: TopologyPolicy::NearestNeighbors { k: 0 },
            ..Default::default()
        };
        assert_eq!(
            bad_k.validate(),
            Err(CurveError::InvalidNeighborCount { k: 0 })
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options: CurveOptions = toml::from_str(
            r#"
            n_times = 20
            topology = { policy = "nearest_neighbors", k = 4 }
            "#,
        )
        .expect("TOML erwartet");

        assert_eq!(options.n_times, 20);
        assert_eq!(options.alpha, DEFAULT_ALPHA);
        assert_eq!(options.topology, TopologyPolicy::NearestNeighbors { k: 4 });
        assert_eq!(options.edge_mode, EdgeMode::Directed);
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let path = std::env::temp_dir()
            .join(format!("nbv_curves_options_{}.toml", std::process::id()));
        let options = CurveOptions {
            alpha: 0.25,
            resample_points: Some(12),
            edge_mode: EdgeMode::Undirected,
            topology: TopologyPolicy::NearestNeighbors { k: 3 },
            ..Default::default()
        };

        options.save_to_file(&path).expect("Speichern erwartet");
        let loaded = CurveOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.expect("Laden erwartet"), options);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = CurveOptions::load_from_file(Path::new("/nicht/vorhanden.toml"))
            .expect_err("Fehler erwartet");
        assert!(err.to_string().contains("/nicht/vorhanden.toml"));
    }

    #[test]
    fn test_invalid_values_in_file_are_rejected() {
        let path = std::env::temp_dir()
            .join(format!("nbv_curves_bad_options_{}.toml", std::process::id()));
        std::fs::write(&path, "alpha = 2.0\n").expect("Schreiben erwartet");

        let result = CurveOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        let err = result.expect_err("Fehler erwartet");
        assert!(matches!(
            err.downcast_ref::<CurveError>(),
            Some(CurveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_save_refuses_invalid_options() {
        let path = std::env::temp_dir()
            .join(format!("nbv_curves_unsaved_{}.toml", std::process::id()));
        let options = CurveOptions {
            n_times: 0,
            ..Default::default()
        };

        assert!(options.save_to_file(&path).is_err());
        assert!(!path.exists());
    }
}
