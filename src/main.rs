//! NBV Curves (Kommandozeile).
//!
//! Liest eine Szene im TOML-Format, baut das Kurvennetz und schreibt es als JSON
//! in eine Datei oder auf stdout.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{bail, Result};
use nbv_curves::scene::{load_scene, save_network_json, write_network_json, NetworkExport};
use nbv_curves::CurveOptions;

const USAGE: &str = "Verwendung: nbv-curves <scene.toml> [ausgabe.json] \
                     [--options optionen.toml] [--write-options optionen.toml]";

fn main() -> Result<()> {
    AppRunner::run()
}

/// Aufrufparameter der Kommandozeile
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    scene: PathBuf,
    output: Option<PathBuf>,
    /// Ersetzt die `[options]` der Szene
    options: Option<PathBuf>,
    /// Schreibt die tatsächlich verwendeten Optionen
    write_options: Option<PathBuf>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut positional = Vec::new();
        let mut options = None;
        let mut write_options = None;

        while let Some(arg) = args.next() {
            let target = if arg == "--options" {
                &mut options
            } else if arg == "--write-options" {
                &mut write_options
            } else {
                positional.push(PathBuf::from(arg));
                continue;
            };
            let Some(value) = args.next() else {
                bail!("{arg:?} erwartet einen Dateipfad\n{USAGE}");
            };
            *target = Some(PathBuf::from(value));
        }

        let mut positional = positional.into_iter();
        let Some(scene) = positional.next() else {
            bail!(USAGE);
        };
        let output = positional.next();
        if positional.next().is_some() {
            bail!(USAGE);
        }

        Ok(Self {
            scene,
            output,
            options,
            write_options,
        })
    }
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("NBV Curves v{} startet...", env!("CARGO_PKG_VERSION"));

        let args = CliArgs::parse(std::env::args_os().skip(1))?;

        let mut scene = load_scene(&args.scene)?;
        if let Some(path) = &args.options {
            scene.options = CurveOptions::load_from_file(path)?;
        }
        if let Some(path) = &args.write_options {
            scene.options.save_to_file(path)?;
        }

        let network = scene.build_network()?;
        log::info!(
            "Kurvennetz gebaut: {} Segmente ({} Bézier)",
            network.len(),
            network.bezier_count()
        );

        let export = NetworkExport::new(scene.nodes.len(), &scene.options, &network);
        match args.output {
            Some(path) => save_network_json(&export, &path)?,
            None => println!("{}", write_network_json(&export)?),
        }

        Ok(())
    }
}
