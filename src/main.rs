use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scenedump::config::ConfigOverrides;
use scenedump::{load_scene, ExportConfig, Exporter, FaultPolicy, OutputFormat};

/// Print the meshes and empties of a scene snapshot.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scene description (.json) or glTF file (.gltf, .glb)
    scene: PathBuf,

    /// TOML file with export options
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// How to handle empties without a group or booleans without a target
    #[arg(long, value_enum)]
    on_fault: Option<FaultPolicy>,

    /// Material name for meshes that have none
    #[arg(long)]
    default_material: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn export_config(&self) -> Result<ExportConfig> {
        let overrides = ConfigOverrides {
            format: self.format,
            on_fault: self.on_fault,
            default_material: self.default_material.clone(),
        };

        ExportConfig::resolve(self.config.as_deref(), overrides).with_context(|| match &self.config {
            Some(path) => format!("Failed to load config {}", path.display()),
            None => "Invalid export options".to_string(),
        })
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let config = args.export_config()?;

    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = Exporter::new(config)
        .export(&scene, &mut out)
        .context("Export failed, output is incomplete")?;

    log::info!(
        "Exported {} meshes and {} empties ({} unsupported, {} skipped)",
        summary.meshes,
        summary.empties,
        summary.unsupported,
        summary.faulty
    );

    Ok(())
}
