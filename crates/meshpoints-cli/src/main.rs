//! Export the vertices of a GLB mesh as a JSON point list.
//!
//! Run: `cargo run -- BRAIN.glb brain_points.json --sample-rate 3`

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use meshpoints::{ExportConfig, export_points};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "meshpoints", version, about = "Export GLB mesh vertices as a JSON point list")]
struct Cli {
    /// GLB file holding a single mesh
    #[arg(default_value = "BRAIN.glb")]
    input: PathBuf,
    /// JSON file to write (replaced if it exists)
    #[arg(default_value = "brain_points.json")]
    output: PathBuf,
    /// Keep every Nth vertex
    #[arg(short, long, default_value = "1")]
    sample_rate: NonZeroUsize,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    fn export_config(&self) -> ExportConfig {
        ExportConfig::new(&self.input, &self.output).with_sample_rate(self.sample_rate)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the confirmation line.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = cli.export_config();
    let summary = export_points(&config).with_context(|| {
        format!(
            "failed to export points from {} to {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    println!("{summary}");
    Ok(())
}
