//! The export pipeline: load, validate, sample, write.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::asset::load_asset;
use crate::error::ExportResult;
use crate::sample::sample_points;
use crate::write::write_points;

/// Settings for a single export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// GLB (or glTF) file to read.
    pub input_path: PathBuf,
    /// JSON file to create or replace.
    pub output_path: PathBuf,
    /// Keep every Nth vertex. 1 keeps all of them.
    pub sample_rate: NonZeroUsize,
}

impl ExportConfig {
    /// Export every vertex of `input_path` into `output_path`.
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            sample_rate: NonZeroUsize::MIN,
        }
    }

    #[must_use]
    pub fn with_sample_rate(mut self, sample_rate: NonZeroUsize) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Points written to the output file.
    pub point_count: usize,
    /// Vertices in the source mesh.
    pub vertex_count: usize,
    pub output_path: PathBuf,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Saved {} points to {}",
            self.point_count,
            self.output_path.display()
        )
    }
}

/// Export the sampled vertices of a single-mesh asset as JSON.
///
/// The asset is fully decoded and validated before the output path is
/// touched; an [`ExportError::InvalidAsset`](crate::ExportError::InvalidAsset)
/// leaves no file behind.
pub fn export_points(config: &ExportConfig) -> ExportResult<ExportSummary> {
    let mesh = load_asset(&config.input_path)?.into_mesh()?;
    let points = sample_points(&mesh.vertices, config.sample_rate);

    if let Some((min, max)) = points.bounds() {
        tracing::debug!("Point bounds: min={min}, max={max}");
    }

    write_points(&config.output_path, &points)?;

    let summary = ExportSummary {
        point_count: points.len(),
        vertex_count: mesh.vertex_count(),
        output_path: config.output_path.clone(),
    };
    tracing::info!(
        "Exported {} of {} vertices from {}",
        summary.point_count,
        summary.vertex_count,
        config.input_path.display()
    );
    Ok(summary)
}
