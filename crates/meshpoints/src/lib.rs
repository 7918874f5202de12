//! Extract vertex positions from glTF/GLB meshes as JSON point lists.
//!
//! Parsing of the container format is left to the `gltf` crate. This crate
//! classifies what was decoded, keeps every Nth vertex of a single mesh and
//! writes the result as a pretty-printed JSON array of `[x, y, z]` arrays.
//!
//! # Design principles
//!
//! - **Synchronous**: One linear pass, no async, no threading primitives
//! - **Explicit configuration**: Paths and stride travel in [`ExportConfig`]
//! - **No partial output**: Nothing is written unless the asset is a single mesh
//!
//! # Key functions
//!
//! - [`load_asset`]: Read and classify a glTF/GLB file
//! - [`decode_asset`]: Classify an in-memory glTF/GLB container
//! - [`sample_points`]: Keep every Nth vertex
//! - [`write_points`]: Atomically write a point list as JSON
//! - [`export_points`]: The whole pipeline, driven by an [`ExportConfig`]

mod error;

pub mod asset;
pub mod export;
pub mod sample;
pub mod write;

pub use asset::{DecodedAsset, decode_asset, load_asset};
pub use error::{ExportError, ExportResult};
pub use export::{ExportConfig, ExportSummary, export_points};
pub use sample::sample_points;
pub use write::write_points;

use serde::{Deserialize, Serialize};

/// A vertex position as stored in a glTF `POSITION` accessor.
pub type Vertex = [f32; 3];

/// A single triangulated mesh.
///
/// Vertices from every primitive of the source mesh are concatenated in
/// primitive order; `indices` are rebased onto that concatenated array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    /// Triangle index data. Not consumed by the export.
    pub indices: Vec<u32>,
}

impl Mesh {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Ordered list of sampled points, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointList(pub Vec<Vertex>);

impl PointList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    /// Axis-aligned bounds of the points, or `None` for an empty list.
    #[must_use]
    pub fn bounds(&self) -> Option<(glam::Vec3, glam::Vec3)> {
        let mut points = self.0.iter().copied().map(glam::Vec3::from);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}
