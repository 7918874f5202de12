//! Asset decoding and classification.

use std::fmt;
use std::fs;
use std::path::Path;

use gltf::mesh::Mode;

use crate::Mesh;
use crate::error::{ExportError, ExportResult};

/// What a glTF/GLB container turned out to hold.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedAsset {
    /// Exactly one mesh whose primitives are all triangles.
    SingleMesh(Mesh),
    /// More than one mesh object.
    Scene { mesh_count: usize },
    /// One mesh drawn only as points.
    PointCloud { point_count: usize },
    /// Anything else: no meshes, line topology, mixed topologies.
    Unknown { reason: String },
}

impl DecodedAsset {
    /// Take the mesh out of a [`DecodedAsset::SingleMesh`].
    ///
    /// Every other variant fails with [`ExportError::InvalidAsset`].
    pub fn into_mesh(self) -> ExportResult<Mesh> {
        match self {
            Self::SingleMesh(mesh) => Ok(mesh),
            other => Err(ExportError::InvalidAsset {
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DecodedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleMesh(mesh) => write!(f, "a mesh with {} vertices", mesh.vertex_count()),
            Self::Scene { mesh_count } => write!(f, "a scene with {mesh_count} meshes"),
            Self::PointCloud { point_count } => {
                write!(f, "a point cloud with {point_count} points")
            }
            Self::Unknown { reason } => write!(f, "unsupported geometry ({reason})"),
        }
    }
}

/// Read a glTF/GLB file and classify its contents.
///
/// External buffer URIs are resolved relative to the file's directory.
pub fn load_asset(path: impl AsRef<Path>) -> ExportResult<DecodedAsset> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_asset(&bytes, path.parent())
}

/// Classify an in-memory glTF/GLB container.
///
/// Buffer data is only imported when the container holds a single
/// triangulated mesh; every other shape is reported without touching it.
///
/// # Arguments
///
/// * `bytes` - GLB binary or glTF JSON
/// * `base_dir` - Directory that relative buffer URIs resolve against
pub fn decode_asset(bytes: &[u8], base_dir: Option<&Path>) -> ExportResult<DecodedAsset> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let document = gltf.document;

    let mesh = match classify(&document) {
        Ok(mesh) => mesh,
        Err(other) => {
            tracing::debug!("Asset is not a single mesh: {other}");
            return Ok(other);
        }
    };

    let buffers = gltf::import_buffers(&document, base_dir, gltf.blob)?;
    let mesh = match read_mesh(&mesh, &buffers) {
        Ok(mesh) => mesh,
        Err(other) => {
            tracing::debug!("Mesh data is unusable: {other}");
            return Ok(other);
        }
    };
    tracing::debug!(
        "Decoded mesh: {} vertices, {} indices",
        mesh.vertices.len(),
        mesh.indices.len()
    );
    Ok(DecodedAsset::SingleMesh(mesh))
}

/// Find the single triangulated mesh, or the verdict explaining why there
/// is none.
fn classify(document: &gltf::Document) -> Result<gltf::Mesh<'_>, DecodedAsset> {
    let mut meshes = document.meshes();
    let mesh_count = meshes.len();
    let Some(mesh) = meshes.next() else {
        return Err(DecodedAsset::Unknown {
            reason: "no meshes".to_string(),
        });
    };
    if mesh_count > 1 {
        return Err(DecodedAsset::Scene { mesh_count });
    }

    let modes: Vec<Mode> = mesh.primitives().map(|primitive| primitive.mode()).collect();
    if modes.is_empty() {
        return Err(DecodedAsset::Unknown {
            reason: "mesh has no primitives".to_string(),
        });
    }
    if modes.iter().all(|&mode| is_triangles(mode)) {
        return Ok(mesh);
    }
    if modes.iter().all(|&mode| mode == Mode::Points) {
        let point_count = mesh
            .primitives()
            .filter_map(|primitive| primitive.get(&gltf::Semantic::Positions))
            .map(|accessor| accessor.count())
            .sum();
        return Err(DecodedAsset::PointCloud { point_count });
    }

    Err(DecodedAsset::Unknown {
        reason: format!("primitive modes {modes:?}"),
    })
}

fn is_triangles(mode: Mode) -> bool {
    matches!(
        mode,
        Mode::Triangles | Mode::TriangleStrip | Mode::TriangleFan
    )
}

/// Concatenate the positions of every primitive, rebasing indices.
///
/// Non-indexed primitives get sequential indices. Primitives with an empty
/// `POSITION` accessor contribute nothing. An index outside its primitive's
/// vertex range makes the whole mesh [`DecodedAsset::Unknown`].
fn read_mesh(mesh: &gltf::Mesh<'_>, buffers: &[gltf::buffer::Data]) -> Result<Mesh, DecodedAsset> {
    let mut out = Mesh::default();

    for primitive in mesh.primitives() {
        // gltf's accessor iterators underflow on zero-length accessors.
        let count = primitive
            .get(&gltf::Semantic::Positions)
            .map_or(0, |accessor| accessor.count());
        if count == 0 {
            tracing::debug!("Primitive {} has no vertices, skipping", primitive.index());
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
        let Some(positions) = reader.read_positions() else {
            continue;
        };

        let base = out.vertices.len();
        out.vertices.extend(positions);
        let local_count = out.vertices.len() - base;

        let out_of_range = |index: usize| DecodedAsset::Unknown {
            reason: format!(
                "primitive {} index {index} out of range for {local_count} vertices",
                primitive.index()
            ),
        };
        let rebase = |index: usize| {
            Some(index)
                .filter(|&index| index < local_count)
                .and_then(|index| u32::try_from(base + index).ok())
                .ok_or_else(|| out_of_range(index))
        };

        match reader.read_indices() {
            Some(indices) => {
                for index in indices.into_u32() {
                    let index = usize::try_from(index).unwrap_or(usize::MAX);
                    out.indices.push(rebase(index)?);
                }
            }
            None => {
                for index in 0..local_count {
                    out.indices.push(rebase(index)?);
                }
            }
        }
    }

    Ok(out)
}
