//! In-memory GLB construction for tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub const TRIANGLES: u32 = 4;
pub const TRIANGLE_STRIP: u32 = 5;
pub const POINTS: u32 = 0;

const GLB_MAGIC: &[u8; 4] = b"glTF";
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

const FLOAT: u32 = 5126;
const UNSIGNED_INT: u32 = 5125;

/// One glTF primitive to embed.
pub struct Primitive {
    pub mode: u32,
    pub positions: Vec<[f32; 3]>,
    pub indices: Option<Vec<u32>>,
}

impl Primitive {
    pub fn triangles(positions: Vec<[f32; 3]>) -> Self {
        Self {
            mode: TRIANGLES,
            positions,
            indices: None,
        }
    }

    pub fn points(positions: Vec<[f32; 3]>) -> Self {
        Self {
            mode: POINTS,
            positions,
            indices: None,
        }
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }
}

/// Vertices whose coordinates encode their index.
#[allow(clippy::cast_precision_loss)]
pub fn numbered_vertices(count: usize) -> Vec<[f32; 3]> {
    (0..count)
        .map(|i| [i as f32 * 0.5, i as f32 + 0.25, -(i as f32)])
        .collect()
}

/// A GLB holding one mesh with a single non-indexed triangle primitive.
pub fn single_mesh_glb(positions: Vec<[f32; 3]>) -> Vec<u8> {
    glb(vec![vec![Primitive::triangles(positions)]])
}

/// Build a GLB container with one node per mesh in a single scene.
#[allow(clippy::cast_possible_truncation)]
pub fn glb(meshes: Vec<Vec<Primitive>>) -> Vec<u8> {
    let mut bin: Vec<u8> = Vec::new();
    let mut buffer_views = Vec::new();
    let mut accessors = Vec::new();
    let mut json_meshes = Vec::new();

    for primitives in meshes {
        let mut json_primitives = Vec::new();
        for primitive in primitives {
            let (min, max) = min_max(&primitive.positions);
            let offset = bin.len();
            for position in &primitive.positions {
                for component in position {
                    bin.extend_from_slice(&component.to_le_bytes());
                }
            }
            // An empty accessor still needs a non-empty view behind it.
            if primitive.positions.is_empty() {
                bin.extend_from_slice(&[0; 12]);
            }
            buffer_views.push(serde_json::json!({
                "buffer": 0,
                "byteOffset": offset,
                "byteLength": bin.len() - offset,
            }));
            accessors.push(serde_json::json!({
                "bufferView": buffer_views.len() - 1,
                "componentType": FLOAT,
                "count": primitive.positions.len(),
                "type": "VEC3",
                "min": min,
                "max": max,
            }));
            let mut json_primitive = serde_json::json!({
                "attributes": { "POSITION": accessors.len() - 1 },
                "mode": primitive.mode,
            });

            if let Some(indices) = &primitive.indices {
                let offset = bin.len();
                for index in indices {
                    bin.extend_from_slice(&index.to_le_bytes());
                }
                buffer_views.push(serde_json::json!({
                    "buffer": 0,
                    "byteOffset": offset,
                    "byteLength": bin.len() - offset,
                }));
                accessors.push(serde_json::json!({
                    "bufferView": buffer_views.len() - 1,
                    "componentType": UNSIGNED_INT,
                    "count": indices.len(),
                    "type": "SCALAR",
                }));
                json_primitive["indices"] = serde_json::json!(accessors.len() - 1);
            }

            json_primitives.push(json_primitive);
        }
        json_meshes.push(serde_json::json!({ "primitives": json_primitives }));
    }

    let nodes: Vec<serde_json::Value> = (0..json_meshes.len())
        .map(|mesh| serde_json::json!({ "mesh": mesh }))
        .collect();
    let node_indices: Vec<usize> = (0..nodes.len()).collect();

    let document = serde_json::json!({
        "asset": { "version": "2.0", "generator": "meshpoints tests" },
        "scene": 0,
        "scenes": [{ "nodes": node_indices }],
        "nodes": nodes,
        "meshes": json_meshes,
        "accessors": accessors,
        "bufferViews": buffer_views,
        "buffers": [{ "byteLength": bin.len() }],
    });

    let mut json = serde_json::to_vec(&document).unwrap();
    pad(&mut json, b' ');
    pad(&mut bin, 0);

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(GLB_MAGIC);
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    out.extend_from_slice(&bin);
    out
}

fn min_max(positions: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let Some(&first) = positions.first() else {
        return ([0.0; 3], [0.0; 3]);
    };
    let mut min = first;
    let mut max = first;
    for position in positions {
        for axis in 0..3 {
            min[axis] = min[axis].min(position[axis]);
            max[axis] = max[axis].max(position[axis]);
        }
    }
    (min, max)
}

fn pad(bytes: &mut Vec<u8>, fill: u8) {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
}

/// A fresh, empty directory unique to this process and test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("meshpoints-it-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}
