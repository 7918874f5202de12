//! Stride sampling.

use std::num::NonZeroUsize;

use crate::{PointList, Vertex};

/// Keep every `sample_rate`-th vertex, starting at index 0.
///
/// The result holds `ceil(vertices.len() / sample_rate)` points in their
/// original order. A rate of 1 copies the whole list.
#[must_use]
pub fn sample_points(vertices: &[Vertex], sample_rate: NonZeroUsize) -> PointList {
    let points: Vec<Vertex> = vertices.iter().step_by(sample_rate.get()).copied().collect();
    tracing::debug!(
        "Sampled {} of {} vertices (rate {sample_rate})",
        points.len(),
        vertices.len()
    );
    PointList(points)
}
