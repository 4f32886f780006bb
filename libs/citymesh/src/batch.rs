//! # Batch Triangulation
//!
//! Per-polygon triangulation is pure and independent, which makes batches
//! embarrassingly parallel. This module fans a polygon collection out over
//! rayon's thread pool and collects results in input order, so downstream
//! UV-correspondence lookups stay deterministic.
//!
//! Failures never abort the batch: an invalid or degenerate polygon is
//! recorded with its diagnostic and processing continues with the rest.

use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::polygon::Polygon;
use crate::triangulate::{triangulate, TriangulateParams};

/// A polygon the batch skipped, with why and where.
#[derive(Debug)]
pub struct SkippedPolygon {
    /// Index of the polygon in the input collection
    pub index: usize,
    /// The polygon's id, possibly empty
    pub id: String,
    /// What went wrong
    pub error: MeshError,
}

/// Outcome of a batch triangulation.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Meshes of the polygons that triangulated, in input order
    pub meshes: Vec<Mesh>,
    /// Polygons that were skipped, in input order
    pub skipped: Vec<SkippedPolygon>,
}

impl BatchResult {
    /// Returns true if every polygon produced a mesh.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Triangulates every polygon in parallel.
///
/// Output order matches input order regardless of scheduling; skipped
/// polygons carry their index, id, and diagnostic.
pub fn triangulate_batch(polygons: &[Polygon], params: &TriangulateParams) -> BatchResult {
    let results: Vec<Result<Mesh, MeshError>> = polygons
        .par_iter()
        .map(|polygon| triangulate(polygon, params))
        .collect();

    let mut meshes = Vec::with_capacity(polygons.len());
    let mut skipped = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(mesh) => meshes.push(mesh),
            Err(error) => skipped.push(SkippedPolygon {
                index,
                id: polygons[index].id.clone(),
                error,
            }),
        }
    }

    BatchResult { meshes, skipped }
}
