//! # UV Projection
//!
//! Assigns texture coordinates to triangulated meshes from per-polygon
//! correspondence lists. Building datasets give texture coordinates in the
//! original ring point order, but triangulation reorders and reverses
//! vertices, so each mesh vertex takes the UV of its nearest original
//! point instead of an index-based lookup.
//!
//! This nearest-correspondence rule is an approximation, not barycentric
//! interpolation. Facade textures are sampled at ring corners, which makes
//! the nearest corner the right answer for every vertex the triangulator
//! emits.

use config::constants::FALLBACK_UV;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ring::Ring;

/// Texture coordinates for one polygon, keyed by polygon id.
///
/// `coords` corresponds 1:1 to the polygon's original (pre-triangulation)
/// outer ring point order, closing repeat included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureTarget {
    /// The polygon this target applies to
    pub id: String,
    /// Texture coordinates in original ring point order
    pub coords: Vec<DVec2>,
}

impl TextureTarget {
    /// Creates a target for the given polygon id.
    pub fn new(id: impl Into<String>, coords: Vec<DVec2>) -> Self {
        Self {
            id: id.into(),
            coords,
        }
    }
}

/// Finds the texture target for a polygon id.
///
/// The first matching target wins, mirroring how texture files list their
/// targets.
pub fn find_target<'a>(targets: &'a [TextureTarget], id: &str) -> Result<&'a TextureTarget, MeshError> {
    targets
        .iter()
        .find(|target| target.id == id)
        .ok_or_else(|| MeshError::missing_correspondence(id))
}

/// Ordered (3D point, UV) correspondences for one polygon.
#[derive(Debug, Clone, Default)]
pub struct UvMapping {
    entries: Vec<(DVec3, DVec2)>,
}

impl UvMapping {
    /// Creates a mapping from explicit correspondences.
    pub fn new(entries: Vec<(DVec3, DVec2)>) -> Self {
        Self { entries }
    }

    /// Zips a ring's original point order with a texture target's
    /// coordinate list.
    ///
    /// Extra entries on either side are ignored, tolerating targets that
    /// omit the closing repeat.
    pub fn from_target(ring: &Ring, target: &TextureTarget) -> Self {
        let entries = ring
            .points()
            .iter()
            .zip(target.coords.iter())
            .map(|(point, uv)| (*point, *uv))
            .collect();
        Self { entries }
    }

    /// Returns true if the mapping has no correspondences.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of correspondences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The UV of the correspondence whose source point is closest to
    /// `point` by 3D distance.
    ///
    /// Ties break to the earliest entry; an exact match therefore returns
    /// that correspondence's UV exactly. Returns `None` only when the
    /// mapping is empty.
    pub fn closest_uv(&self, point: DVec3) -> Option<DVec2> {
        let mut best: Option<(f64, DVec2)> = None;
        for (source, uv) in &self.entries {
            let distance = source.distance_squared(point);
            match best {
                Some((best_distance, _)) if distance >= best_distance => {}
                _ => best = Some((distance, *uv)),
            }
        }
        best.map(|(_, uv)| uv)
    }
}

/// Populates a mesh's per-vertex UVs from a correspondence mapping.
///
/// Each vertex takes its nearest correspondence's UV, with
/// [`config::constants::FALLBACK_UV`] for vertices no correspondence
/// covers. The finished UV array is then reversed to line up with the
/// reversed vertex order the default clockwise winding produces.
pub fn assign_uvs(mesh: &mut Mesh, mapping: &UvMapping) {
    let fallback = DVec2::new(FALLBACK_UV[0], FALLBACK_UV[1]);
    let mut uvs: Vec<DVec2> = mesh
        .vertices()
        .iter()
        .map(|vertex| mapping.closest_uv(*vertex).unwrap_or(fallback))
        .collect();
    uvs.reverse();
    mesh.set_uvs(uvs);
}
