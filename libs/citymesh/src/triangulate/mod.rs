//! # Triangulation
//!
//! Turns a [`Polygon`] into a triangle [`Mesh`]:
//!
//! 1. Fit a 2D coordinate frame to the outer ring's plane (Newell normal)
//! 2. Project the outer ring and each hole ring into that frame
//! 3. Bridge holes into the outer boundary
//! 4. Ear-clip the combined boundary
//! 5. Lift the triangle indices back onto the original 3D points
//!
//! Output is deterministic for identical input ring order. Degenerate
//! polygons (zero area, collinear, too few usable points) fail with a
//! [`MeshError::Degenerate`] the caller is expected to skip, never with a
//! panic.

mod earcut;
mod holes;

#[cfg(test)]
mod tests;

use glam::{DVec2, DVec3};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::plane::PlaneBasis;
use crate::polygon::Polygon;
use crate::ring::Ring;

/// Facing convention for emitted triangles, relative to the outer ring's
/// plane normal as given (right-hand rule over the input point order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    /// Triangles wind clockwise around the input ring normal.
    ///
    /// Ring order is reversed before triangulation. This is the
    /// convention building datasets rendered with clockwise front faces
    /// rely on, and the default.
    #[default]
    Clockwise,

    /// Triangles wind counter-clockwise around the input ring normal
    /// (right-handed convention); ring order is kept as given.
    CounterClockwise,
}

/// Parameters controlling triangulation.
#[derive(Debug, Clone)]
pub struct TriangulateParams {
    /// Triangle facing convention; see [`Winding`]
    pub winding: Winding,

    /// Collapse consecutive ring points closer than this tolerance before
    /// triangulating.
    ///
    /// Off by default: removal changes which vertices downstream texture
    /// correspondences see, so callers opt in explicitly.
    /// [`config::constants::VERTEX_MERGE_EPSILON`] is a reasonable value.
    pub dedup_tolerance: Option<f64>,
}

impl Default for TriangulateParams {
    fn default() -> Self {
        Self {
            winding: Winding::Clockwise,
            dedup_tolerance: None,
        }
    }
}

/// Triangulates a polygon into a mesh.
///
/// The mesh's vertices are the polygon's ring points in triangulation
/// order (reversed under [`Winding::Clockwise`]); triangle indices refer
/// to those vertices with consistent winding.
///
/// # Errors
///
/// - [`MeshError::InvalidRing`] when any ring fails validation
/// - [`MeshError::Degenerate`] when no triangle can be produced
pub fn triangulate(polygon: &Polygon, params: &TriangulateParams) -> Result<Mesh, MeshError> {
    polygon.validate()?;

    let location = polygon.source();

    let mut outer = ring_points(&polygon.outer, params.dedup_tolerance);
    let mut holes: Vec<Vec<DVec3>> = polygon
        .holes
        .iter()
        .map(|hole| ring_points(hole, params.dedup_tolerance))
        .collect();

    if params.winding == Winding::Clockwise {
        outer.reverse();
        for hole in &mut holes {
            hole.reverse();
        }
    }

    if outer.len() < 3 {
        return Err(MeshError::degenerate(
            "outer ring has fewer than 3 distinct points",
            location,
        ));
    }

    let basis = PlaneBasis::fit(&outer)
        .ok_or_else(|| MeshError::degenerate("outer ring encloses no area", location))?;

    // The outer ring is counter-clockwise in its own Newell frame by
    // construction; holes must wind the opposite way.
    let mut points3 = outer;
    let mut points2: Vec<DVec2> = points3.iter().map(|p| basis.project(*p)).collect();
    let mut hole_starts = Vec::with_capacity(holes.len());
    for mut hole in holes {
        if hole.len() < 3 {
            continue;
        }
        let mut projected: Vec<DVec2> = hole.iter().map(|p| basis.project(*p)).collect();
        if earcut::signed_area(&projected) > 0.0 {
            hole.reverse();
            projected.reverse();
        }
        hole_starts.push(points3.len());
        points3.extend(hole);
        points2.extend(projected);
    }

    let triangles = earcut::earcut(&points2, &hole_starts);
    if triangles.is_empty() {
        return Err(MeshError::degenerate(
            "triangulation produced no triangles",
            location,
        ));
    }

    let mut mesh = Mesh::with_capacity(points3.len(), triangles.len());
    for point in &points3 {
        mesh.add_vertex(*point);
    }
    for tri in triangles {
        mesh.add_triangle(tri[0] as u32, tri[1] as u32, tri[2] as u32);
    }
    Ok(mesh)
}

/// Ring points without the closing repeat, optionally deduplicated.
fn ring_points(ring: &Ring, tolerance: Option<f64>) -> Vec<DVec3> {
    let points = ring.interior();
    let eps2 = match tolerance {
        Some(eps) => eps * eps,
        None => return points.to_vec(),
    };

    let mut deduped: Vec<DVec3> = Vec::with_capacity(points.len());
    for &p in points {
        match deduped.last() {
            Some(q) if q.distance_squared(p) <= eps2 => {}
            _ => deduped.push(p),
        }
    }
    // The sequence is circular: the tail may still collide with the head
    while deduped.len() > 1 {
        let first = deduped[0];
        let last = deduped[deduped.len() - 1];
        if first.distance_squared(last) <= eps2 {
            deduped.pop();
        } else {
            break;
        }
    }
    deduped
}
