//! # Mesh Combining
//!
//! Combines per-polygon meshes into one building-level mesh by vertex and
//! index concatenation, with a per-submesh local-to-world transform
//! applied first. Normals are recomputed afterward; bounds come from
//! [`Mesh::bounding_box`] on demand.
//!
//! Recentering moves all vertices so the building sits at its own origin
//! and returns the offset, so the caller can move the parent transform by
//! the same amount and keep world position stable.

use glam::{DMat4, DVec3};

use crate::mesh::Mesh;

/// A mesh plus the transform that places it in the building's space.
#[derive(Debug, Clone)]
pub struct MeshInstance {
    /// The per-polygon mesh
    pub mesh: Mesh,
    /// Local-to-world transform applied before concatenation
    pub transform: DMat4,
}

impl MeshInstance {
    /// Wraps a mesh with the identity transform.
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            transform: DMat4::IDENTITY,
        }
    }

    /// Wraps a mesh with an explicit local-to-world transform.
    pub fn with_transform(mesh: Mesh, transform: DMat4) -> Self {
        Self { mesh, transform }
    }
}

/// Which axes recentering moves the mesh along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecenterMode {
    /// Translate the bounding-box center to the origin.
    #[default]
    Center,
    /// Center on x/z only, leaving heights untouched.
    HorizontalCenter,
    /// Center on x/z and drop the lowest vertex to y = 0, so the
    /// building stands on the ground plane.
    Grounded,
}

/// Concatenates mesh instances into one mesh.
///
/// Each instance's transform is applied to a copy of its mesh before
/// merging, and vertex normals are recomputed over the combined result.
pub fn combine(instances: &[MeshInstance]) -> Mesh {
    let vertex_total: usize = instances.iter().map(|i| i.mesh.vertex_count()).sum();
    let triangle_total: usize = instances.iter().map(|i| i.mesh.triangle_count()).sum();

    let mut combined = Mesh::with_capacity(vertex_total, triangle_total);
    for instance in instances {
        if instance.transform == DMat4::IDENTITY {
            combined.merge(&instance.mesh);
        } else {
            let mut part = instance.mesh.clone();
            part.transform(&instance.transform);
            combined.merge(&part);
        }
    }

    if !combined.is_empty() {
        combined.compute_normals();
    }
    combined
}

/// Translates the mesh toward its own origin and returns the offset.
///
/// Repositioning the caller's parent transform by the returned offset
/// keeps the combined world position unchanged. Normals are translation
/// invariant and left as they are.
pub fn recenter(mesh: &mut Mesh, mode: RecenterMode) -> DVec3 {
    if mesh.is_empty() {
        return DVec3::ZERO;
    }

    let (min, max) = mesh.bounding_box();
    let center = (min + max) * 0.5;
    let offset = match mode {
        RecenterMode::Center => center,
        RecenterMode::HorizontalCenter => DVec3::new(center.x, 0.0, center.z),
        RecenterMode::Grounded => DVec3::new(center.x, min.y, center.z),
    };

    mesh.translate(-offset);
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn triangle_at(origin: DVec3) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(origin);
        mesh.add_vertex(origin + DVec3::X);
        mesh.add_vertex(origin + DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_combine_concatenates() {
        let instances = vec![
            MeshInstance::new(triangle_at(DVec3::ZERO)),
            MeshInstance::new(triangle_at(DVec3::new(10.0, 0.0, 0.0))),
        ];
        let combined = combine(&instances);
        assert_eq!(combined.vertex_count(), 6);
        assert_eq!(combined.triangle_count(), 2);
        // Indices of the second part are re-based
        assert_eq!(combined.triangle(1), [3, 4, 5]);
        // Normals are recomputed over the whole building
        assert_eq!(combined.normals().map(|n| n.len()), Some(6));
    }

    #[test]
    fn test_combine_applies_transform() {
        let transform = DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0));
        let instances = vec![MeshInstance::with_transform(triangle_at(DVec3::ZERO), transform)];
        let combined = combine(&instances);
        assert_relative_eq!(combined.vertex(0).z, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_combine_empty() {
        let combined = combine(&[]);
        assert!(combined.is_empty());
        assert!(combined.normals().is_none());
    }

    #[test]
    fn test_recenter_center() {
        let mut mesh = triangle_at(DVec3::new(10.0, 20.0, 30.0));
        let offset = recenter(&mut mesh, RecenterMode::Center);
        let (min, max) = mesh.bounding_box();
        let center = (min + max) * 0.5;
        assert_relative_eq!(center.length(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(offset.x, 10.5, epsilon = 1e-12);
    }

    #[test]
    fn test_recenter_keeps_world_position() {
        let original = triangle_at(DVec3::new(7.0, 3.0, -2.0));
        let mut mesh = original.clone();
        let offset = recenter(&mut mesh, RecenterMode::Center);
        for (before, after) in original.vertices().iter().zip(mesh.vertices()) {
            assert_relative_eq!((*after + offset).x, before.x, epsilon = 1e-12);
            assert_relative_eq!((*after + offset).y, before.y, epsilon = 1e-12);
            assert_relative_eq!((*after + offset).z, before.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_recenter_horizontal_keeps_heights() {
        let mut mesh = triangle_at(DVec3::new(10.0, 20.0, 30.0));
        recenter(&mut mesh, RecenterMode::HorizontalCenter);
        // y stays at its original values
        assert_relative_eq!(mesh.vertex(0).y, 20.0, epsilon = 1e-12);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x + max.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_recenter_grounded_drops_to_floor() {
        let mut mesh = triangle_at(DVec3::new(10.0, 20.0, 30.0));
        recenter(&mut mesh, RecenterMode::Grounded);
        let (min, _) = mesh.bounding_box();
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_recenter_empty_mesh() {
        let mut mesh = Mesh::new();
        assert_eq!(recenter(&mut mesh, RecenterMode::Center), DVec3::ZERO);
    }
}
