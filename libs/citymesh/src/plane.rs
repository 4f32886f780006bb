//! # Plane Fitting
//!
//! Fits a 2D coordinate frame to a near-planar ring of 3D points so the
//! ring can be triangulated in two dimensions and lifted back to 3D.
//!
//! The normal comes from Newell's method over all ring points rather than
//! the first three, which keeps the fit stable when leading points are
//! collinear or the ring is slightly non-planar.

use config::constants::DEGENERATE_NORMAL_EPSILON;
use glam::{DVec2, DVec3};

/// An orthonormal projection frame for a near-planar ring.
///
/// `u` and `v` span the plane and `u × v = normal`, so a ring that winds
/// counter-clockwise around its own Newell normal projects to a
/// counter-clockwise 2D polygon with positive signed area.
#[derive(Debug, Clone, Copy)]
pub struct PlaneBasis {
    origin: DVec3,
    u: DVec3,
    v: DVec3,
    normal: DVec3,
}

impl PlaneBasis {
    /// Fits a frame to a ring of points (closing repeat not required).
    ///
    /// Returns `None` when the points enclose effectively zero area
    /// (fewer than 3 points, all collinear, or coincident), in which case
    /// no 2D parameterization exists and the polygon is degenerate.
    pub fn fit(points: &[DVec3]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        let mut normal = DVec3::ZERO;
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }

        if normal.length_squared() < DEGENERATE_NORMAL_EPSILON {
            return None;
        }
        let normal = normal.normalize();

        // Build u from the world axis least aligned with the normal
        let ax = normal.x.abs();
        let ay = normal.y.abs();
        let az = normal.z.abs();
        let reference = if ax <= ay && ax <= az {
            DVec3::X
        } else if ay <= az {
            DVec3::Y
        } else {
            DVec3::Z
        };

        let u = reference.cross(normal).normalize();
        let v = normal.cross(u);

        Some(Self {
            origin: points[0],
            u,
            v,
            normal,
        })
    }

    /// Projects a 3D point into the 2D frame.
    pub fn project(&self, point: DVec3) -> DVec2 {
        let d = point - self.origin;
        DVec2::new(d.dot(self.u), d.dot(self.v))
    }

    /// Lifts a 2D frame coordinate back onto the plane.
    pub fn lift(&self, point: DVec2) -> DVec3 {
        self.origin + self.u * point.x + self.v * point.y
    }

    /// The unit plane normal (right-hand rule over the fitted ring order).
    pub fn normal(&self) -> DVec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_xy_square() {
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let basis = PlaneBasis::fit(&points).unwrap();
        // Counter-clockwise in XY gives a +Z normal
        assert_relative_eq!(basis.normal().z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_reversed_square_flips_normal() {
        let points = [
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
        ];
        let basis = PlaneBasis::fit(&points).unwrap();
        assert_relative_eq!(basis.normal().z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_vertical_wall() {
        // Facade spanning x with height y; its normal is horizontal
        let points = [
            DVec3::new(0.0, 0.0, 2.0),
            DVec3::new(4.0, 0.0, 2.0),
            DVec3::new(4.0, 10.0, 2.0),
            DVec3::new(0.0, 10.0, 2.0),
        ];
        let basis = PlaneBasis::fit(&points).unwrap();
        assert_relative_eq!(basis.normal().z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(basis.normal().y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_points_have_no_basis() {
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ];
        assert!(PlaneBasis::fit(&points).is_none());
    }

    #[test]
    fn test_too_few_points_have_no_basis() {
        let points = [DVec3::ZERO, DVec3::X];
        assert!(PlaneBasis::fit(&points).is_none());
    }

    #[test]
    fn test_project_lift_round_trip() {
        let points = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(4.0, 2.0, 3.5),
            DVec3::new(4.0, 6.0, 3.5),
            DVec3::new(1.0, 6.0, 3.0),
        ];
        let basis = PlaneBasis::fit(&points).unwrap();
        for p in points {
            // The four points form a planar parallelogram, so the round
            // trip reproduces them up to floating-point noise
            let lifted = basis.lift(basis.project(p));
            assert!(lifted.distance(p) < 1e-9);
        }
    }

    #[test]
    fn test_projection_preserves_in_plane_distances() {
        let points = [
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::new(3.0, 0.0, 5.0),
            DVec3::new(3.0, 4.0, 5.0),
            DVec3::new(0.0, 4.0, 5.0),
        ];
        let basis = PlaneBasis::fit(&points).unwrap();
        let a = basis.project(points[0]);
        let b = basis.project(points[1]);
        assert_relative_eq!(a.distance(b), 3.0, epsilon = 1e-12);
    }
}
