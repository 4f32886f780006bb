//! # Triangulation Integration Tests
//!
//! Pipeline tests for the documented geometric properties: triangle
//! counts, area preservation, winding, degeneracy, and determinism.

use super::*;
use approx::assert_relative_eq;
use glam::DVec3;

fn closed(points: &[(f64, f64, f64)]) -> Ring {
    let mut list: Vec<DVec3> = points.iter().map(|&(x, y, z)| DVec3::new(x, y, z)).collect();
    if let Some(&first) = list.first() {
        list.push(first);
    }
    Ring::new(list)
}

fn unit_square() -> Polygon {
    Polygon::new(closed(&[
        (0.0, 0.0, 0.0),
        (4.0, 0.0, 0.0),
        (4.0, 4.0, 0.0),
        (0.0, 4.0, 0.0),
    ]))
}

fn square_with_hole() -> Polygon {
    Polygon::with_holes(
        closed(&[
            (0.0, 0.0, 0.0),
            (4.0, 0.0, 0.0),
            (4.0, 4.0, 0.0),
            (0.0, 4.0, 0.0),
        ]),
        vec![closed(&[
            (1.0, 1.0, 0.0),
            (3.0, 1.0, 0.0),
            (3.0, 3.0, 0.0),
            (1.0, 3.0, 0.0),
        ])],
    )
}

/// First-triangle geometric normal, for winding checks.
fn first_triangle_normal(mesh: &Mesh) -> DVec3 {
    let tri = mesh.triangle(0);
    let v0 = mesh.vertex(tri[0]);
    let v1 = mesh.vertex(tri[1]);
    let v2 = mesh.vertex(tri[2]);
    (v1 - v0).cross(v2 - v0).normalize()
}

#[test]
fn test_square_yields_two_triangles() {
    let mesh = triangulate(&unit_square(), &TriangulateParams::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.vertex_count(), 4);
    assert_relative_eq!(mesh.area(), 16.0, epsilon = 1e-9);
}

#[test]
fn test_square_with_hole_area() {
    let mesh = triangulate(&square_with_hole(), &TriangulateParams::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 8);
    assert_relative_eq!(mesh.area(), 12.0, epsilon = 1e-9);
}

#[test]
fn test_triangle_ring_yields_one_triangle() {
    let polygon = Polygon::new(closed(&[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (0.0, 2.0, 0.0)]));
    let mesh = triangulate(&polygon, &TriangulateParams::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_relative_eq!(mesh.area(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_collinear_ring_is_degenerate() {
    let polygon = Polygon::new(closed(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0)]));
    assert!(matches!(
        triangulate(&polygon, &TriangulateParams::default()),
        Err(MeshError::Degenerate { .. })
    ));
}

#[test]
fn test_unclosed_ring_is_rejected() {
    let polygon = Polygon::new(Ring::new(vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 0.0),
        DVec3::new(4.0, 4.0, 0.0),
        DVec3::new(0.0, 4.0, 0.0),
    ]));
    assert!(matches!(
        triangulate(&polygon, &TriangulateParams::default()),
        Err(MeshError::InvalidRing { .. })
    ));
}

#[test]
fn test_default_winding_is_clockwise_around_ring_normal() {
    // The input ring is counter-clockwise in XY, so its normal is +Z;
    // clockwise output triangles face -Z
    let mesh = triangulate(&unit_square(), &TriangulateParams::default()).unwrap();
    for i in 0..mesh.triangle_count() {
        let tri = mesh.triangle(i);
        let n = (mesh.vertex(tri[1]) - mesh.vertex(tri[0]))
            .cross(mesh.vertex(tri[2]) - mesh.vertex(tri[0]));
        assert!(n.z < 0.0);
    }
}

#[test]
fn test_counter_clockwise_winding_keeps_ring_normal() {
    let params = TriangulateParams {
        winding: Winding::CounterClockwise,
        ..Default::default()
    };
    let mesh = triangulate(&unit_square(), &params).unwrap();
    assert!(first_triangle_normal(&mesh).z > 0.0);
}

#[test]
fn test_winding_parameter_flips_orientation() {
    let cw = triangulate(&unit_square(), &TriangulateParams::default()).unwrap();
    let ccw = triangulate(
        &unit_square(),
        &TriangulateParams {
            winding: Winding::CounterClockwise,
            ..Default::default()
        },
    )
    .unwrap();
    let dot = first_triangle_normal(&cw).dot(first_triangle_normal(&ccw));
    assert!(dot < 0.0);
    // Same geometry either way
    assert_relative_eq!(cw.area(), ccw.area(), epsilon = 1e-9);
}

#[test]
fn test_clockwise_winding_reverses_vertex_order() {
    let mesh = triangulate(&unit_square(), &TriangulateParams::default()).unwrap();
    // Reversed ring order: the last interior point comes out first
    assert_eq!(mesh.vertex(0), DVec3::new(0.0, 4.0, 0.0));
    assert_eq!(mesh.vertex(3), DVec3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_concave_polygon_area() {
    // L-shape: 4x4 square minus its upper-right 2x2 quadrant
    let polygon = Polygon::new(closed(&[
        (0.0, 0.0, 0.0),
        (4.0, 0.0, 0.0),
        (4.0, 2.0, 0.0),
        (2.0, 2.0, 0.0),
        (2.0, 4.0, 0.0),
        (0.0, 4.0, 0.0),
    ]));
    let mesh = triangulate(&polygon, &TriangulateParams::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 4);
    assert_relative_eq!(mesh.area(), 12.0, epsilon = 1e-9);
}

#[test]
fn test_sloped_roof_polygon() {
    // A tilted quad, as roof surfaces are; area is the 3D surface area
    let polygon = Polygon::new(closed(&[
        (0.0, 0.0, 0.0),
        (4.0, 0.0, 0.0),
        (4.0, 3.0, 4.0),
        (0.0, 3.0, 4.0),
    ]));
    let mesh = triangulate(&polygon, &TriangulateParams::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    // Slant height is 5 (3-4-5 triangle), so the area is 4 * 5
    assert_relative_eq!(mesh.area(), 20.0, epsilon = 1e-9);
}

#[test]
fn test_retriangulation_is_idempotent() {
    let polygon = square_with_hole();
    let params = TriangulateParams::default();
    let first = triangulate(&polygon, &params).unwrap();
    let second = triangulate(&polygon, &params).unwrap();
    assert_eq!(first.vertex_count(), second.vertex_count());
    assert_relative_eq!(first.area(), second.area(), epsilon = 1e-12);
    // Full determinism: identical input order gives identical output
    assert_eq!(first.triangles(), second.triangles());
}

#[test]
fn test_dedup_tolerance_collapses_repeats() {
    let polygon = Polygon::new(Ring::new(vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 0.0),
        DVec3::new(4.0, 4.0, 0.0),
        DVec3::new(0.0, 4.0, 0.0),
        DVec3::new(0.0, 0.0, 0.0),
    ]));
    let params = TriangulateParams {
        dedup_tolerance: Some(1e-6),
        ..Default::default()
    };
    let mesh = triangulate(&polygon, &params).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_relative_eq!(mesh.area(), 16.0, epsilon = 1e-9);
}

#[test]
fn test_duplicate_points_survive_without_dedup() {
    // Default behavior keeps the repeated point; the clipper still
    // recovers the full area
    let polygon = Polygon::new(Ring::new(vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 0.0),
        DVec3::new(4.0, 4.0, 0.0),
        DVec3::new(0.0, 4.0, 0.0),
        DVec3::new(0.0, 0.0, 0.0),
    ]));
    let mesh = triangulate(&polygon, &TriangulateParams::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 5);
    assert_relative_eq!(mesh.area(), 16.0, epsilon = 1e-9);
}

#[test]
fn test_out_of_bounds_hole_is_dropped() {
    // The "hole" lies entirely outside the outer boundary; it cannot be
    // bridged and is left out of the triangulation
    let polygon = Polygon::with_holes(
        closed(&[
            (0.0, 0.0, 0.0),
            (4.0, 0.0, 0.0),
            (4.0, 4.0, 0.0),
            (0.0, 4.0, 0.0),
        ]),
        vec![closed(&[
            (1.0, 10.0, 0.0),
            (3.0, 10.0, 0.0),
            (3.0, 12.0, 0.0),
            (1.0, 12.0, 0.0),
        ])],
    );
    let mesh = triangulate(&polygon, &TriangulateParams::default()).unwrap();
    assert_relative_eq!(mesh.area(), 16.0, epsilon = 1e-9);
    assert_eq!(mesh.triangle_count(), 2);
}

#[test]
fn test_area_matches_shoelace_for_many_shapes() {
    let shapes: Vec<(Vec<(f64, f64, f64)>, f64)> = vec![
        // Pentagon
        (
            vec![
                (0.0, 0.0, 0.0),
                (4.0, 0.0, 0.0),
                (5.0, 3.0, 0.0),
                (2.0, 5.0, 0.0),
                (-1.0, 3.0, 0.0),
            ],
            // Shoelace by hand
            21.0,
        ),
        // Zig-zag strip
        (
            vec![
                (0.0, 0.0, 0.0),
                (2.0, 0.0, 0.0),
                (2.0, 1.0, 0.0),
                (4.0, 1.0, 0.0),
                (4.0, 2.0, 0.0),
                (0.0, 2.0, 0.0),
            ],
            6.0,
        ),
    ];

    for (points, expected) in shapes {
        let polygon = Polygon::new(closed(&points));
        let mesh = triangulate(&polygon, &TriangulateParams::default()).unwrap();
        assert_relative_eq!(mesh.area(), expected, epsilon = 1e-9);
        assert_eq!(mesh.triangle_count(), points.len() - 2);
    }
}

#[test]
fn test_degenerate_error_carries_source_location() {
    use crate::error::SourceLocation;
    let ring = Ring::with_source(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
        ],
        SourceLocation::line(271),
    );
    let err = triangulate(&Polygon::new(ring), &TriangulateParams::default()).unwrap_err();
    assert_eq!(err.location(), Some(SourceLocation::line(271)));
}
