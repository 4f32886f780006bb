//! # Hole Bridging
//!
//! Merges hole rings into the outer boundary before ear clipping. Each
//! hole is joined to the boundary through a zero-width bridge at a
//! mutually visible vertex pair: cast a ray from the hole's rightmost
//! vertex toward +x, take the closest boundary edge it hits, and connect
//! to that edge's visible endpoint (or to the reflex vertex occluding it).

use glam::DVec2;

use super::earcut::{orientation, point_in_triangle, Boundary};

/// Splices every usable hole into the loop that starts at `head`.
///
/// Holes are expected clockwise against a counter-clockwise outer loop.
/// A hole whose bridge ray never reaches the boundary lies outside it and
/// is left unmerged; its vertices then simply go untriangulated.
pub(crate) fn merge_holes(
    b: &mut Boundary,
    head: usize,
    hole_starts: &[usize],
    total_points: usize,
) {
    struct HoleRef {
        rightmost: usize,
        max_x: f64,
    }

    let mut refs: Vec<HoleRef> = Vec::with_capacity(hole_starts.len());
    for (i, &start) in hole_starts.iter().enumerate() {
        let end = hole_starts.get(i + 1).copied().unwrap_or(total_points);
        if end.saturating_sub(start) < 3 {
            continue;
        }
        let hole_head = b.add_loop(start, end);
        let mut rightmost = hole_head;
        for n in b.loop_nodes(hole_head) {
            if b.coord(n).x > b.coord(rightmost).x {
                rightmost = n;
            }
        }
        refs.push(HoleRef {
            rightmost,
            max_x: b.coord(rightmost).x,
        });
    }

    // Rightmost hole first, so a bridge ray can only ever hit the outer
    // boundary or an already-merged hole
    refs.sort_by(|p, q| {
        q.max_x
            .partial_cmp(&p.max_x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for hole in refs {
        if let Some(target) = find_bridge_target(b, head, b.coord(hole.rightmost)) {
            b.split_bridge(target, hole.rightmost);
        }
    }
}

/// Finds the boundary node a bridge from `m` should connect to.
///
/// Returns `None` when the +x ray from `m` crosses no boundary edge.
fn find_bridge_target(b: &Boundary, head: usize, m: DVec2) -> Option<usize> {
    let loop_nodes = b.loop_nodes(head);

    // Closest crossing of the ray with a boundary edge
    let mut hit_x = f64::INFINITY;
    let mut hit_edge: Option<(usize, usize)> = None;
    for &n in &loop_nodes {
        let n2 = b.next(n);
        let a = b.coord(n);
        let c = b.coord(n2);
        if (a.y > m.y) != (c.y > m.y) {
            let x = a.x + (m.y - a.y) * (c.x - a.x) / (c.y - a.y);
            if x >= m.x && x < hit_x {
                hit_x = x;
                hit_edge = Some((n, n2));
            }
        }
    }
    let (edge_a, edge_b) = hit_edge?;

    // Ray hit a boundary vertex exactly: connect straight to it
    for n in [edge_a, edge_b] {
        let q = b.coord(n);
        if q.y == m.y && q.x == hit_x {
            return Some(n);
        }
    }

    let hit = DVec2::new(hit_x, m.y);
    let p_node = if b.coord(edge_a).x > b.coord(edge_b).x {
        edge_a
    } else {
        edge_b
    };
    let p = b.coord(p_node);

    // The edge endpoint is visible unless a reflex boundary vertex sits
    // inside the triangle (m, hit, p); of those, the one closest in angle
    // to the ray (then closest along it) becomes the target instead.
    let mut target = p_node;
    let mut best_tan = f64::INFINITY;
    let mut best_dx = f64::INFINITY;
    for &n in &loop_nodes {
        if n == p_node {
            continue;
        }
        let q = b.coord(n);
        let dx = q.x - m.x;
        if dx <= 0.0 {
            continue;
        }
        if !point_in_triangle(m, hit, p, q) {
            continue;
        }
        if orientation(b.coord(b.prev(n)), q, b.coord(b.next(n))) >= 0.0 {
            continue; // only reflex vertices can occlude
        }
        let tan = (q.y - m.y).abs() / dx;
        if tan < best_tan || (tan == best_tan && dx < best_dx) {
            best_tan = tan;
            best_dx = dx;
            target = n;
        }
    }

    Some(target)
}
