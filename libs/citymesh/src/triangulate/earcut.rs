//! # Ear Clipping
//!
//! Iterative ear clipping over a doubly-linked boundary loop, using exact
//! orientation predicates. Holes are spliced into the outer boundary
//! beforehand (see the `holes` module), so clipping only ever sees one
//! simple loop.
//!
//! Nodes are separate from vertices: hole bridging duplicates the two
//! bridge endpoints, so two nodes may reference the same vertex index.
//! Emitted triangles always reference the original vertex indices.

use glam::DVec2;
use robust::{orient2d, Coord};

/// Signed shoelace area of a 2D ring (closing repeat not expected).
///
/// Positive for counter-clockwise order.
pub(crate) fn signed_area(points: &[DVec2]) -> f64 {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    0.5 * sum
}

/// Exact orientation of the triangle (a, b, c).
///
/// Positive when counter-clockwise, negative when clockwise, zero when
/// collinear.
pub(crate) fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Inclusive point-in-triangle test, valid for either triangle winding.
pub(crate) fn point_in_triangle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    let d1 = orientation(a, b, p);
    let d2 = orientation(b, c, p);
    let d3 = orientation(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[derive(Debug, Clone, Copy)]
struct Node {
    vi: usize,
    prev: usize,
    next: usize,
    alive: bool,
}

/// Doubly-linked boundary loops over a shared vertex slice.
pub(crate) struct Boundary<'a> {
    points: &'a [DVec2],
    nodes: Vec<Node>,
}

impl<'a> Boundary<'a> {
    pub(crate) fn new(points: &'a [DVec2]) -> Self {
        Self {
            points,
            nodes: Vec::with_capacity(points.len() + 8),
        }
    }

    /// Links the vertex range `start..end` into a circular loop and
    /// returns its head node.
    pub(crate) fn add_loop(&mut self, start: usize, end: usize) -> usize {
        let base = self.nodes.len();
        let count = end - start;
        for (offset, vi) in (start..end).enumerate() {
            self.nodes.push(Node {
                vi,
                prev: base + (offset + count - 1) % count,
                next: base + (offset + 1) % count,
                alive: true,
            });
        }
        base
    }

    pub(crate) fn vi(&self, n: usize) -> usize {
        self.nodes[n].vi
    }

    pub(crate) fn coord(&self, n: usize) -> DVec2 {
        self.points[self.nodes[n].vi]
    }

    pub(crate) fn next(&self, n: usize) -> usize {
        self.nodes[n].next
    }

    pub(crate) fn prev(&self, n: usize) -> usize {
        self.nodes[n].prev
    }

    pub(crate) fn alive(&self, n: usize) -> bool {
        self.nodes[n].alive
    }

    /// Unlinks a node from its loop. The node keeps its stale links so a
    /// cursor left on it can still walk forward to a live node.
    pub(crate) fn remove(&mut self, n: usize) {
        let prev = self.nodes[n].prev;
        let next = self.nodes[n].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[n].alive = false;
    }

    /// Collects the nodes of the loop containing `head`, in walk order.
    pub(crate) fn loop_nodes(&self, head: usize) -> Vec<usize> {
        let mut out = vec![head];
        let mut n = self.next(head);
        while n != head {
            out.push(n);
            n = self.next(n);
        }
        out
    }

    pub(crate) fn loop_len(&self, head: usize) -> usize {
        let mut len = 1;
        let mut n = self.next(head);
        while n != head {
            len += 1;
            n = self.next(n);
        }
        len
    }

    /// Connects boundary node `a` to hole node `m` with a zero-width
    /// bridge, duplicating both endpoints so the two loops become one.
    pub(crate) fn split_bridge(&mut self, a: usize, m: usize) {
        let a_next = self.nodes[a].next;
        let m_prev = self.nodes[m].prev;

        let a2 = self.duplicate(a);
        let m2 = self.duplicate(m);

        self.nodes[a].next = m;
        self.nodes[m].prev = a;

        self.nodes[m2].next = a2;
        self.nodes[a2].prev = m2;

        self.nodes[a2].next = a_next;
        self.nodes[a_next].prev = a2;

        self.nodes[m_prev].next = m2;
        self.nodes[m2].prev = m_prev;
    }

    fn duplicate(&mut self, n: usize) -> usize {
        let vi = self.nodes[n].vi;
        let id = self.nodes.len();
        self.nodes.push(Node {
            vi,
            prev: id,
            next: id,
            alive: true,
        });
        id
    }
}

/// Triangulates a polygon given as a flat vertex list.
///
/// `points` holds the outer ring first (counter-clockwise), then each hole
/// ring (clockwise); `hole_starts` holds the start index of each hole.
/// Returns triangles as index triples into `points`, counter-clockwise.
/// An empty result means the input was degenerate.
pub(crate) fn earcut(points: &[DVec2], hole_starts: &[usize]) -> Vec<[usize; 3]> {
    let outer_end = hole_starts.first().copied().unwrap_or(points.len());
    if outer_end < 3 {
        return Vec::new();
    }

    let mut boundary = Boundary::new(points);
    let head = boundary.add_loop(0, outer_end);
    super::holes::merge_holes(&mut boundary, head, hole_starts, points.len());
    clip_ears(&mut boundary, head)
}

fn clip_ears(b: &mut Boundary, head: usize) -> Vec<[usize; 3]> {
    let mut triangles = Vec::new();
    let mut remaining = b.loop_len(head);
    if remaining < 3 {
        return triangles;
    }

    let mut ear = head;
    let mut misses = 0usize;
    while remaining > 3 {
        let prev = b.prev(ear);
        let next = b.next(ear);
        if is_ear(b, prev, ear, next) {
            triangles.push([b.vi(prev), b.vi(ear), b.vi(next)]);
            b.remove(ear);
            ear = next;
            remaining -= 1;
            misses = 0;
        } else {
            ear = next;
            misses += 1;
            if misses > remaining {
                // No ear in a full pass: drop degenerate corners and retry
                if !strip_degenerate(b, &mut ear, &mut remaining) {
                    return triangles;
                }
                misses = 0;
            }
        }
    }

    let prev = b.prev(ear);
    let next = b.next(ear);
    if orientation(b.coord(prev), b.coord(ear), b.coord(next)) > 0.0 {
        triangles.push([b.vi(prev), b.vi(ear), b.vi(next)]);
    }
    triangles
}

fn is_ear(b: &Boundary, prev: usize, ear: usize, next: usize) -> bool {
    let a = b.coord(prev);
    let p = b.coord(ear);
    let c = b.coord(next);

    if orientation(a, p, c) <= 0.0 {
        return false; // reflex or collinear corner
    }

    // Any remaining vertex inside (or on) the candidate triangle blocks
    // it. Bridge duplicates share coordinates with the corners and are
    // skipped by the coordinate comparison.
    let mut n = b.next(next);
    while n != prev {
        let q = b.coord(n);
        if q != a && q != p && q != c && point_in_triangle(a, p, c, q) {
            return false;
        }
        n = b.next(n);
    }
    true
}

/// Removes coincident and collinear corners from the loop around `ear`.
///
/// Returns true if anything was removed. The cursor is advanced past any
/// removed node.
fn strip_degenerate(b: &mut Boundary, ear: &mut usize, remaining: &mut usize) -> bool {
    let mut removed = false;
    for n in b.loop_nodes(*ear) {
        if *remaining <= 3 {
            break;
        }
        if !b.alive(n) {
            continue;
        }
        let prev = b.prev(n);
        let next = b.next(n);
        let degenerate = b.coord(prev) == b.coord(n)
            || b.coord(n) == b.coord(next)
            || orientation(b.coord(prev), b.coord(n), b.coord(next)) == 0.0;
        if degenerate {
            b.remove(n);
            *remaining -= 1;
            removed = true;
        }
    }
    while !b.alive(*ear) {
        *ear = b.next(*ear);
    }
    removed
}
