//! # Polygon Rings
//!
//! A ring is a closed, ordered sequence of 3D points bounding a polygon or
//! one of its holes. Validation mirrors what building datasets require of
//! boundary data: the ring must repeat its first point at the end, and must
//! carry at least three distinct points plus that closing repeat.

use config::constants::MIN_RING_POINTS;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, RingViolation, SourceLocation};

/// A closed ordered sequence of 3D points.
///
/// ## Invariants (checked by [`Ring::validate`], not by construction)
///
/// - The first point equals the last point (closed ring)
/// - At least 4 points (3 distinct + closing repeat)
///
/// Construction never fails; invalid rings are values too, so a parser can
/// hand over whatever it read and let validation decide. A failed check
/// skips the owning polygon rather than aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<DVec3>,
    source: Option<SourceLocation>,
}

impl Ring {
    /// Creates a ring from an ordered point sequence.
    pub fn new(points: Vec<DVec3>) -> Self {
        Self {
            points,
            source: None,
        }
    }

    /// Creates a ring that remembers where in the source document it came
    /// from, so validation failures can point back at the input.
    pub fn with_source(points: Vec<DVec3>, source: SourceLocation) -> Self {
        Self {
            points,
            source: Some(source),
        }
    }

    /// The full point sequence, including the closing repeat.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of points, including the closing repeat.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The source location attached at construction, if any.
    pub fn source(&self) -> Option<SourceLocation> {
        self.source
    }

    /// Checks the structural invariants.
    ///
    /// Returns `Err` when the ring is not closed or has too few points.
    /// The error carries the ring's source location for diagnostics.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.points.len() < MIN_RING_POINTS {
            return Err(MeshError::invalid_ring(
                RingViolation::TooFewPoints {
                    count: self.points.len(),
                },
                self.source,
            ));
        }

        // len >= MIN_RING_POINTS, so first and last exist
        if self.points[0] != self.points[self.points.len() - 1] {
            return Err(MeshError::invalid_ring(RingViolation::NotClosed, self.source));
        }

        Ok(())
    }

    /// Convenience wrapper around [`Ring::validate`].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The boundary points without the closing repeat.
    ///
    /// Tolerates unclosed rings by returning all points in that case.
    pub fn interior(&self) -> &[DVec3] {
        match self.points.as_slice() {
            [first, .., last] if first == last => &self.points[..self.points.len() - 1],
            other => other,
        }
    }
}
