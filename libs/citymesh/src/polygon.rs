//! # Polygons
//!
//! A polygon is one outer ring plus zero or more hole rings, all assumed to
//! lie approximately on a common plane. Polygons are constructed once from
//! parsed ring data, triangulated once, and are immutable afterwards except
//! for UV assignment on the resulting mesh.

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, SourceLocation};
use crate::mesh::Mesh;
use crate::ring::Ring;
use crate::triangulate::{self, TriangulateParams};

/// A planar polygon with an outer boundary and optional holes.
///
/// Holes are assumed to be fully contained in the outer boundary; this is
/// not validated, matching the behavior of the building datasets this
/// library was built for. A hole that falls outside the boundary is dropped
/// during triangulation rather than failing the polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Identifier used by texture-correspondence lookup; may be empty
    pub id: String,
    /// The exterior boundary
    pub outer: Ring,
    /// Interior boundaries subtracted from the filled area
    pub holes: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon from an outer boundary with no holes.
    pub fn new(outer: Ring) -> Self {
        Self {
            id: String::new(),
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(outer: Ring, holes: Vec<Ring>) -> Self {
        Self {
            id: String::new(),
            outer,
            holes,
        }
    }

    /// Sets the polygon id used for texture-correspondence lookup.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns true if the polygon has hole rings.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// The source location of the outer ring, if tracked.
    pub fn source(&self) -> Option<SourceLocation> {
        self.outer.source()
    }

    /// Checks the structural invariants of every ring.
    ///
    /// The first violation wins; its error names the offending ring's
    /// source location when known.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.outer.validate()?;
        for hole in &self.holes {
            hole.validate()?;
        }
        Ok(())
    }

    /// Triangulates this polygon into a mesh.
    ///
    /// Convenience wrapper around [`triangulate::triangulate`].
    pub fn triangulate(&self, params: &TriangulateParams) -> Result<Mesh, MeshError> {
        triangulate::triangulate(self, params)
    }
}
