//! # Mesh Errors
//!
//! Error types for ring validation and mesh generation.
//!
//! No error here is fatal to a batch: every failure is scoped to the one
//! polygon being processed, and the caller skips that polygon and moves on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position of a ring in its source document, for diagnostics.
///
/// Ring sources (streamed XML/JSON parsers) know where each boundary came
/// from; attaching that here lets a skipped polygon be traced back to its
/// input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// 1-based line number in the source document
    pub line: usize,
}

impl SourceLocation {
    /// Creates a location from a 1-based line number.
    pub fn line(line: usize) -> Self {
        Self { line }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}", self.line)
    }
}

/// Structural reason a ring failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RingViolation {
    /// First and last points differ
    #[error("first point does not equal last point")]
    NotClosed,

    /// Fewer points than a closed ring can have
    #[error("only {count} points (minimum 4)")]
    TooFewPoints {
        /// Number of points the ring actually had
        count: usize,
    },
}

/// Errors that can occur while turning polygons into meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Ring failed structural validation; the owning polygon is skipped
    #[error("invalid ring: {reason}")]
    InvalidRing {
        /// What the ring violated
        reason: RingViolation,
        /// Where the ring came from, when the source tracked it
        location: Option<SourceLocation>,
    },

    /// Triangulation could not produce a non-empty result
    #[error("degenerate geometry: {message}")]
    Degenerate {
        /// What made the polygon untriangulable
        message: String,
        /// Where the polygon came from, when the source tracked it
        location: Option<SourceLocation>,
    },

    /// No texture target exists for a polygon id
    #[error("no texture correspondence for polygon {id:?}")]
    MissingCorrespondence {
        /// The polygon id that had no matching target
        id: String,
    },
}

impl MeshError {
    /// Creates an invalid ring error.
    pub fn invalid_ring(reason: RingViolation, location: Option<SourceLocation>) -> Self {
        Self::InvalidRing { reason, location }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self::Degenerate {
            message: message.into(),
            location,
        }
    }

    /// Creates a missing correspondence error.
    pub fn missing_correspondence(id: impl Into<String>) -> Self {
        Self::MissingCorrespondence { id: id.into() }
    }

    /// The source location attached to this error, if any.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::InvalidRing { location, .. } | Self::Degenerate { location, .. } => *location,
            Self::MissingCorrespondence { .. } => None,
        }
    }
}
