//! # Citymesh
//!
//! Polygon-to-mesh triangulation for city building models.
//! Converts parsed boundary data (outer rings with holes) into renderable
//! triangle meshes with texture coordinates.
//!
//! ## Architecture
//!
//! ```text
//! Ring / Polygon (parsed boundary data)
//!       ↓
//! PlaneBasis (Newell fit) → 2D projection
//!       ↓
//! Ear clipping with hole bridging
//!       ↓
//! Mesh (vertices, indices, UVs, normals)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Plane fitting**: Newell's method over the outer ring
//! - **Triangulation**: Ear clipping with hole bridging
//! - **UV assignment**: Nearest-correspondence lookup
//!
//! ## Usage
//!
//! ```rust
//! use citymesh::{triangulate, Polygon, Ring, TriangulateParams};
//! use glam::DVec3;
//!
//! let footprint = Polygon::new(Ring::new(vec![
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(4.0, 0.0, 0.0),
//!     DVec3::new(4.0, 4.0, 0.0),
//!     DVec3::new(0.0, 4.0, 0.0),
//!     DVec3::new(0.0, 0.0, 0.0),
//! ]));
//! let mesh = triangulate(&footprint, &TriangulateParams::default()).unwrap();
//! assert_eq!(mesh.triangle_count(), 2);
//! ```
//!
//! Failures are per polygon, never per batch: an invalid or degenerate
//! polygon yields an error the caller skips (see [`batch`]), and
//! processing continues with the next one.

pub mod batch;
pub mod combine;
pub mod error;
pub mod mesh;
pub mod plane;
pub mod polygon;
pub mod ring;
pub mod triangulate;
pub mod uv;

pub use batch::{triangulate_batch, BatchResult, SkippedPolygon};
pub use combine::{combine, recenter, MeshInstance, RecenterMode};
pub use error::{MeshError, RingViolation, SourceLocation};
pub use mesh::Mesh;
pub use plane::PlaneBasis;
pub use polygon::Polygon;
pub use ring::Ring;
pub use triangulate::{triangulate, TriangulateParams, Winding};
pub use uv::{assign_uvs, find_target, TextureTarget, UvMapping};
