//! # Configuration Constants
//!
//! Centralized constants for the citymesh pipeline. All geometry
//! calculations, ring validation thresholds, and precision values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Rings**: Structural validation thresholds for polygon rings
//! - **Texturing**: Fallback values for UV assignment

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication.
///
/// Slightly larger tolerance used when merging nearly-identical vertices.
/// Also the recommended starting point for the triangulator's optional
/// duplicate-point tolerance, which is off by default.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn vertices_should_merge(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     let dz = v1[2] - v2[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < VERTEX_MERGE_EPSILON
/// }
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Minimum squared length for a plane normal to be considered usable.
///
/// A ring whose Newell normal is shorter than this encloses effectively
/// zero area, so no 2D projection frame can be fitted to it.
pub const DEGENERATE_NORMAL_EPSILON: f64 = 1e-12;

// =============================================================================
// RING CONSTANTS
// =============================================================================

/// Minimum number of points in a closed ring.
///
/// Three distinct points plus the closing repeat of the first point.
/// Rings below this count cannot bound any area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RING_POINTS;
///
/// let parsed_points = 4;
/// assert!(parsed_points >= MIN_RING_POINTS);
/// ```
pub const MIN_RING_POINTS: usize = 4;

// =============================================================================
// TEXTURING CONSTANTS
// =============================================================================

/// Fallback UV coordinate for vertices with no texture correspondence.
///
/// When the nearest-correspondence lookup has nothing to offer (empty
/// correspondence list), the vertex receives this coordinate instead.
pub const FALLBACK_UV: [f64; 2] = [0.0, 0.0];
