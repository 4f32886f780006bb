//! # Config Crate
//!
//! Centralized configuration constants for the citymesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_RING_POINTS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // A closed ring carries at least MIN_RING_POINTS entries
//! let point_count = 5;
//! assert!(point_count >= MIN_RING_POINTS);
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
