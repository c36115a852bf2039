//! Error taxonomy for programmer-error conditions.
//!
//! None of these are returned from [`crate::triangulate`] itself — malformed
//! geometric input (duplicate points, collinear sets) is handled silently and
//! never panics. These exist for the internal structural invariants checked
//! under `#[cfg(debug_assertions)]` in [`crate::structure`] and [`crate::refine`].

/// A condition that indicates a bug in the caller or in this crate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A vertex index referenced by an edge or triangle is out of range.
  InvalidVertexIndex,
  /// A structural invariant of the star-based adjacency was violated, e.g.
  /// `remove_triangle` was asked to remove a triangle that is not present.
  InvariantViolation,
  /// The input is degenerate (duplicate points, or all points collinear).
  /// Not itself a hard failure; retained so debug assertions can report it.
  CoLinearDegenerate,
}

pub type Result<T> = std::result::Result<T, Error>;
