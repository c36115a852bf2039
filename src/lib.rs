//! Two-dimensional constrained Delaunay triangulation.
//!
//! The entry point is [`triangulate`]: given a point set and an optional
//! set of constraint edges, it sweeps the points into an initial
//! triangulation ([`monotone`]), flips edges into Delaunay form subject to
//! the constraints ([`refine`]), and optionally labels triangles as
//! interior or exterior of the constraint boundary ([`classify`]).
//!
//! This crate does not do higher-dimensional triangulation, mesh quality
//! improvement (no Steiner points), or dynamic/incremental updates after
//! construction. Exactly coincident input points are treated as distinct
//! indices, not merged.

pub mod classify;
pub mod error;
pub mod monotone;
pub mod predicates;
pub mod refine;
pub mod search;
pub mod structure;

pub use classify::Classification;
pub use error::{Error, Result};
pub use monotone::{EventKind, MonotoneEvent};
pub use predicates::Orientation;
pub use structure::{Edge, TriangulationStructure};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub fn new(x: f64, y: f64) -> Self {
    Point { x, y }
  }
}

/// Options controlling what [`triangulate`] returns. All fields default to
/// the values `Default::default()` produces, matching the defaults named
/// in this crate's external interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangulateOptions {
  /// Run Delaunay refinement after the initial monotone triangulation.
  pub delaunay: bool,
  /// Include triangles labeled interior to the constraint boundary.
  pub interior: bool,
  /// Include triangles labeled exterior to the constraint boundary.
  pub exterior: bool,
  /// When `exterior` is also set, append one pseudo-triangle `(p2, p1,
  /// -1)` per unconstrained convex-hull edge.
  pub infinity: bool,
}

impl Default for TriangulateOptions {
  fn default() -> Self {
    TriangulateOptions { delaunay: true, interior: true, exterior: true, infinity: false }
  }
}

impl TriangulateOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_delaunay(mut self, v: bool) -> Self {
    self.delaunay = v;
    self
  }

  pub fn with_interior(mut self, v: bool) -> Self {
    self.interior = v;
    self
  }

  pub fn with_exterior(mut self, v: bool) -> Self {
    self.exterior = v;
    self
  }

  pub fn with_infinity(mut self, v: bool) -> Self {
    self.infinity = v;
    self
  }
}

/// Triangulate `points` subject to `edges` (vertex-index pairs into
/// `points`). Vertical constraint edges (equal-`x` endpoints) are silently
/// dropped — a known limitation of the sweep-line algorithm, not a bug.
/// Returns an empty list for an empty point set or when both
/// `options.interior` and `options.exterior` are false.
pub fn triangulate(points: &[Point], edges: &[(i32, i32)], options: TriangulateOptions) -> Vec<(i32, i32, i32)> {
  if points.is_empty() || (!options.interior && !options.exterior) {
    return Vec::new();
  }

  let mut constraints: Vec<Edge> =
    edges.iter().filter(|&&(a, b)| points[a as usize].x != points[b as usize].x).map(|&(a, b)| Edge::new(a, b)).collect();
  constraints.sort_unstable();
  constraints.dedup();

  let cells = monotone::triangulate(points, edges);

  let mut tri = TriangulationStructure::new(points.len(), constraints);
  for &(i, j, k) in &cells {
    tri.add_triangle(i, j, k);
  }

  if options.delaunay {
    refine::refine(&mut tri, points);
  }

  if options.interior && options.exterior && !options.infinity {
    return tri.cells();
  }

  let include_infinity = options.infinity && options.exterior;
  let classification = classify::classify(&tri, include_infinity);

  // Flood-fill parity: `+1` is an even number of constraint crossings from
  // the true unbounded exterior (i.e. exterior), `-1` is odd (interior).
  let mut out = Vec::new();
  for (cell, &flag) in classification.cells.iter().zip(classification.flags.iter()) {
    let wanted = (flag == -1 && options.interior) || (flag == 1 && options.exterior) || (flag == 0 && (options.interior || options.exterior));
    if wanted {
      out.push(*cell);
    }
  }
  if include_infinity {
    out.extend(classification.infinite);
  }
  out
}
