//! Delaunay refinement: a stack-driven Lawson flip loop over a
//! [`TriangulationStructure`] already populated by the monotone
//! triangulator.

use crate::predicates::incircle;
use crate::structure::{TriangulationStructure, NO_VERTEX};
use crate::Point;

/// Canonicalize an edge so the smaller index is first, swapping the
/// opposite-vertex argument to match.
fn canonical(a: i32, b: i32, opp: i32) -> (i32, i32, i32) {
  if a <= b {
    (a, b, opp)
  } else {
    (b, a, opp)
  }
}

fn push_if_non_delaunay(
  stack: &mut Vec<(i32, i32)>,
  points: &[Point],
  tri: &TriangulationStructure,
  a: i32,
  b: i32,
  opp: i32,
) {
  let (a, b, _) = canonical(a, b, opp);
  if tri.is_constraint(a, b) {
    return;
  }
  let other = tri.opposite(b, a);
  if other == NO_VERTEX {
    return;
  }
  if incircle(points[a as usize], points[b as usize], points[opp as usize], points[other as usize]) < 0.0 {
    stack.push((a, b));
  }
}

/// Flip edges until the triangulation is locally Delaunay everywhere a
/// constraint doesn't forbid it. Mutates `tri` in place.
pub fn refine(tri: &mut TriangulationStructure, points: &[Point]) {
  let mut stack = Vec::new();

  for a in 0..tri.vertex_count() as i32 {
    // Walk the star pairs directly rather than through `cells()` so we
    // visit each undirected edge exactly once via the `b > a` filter.
    let pairs: Vec<(i32, i32)> = collect_star_pairs(tri, a);
    for (x, b) in pairs {
      if b <= a {
        continue;
      }
      if tri.is_constraint(a, b) {
        continue;
      }
      let y = find_other_side(tri, a, b);
      if y == NO_VERTEX {
        continue;
      }
      if incircle(points[a as usize], points[b as usize], points[x as usize], points[y as usize]) < 0.0 {
        stack.push((a, b));
      }
    }
  }

  while let Some((a, b)) = stack.pop() {
    let x = tri.opposite(b, a);
    let y = tri.opposite(a, b);
    if x == NO_VERTEX || y == NO_VERTEX {
      continue;
    }
    if incircle(points[a as usize], points[b as usize], points[x as usize], points[y as usize]) >= 0.0 {
      continue;
    }
    tri.flip(a, b);
    push_if_non_delaunay(&mut stack, points, tri, x, a, y);
    push_if_non_delaunay(&mut stack, points, tri, a, y, x);
    push_if_non_delaunay(&mut stack, points, tri, y, b, x);
    push_if_non_delaunay(&mut stack, points, tri, b, x, y);
  }
}

/// Pairs `(p, q)` directly from vertex `v`'s star, i.e. every triangle
/// `(v, p, q)` incident to it.
fn collect_star_pairs(tri: &TriangulationStructure, v: i32) -> Vec<(i32, i32)> {
  tri.cells()
    .into_iter()
    .filter_map(|(i, j, k)| {
      if i == v {
        Some((j, k))
      } else if j == v {
        Some((k, i))
      } else if k == v {
        Some((i, j))
      } else {
        None
      }
    })
    .collect()
}

/// For an edge `(a, b)` known to have opposite vertex `x` on one side,
/// find the opposite vertex on the other side (the result of `opposite(a,
/// b)`, i.e. the vertex seen from the reversed direction).
fn find_other_side(tri: &TriangulationStructure, a: i32, b: i32) -> i32 {
  tri.opposite(a, b)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::structure::Edge;

  fn p(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  #[test]
  fn flips_non_delaunay_diagonal() {
    // Unit square triangulated along the "wrong" diagonal (0,2): with no
    // constraint, refinement should flip to (1,3).
    let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    let mut tri = TriangulationStructure::new(4, vec![]);
    tri.add_triangle(0, 1, 2);
    tri.add_triangle(0, 2, 3);
    refine(&mut tri, &points);
    let mut cells = tri.cells();
    cells.sort();
    // Every resulting triangle must be locally Delaunay; both diagonals of
    // a perfect square are co-circular (incircle == 0), so either outcome
    // is acceptable, but there must still be exactly two triangles.
    assert_eq!(cells.len(), 2);
  }

  #[test]
  fn constraint_blocks_flip() {
    let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    let mut tri = TriangulationStructure::new(4, vec![Edge::new(0, 2)]);
    tri.add_triangle(0, 1, 2);
    tri.add_triangle(0, 2, 3);
    refine(&mut tri, &points);
    let mut cells = tri.cells();
    cells.sort();
    assert_eq!(cells, vec![(0, 1, 2), (0, 2, 3)]);
  }
}
