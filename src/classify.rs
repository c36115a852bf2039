//! Interior/exterior classification via alternating-sign flood fill.
//!
//! Triangles are canonicalized by **rotation** (never by sorting — sorting
//! would destroy the winding that neighbor lookups depend on), indexed by
//! their rotated triple, and then flooded outward from the boundary with
//! the sign flipping every time the flood crosses a constraint edge.

use crate::structure::{TriangulationStructure, NO_VERTEX};
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Rotate `(i, j, k)` so its smallest element comes first, preserving
/// cyclic order (and therefore winding).
fn rotate_smallest_first(t: (i32, i32, i32)) -> (i32, i32, i32) {
  let (i, j, k) = t;
  if i <= j && i <= k {
    (i, j, k)
  } else if j <= i && j <= k {
    (j, k, i)
  } else {
    (k, i, j)
  }
}

fn cmp_triple(a: &(i32, i32, i32), b: &(i32, i32, i32)) -> Ordering {
  a.cmp(b)
}

fn find_cell(cells: &[(i32, i32, i32)], target: (i32, i32, i32)) -> Option<usize> {
  let rotated = rotate_smallest_first(target);
  cells.binary_search_by(|c| cmp_triple(c, &rotated)).ok()
}

/// Label assigned to each cell during flood fill: `0` = unvisited, `±1` =
/// the two alternating sides.
pub struct Classification {
  pub cells: Vec<(i32, i32, i32)>,
  pub flags: Vec<i8>,
  /// Hull-boundary pseudo-triangles `(p2, p1, -1)`, one per unconstrained
  /// hull edge, populated only when requested.
  pub infinite: Vec<(i32, i32, i32)>,
}

/// Classify every cell of `tri` as interior (`+1`) or exterior (`-1`) of
/// the constraint boundary, starting from the convex hull (exterior) and
/// alternating sign across constraint edges inward.
pub fn classify(tri: &TriangulationStructure, include_infinity: bool) -> Classification {
  let mut cells = tri.cells();
  cells.sort_by(cmp_triple);
  let m = cells.len();

  let mut neighbor = vec![[NO_VERTEX; 3]; m];
  let mut is_constraint_edge = vec![[false; 3]; m];

  for (idx, &(p0, p1, p2)) in cells.iter().enumerate() {
    let verts = [p0, p1, p2];
    for side in 0..3 {
      let a = verts[side];
      let b = verts[(side + 1) % 3];
      is_constraint_edge[idx][side] = tri.is_constraint(a, b);
      let v = tri.opposite(a, b);
      neighbor[idx][side] = if v == NO_VERTEX {
        NO_VERTEX
      } else {
        match find_cell(&cells, (b, a, v)) {
          Some(n) => n as i32,
          None => NO_VERTEX,
        }
      };
    }
  }

  let mut flags = vec![0i8; m];
  let mut infinite = Vec::new();
  let mut same_side: VecDeque<usize> = VecDeque::new();
  let mut cross_constraint: VecDeque<usize> = VecDeque::new();

  for idx in 0..m {
    let verts = [cells[idx].0, cells[idx].1, cells[idx].2];
    for side in 0..3 {
      if neighbor[idx][side] != NO_VERTEX {
        continue;
      }
      let a = verts[side];
      let b = verts[(side + 1) % 3];
      if is_constraint_edge[idx][side] {
        cross_constraint.push_back(idx);
      } else {
        if flags[idx] == 0 {
          flags[idx] = 1;
        }
        same_side.push_back(idx);
      }
      if include_infinity {
        infinite.push((b, a, NO_VERTEX));
      }
    }
  }

  let mut s: i8 = 1;
  loop {
    while let Some(t) = same_side.pop_front() {
      if flags[t] == -s {
        continue;
      }
      flags[t] = s;
      for side in 0..3 {
        let f = neighbor[t][side];
        if f == NO_VERTEX || flags[f as usize] != 0 {
          continue;
        }
        if is_constraint_edge[t][side] {
          cross_constraint.push_back(f as usize);
        } else {
          flags[f as usize] = s;
          same_side.push_back(f as usize);
        }
      }
    }
    if cross_constraint.is_empty() {
      break;
    }
    std::mem::swap(&mut same_side, &mut cross_constraint);
    cross_constraint.clear();
    s = -s;
  }

  Classification { cells, flags, infinite }
}
