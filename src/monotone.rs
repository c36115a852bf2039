//! Sweep-line monotone triangulator.
//!
//! Produces an initial triangulation (not yet Delaunay) of a point set plus
//! constraint edges by sweeping a vertical line left to right over three
//! kinds of events and maintaining a top-to-bottom ordered list of
//! "partial hulls" — horizontal channels bounded above by a constraint
//! segment (or a sentinel above everything, for the topmost channel).

use crate::predicates::orient2d;
use crate::search;
use crate::structure::NO_VERTEX;
use crate::Point;
use std::cmp::Ordering;

/// What kind of sweep event a [`MonotoneEvent`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
  Point = 0,
  End = 1,
  Start = 2,
}

/// One entry of the sweep-line's event sequence: a point insertion, or one
/// endpoint of a constraint edge's left/right span.
#[derive(Debug, Clone, Copy)]
pub struct MonotoneEvent {
  pub a: i32,
  pub b: i32,
  pub kind: EventKind,
  pub index: i32,
}

type Event = MonotoneEvent;

fn point_key(p: Point) -> (ordered_float::OrderedFloat<f64>, ordered_float::OrderedFloat<f64>) {
  (ordered_float::OrderedFloat(p.x), ordered_float::OrderedFloat(p.y))
}

fn event_cmp(points: &[Point], e1: &Event, e2: &Event) -> Ordering {
  let a1 = points[e1.a as usize];
  let a2 = points[e2.a as usize];
  point_key(a1)
    .cmp(&point_key(a2))
    .then_with(|| e1.kind.cmp(&e2.kind))
    .then_with(|| {
      if e1.kind == EventKind::Point {
        Ordering::Equal
      } else {
        let b1 = points[e1.b as usize];
        let b2 = points[e2.b as usize];
        let s = orient2d(a1, b1, b2);
        if s > 0.0 {
          Ordering::Less
        } else if s < 0.0 {
          Ordering::Greater
        } else {
          Ordering::Equal
        }
      }
    })
    .then_with(|| e1.index.cmp(&e2.index))
}

/// Build and sort the sweep event sequence that [`triangulate`] consumes
/// internally; exposed so callers can inspect the sweep order directly
/// (e.g. to drive their own visualization or instrumentation). Vertical
/// constraint edges (equal-`x` endpoints) are silently dropped, per the
/// documented limitation of this algorithm.
pub fn build_events(points: &[Point], edges: &[(i32, i32)]) -> Vec<MonotoneEvent> {
  let mut events = Vec::with_capacity(points.len() + 2 * edges.len());
  for i in 0..points.len() {
    events.push(Event { a: i as i32, b: NO_VERTEX, kind: EventKind::Point, index: i as i32 });
  }
  for (idx, &(p, q)) in edges.iter().enumerate() {
    if points[p as usize].x == points[q as usize].x {
      continue;
    }
    let (l, r) = if point_key(points[p as usize]) < point_key(points[q as usize]) { (p, q) } else { (q, p) };
    events.push(Event { a: l, b: r, kind: EventKind::Start, index: idx as i32 });
    events.push(Event { a: r, b: l, kind: EventKind::End, index: idx as i32 });
  }
  events.sort_by(|e1, e2| event_cmp(points, e1, e2));
  events
}

struct PartialHull {
  a: Point,
  b: Point,
  lower: Vec<i32>,
  upper: Vec<i32>,
}

/// Positive when `p` is above the hull's bounding segment (the segment
/// runs roughly left to right); negative when below; zero when collinear.
fn hull_vs_point(hull: &PartialHull, p: Point) -> f64 {
  orient2d(hull.a, hull.b, p)
}

fn hull_cmp_point(hull: &PartialHull, p: Point) -> Ordering {
  let s = hull_vs_point(hull, p);
  if s < 0.0 {
    Ordering::Less
  } else if s > 0.0 {
    Ordering::Greater
  } else {
    Ordering::Equal
  }
}

/// Ordering between a hull's bounding segment and an incoming `START`
/// event's segment `(a, b)`, used to locate where the new constraint edge
/// splits the sweep status.
fn hull_cmp_segment(hull: &PartialHull, a: Point, b: Point) -> Ordering {
  let probe = if a.x >= hull.a.x && a.x <= hull.b.x { a } else { b };
  let s = orient2d(hull.a, hull.b, probe);
  if s < 0.0 {
    Ordering::Less
  } else if s > 0.0 {
    Ordering::Greater
  } else {
    Ordering::Equal
  }
}

/// Run the monotone sweep, emitting clockwise triangle triples.
pub fn triangulate(points: &[Point], edges: &[(i32, i32)]) -> Vec<(i32, i32, i32)> {
  let mut cells = Vec::new();
  if points.is_empty() {
    return cells;
  }
  let events = build_events(points, edges);

  let first_x = events.first().map(|e| points[e.a as usize].x).unwrap_or(0.0);
  let min_x = first_x - (1.0 + first_x.abs()) * 2.0 * f64::EPSILON;
  let sentinel_top = Point { x: min_x, y: 1.0 };
  let sentinel_bottom = Point { x: min_x, y: 0.0 };

  let mut hulls = vec![PartialHull {
    a: sentinel_top,
    b: sentinel_bottom,
    lower: Vec::new(),
    upper: Vec::new(),
  }];

  for event in &events {
    match event.kind {
      EventKind::Point => handle_point(&mut hulls, points, event.a, &mut cells),
      EventKind::Start => handle_start(&mut hulls, points, event.a, event.b),
      EventKind::End => handle_end(&mut hulls, points, event.a, event.b),
    }
  }

  cells
}

fn handle_point(hulls: &mut [PartialHull], points: &[Point], idx: i32, cells: &mut Vec<(i32, i32, i32)>) {
  let p = points[idx as usize];
  let lo = search::lt(hulls, |h| hull_cmp_point(h, p)).unwrap_or(0);
  let hi = search::gt(hulls, |h| hull_cmp_point(h, p)).max(lo + 1).min(hulls.len());

  for hull in &mut hulls[lo..hi] {
    let lower = &mut hull.lower;
    while lower.len() >= 2 {
      let a = points[lower[lower.len() - 2] as usize];
      let b = points[lower[lower.len() - 1] as usize];
      if orient2d(a, b, p) > 0.0 {
        let top = lower[lower.len() - 1];
        let below = lower[lower.len() - 2];
        cells.push((top, below, idx));
        lower.pop();
      } else {
        break;
      }
    }
    lower.push(idx);

    let upper = &mut hull.upper;
    while upper.len() >= 2 {
      let a = points[upper[upper.len() - 2] as usize];
      let b = points[upper[upper.len() - 1] as usize];
      if orient2d(a, b, p) < 0.0 {
        let below = upper[upper.len() - 2];
        let top = upper[upper.len() - 1];
        cells.push((below, top, idx));
        upper.pop();
      } else {
        break;
      }
    }
    upper.push(idx);
  }
}

fn handle_start(hulls: &mut Vec<PartialHull>, points: &[Point], a: i32, b: i32) {
  let pa = points[a as usize];
  let pb = points[b as usize];
  let k = match search::le(hulls, |h| hull_cmp_segment(h, pa, pb)) {
    Some(k) => k,
    None => return,
  };

  let x = *hulls[k].upper.last().unwrap_or(&a);
  let old_upper = std::mem::take(&mut hulls[k].upper);
  hulls[k].upper = vec![x];

  let new_hull = PartialHull { a: pa, b: pb, lower: vec![x], upper: old_upper };
  hulls.insert(k + 1, new_hull);
}

fn handle_end(hulls: &mut Vec<PartialHull>, points: &[Point], a: i32, b: i32) {
  // The matching START stored (a = left, b = right); here the event fires
  // with (a = right, b = left), so swap to probe with the same orientation.
  let pa = points[b as usize];
  let pb = points[a as usize];
  let k = match search::eq(hulls, |h| hull_cmp_segment(h, pa, pb)) {
    Some(k) => k,
    None => return,
  };
  if k == 0 {
    return;
  }
  let removed = hulls.remove(k);
  hulls[k - 1].upper = removed.upper;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn p(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  #[test]
  fn single_triangle() {
    let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
    let cells = triangulate(&points, &[]);
    assert_eq!(cells.len(), 1);
    let mut idxs = vec![cells[0].0, cells[0].1, cells[0].2];
    idxs.sort();
    assert_eq!(idxs, vec![0, 1, 2]);
  }

  #[test]
  fn unit_square_two_triangles() {
    let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    let cells = triangulate(&points, &[]);
    assert_eq!(cells.len(), 2);
  }

  #[test]
  fn events_are_sorted_by_sweep_order() {
    let points = vec![p(1.0, 0.0), p(0.0, 0.0), p(0.5, 1.0)];
    let events = build_events(&points, &[(0, 1)]);
    assert_eq!(events.len(), 5);
    let xs: Vec<f64> = events.iter().map(|e| points[e.a as usize].x).collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
  }

  #[test]
  fn empty_input() {
    let cells = triangulate(&[], &[]);
    assert!(cells.is_empty());
  }
}
