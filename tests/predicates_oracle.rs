//! Cross-checks this crate's hand-rolled adaptive predicates against the
//! `geometry-predicates` crate (an independent, well-established
//! implementation of the same Shewchuk algorithms) for sign agreement.

use cdt2d::predicates::{incircle, orient2d};
use cdt2d::Point;
use proptest::prelude::*;

fn sign(x: f64) -> i32 {
  if x > 0.0 {
    1
  } else if x < 0.0 {
    -1
  } else {
    0
  }
}

fn arb_point() -> impl Strategy<Value = Point> {
  (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
  #[test]
  fn orient2d_sign_matches_oracle(a in arb_point(), b in arb_point(), c in arb_point()) {
    let ours = orient2d(a, b, c);
    let oracle = geometry_predicates::orient2d([a.x, a.y], [b.x, b.y], [c.x, c.y]);
    prop_assert_eq!(sign(ours), sign(oracle));
  }

  #[test]
  fn incircle_sign_matches_oracle(a in arb_point(), b in arb_point(), c in arb_point(), d in arb_point()) {
    // Only meaningful when a, b, c are given counter-clockwise, as both
    // implementations require.
    prop_assume!(orient2d(a, b, c) > 0.0);
    let ours = incircle(a, b, c, d);
    let oracle = geometry_predicates::incircle([a.x, a.y], [b.x, b.y], [c.x, c.y], [d.x, d.y]);
    prop_assert_eq!(sign(ours), sign(oracle));
  }
}
