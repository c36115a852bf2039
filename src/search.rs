//! Binary search over a sorted slice with a caller-supplied comparator.
//!
//! `cmp(element, target)` must return negative/zero/positive the way
//! `Ordering` does, and must be consistent with the slice's existing order.
//! Each variant uses its own sentinel:
//!
//! - [`lt`] / [`le`] return the last matching index, or `None` if the whole
//!   slice compares greater (nothing before the target).
//! - [`gt`] / [`ge`] return the first matching index, or `slice.len()` if
//!   the whole slice compares less (nothing at or after the target).
//! - [`eq`] returns any matching index, or `None` if no element compares
//!   equal.

use std::cmp::Ordering;

fn partition_point<T, F>(slice: &[T], mut is_before: F) -> usize
where
  F: FnMut(&T) -> bool,
{
  let mut lo = 0usize;
  let mut hi = slice.len();
  while lo < hi {
    let mid = lo + (hi - lo) / 2;
    if is_before(&slice[mid]) {
      lo = mid + 1;
    } else {
      hi = mid;
    }
  }
  lo
}

/// Last index with `cmp(element, target) < 0`, i.e. the end of the
/// strictly-less prefix. `None` if no element is strictly less.
pub fn lt<T, F>(slice: &[T], cmp: F) -> Option<usize>
where
  F: Fn(&T) -> Ordering,
{
  let first_not_less = partition_point(slice, |e| cmp(e) == Ordering::Less);
  if first_not_less == 0 {
    None
  } else {
    Some(first_not_less - 1)
  }
}

/// Last index with `cmp(element, target) <= 0`. `None` if no element
/// compares at most equal.
pub fn le<T, F>(slice: &[T], cmp: F) -> Option<usize>
where
  F: Fn(&T) -> Ordering,
{
  let first_greater = partition_point(slice, |e| cmp(e) != Ordering::Greater);
  if first_greater == 0 {
    None
  } else {
    Some(first_greater - 1)
  }
}

/// First index with `cmp(element, target) > 0`. `slice.len()` if no
/// element is strictly greater.
pub fn gt<T, F>(slice: &[T], cmp: F) -> usize
where
  F: Fn(&T) -> Ordering,
{
  partition_point(slice, |e| cmp(e) != Ordering::Greater)
}

/// First index with `cmp(element, target) >= 0`. `slice.len()` if no
/// element compares at least equal.
pub fn ge<T, F>(slice: &[T], cmp: F) -> usize
where
  F: Fn(&T) -> Ordering,
{
  partition_point(slice, |e| cmp(e) == Ordering::Less)
}

/// Any index with `cmp(element, target) == 0`. `None` if absent.
pub fn eq<T, F>(slice: &[T], cmp: F) -> Option<usize>
where
  F: Fn(&T) -> Ordering,
{
  let idx = ge(slice, &cmp);
  if idx < slice.len() && cmp(&slice[idx]) == Ordering::Equal {
    Some(idx)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cmp_to(target: i32) -> impl Fn(&i32) -> Ordering {
    move |e| e.cmp(&target)
  }

  #[test]
  fn lt_le_gt_ge_eq_basic() {
    let v = vec![1, 3, 3, 5, 7];
    assert_eq!(lt(&v, cmp_to(3)), Some(0));
    assert_eq!(le(&v, cmp_to(3)), Some(2));
    assert_eq!(gt(&v, cmp_to(3)), 3);
    assert_eq!(ge(&v, cmp_to(3)), 1);
    assert_eq!(eq(&v, cmp_to(3)), Some(1));
    assert_eq!(eq(&v, cmp_to(4)), None);
  }

  #[test]
  fn sentinels_at_extremes() {
    let v = vec![2, 4, 6];
    assert_eq!(lt(&v, cmp_to(1)), None);
    assert_eq!(le(&v, cmp_to(1)), None);
    assert_eq!(gt(&v, cmp_to(7)), 3);
    assert_eq!(ge(&v, cmp_to(7)), 3);
  }

  #[test]
  fn empty_slice() {
    let v: Vec<i32> = vec![];
    assert_eq!(lt(&v, cmp_to(0)), None);
    assert_eq!(le(&v, cmp_to(0)), None);
    assert_eq!(gt(&v, cmp_to(0)), 0);
    assert_eq!(ge(&v, cmp_to(0)), 0);
    assert_eq!(eq(&v, cmp_to(0)), None);
  }
}
