//! The Z-array preprocessing step shared by Z-algorithm searchers.

use crate::pattern::Equivalence;

/// Computes the Z-array of `pattern` under `equivalence`.
///
/// Entry `i` is the length of the longest prefix of `pattern` that also
/// occurs starting at position `i`; by convention entry 0 is the whole
/// pattern length. The computation runs in time linear in the pattern length:
/// a window `[l, r)` remembers the rightmost prefix match discovered so far,
/// and values inside it are reused instead of recomputed. Every successful
/// element comparison either extends `r` or is skipped via that reuse, which
/// is what keeps the total work linear.
pub fn z_array<T, E: Equivalence<T>>(pattern: &[T], equivalence: &E) -> Vec<usize> {
  let n = pattern.len();
  if n == 0 {
    return Vec::new();
  }

  let mut z = vec![0; n];
  z[0] = n;
  let mut l = 0;
  let mut r = 1;
  for i in 1..n {
    if i < r && z[i - l] < r - i {
      // Strictly inside the window: the value is fully determined by the
      // earlier entry.
      z[i] = z[i - l];
      continue;
    }

    // Resume comparing at the offset the window already guarantees. Starting
    // any earlier would re-compare known-equal elements and degrade the
    // whole computation to quadratic.
    let mut length = if i < r { r - i } else { 0 };
    while i + length < n && equivalence.equivalent(&pattern[length], &pattern[i + length]) {
      length += 1;
    }
    z[i] = length;
    l = i;
    r = i + length;
  }
  z
}
