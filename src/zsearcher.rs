//! Exact-match searching built on the Z-algorithm.

use std::ops::Range;

use crate::backward::{
  BackwardCollectionSearcher, BackwardSearcherState, BackwardStatelessCollectionSearcher,
};
use crate::collection::{BidirectionalCollection, SearchableCollection};
use crate::pattern::{Equivalence, Pattern};
use crate::searcher::{CollectionSearcher, DefaultSearcherState, StatelessCollectionSearcher};
use crate::zarray::z_array;

/// A linear-time exact-match searcher for one pattern.
///
/// `ZSearcher` generalizes the Z-algorithm's window reuse from preprocessing
/// to the search itself: one "find the next occurrence" query costs time
/// linear in the searched sub-range plus the pattern length, and the searched
/// collection only needs forward, single-pass index advancement. The searcher
/// owns its pattern and Z-array and is immutable after construction, so a
/// single instance can serve any number of searches, including from multiple
/// threads at once.
///
/// Searches go through the
/// [`CollectionSearcher`](crate::searcher::CollectionSearcher) surface, which
/// a `ZSearcher` picks up from its stateless implementation:
///
/// ```rust
/// use seqseek::prelude::*;
///
/// let searcher = Pattern::from_chars("aab").into_searcher();
/// let ranges: Vec<_> = searcher.matches("aabaabaab").collect();
/// assert_eq!(ranges, vec![0..3, 3..6, 6..9]);
/// ```
///
/// A `ZSearcher` built from an empty pattern reports a zero-length match at
/// every position; wrap the pattern with
/// [`Pattern::into_searcher_or_empty`](crate::pattern::Pattern::into_searcher_or_empty)
/// when that case needs to be handled deliberately.
#[derive(Debug, Clone)]
pub struct ZSearcher<T, E = crate::pattern::ElementEquality> {
  pattern: Vec<T>,
  /// `z[i]` is the longest common prefix of the pattern and its suffix at
  /// `i`, under the pattern's equivalence.
  z: Vec<usize>,
  equivalence: E,
}

impl<T, E: Equivalence<T>> ZSearcher<T, E> {
  /// Builds a searcher from a pattern, taking ownership of it and computing
  /// the Z-array once up front.
  pub fn new(pattern: Pattern<T, E>) -> Self {
    let (elements, equivalence) = pattern.into_parts();
    let z = z_array(&elements, &equivalence);
    Self {
      pattern: elements,
      z,
      equivalence,
    }
  }

  /// The pattern elements this searcher looks for.
  pub fn pattern(&self) -> &[T] {
    &self.pattern
  }

  /// Finds the leftmost occurrence of the pattern within `range`.
  ///
  /// The scan keeps a confirmed-match window: `r` is the first index of
  /// `searched` past the region known to match a pattern prefix, and
  /// `from_l` / `to_r` are the current candidate's distances from the window
  /// ends. Distances rather than indices, because the collection supports no
  /// index arithmetic. At each candidate either the Z-array proves an early
  /// mismatch (no comparison at all) or comparison resumes where the window
  /// ends, so every element of the sub-range is compared O(1) times.
  fn search_forward<C>(&self, searched: &C, range: Range<C::Index>) -> Option<Range<C::Index>>
  where
    C: SearchableCollection<Element = T> + ?Sized,
  {
    assert!(range.start <= range.end, "malformed search range");
    let end = range.end;
    let mut i = range.start;
    let mut r = i;
    let mut from_l = 0;
    let mut to_r = 0;

    loop {
      if to_r > 0 && self.z[from_l] < to_r {
        // The pattern mismatches itself strictly inside the confirmed
        // region, so this candidate cannot match either.
        i = searched.index_after(i);
        from_l += 1;
        to_r -= 1;
        continue;
      }

      // Compare pattern and collection, skipping the prefix of length `to_r`
      // the window already confirms. The loop is bounded by both the pattern
      // end and the caller's upper bound; a pattern longer than what remains
      // simply fails here.
      if to_r == 0 {
        r = i;
      }
      let mut left = to_r;
      let mut right = r;
      while left < self.pattern.len()
        && right != end
        && self
          .equivalence
          .equivalent(&self.pattern[left], &searched.element(right))
      {
        left += 1;
        right = searched.index_after(right);
      }

      if left == self.pattern.len() {
        return Some(i..right);
      }
      if i == end {
        // The upper bound itself was the final candidate.
        return None;
      }

      // Record the newly confirmed window [i, right) and retry one position
      // later. `left` elements starting at `i` are known to match the
      // pattern prefix.
      r = right;
      let confirmed = left;
      i = searched.index_after(i);
      if confirmed > 1 {
        from_l = 1;
        to_r = confirmed - 1;
      } else {
        from_l = 0;
        to_r = 0;
      }
    }
  }
}

impl<C, T, E> StatelessCollectionSearcher<C> for ZSearcher<T, E>
where
  C: SearchableCollection<Element = T> + ?Sized,
  E: Equivalence<T>,
{
  fn search_once(&self, searched: &C, range: Range<C::Index>) -> Option<Range<C::Index>> {
    self.search_forward(searched, range)
  }
}

impl<C, T, E> CollectionSearcher<C> for ZSearcher<T, E>
where
  C: SearchableCollection<Element = T> + ?Sized,
  E: Equivalence<T>,
{
  type State = DefaultSearcherState<C::Index>;

  fn state(&self, _searched: &C, range: Range<C::Index>) -> Self::State {
    DefaultSearcherState::new(range)
  }

  fn search(&self, searched: &C, state: &mut Self::State) -> Option<Range<C::Index>> {
    state.advance(self, searched)
  }
}

/// Backward searching reuses the forward scan: one query repeatedly searches
/// front to back, restarting one position after each occurrence found, and
/// keeps the last one: the rightmost occurrence, which may overlap earlier
/// ones. The cost of one query is a forward scan per occurrence in the
/// sub-range, so callers that need every match are better served by the
/// forward enumeration.
impl<C, T, E> BackwardStatelessCollectionSearcher<C> for ZSearcher<T, E>
where
  C: BidirectionalCollection<Element = T> + ?Sized,
  E: Equivalence<T>,
{
  fn search_back_once(&self, searched: &C, range: Range<C::Index>) -> Option<Range<C::Index>> {
    let mut found = None;
    let mut from = range.start;
    loop {
      match self.search_forward(searched, from..range.end) {
        None => return found,
        Some(m) => {
          if m.start == range.end {
            // A zero-length match at the upper bound; nothing lies further
            // right.
            return Some(m);
          }
          from = searched.index_after(m.start);
          found = Some(m);
        }
      }
    }
  }
}

impl<C, T, E> BackwardCollectionSearcher<C> for ZSearcher<T, E>
where
  C: BidirectionalCollection<Element = T> + ?Sized,
  E: Equivalence<T>,
{
  type BackwardState = BackwardSearcherState<C::Index>;

  fn backward_state(&self, _searched: &C, range: Range<C::Index>) -> Self::BackwardState {
    BackwardSearcherState::new(range)
  }

  fn search_back(
    &self,
    searched: &C,
    state: &mut Self::BackwardState,
  ) -> Option<Range<C::Index>> {
    state.advance_back(self, searched)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::pattern::Pattern;

  /// Quadratic reference: leftmost occurrence by direct comparison at every
  /// start position.
  fn naive_find(searched: &[u8], pattern: &[u8], from: usize) -> Option<Range<usize>> {
    (from..=searched.len()).find_map(|start| {
      let end = start + pattern.len();
      (end <= searched.len() && searched[start..end] == *pattern).then(|| start..end)
    })
  }

  /// Every pattern over {a, b} up to length 3 against every haystack up to
  /// length 6, cross-checked against the reference at every start offset.
  #[test]
  fn test_exhaustive_small_alphabet_cross_check() {
    fn sequences(max_len: usize) -> Vec<Vec<u8>> {
      let mut all = vec![Vec::new()];
      for len in 1..=max_len {
        for n in 0..(1 << len) {
          all.push((0..len).map(|bit| b"ab"[(n >> bit) & 1]).collect());
        }
      }
      all
    }

    for pattern in sequences(3).into_iter().filter(|p| !p.is_empty()) {
      let searcher = Pattern::new(pattern.clone()).into_searcher();
      for haystack in sequences(6) {
        for from in 0..=haystack.len() {
          assert_eq!(
            searcher.search_once(haystack.as_slice(), from..haystack.len()),
            naive_find(&haystack, &pattern, from),
            "pattern {pattern:?}, haystack {haystack:?}, from {from}"
          );
        }
      }
    }
  }

  #[test]
  fn test_respects_sub_range_bounds() {
    let searcher = Pattern::new(b"ab".to_vec()).into_searcher();
    let haystack = b"abab".as_slice();
    assert_eq!(searcher.search_once(haystack, 1..4), Some(2..4));
    // The occurrence straddling the upper bound is not a match.
    assert_eq!(searcher.search_once(haystack, 1..3), None);
    assert_eq!(searcher.search_once(haystack, 3..3), None);
  }

  #[test]
  fn test_pattern_longer_than_range_never_matches() {
    let searcher = Pattern::new(b"aaaa".to_vec()).into_searcher();
    assert_eq!(searcher.search_once(b"aaa".as_slice(), 0..3), None);
  }

  #[test]
  fn test_backward_finds_rightmost_occurrence() {
    let searcher = Pattern::new(b"aa".to_vec()).into_searcher();
    let haystack = b"aaaa".as_slice();
    assert_eq!(searcher.search_back_once(haystack, 0..4), Some(2..4));
    assert_eq!(searcher.search_back_once(haystack, 0..2), Some(0..2));
    assert_eq!(searcher.search_back_once(haystack, 0..1), None);
    // The rightmost occurrence may overlap an earlier one.
    assert_eq!(searcher.search_back_once(b"aaa".as_slice(), 0..3), Some(1..3));
  }
}
