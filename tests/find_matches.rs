use seqseek::prelude::*;

#[test]
fn test_repeated_pattern_tiles_the_collection() {
  let searcher = Pattern::from_chars("aab").into_searcher();
  let ranges: Vec<_> = searcher.matches("aabaabaab").collect();
  assert_eq!(ranges, vec![0..3, 3..6, 6..9]);
}

#[test]
fn test_overlapping_occurrences_yield_non_overlapping_matches() {
  let searcher = Pattern::from_chars("aa").into_searcher();
  let ranges: Vec<_> = searcher.matches("aaaa").collect();
  assert_eq!(ranges, vec![0..2, 2..4]);
}

#[test]
fn test_absent_pattern_yields_nothing() {
  let searcher = Pattern::from_chars("b").into_searcher();
  let haystack = "aaaa";
  let mut state = searcher.state(haystack, 0..4);
  assert_eq!(searcher.search(haystack, &mut state), None);
  assert!(state.is_done());
  // Exhausted states stay exhausted.
  assert_eq!(searcher.search(haystack, &mut state), None);
}

#[test]
fn test_pattern_spanning_the_whole_collection() {
  let searcher = Pattern::from_chars("abc").into_searcher();
  let ranges: Vec<_> = searcher.matches("abc").collect();
  assert_eq!(ranges, vec![0..3]);
}

#[test]
fn test_find_first_returns_leftmost_match() {
  let searcher = Pattern::from_chars("ab").into_searcher();
  assert_eq!(searcher.find_first("aabab"), Some(1..3));
  assert_eq!(searcher.find_first("zzz"), None);
}

#[test]
fn test_case_insensitive_equivalence() {
  let pattern = Pattern::with_equivalence(vec!['A', 'B'], AsciiCaseInsensitive);
  let searcher = pattern.into_searcher();
  let ranges: Vec<_> = searcher.matches("xxabXX").collect();
  assert_eq!(ranges, vec![2..4]);
}

#[test]
fn test_empty_pattern_matches_every_position_once() {
  let searcher = Pattern::from_chars("").into_searcher_or_empty();
  assert!(searcher.is_empty_pattern());
  let ranges: Vec<_> = searcher.matches("ab").collect();
  assert_eq!(ranges, vec![0..0, 1..1, 2..2]);
}

#[test]
fn test_empty_pattern_over_empty_collection() {
  let searcher = Pattern::from_chars("").into_searcher_or_empty();
  let ranges: Vec<_> = searcher.matches("").collect();
  assert_eq!(ranges, vec![0..0]);
}

#[test]
fn test_non_empty_pattern_delegates_through_wrapper() {
  let searcher = Pattern::from_chars("ab").into_searcher_or_empty();
  assert!(!searcher.is_empty_pattern());
  let ranges: Vec<_> = searcher.matches("abab").collect();
  assert_eq!(ranges, vec![0..2, 2..4]);
}

#[test]
fn test_enumeration_is_repeatable() {
  let searcher = Pattern::from_chars("aa").into_searcher();
  let haystack = "aaabaa";
  let first: Vec<_> = searcher.matches(haystack).collect();
  let second: Vec<_> = searcher.matches(haystack).collect();
  assert_eq!(first, vec![0..2, 4..6]);
  assert_eq!(first, second);
}

#[test]
fn test_cloned_iterator_resumes_from_snapshot() {
  let searcher = Pattern::from_chars("aab").into_searcher();
  let mut iter = searcher.matches("aabaabaab");
  assert_eq!(iter.next(), Some(0..3));

  let saved = iter.clone();
  assert_eq!(iter.collect::<Vec<_>>(), vec![3..6, 6..9]);
  // The snapshot was not advanced by consuming the original.
  assert_eq!(saved.collect::<Vec<_>>(), vec![3..6, 6..9]);
}

#[test]
fn test_sub_range_enumeration() {
  let searcher = Pattern::from_chars("aab").into_searcher();
  let haystack = "aabaabaab";
  let ranges: Vec<_> = searcher.matches_in(haystack, 1..9).collect();
  assert_eq!(ranges, vec![3..6, 6..9]);
  // A match may not extend past the sub-range's upper bound.
  let ranges: Vec<_> = searcher.matches_in(haystack, 0..5).collect();
  assert_eq!(ranges, vec![0..3]);
}

#[test]
fn test_str_matches_are_byte_ranges_on_scalar_boundaries() {
  let searcher = Pattern::from_chars("éé").into_searcher();
  let haystack = "xééx";
  let ranges: Vec<_> = searcher.matches(haystack).collect();
  assert_eq!(ranges, vec![1..5]);
  assert_eq!(&haystack[1..5], "éé");
}

#[test]
fn test_searching_a_vec_of_non_char_elements() {
  let searcher = Pattern::new(vec![1, 2]).into_searcher();
  let haystack = vec![0, 1, 2, 1, 2];
  let ranges: Vec<_> = searcher.matches(&haystack).collect();
  assert_eq!(ranges, vec![1..3, 3..5]);
}
