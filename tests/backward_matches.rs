use seqseek::prelude::*;

#[test]
fn test_backward_enumeration_walks_right_to_left() {
  let searcher = Pattern::from_chars("aab").into_searcher();
  let ranges: Vec<_> = searcher.matches_back("aabaabaab").collect();
  assert_eq!(ranges, vec![6..9, 3..6, 0..3]);
}

#[test]
fn test_find_last_returns_rightmost_match() {
  let searcher = Pattern::from_chars("ab").into_searcher();
  assert_eq!(searcher.find_last("aabab"), Some(3..5));
  assert_eq!(searcher.find_last("zzz"), None);
}

#[test]
fn test_backward_picks_matches_greedily_from_the_right() {
  let searcher = Pattern::from_chars("aa").into_searcher();
  // Forward enumeration of "aaa" yields [0..2]; from the right the
  // non-overlapping tiling is mirrored.
  assert_eq!(searcher.matches_back("aaa").collect::<Vec<_>>(), vec![1..3]);
  assert_eq!(
    searcher.matches_back("aaaa").collect::<Vec<_>>(),
    vec![2..4, 0..2]
  );
}

#[test]
fn test_backward_sub_range_enumeration() {
  let searcher = Pattern::from_chars("aab").into_searcher();
  let ranges: Vec<_> = searcher.matches_back_in("aabaabaab", 0..8).collect();
  assert_eq!(ranges, vec![3..6, 0..3]);
}

#[test]
fn test_backward_state_machine_is_driven_manually() {
  let searcher = Pattern::from_chars("ab").into_searcher();
  let haystack = "abxab";
  let mut state = searcher.backward_state(haystack, 0..5);
  assert_eq!(searcher.search_back(haystack, &mut state), Some(3..5));
  assert_eq!(searcher.search_back(haystack, &mut state), Some(0..2));
  assert_eq!(searcher.search_back(haystack, &mut state), None);
  assert!(state.is_done());
  assert_eq!(searcher.search_back(haystack, &mut state), None);
}

#[test]
fn test_empty_pattern_backward_visits_every_position_once() {
  let searcher = Pattern::from_chars("").into_searcher_or_empty();
  let ranges: Vec<_> = searcher.matches_back("ab").collect();
  assert_eq!(ranges, vec![2..2, 1..1, 0..0]);
}

/// Searching backward finds the same occurrences as searching forward over
/// the reversed collection with the reversed pattern, with every range
/// reflected through the collection's length.
fn assert_backward_mirrors_reversed_forward(haystack: &str, pattern: &str) {
  let backward: Vec<_> = Pattern::from_chars(pattern)
    .into_searcher()
    .matches_back(haystack)
    .collect();

  let reversed_haystack: String = haystack.chars().rev().collect();
  let reversed_pattern: String = pattern.chars().rev().collect();
  let len = haystack.len();
  let mirrored: Vec<_> = Pattern::from_chars(&reversed_pattern)
    .into_searcher()
    .matches(reversed_haystack.as_str())
    .map(|range| len - range.end..len - range.start)
    .collect();

  assert_eq!(backward, mirrored, "haystack {haystack:?}, pattern {pattern:?}");
}

#[test]
fn test_backward_duality_with_reversed_forward_search() {
  assert_backward_mirrors_reversed_forward("aabaabaab", "aab");
  assert_backward_mirrors_reversed_forward("aaaa", "aa");
  assert_backward_mirrors_reversed_forward("abcabcab", "ab");
  assert_backward_mirrors_reversed_forward("xyxyx", "xyx");
  assert_backward_mirrors_reversed_forward("aaa", "b");
}
