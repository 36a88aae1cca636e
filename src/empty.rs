//! The empty-pattern policy wrapper.

use std::ops::Range;

use crate::backward::BackwardCollectionSearcher;
use crate::collection::{BidirectionalCollection, SearchableCollection};
use crate::pattern::{Equivalence, Pattern};
use crate::searcher::CollectionSearcher;
use crate::zsearcher::ZSearcher;

/// Composes a searcher with a policy for the degenerate empty pattern.
///
/// A literal empty-pattern search is mathematically degenerate (an empty
/// pattern "matches everywhere"), but callers that split or interleave on
/// pattern occurrences still need a well-defined, finite enumeration of
/// those positions. `PatternOrEmpty` holds an optional searcher: when it is
/// present, every call delegates to it untouched; when it is absent (the
/// pattern had zero elements), matching is redefined so that every position
/// in the search range, *including* its upper bound, is one zero-length
/// match, visited exactly once in order.
///
/// ```rust
/// use seqseek::prelude::*;
///
/// let searcher = Pattern::<char>::from_chars("").into_searcher_or_empty();
/// let ranges: Vec<_> = searcher.matches("ab").collect();
/// assert_eq!(ranges, vec![0..0, 1..1, 2..2]);
/// ```
#[derive(Debug, Clone)]
pub struct PatternOrEmpty<S> {
  searcher: Option<S>,
}

impl<S> PatternOrEmpty<S> {
  /// Wraps `searcher`, or selects the empty-pattern policy when `None`.
  pub fn new(searcher: Option<S>) -> Self {
    Self { searcher }
  }

  /// Returns `true` when this wrapper applies the empty-pattern policy.
  pub fn is_empty_pattern(&self) -> bool {
    self.searcher.is_none()
  }
}

impl<T, E: Equivalence<T>> PatternOrEmpty<ZSearcher<T, E>> {
  /// Builds the searcher for a possibly-empty pattern.
  pub fn from_pattern(pattern: Pattern<T, E>) -> Self {
    if pattern.is_empty() {
      Self::new(None)
    } else {
      Self::new(Some(ZSearcher::new(pattern)))
    }
  }
}

/// State for a [`PatternOrEmpty`] enumeration: either the wrapped searcher's
/// own state, or the cursor of the empty-pattern policy. The branch is
/// selected once, when the state is created.
#[derive(Debug, Clone)]
pub enum PatternOrEmptyState<S, I> {
  /// Delegating to the wrapped searcher.
  Searcher(S),
  /// Empty-pattern policy: the next zero-length match is at `index`; `end`
  /// is the final position to visit.
  EmptyCursor { index: I, end: I },
  /// Empty-pattern policy, exhausted.
  EmptyDone,
}

impl<C, S> CollectionSearcher<C> for PatternOrEmpty<S>
where
  C: SearchableCollection + ?Sized,
  S: CollectionSearcher<C>,
{
  type State = PatternOrEmptyState<S::State, C::Index>;

  fn state(&self, searched: &C, range: Range<C::Index>) -> Self::State {
    match &self.searcher {
      Some(searcher) => PatternOrEmptyState::Searcher(searcher.state(searched, range)),
      None => {
        assert!(range.start <= range.end, "malformed search range");
        PatternOrEmptyState::EmptyCursor {
          index: range.start,
          end: range.end,
        }
      }
    }
  }

  fn search(&self, searched: &C, state: &mut Self::State) -> Option<Range<C::Index>> {
    match state {
      PatternOrEmptyState::Searcher(inner) => match &self.searcher {
        Some(searcher) => searcher.search(searched, inner),
        None => panic!("state was created by a different searcher"),
      },
      PatternOrEmptyState::EmptyCursor { index, end } => {
        let (position, end) = (*index, *end);
        if position == end {
          *state = PatternOrEmptyState::EmptyDone;
        } else {
          *state = PatternOrEmptyState::EmptyCursor {
            index: searched.index_after(position),
            end,
          };
        }
        Some(position..position)
      }
      PatternOrEmptyState::EmptyDone => None,
    }
  }
}

impl<C, S> BackwardCollectionSearcher<C> for PatternOrEmpty<S>
where
  C: BidirectionalCollection + ?Sized,
  S: BackwardCollectionSearcher<C>,
{
  type BackwardState = PatternOrEmptyState<S::BackwardState, C::Index>;

  fn backward_state(&self, searched: &C, range: Range<C::Index>) -> Self::BackwardState {
    match &self.searcher {
      Some(searcher) => {
        PatternOrEmptyState::Searcher(searcher.backward_state(searched, range))
      }
      None => {
        assert!(range.start <= range.end, "malformed search range");
        // The cursor starts at the upper bound and moves down to `end`, the
        // lower bound.
        PatternOrEmptyState::EmptyCursor {
          index: range.end,
          end: range.start,
        }
      }
    }
  }

  fn search_back(
    &self,
    searched: &C,
    state: &mut Self::BackwardState,
  ) -> Option<Range<C::Index>> {
    match state {
      PatternOrEmptyState::Searcher(inner) => match &self.searcher {
        Some(searcher) => searcher.search_back(searched, inner),
        None => panic!("state was created by a different searcher"),
      },
      PatternOrEmptyState::EmptyCursor { index, end } => {
        let (position, end) = (*index, *end);
        if position == end {
          *state = PatternOrEmptyState::EmptyDone;
        } else {
          *state = PatternOrEmptyState::EmptyCursor {
            index: searched.index_before(position),
            end,
          };
        }
        Some(position..position)
      }
      PatternOrEmptyState::EmptyDone => None,
    }
  }
}
