//! Backward mirrors of the searcher traits, for bidirectional collections.
//!
//! A backward searcher enumerates matches from the end of the collection
//! toward the start, which is what "last match" and "split from the end"
//! consumers need. The contracts mirror the forward ones exactly with the
//! direction reversed: the cursor starts at the range's upper bound, each
//! query covers everything between the fixed lower bound and the cursor, and
//! after a match the cursor moves to the match's lower bound.

use std::ops::Range;

use crate::collection::BidirectionalCollection;
use crate::matches::MatchesBackward;
use crate::searcher::Position;

/// A repeatable search process that walks matches from back to front.
///
/// Matches are returned in decreasing position order and do not overlap.
/// Note that backward enumeration picks matches greedily from the right, so
/// over collections where occurrences overlap it may select different
/// (mirrored) ranges than the forward enumeration does.
pub trait BackwardCollectionSearcher<C: BidirectionalCollection + ?Sized> {
  /// The externally-held cursor for one backward enumeration.
  type BackwardState: Clone;

  /// Creates the state for enumerating matches within `range`, starting from
  /// its upper bound.
  ///
  /// # Panics
  ///
  /// `range` must be a valid sub-range of `searched`'s indices; a malformed
  /// range is a caller bug and panics either here or during the search.
  fn backward_state(&self, searched: &C, range: Range<C::Index>) -> Self::BackwardState;

  /// Moves `state` before the previous match and returns it, or returns
  /// `None` when no further match exists in the range.
  fn search_back(&self, searched: &C, state: &mut Self::BackwardState)
    -> Option<Range<C::Index>>;

  /// Returns a lazy iterator over all matches in `searched`, last first.
  ///
  /// # Examples
  ///
  /// ```rust
  /// use seqseek::prelude::*;
  ///
  /// let searcher = Pattern::from_chars("aa").into_searcher();
  /// let ranges: Vec<_> = searcher.matches_back("aaaa").collect();
  /// assert_eq!(ranges, vec![2..4, 0..2]);
  /// ```
  fn matches_back<'c, 's>(&'s self, searched: &'c C) -> MatchesBackward<'c, 's, C, Self>
  where
    Self: Sized,
  {
    self.matches_back_in(searched, searched.start_index()..searched.end_index())
  }

  /// Like [`matches_back`](Self::matches_back), restricted to a sub-range.
  fn matches_back_in<'c, 's>(
    &'s self,
    searched: &'c C,
    range: Range<C::Index>,
  ) -> MatchesBackward<'c, 's, C, Self>
  where
    Self: Sized,
  {
    MatchesBackward::new(self, searched, range)
  }

  /// Returns the last match in `searched`, bypassing enumeration.
  fn find_last(&self, searched: &C) -> Option<Range<C::Index>>
  where
    Self: Sized,
  {
    let mut state =
      self.backward_state(searched, searched.start_index()..searched.end_index());
    self.search_back(searched, &mut state)
  }
}

/// The backward counterpart of
/// [`StatelessCollectionSearcher`](crate::searcher::StatelessCollectionSearcher):
/// a single "rightmost occurrence in this sub-range" query with no memory
/// between calls. [`BackwardSearcherState`] supplies the cursor bookkeeping,
/// with the zero-length-match rule stepping the cursor backward by one
/// position and finishing once it reaches the lower bound.
pub trait BackwardStatelessCollectionSearcher<C: BidirectionalCollection + ?Sized> {
  /// Returns the rightmost occurrence within `range`, or `None` if there is
  /// none at or after `range.start`.
  fn search_back_once(&self, searched: &C, range: Range<C::Index>) -> Option<Range<C::Index>>;
}

/// The standard cursor for backward stateless searchers; the mirror of
/// [`DefaultSearcherState`](crate::searcher::DefaultSearcherState), picked up
/// the same way by forwarding `backward_state` to [`new`](Self::new) and
/// `search_back` to [`advance_back`](Self::advance_back). Unlike the forward
/// state, `end` here is the *lower* bound the cursor moves toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackwardSearcherState<I> {
  position: Position<I>,
  /// Lower bound of the search, fixed when the state is created.
  end: I,
}

impl<I: Copy + Ord> BackwardSearcherState<I> {
  /// Seeds a cursor at the upper bound of `range`.
  ///
  /// # Panics
  ///
  /// Panics if the range bounds are reversed.
  pub fn new(range: Range<I>) -> Self {
    assert!(range.start <= range.end, "malformed search range");
    Self {
      position: Position::Index(range.end),
      end: range.start,
    }
  }

  /// Returns `true` once the enumeration is exhausted.
  pub fn is_done(&self) -> bool {
    matches!(self.position, Position::Done)
  }

  /// Runs one step of the backward protocol over `searcher`'s one-shot
  /// primitive: query `[end, cursor)`, move the cursor before the match, and
  /// hand the match back.
  pub fn advance_back<C, S>(&mut self, searcher: &S, searched: &C) -> Option<Range<I>>
  where
    C: BidirectionalCollection<Index = I> + ?Sized,
    S: BackwardStatelessCollectionSearcher<C> + ?Sized,
  {
    let Position::Index(index) = self.position else {
      return None;
    };
    match searcher.search_back_once(searched, self.end..index) {
      None => {
        self.position = Position::Done;
        None
      }
      Some(range) => {
        if range.start == range.end {
          // Zero-length match: step before it by one element, or finish if
          // it sits at the lower bound of the search range.
          if range.start == self.end {
            self.position = Position::Done;
          } else {
            self.position = Position::Index(searched.index_before(range.start));
          }
        } else {
          self.position = Position::Index(range.start);
        }
        Some(range)
      }
    }
  }
}
