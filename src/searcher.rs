//! The searcher traits that drive repeated "find the next match" enumeration.
//!
//! Two levels of abstraction:
//!
//! - [`CollectionSearcher`] is the stateful primitive: create a state (a
//!   cursor over a search range), then call
//!   [`search`](CollectionSearcher::search) repeatedly to walk the
//!   non-overlapping matches.
//! - [`StatelessCollectionSearcher`] is for algorithms whose natural shape is
//!   a single "find the next occurrence in this sub-range" query, such as
//!   [`ZSearcher`](crate::zsearcher::ZSearcher). The cursor bookkeeping that
//!   lifts such a primitive into the stateful protocol is implemented once,
//!   on [`DefaultSearcherState`]; a stateless searcher picks it up by
//!   forwarding its [`CollectionSearcher`] implementation to
//!   [`DefaultSearcherState::new`] and [`DefaultSearcherState::advance`].
//!   (Rust's coherence rules do not permit a blanket implementation here
//!   without forbidding searchers with custom state types, so the lift is a
//!   two-line opt-in rather than automatic.)
//!
//! State is always an explicit value owned by the caller. A searcher holds no
//! cursor of its own, so one searcher can drive any number of independent
//! enumerations, including concurrently from multiple threads; cloning a
//! state snapshots the cursor and lets the caller resume from that point
//! later.

use std::ops::Range;

use crate::collection::SearchableCollection;
use crate::matches::Matches;

/// A repeatable, position-advancing search process over a collection.
///
/// Implementations return matches in increasing position order, each one
/// starting at or after the end of the previous one (non-overlapping), and
/// keep returning `None` once the search range is exhausted.
pub trait CollectionSearcher<C: SearchableCollection + ?Sized> {
  /// The externally-held cursor for one enumeration. `Clone` is required so
  /// callers can snapshot a cursor and resume from it; advancing one copy
  /// never affects another.
  type State: Clone;

  /// Creates the state for enumerating matches within `range`.
  ///
  /// # Panics
  ///
  /// `range` must be a valid sub-range of `searched`'s indices; a malformed
  /// range (reversed bounds, indices from another collection) is a caller
  /// bug and panics either here or during the search.
  fn state(&self, searched: &C, range: Range<C::Index>) -> Self::State;

  /// Advances `state` past the next match and returns it, or returns `None`
  /// when no further match exists in the range.
  fn search(&self, searched: &C, state: &mut Self::State) -> Option<Range<C::Index>>;

  /// Returns a lazy iterator over all non-overlapping matches in `searched`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// use seqseek::prelude::*;
  ///
  /// let searcher = Pattern::from_chars("aa").into_searcher();
  /// let ranges: Vec<_> = searcher.matches("aaaa").collect();
  /// assert_eq!(ranges, vec![0..2, 2..4]);
  /// ```
  fn matches<'c, 's>(&'s self, searched: &'c C) -> Matches<'c, 's, C, Self>
  where
    Self: Sized,
  {
    self.matches_in(searched, searched.start_index()..searched.end_index())
  }

  /// Like [`matches`](Self::matches), restricted to a sub-range.
  fn matches_in<'c, 's>(
    &'s self,
    searched: &'c C,
    range: Range<C::Index>,
  ) -> Matches<'c, 's, C, Self>
  where
    Self: Sized,
  {
    Matches::new(self, searched, range)
  }

  /// Returns the first match in `searched`, bypassing enumeration.
  fn find_first(&self, searched: &C) -> Option<Range<C::Index>>
  where
    Self: Sized,
  {
    let mut state = self.state(searched, searched.start_index()..searched.end_index());
    self.search(searched, &mut state)
  }
}

/// A search primitive with no memory between calls.
///
/// `search_once` answers one "leftmost occurrence in this sub-range" query.
/// [`DefaultSearcherState`] supplies the cursor bookkeeping that turns the
/// primitive into a full [`CollectionSearcher`]: after a match the next query
/// starts at the match's upper bound, and a zero-length match advances by one
/// position instead so that degenerate searchers (see
/// [`PatternOrEmpty`](crate::empty::PatternOrEmpty)) can never loop forever.
pub trait StatelessCollectionSearcher<C: SearchableCollection + ?Sized> {
  /// Returns the leftmost occurrence within `range`, or `None` if there is
  /// none before `range.end`.
  fn search_once(&self, searched: &C, range: Range<C::Index>) -> Option<Range<C::Index>>;
}

/// The standard cursor for stateless searchers.
///
/// A stateless searcher implements [`CollectionSearcher`] by forwarding
/// `state` to [`new`](Self::new) and `search` to [`advance`](Self::advance):
///
/// ```rust,ignore
/// impl<C: SearchableCollection + ?Sized> CollectionSearcher<C> for MySearcher {
///   type State = DefaultSearcherState<C::Index>;
///
///   fn state(&self, _searched: &C, range: Range<C::Index>) -> Self::State {
///     DefaultSearcherState::new(range)
///   }
///
///   fn search(&self, searched: &C, state: &mut Self::State) -> Option<Range<C::Index>> {
///     state.advance(self, searched)
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSearcherState<I> {
  position: Position<I>,
  /// Upper bound of the search, fixed when the state is created.
  end: I,
}

/// Where the next scan starts, or nothing left to scan. A dedicated variant
/// rather than an `Option` so the "finished" state cannot be confused with a
/// missing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position<I> {
  Index(I),
  Done,
}

impl<I: Copy + Ord> DefaultSearcherState<I> {
  /// Seeds a cursor at the lower bound of `range`.
  ///
  /// # Panics
  ///
  /// Panics if the range bounds are reversed.
  pub fn new(range: Range<I>) -> Self {
    assert!(range.start <= range.end, "malformed search range");
    Self {
      position: Position::Index(range.start),
      end: range.end,
    }
  }

  /// Returns `true` once the enumeration is exhausted.
  pub fn is_done(&self) -> bool {
    matches!(self.position, Position::Done)
  }

  /// Runs one step of the stateful protocol over `searcher`'s one-shot
  /// primitive: query `[cursor, end)`, move the cursor past the match, and
  /// hand the match back.
  pub fn advance<C, S>(&mut self, searcher: &S, searched: &C) -> Option<Range<I>>
  where
    C: SearchableCollection<Index = I> + ?Sized,
    S: StatelessCollectionSearcher<C> + ?Sized,
  {
    let Position::Index(index) = self.position else {
      return None;
    };
    match searcher.search_once(searched, index..self.end) {
      None => {
        self.position = Position::Done;
        None
      }
      Some(range) => {
        if range.start == range.end {
          // Zero-length match: step past it by one element, or finish if it
          // sits at the end of the search range.
          if range.end == self.end {
            self.position = Position::Done;
          } else {
            self.position = Position::Index(searched.index_after(range.end));
          }
        } else {
          self.position = Position::Index(range.end);
        }
        Some(range)
      }
    }
  }
}
