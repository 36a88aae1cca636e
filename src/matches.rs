//! Lazy iterators over the matches a searcher finds.
//!
//! These adapters carry a borrowed searcher, a borrowed collection, and one
//! search state by value. Nothing is computed until `next` is called, and
//! cloning an iterator snapshots its cursor: the clone and the original
//! advance independently, so a caller can tentatively consume matches and
//! later resume from a saved point.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::backward::BackwardCollectionSearcher;
use crate::collection::{BidirectionalCollection, SearchableCollection};
use crate::searcher::CollectionSearcher;

/// A lazy forward iterator over non-overlapping matches.
///
/// Created by [`CollectionSearcher::matches`] or
/// [`CollectionSearcher::matches_in`].
pub struct Matches<'c, 's, C, S>
where
  C: SearchableCollection + ?Sized,
  S: CollectionSearcher<C>,
{
  searcher: &'s S,
  searched: &'c C,
  state: S::State,
}

impl<'c, 's, C, S> Matches<'c, 's, C, S>
where
  C: SearchableCollection + ?Sized,
  S: CollectionSearcher<C>,
{
  pub(crate) fn new(searcher: &'s S, searched: &'c C, range: Range<C::Index>) -> Self {
    let state = searcher.state(searched, range);
    Self {
      searcher,
      searched,
      state,
    }
  }
}

impl<'c, 's, C, S> Iterator for Matches<'c, 's, C, S>
where
  C: SearchableCollection + ?Sized,
  S: CollectionSearcher<C>,
{
  type Item = Range<C::Index>;

  fn next(&mut self) -> Option<Self::Item> {
    self.searcher.search(self.searched, &mut self.state)
  }
}

impl<'c, 's, C, S> FusedIterator for Matches<'c, 's, C, S>
where
  C: SearchableCollection + ?Sized,
  S: CollectionSearcher<C>,
{
}

impl<'c, 's, C, S> Clone for Matches<'c, 's, C, S>
where
  C: SearchableCollection + ?Sized,
  S: CollectionSearcher<C>,
{
  fn clone(&self) -> Self {
    Self {
      searcher: self.searcher,
      searched: self.searched,
      state: self.state.clone(),
    }
  }
}

/// A lazy iterator over matches from the end of the collection toward the
/// start.
///
/// Created by [`BackwardCollectionSearcher::matches_back`] or
/// [`BackwardCollectionSearcher::matches_back_in`].
pub struct MatchesBackward<'c, 's, C, S>
where
  C: BidirectionalCollection + ?Sized,
  S: BackwardCollectionSearcher<C>,
{
  searcher: &'s S,
  searched: &'c C,
  state: S::BackwardState,
}

impl<'c, 's, C, S> MatchesBackward<'c, 's, C, S>
where
  C: BidirectionalCollection + ?Sized,
  S: BackwardCollectionSearcher<C>,
{
  pub(crate) fn new(searcher: &'s S, searched: &'c C, range: Range<C::Index>) -> Self {
    let state = searcher.backward_state(searched, range);
    Self {
      searcher,
      searched,
      state,
    }
  }
}

impl<'c, 's, C, S> Iterator for MatchesBackward<'c, 's, C, S>
where
  C: BidirectionalCollection + ?Sized,
  S: BackwardCollectionSearcher<C>,
{
  type Item = Range<C::Index>;

  fn next(&mut self) -> Option<Self::Item> {
    self.searcher.search_back(self.searched, &mut self.state)
  }
}

impl<'c, 's, C, S> FusedIterator for MatchesBackward<'c, 's, C, S>
where
  C: BidirectionalCollection + ?Sized,
  S: BackwardCollectionSearcher<C>,
{
}

impl<'c, 's, C, S> Clone for MatchesBackward<'c, 's, C, S>
where
  C: BidirectionalCollection + ?Sized,
  S: BackwardCollectionSearcher<C>,
{
  fn clone(&self) -> Self {
    Self {
      searcher: self.searcher,
      searched: self.searched,
      state: self.state.clone(),
    }
  }
}
