//! Patterns and the equivalence relations they are matched under.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::empty::PatternOrEmpty;
use crate::zsearcher::ZSearcher;

/// An equivalence relation over pattern and collection elements.
///
/// Matching never requires `Eq` on the element type directly; every
/// comparison goes through the relation supplied when the [`Pattern`] was
/// built. The relation must actually be an equivalence (reflexive, symmetric,
/// transitive): the Z-algorithm reuses earlier comparison results, and a
/// non-transitive relation would invalidate that reuse.
///
/// The comparator is a generic type parameter rather than a boxed closure so
/// the hot comparison loop compiles down to a direct call.
pub trait Equivalence<T> {
  /// Returns `true` when `a` and `b` are considered the same element.
  fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Plain `==` equivalence. This is the default for patterns built with
/// [`Pattern::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementEquality;

impl<T: PartialEq> Equivalence<T> for ElementEquality {
  fn equivalent(&self, a: &T, b: &T) -> bool {
    a == b
  }
}

/// Case-insensitive equivalence over ASCII letters, for `char` and `u8`
/// elements. Non-ASCII characters compare exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsciiCaseInsensitive;

impl Equivalence<char> for AsciiCaseInsensitive {
  fn equivalent(&self, a: &char, b: &char) -> bool {
    a.eq_ignore_ascii_case(b)
  }
}

impl Equivalence<u8> for AsciiCaseInsensitive {
  fn equivalent(&self, a: &u8, b: &u8) -> bool {
    a.eq_ignore_ascii_case(b)
  }
}

/// Adapts an arbitrary closure into an [`Equivalence`].
///
/// # Examples
///
/// ```rust
/// use seqseek::prelude::*;
///
/// let fold_dashes = EquivalenceFn(|a: &char, b: &char| {
///   let norm = |c: char| if c == '_' { '-' } else { c };
///   norm(*a) == norm(*b)
/// });
/// let pattern = Pattern::with_equivalence(vec!['a', '-', 'b'], fold_dashes);
/// let searcher = pattern.into_searcher();
/// assert_eq!(searcher.find_first("xa_bx"), Some(1..4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EquivalenceFn<F>(pub F);

impl<T, F: Fn(&T, &T) -> bool> Equivalence<T> for EquivalenceFn<F> {
  fn equivalent(&self, a: &T, b: &T) -> bool {
    (self.0)(a, b)
  }
}

/// An immutable element sequence plus the equivalence it is matched under.
///
/// A `Pattern` is pure data; turn it into a searcher with
/// [`into_searcher`](Pattern::into_searcher), which consumes the pattern; a
/// searcher owns its pattern exclusively. If the pattern may legitimately be
/// empty, use [`into_searcher_or_empty`](Pattern::into_searcher_or_empty),
/// which layers the well-defined empty-pattern policy on top.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
  feature = "serde",
  serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>, E: Default"
  ))
)]
pub struct Pattern<T, E = ElementEquality> {
  /// The elements to look for, in order.
  elements: Vec<T>,
  /// The relation every element comparison goes through. Not serialized;
  /// deserializing rebuilds it from `Default`.
  #[cfg_attr(feature = "serde", serde(skip))]
  equivalence: E,
}

impl<T> Pattern<T> {
  /// Creates a pattern matched under plain `==` equivalence.
  pub fn new(elements: impl Into<Vec<T>>) -> Self {
    Self {
      elements: elements.into(),
      equivalence: ElementEquality,
    }
  }
}

impl Pattern<char> {
  /// Creates a `char` pattern from a string, for searching `str` and
  /// `String` collections.
  pub fn from_chars(text: &str) -> Self {
    Self::new(text.chars().collect::<Vec<_>>())
  }
}

impl<T, E: Equivalence<T>> Pattern<T, E> {
  /// Creates a pattern matched under a custom equivalence relation.
  pub fn with_equivalence(elements: impl Into<Vec<T>>, equivalence: E) -> Self {
    Self {
      elements: elements.into(),
      equivalence,
    }
  }

  /// The number of elements in the pattern.
  pub fn len(&self) -> usize {
    self.elements.len()
  }

  /// Returns `true` if the pattern has no elements.
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// The pattern elements, in order.
  pub fn elements(&self) -> &[T] {
    &self.elements
  }

  /// The equivalence relation this pattern is matched under.
  pub fn equivalence(&self) -> &E {
    &self.equivalence
  }

  /// Consumes the pattern and builds an exact-match [`ZSearcher`].
  ///
  /// Prefer [`into_searcher_or_empty`](Self::into_searcher_or_empty) when the
  /// pattern may have zero elements.
  pub fn into_searcher(self) -> ZSearcher<T, E> {
    ZSearcher::new(self)
  }

  /// Consumes the pattern and builds a searcher with the empty-pattern
  /// policy applied: an empty pattern matches once at every position.
  pub fn into_searcher_or_empty(self) -> PatternOrEmpty<ZSearcher<T, E>> {
    PatternOrEmpty::from_pattern(self)
  }

  pub(crate) fn into_parts(self) -> (Vec<T>, E) {
    (self.elements, self.equivalence)
  }
}
