//! Collection abstractions that searchers operate on.
//!
//! Searchers never assume random access or index arithmetic. A collection
//! exposes opaque indices and the two navigation primitives
//! ([`SearchableCollection::index_after`] and, for bidirectional collections,
//! [`BidirectionalCollection::index_before`]); everything else in the engine
//! is written in terms of those. This keeps the same searcher usable on
//! slices, strings, and chunked or rope-like structures alike.

/// An ordered collection that can be searched front to back.
///
/// Indices are opaque values ordered consistently with element positions.
/// `index_after` is the only way to move forward, so an implementation backed
/// by a forward-only structure is valid as long as stepping is cheap.
///
/// # Panics
///
/// Implementations treat an out-of-bounds index as a caller bug and panic
/// rather than reporting an error. Passing an index obtained from one
/// collection value to another is likewise a contract violation.
pub trait SearchableCollection {
  /// The element type the collection yields.
  type Element;
  /// The opaque position type. Ordering must agree with traversal order.
  type Index: Copy + Ord;

  /// Returns the position of the first element.
  fn start_index(&self) -> Self::Index;

  /// Returns the position one past the last element.
  fn end_index(&self) -> Self::Index;

  /// Returns the position immediately after `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index` is not a valid element position (in particular, if it
  /// equals `end_index`).
  fn index_after(&self, index: Self::Index) -> Self::Index;

  /// Returns the element at `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index` is not a valid element position.
  fn element(&self, index: Self::Index) -> Self::Element;
}

/// A collection that can also be traversed back to front.
///
/// Backward searchers need to step a cursor toward the start of the
/// collection, so they require predecessor computation on top of the forward
/// primitives. Forward-only collections cannot implement this trait.
pub trait BidirectionalCollection: SearchableCollection {
  /// Returns the position immediately before `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index` equals `start_index`.
  fn index_before(&self, index: Self::Index) -> Self::Index;
}

impl<T: Clone> SearchableCollection for [T] {
  type Element = T;
  type Index = usize;

  fn start_index(&self) -> usize {
    0
  }

  fn end_index(&self) -> usize {
    self.len()
  }

  fn index_after(&self, index: usize) -> usize {
    if index >= self.len() {
      panic!("index {index} is out of bounds");
    }
    index + 1
  }

  fn element(&self, index: usize) -> T {
    self[index].clone()
  }
}

impl<T: Clone> BidirectionalCollection for [T] {
  fn index_before(&self, index: usize) -> usize {
    if index == 0 {
      panic!("cannot step before the start of the collection");
    }
    index - 1
  }
}

impl<T: Clone> SearchableCollection for Vec<T> {
  type Element = T;
  type Index = usize;

  fn start_index(&self) -> usize {
    self.as_slice().start_index()
  }

  fn end_index(&self) -> usize {
    self.as_slice().end_index()
  }

  fn index_after(&self, index: usize) -> usize {
    self.as_slice().index_after(index)
  }

  fn element(&self, index: usize) -> T {
    self.as_slice().element(index)
  }
}

impl<T: Clone> BidirectionalCollection for Vec<T> {
  fn index_before(&self, index: usize) -> usize {
    self.as_slice().index_before(index)
  }
}

/// Strings are collections of `char` indexed by UTF-8 byte offset. Stepping
/// always lands on a scalar boundary, so match ranges can be used to slice
/// the string directly.
impl SearchableCollection for str {
  type Element = char;
  type Index = usize;

  fn start_index(&self) -> usize {
    0
  }

  fn end_index(&self) -> usize {
    self.len()
  }

  fn index_after(&self, index: usize) -> usize {
    index + self.element(index).len_utf8()
  }

  fn element(&self, index: usize) -> char {
    match self[index..].chars().next() {
      Some(c) => c,
      None => panic!("index {index} is out of bounds"),
    }
  }
}

impl BidirectionalCollection for str {
  fn index_before(&self, index: usize) -> usize {
    match self[..index].chars().next_back() {
      Some(c) => index - c.len_utf8(),
      None => panic!("cannot step before the start of the collection"),
    }
  }
}

impl SearchableCollection for String {
  type Element = char;
  type Index = usize;

  fn start_index(&self) -> usize {
    self.as_str().start_index()
  }

  fn end_index(&self) -> usize {
    self.as_str().end_index()
  }

  fn index_after(&self, index: usize) -> usize {
    self.as_str().index_after(index)
  }

  fn element(&self, index: usize) -> char {
    self.as_str().element(index)
  }
}

impl BidirectionalCollection for String {
  fn index_before(&self, index: usize) -> usize {
    self.as_str().index_before(index)
  }
}
