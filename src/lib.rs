//! Seqseek - A generic pattern-search engine for ordered collections.
//!
//! Seqseek locates occurrences of a pattern inside any ordered collection
//! (slices, strings, or custom structures that implement the small
//! [`SearchableCollection`](collection::SearchableCollection) trait) without
//! assuming random access or index arithmetic. The concrete exact-match
//! searcher runs in linear time via the Z-algorithm, and the searcher traits
//! turn any one-shot search primitive into a lazy, restartable enumeration of
//! non-overlapping match ranges, forward or backward.
//!
//! # Examples
//!
//! ```rust
//! use seqseek::prelude::*;
//!
//! let searcher = Pattern::from_chars("aab").into_searcher();
//! let ranges: Vec<_> = searcher.matches("aabaabaab").collect();
//! assert_eq!(ranges, vec![0..3, 3..6, 6..9]);
//!
//! // Matching goes through an equivalence relation, not `==` directly.
//! let folded = Pattern::with_equivalence(vec!['A', 'B'], AsciiCaseInsensitive);
//! assert_eq!(folded.into_searcher().find_first("xxabXX"), Some(2..4));
//! ```

pub mod backward;
pub mod collection;
pub mod empty;
pub mod matches;
pub mod pattern;
pub mod searcher;
pub mod zarray;
pub mod zsearcher;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::backward::*;
    pub use crate::collection::*;
    pub use crate::empty::*;
    pub use crate::matches::*;
    pub use crate::pattern::*;
    pub use crate::searcher::*;
    pub use crate::zarray::*;
    pub use crate::zsearcher::*;
}
