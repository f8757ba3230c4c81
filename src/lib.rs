//! # sfx - Radix-Sorted Suffix Array
//!
//! sfx builds a sorted index over every suffix of an alphabetic string and
//! answers substring queries against it, rendering each hit inside a short
//! window of surrounding text.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Bucket queues, radix-sort construction and search
//! - [`highlight`] - Context window and caret underline for a match
//! - [`output`] - Listing and query result formatting (colored or JSON)
//! - [`error`] - Error types shared by construction, search and highlighting
//! - [`utils`] - Input loading, configuration, logging and progress for the CLI
//!
//! ## Quick Start
//!
//! ```
//! use sfx::highlight::highlight;
//! use sfx::index::SuffixArray;
//!
//! let array = SuffixArray::new("helloworld").unwrap();
//! assert_eq!(array.suffixes(), &[9, 1, 0, 8, 2, 3, 6, 4, 7, 5]);
//!
//! let position = array.reader().search("world").unwrap();
//! assert_eq!(position, 5);
//!
//! let block = highlight(&array, position, "world".len()).unwrap();
//! assert_eq!(block.to_string(), "helloworld\n     ^^^^^");
//! ```
//!
//! ## Construction
//!
//! Suffixes are sorted with one stable LSD radix pass per character offset,
//! last offset first. Each pass distributes positions into per-letter
//! [`index::BucketQueue`]s, with suffixes that end before the offset drained
//! ahead of every letter. This costs O(n^2) bucket operations and no
//! comparisons; search is O(m log n).

pub mod error;
pub mod highlight;
pub mod index;
pub mod output;
pub mod utils;

pub use error::{Error, Result, ValidationError};
