//! Suffix array indexing module
//!
//! This module provides exact substring search over a single alphabetic
//! string using a suffix array sorted by LSD radix passes.
//!
//! ## Architecture
//!
//! - `builder`: Validates input and sorts suffixes with bucket queues
//! - `reader`: Binary search and occurrence ranges over a built array
//! - `types`: Alphabet, configuration and metadata types

pub mod builder;
pub mod reader;
pub mod types;

// Re-exports for convenience
pub use builder::{SuffixArray, SuffixArrayBuilder, build_all};
pub use reader::{PARALLEL_SEARCH_THRESHOLD, SuffixArrayReader};
pub use types::{
    ALPHABET_SIZE, PassProgress, SuffixArrayConfig, SuffixArrayMeta, index_of_character,
    is_alphabetic,
};
