//! Types for suffix array indexing
//!
//! This module defines the alphabet, the build configuration and the
//! metadata reported for a finished suffix array.

use serde::{Deserialize, Serialize};

/// Number of letters in the input alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Bucket reserved for suffixes with no character at the current offset.
/// Always drained first.
pub const UNSORTED_BUCKET: usize = 0;

/// Position of a letter in the alphabet (`A`/`a` -> 0 ... `Z`/`z` -> 25)
///
/// Returns `None` for anything that is not an ASCII letter.
#[inline]
pub fn index_of_character(byte: u8) -> Option<usize> {
    match byte {
        b'A'..=b'Z' => Some((byte - b'A') as usize),
        b'a'..=b'z' => Some((byte - b'a') as usize),
        _ => None,
    }
}

/// Check if a byte belongs to the input alphabet
#[inline]
pub fn is_alphabetic(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Configuration for suffix array building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixArrayConfig {
    /// Order and search letters ignoring case (default: false)
    ///
    /// The stored text keeps its original case either way.
    pub case_insensitive: bool,
}

impl SuffixArrayConfig {
    /// Number of symbol buckets a radix pass needs, excluding the unsorted one
    pub fn symbol_count(&self) -> usize {
        if self.case_insensitive {
            ALPHABET_SIZE
        } else {
            ALPHABET_SIZE * 2
        }
    }

    /// Total number of buckets per radix pass, including the unsorted one
    pub fn bucket_count(&self) -> usize {
        self.symbol_count() + 1
    }

    /// Bucket a letter is sorted into, offset past the unsorted bucket
    ///
    /// Case-sensitive keys follow ASCII order (`A..Z` before `a..z`) so the
    /// radix order agrees with byte-wise comparison.
    #[inline]
    pub fn bucket_of(&self, byte: u8) -> Option<usize> {
        let letter = index_of_character(byte)?;
        let symbol = if self.case_insensitive || byte.is_ascii_uppercase() {
            letter
        } else {
            ALPHABET_SIZE + letter
        };
        Some(UNSORTED_BUCKET + 1 + symbol)
    }

    /// Normalize a byte for comparison under this configuration
    #[inline]
    pub fn fold(&self, byte: u8) -> u8 {
        if self.case_insensitive {
            byte.to_ascii_lowercase()
        } else {
            byte
        }
    }
}

/// Progress of a running radix sort, reported once per completed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassProgress {
    /// Character offset the pass keyed on
    pub offset: usize,
    /// Passes completed so far (including this one)
    pub completed: usize,
    /// Total passes the sort will run
    pub total: usize,
}

/// Suffix array metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SuffixArrayMeta {
    /// Length of the indexed text
    pub text_len: usize,
    /// Number of suffixes (equals text_len)
    pub suffix_count: usize,
    /// Radix passes run during construction
    pub radix_passes: usize,
    /// Buckets used per pass, including the unsorted bucket
    pub bucket_count: usize,
    /// Whether ordering and search ignore case
    pub case_insensitive: bool,
}
