//! Suffix array builder
//!
//! Builds a suffix array from a single alphabetic string by:
//! 1. Validating and copying the input
//! 2. Starting from the identity permutation `[0, 1, ..., n-1]`
//! 3. Running one stable radix pass per character offset, from the last
//!    offset down to the first
//!
//! Each pass distributes suffix positions into bucket queues keyed by the
//! character at `position + offset`. Suffixes that end before that offset go
//! to the unsorted bucket, which is drained first, so a suffix that is a
//! prefix of another always sorts before it. The result is O(n^2) bucket
//! operations with no comparisons at all.

use super::reader::SuffixArrayReader;
use super::types::*;
use crate::error::{Error, Result, ValidationError};
use crate::index::queue::BucketQueue;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Builder for constructing a suffix array from one string
#[derive(Debug)]
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
    /// Validated copy of the input
    text: String,
    /// Suffix positions, sorted in place by `build`
    suffixes: Vec<usize>,
}

impl SuffixArrayBuilder {
    /// Validate `raw` and prepare it for sorting
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for empty input,
    /// [`ValidationError::InvalidCharacter`] for the first byte outside
    /// `A-Z`/`a-z`, and [`Error::OutOfMemory`] if the copy cannot be
    /// allocated.
    pub fn new(config: SuffixArrayConfig, raw: impl AsRef<[u8]>) -> Result<Self> {
        let raw = raw.as_ref();
        validate(raw)?;

        let mut text = String::new();
        text.try_reserve_exact(raw.len())?;
        text.extend(raw.iter().map(|&b| char::from(b)));

        let mut suffixes = Vec::new();
        suffixes.try_reserve_exact(raw.len())?;
        suffixes.extend(0..raw.len());

        Ok(Self {
            config,
            text,
            suffixes,
        })
    }

    /// Create a builder with default configuration
    pub fn with_defaults(raw: impl AsRef<[u8]>) -> Result<Self> {
        Self::new(SuffixArrayConfig::default(), raw)
    }

    /// Get the length of the text to be indexed
    pub fn text_size(&self) -> usize {
        self.text.len()
    }

    /// Get the configuration this builder sorts with
    pub fn config(&self) -> SuffixArrayConfig {
        self.config
    }

    /// Sort all suffixes
    pub fn build(self) -> Result<SuffixArray> {
        self.build_with_progress(|_| {})
    }

    /// Sort all suffixes, calling `on_pass` after every radix pass
    ///
    /// On failure every bucket and the partially sorted index are dropped;
    /// nothing half-built is returned.
    pub fn build_with_progress(
        mut self,
        mut on_pass: impl FnMut(PassProgress),
    ) -> Result<SuffixArray> {
        let n = self.text.len();

        // Size each bucket for an even spread of symbols; skewed text grows them
        let per_bucket = n / self.config.symbol_count() + 1;
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(self.config.bucket_count())?;
        for _ in 0..self.config.bucket_count() {
            buckets.push(BucketQueue::with_capacity(per_bucket)?);
        }

        for (pass, offset) in (0..n).rev().enumerate() {
            radix_pass(
                self.text.as_bytes(),
                &mut self.suffixes,
                &mut buckets,
                offset,
                &self.config,
            )?;

            trace!(offset, "radix pass complete");
            on_pass(PassProgress {
                offset,
                completed: pass + 1,
                total: n,
            });
        }

        debug!(
            text_len = n,
            passes = n,
            case_insensitive = self.config.case_insensitive,
            "suffix array built"
        );

        Ok(SuffixArray {
            config: self.config,
            text: self.text,
            suffixes: self.suffixes,
        })
    }
}

/// Reject empty input and any byte outside the alphabet
fn validate(raw: &[u8]) -> std::result::Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }

    match raw.iter().position(|&b| !is_alphabetic(b)) {
        Some(offset) => Err(ValidationError::InvalidCharacter {
            offset,
            byte: raw[offset],
        }),
        None => Ok(()),
    }
}

/// One stable LSD pass keyed on the character at `position + offset`
///
/// Positions are read in their current order, so ties keep the order left by
/// the previous (less significant) pass.
fn radix_pass(
    text: &[u8],
    suffixes: &mut Vec<usize>,
    buckets: &mut [BucketQueue],
    offset: usize,
    config: &SuffixArrayConfig,
) -> Result<()> {
    for &position in suffixes.iter() {
        let target = position + offset;
        let bucket = match text.get(target) {
            None => UNSORTED_BUCKET,
            Some(&byte) => config.bucket_of(byte).ok_or(Error::Validation(
                ValidationError::InvalidCharacter {
                    offset: target,
                    byte,
                },
            ))?,
        };
        buckets[bucket].enqueue(position)?;
    }

    suffixes.clear();
    for bucket in buckets.iter_mut() {
        bucket.drain_into(suffixes)?;
    }

    Ok(())
}

/// Build several independent suffix arrays in parallel
///
/// Results are returned in input order.
pub fn build_all<T>(config: SuffixArrayConfig, inputs: &[T]) -> Vec<Result<SuffixArray>>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|raw| SuffixArray::with_config(config, raw))
        .collect()
}

/// A fully sorted suffix array
///
/// Owns the text and the sorted suffix positions. Suffixes are handed out as
/// slices of the owned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    config: SuffixArrayConfig,
    text: String,
    suffixes: Vec<usize>,
}

impl SuffixArray {
    /// Build a suffix array with default configuration
    pub fn new(raw: impl AsRef<[u8]>) -> Result<Self> {
        SuffixArrayBuilder::with_defaults(raw)?.build()
    }

    /// Build a suffix array with the given configuration
    pub fn with_config(config: SuffixArrayConfig, raw: impl AsRef<[u8]>) -> Result<Self> {
        SuffixArrayBuilder::new(config, raw)?.build()
    }

    /// Get the indexed text
    #[inline]
    pub fn text(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the indexed text as a string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the sorted suffix positions
    #[inline]
    pub fn suffixes(&self) -> &[usize] {
        &self.suffixes
    }

    /// Length of the indexed text
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty input
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn config(&self) -> SuffixArrayConfig {
        self.config
    }

    /// Get the suffix with the given rank in sorted order
    pub fn suffix(&self, rank: usize) -> Option<&str> {
        let &offset = self.suffixes.get(rank)?;
        self.suffix_at(offset)
    }

    /// Get the suffix starting at a text offset
    pub fn suffix_at(&self, offset: usize) -> Option<&str> {
        self.text.get(offset..)
    }

    /// Iterate over `(offset, suffix)` in sorted order
    pub fn sorted_suffixes(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.suffixes
            .iter()
            .map(move |&offset| (offset, &self.text[offset..]))
    }

    /// Iterate over `(offset, suffix)` in text order
    pub fn unsorted_suffixes(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (0..self.text.len()).map(move |offset| (offset, &self.text[offset..]))
    }

    /// Check that every adjacent pair of suffixes is in order
    pub fn is_sorted(&self) -> bool {
        let reader = self.reader();
        self.suffixes.windows(2).all(|pair| {
            reader.compare_suffixes(pair[0], pair[1]) != std::cmp::Ordering::Greater
        })
    }

    /// Borrow a reader for searching this array
    pub fn reader(&self) -> SuffixArrayReader<'_> {
        SuffixArrayReader::new(self)
    }

    /// Get metadata about this suffix array
    pub fn meta(&self) -> SuffixArrayMeta {
        SuffixArrayMeta {
            text_len: self.text.len(),
            suffix_count: self.suffixes.len(),
            radix_passes: self.text.len(),
            bucket_count: self.config.bucket_count(),
            case_insensitive: self.config.case_insensitive,
        }
    }
}
