//! Suffix array reader
//!
//! Read-only search over a built [`SuffixArray`]. Single lookups use an
//! upper-middle-biased binary search; range lookups use lower/upper bounds
//! to find every occurrence in O(m log n).

use super::builder::SuffixArray;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::ops::Range;
use tracing::trace;

/// Batches with more patterns than this are searched in parallel
pub const PARALLEL_SEARCH_THRESHOLD: usize = 64;

/// Reader for a built suffix array
#[derive(Debug, Clone, Copy)]
pub struct SuffixArrayReader<'a> {
    array: &'a SuffixArray,
    parallel_threshold: usize,
}

impl<'a> SuffixArrayReader<'a> {
    pub fn new(array: &'a SuffixArray) -> Self {
        Self {
            array,
            parallel_threshold: PARALLEL_SEARCH_THRESHOLD,
        }
    }

    /// Set the batch size above which `search_many` runs in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Get the array being searched
    pub fn array(&self) -> &'a SuffixArray {
        self.array
    }

    /// Order the suffix at `offset` relative to `pattern`
    ///
    /// `Equal` means `pattern` is a prefix of the suffix. A suffix that runs
    /// out before the pattern does is `Less`.
    #[inline]
    fn compare_prefix(&self, offset: usize, pattern: &[u8]) -> Ordering {
        let config = self.array.config();
        let suffix = &self.array.text()[offset..];

        for (i, &p) in pattern.iter().enumerate() {
            let Some(&s) = suffix.get(i) else {
                return Ordering::Less;
            };
            let (s, p) = (config.fold(s), config.fold(p));
            if s != p {
                return s.cmp(&p);
            }
        }

        Ordering::Equal
    }

    /// Compare two whole suffixes under the array's configuration
    pub(crate) fn compare_suffixes(&self, a: usize, b: usize) -> Ordering {
        let config = self.array.config();
        let text = self.array.text();
        let left = text[a..].iter().map(|&byte| config.fold(byte));
        let right = text[b..].iter().map(|&byte| config.fold(byte));
        left.cmp(right)
    }

    /// Find a suffix that starts with `pattern`
    ///
    /// Returns its text offset, or `None` for an empty pattern or a miss.
    /// When several suffixes match, the one returned is wherever the
    /// upper-middle-biased probe sequence lands first, which is not
    /// necessarily the lowest offset.
    pub fn search(&self, pattern: impl AsRef<[u8]>) -> Option<usize> {
        let pattern = pattern.as_ref();
        let suffixes = self.array.suffixes();

        if pattern.is_empty() || suffixes.is_empty() {
            return None;
        }

        let mut low = 0;
        let mut high = suffixes.len() - 1;

        while low <= high {
            let mid = high - (high - low) / 2;
            let offset = suffixes[mid];
            let ordering = self.compare_prefix(offset, pattern);
            trace!(low, high, mid, offset, ?ordering, "search probe");

            match ordering {
                Ordering::Equal => return Some(offset),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => {
                    if mid == 0 {
                        break;
                    }
                    high = mid - 1;
                }
            }
        }

        None
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of ranks whose suffixes start with the
    /// pattern. Empty for an empty pattern.
    pub fn search_range(&self, pattern: impl AsRef<[u8]>) -> Range<usize> {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return 0..0;
        }

        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        lo..hi
    }

    /// Find first rank whose suffix is not below the pattern
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let suffixes = self.array.suffixes();
        let mut lo = 0;
        let mut hi = suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.compare_prefix(suffixes[mid], pattern) == Ordering::Less {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find first rank at or after `start` whose suffix is above the pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let suffixes = self.array.suffixes();
        let mut lo = start;
        let mut hi = suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.compare_prefix(suffixes[mid], pattern) == Ordering::Greater {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        lo
    }

    /// Get every text offset where `pattern` occurs, ascending
    pub fn find_all(&self, pattern: impl AsRef<[u8]>) -> Vec<usize> {
        let range = self.search_range(pattern);
        let mut offsets = self.array.suffixes()[range].to_vec();
        offsets.sort_unstable();
        offsets
    }

    /// Get the number of occurrences of a pattern
    pub fn count_matches(&self, pattern: impl AsRef<[u8]>) -> usize {
        self.search_range(pattern).len()
    }

    /// Check if pattern occurs in the text
    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        !self.search_range(pattern).is_empty()
    }

    /// Run `search` for each pattern
    ///
    /// Results line up with `patterns`. Large batches fan out over rayon.
    pub fn search_many<P>(&self, patterns: &[P]) -> Vec<Option<usize>>
    where
        P: AsRef<[u8]> + Sync,
    {
        if patterns.len() > self.parallel_threshold {
            patterns.par_iter().map(|p| self.search(p)).collect()
        } else {
            patterns.iter().map(|p| self.search(p)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::types::SuffixArrayConfig;

    fn banana() -> SuffixArray {
        SuffixArray::new("banana").unwrap()
    }

    #[test]
    fn test_search_basic() {
        let sa = SuffixArray::new("helloworld").unwrap();
        let reader = sa.reader();

        assert_eq!(reader.search("world"), Some(5));
        assert_eq!(reader.search("hello"), Some(0));
        assert_eq!(reader.search("d"), Some(9));
        assert_eq!(reader.search("xyz"), None);
    }

    #[test]
    fn test_search_empty_pattern() {
        let sa = banana();
        assert_eq!(sa.reader().search(""), None);
        assert!(sa.reader().search_range("").is_empty());
    }

    #[test]
    fn test_search_upper_middle_bias() {
        let sa = banana();
        let reader = sa.reader();

        // "ana" occurs at 1 and 3; the first probe hits rank 3 (offset 0),
        // the second lands on rank 1 (offset 3)
        assert_eq!(reader.search("ana"), Some(3));
        assert_eq!(reader.search("a"), Some(3));
        assert_eq!(reader.search("n"), Some(2));
        assert_eq!(reader.search("banana"), Some(0));
    }

    #[test]
    fn test_search_suffix_exhausted() {
        let sa = banana();
        let reader = sa.reader();

        assert_eq!(reader.search("nab"), None);
        assert_eq!(reader.search("bananas"), None);
        assert_eq!(reader.search("aa"), None);
    }

    #[test]
    fn test_search_non_letters_never_match() {
        let sa = banana();
        assert_eq!(sa.reader().search("an1"), None);
        assert_eq!(sa.reader().search(" "), None);
    }

    #[test]
    fn test_search_is_case_sensitive_by_default() {
        let sa = SuffixArray::new("HelloWorld").unwrap();
        let reader = sa.reader();

        assert_eq!(reader.search("World"), Some(5));
        assert_eq!(reader.search("world"), None);
        assert_eq!(reader.search("oW"), Some(4));
    }

    #[test]
    fn test_search_case_insensitive() {
        let config = SuffixArrayConfig {
            case_insensitive: true,
        };
        let sa = SuffixArray::with_config(config, "HelloWorld").unwrap();
        let reader = sa.reader();

        assert_eq!(reader.search("WORLD"), Some(5));
        assert_eq!(reader.search("world"), Some(5));
        assert_eq!(reader.find_all("O"), vec![4, 6]);
    }

    #[test]
    fn test_find_all() {
        let sa = banana();
        let reader = sa.reader();

        assert_eq!(reader.search_range("ana"), 1..3);
        assert_eq!(reader.find_all("ana"), vec![1, 3]);
        assert_eq!(reader.find_all("a"), vec![1, 3, 5]);
        assert_eq!(reader.find_all("na"), vec![2, 4]);
        assert!(reader.find_all("x").is_empty());
    }

    #[test]
    fn test_count_matches() {
        let sa = SuffixArray::new("mississippi").unwrap();
        let reader = sa.reader();

        assert_eq!(reader.count_matches("ss"), 2);
        assert_eq!(reader.count_matches("i"), 4);
        assert_eq!(reader.count_matches("issi"), 2);
        assert_eq!(reader.count_matches("pip"), 0);
        assert!(reader.contains("sip"));
        assert!(!reader.contains("mist"));
    }

    #[test]
    fn test_search_many_matches_sequential() {
        let sa = SuffixArray::new("mississippi").unwrap();
        let patterns = ["ss", "", "ppi", "x", "mississippi", "i"];

        let expected: Vec<_> = patterns.iter().map(|p| sa.reader().search(p)).collect();

        let sequential = sa.reader().search_many(&patterns);
        let parallel = sa.reader().with_parallel_threshold(0).search_many(&patterns);

        assert_eq!(sequential, expected);
        assert_eq!(parallel, expected);
    }

    #[test]
    fn test_compare_suffixes() {
        let sa = banana();
        let reader = sa.reader();
        assert_eq!(reader.compare_suffixes(5, 3), Ordering::Less);
        assert_eq!(reader.compare_suffixes(2, 4), Ordering::Greater);
        assert_eq!(reader.compare_suffixes(1, 1), Ordering::Equal);
    }
}
