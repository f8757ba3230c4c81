//! Integration tests for suffix array construction and search.
//!
//! Property tests compare the radix-sorted index and the search layer
//! against naive reference implementations.

use proptest::prelude::*;
use sfx::highlight::highlight;
use sfx::index::suffix_array::{SuffixArray, SuffixArrayConfig, build_all};
use sfx::{Error, ValidationError};

/// Sort suffix offsets with the standard library as a reference
fn naive_suffix_array(text: &[u8], fold: bool) -> Vec<usize> {
    let key = |offset: usize| -> Vec<u8> {
        text[offset..]
            .iter()
            .map(|&b| if fold { b.to_ascii_lowercase() } else { b })
            .collect()
    };
    let mut offsets: Vec<usize> = (0..text.len()).collect();
    offsets.sort_by_key(|&offset| key(offset));
    offsets
}

/// Every offset where `pattern` occurs, by scanning
fn naive_find_all(text: &[u8], pattern: &[u8], fold: bool) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| {
            let window = &text[i..i + pattern.len()];
            if fold {
                window.eq_ignore_ascii_case(pattern)
            } else {
                window == pattern
            }
        })
        .collect()
}

#[test]
fn banana_suffix_order() {
    let sa = SuffixArray::new("banana").unwrap();
    let sorted: Vec<&str> = sa.sorted_suffixes().map(|(_, s)| s).collect();

    assert_eq!(sorted, vec!["a", "ana", "anana", "banana", "na", "nana"]);
    assert_eq!(sa.suffixes(), &[5, 3, 1, 0, 4, 2]);
}

#[test]
fn helloworld_search() {
    let sa = SuffixArray::new("helloworld").unwrap();
    let reader = sa.reader();

    assert_eq!(reader.search("world"), Some(5));
    assert_eq!(reader.search("xyz"), None);
    assert_eq!(reader.search(""), None);
}

#[test]
fn rejects_empty_and_non_letters() {
    assert_eq!(
        SuffixArray::new("").unwrap_err(),
        Error::Validation(ValidationError::Empty)
    );

    for input in ["abc1", "two words", "dash-ed", "tab\there", "end!", "\0"] {
        assert!(
            matches!(
                SuffixArray::new(input),
                Err(Error::Validation(ValidationError::InvalidCharacter { .. }))
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn highlight_near_end_is_clipped() {
    let sa = SuffixArray::new("thequickbrownfoxjumpsoverthelazydog").unwrap();
    let position = sa.reader().search("lazydog").unwrap();
    assert_eq!(position, 28);

    let h = highlight(&sa, position, 7).unwrap();
    assert_eq!(h.line(), "...mpsoverthelazydog");
    assert!(!h.truncated_right());
    assert!(h.underline().ends_with("^^^^^^^"));
    assert_eq!(h.underline().len(), h.line().len());
}

#[test]
fn parallel_builds_match_sequential() {
    let inputs = ["mississippi", "abracadabra", "ZzYyXx", "q"];
    let config = SuffixArrayConfig::default();

    let parallel = build_all(config, &inputs);
    for (input, built) in inputs.iter().zip(parallel) {
        assert_eq!(built.unwrap(), SuffixArray::new(input).unwrap());
    }
}

proptest! {
    #[test]
    fn index_is_sorted_permutation(text in "[a-zA-Z]{1,60}") {
        let sa = SuffixArray::new(&text).unwrap();

        prop_assert_eq!(sa.suffixes().len(), text.len());
        prop_assert!(sa.is_sorted());
        let expected = naive_suffix_array(text.as_bytes(), false);
        prop_assert_eq!(sa.suffixes(), expected.as_slice());
    }

    #[test]
    fn case_insensitive_index_is_sorted(text in "[a-zA-Z]{1,60}") {
        let config = SuffixArrayConfig { case_insensitive: true };
        let sa = SuffixArray::with_config(config, &text).unwrap();

        prop_assert!(sa.is_sorted());
        let expected = naive_suffix_array(text.as_bytes(), true);
        prop_assert_eq!(sa.suffixes(), expected.as_slice());
    }

    #[test]
    fn build_is_deterministic(text in "[a-z]{1,40}") {
        let first = SuffixArray::new(&text).unwrap();
        let second = SuffixArray::new(&text).unwrap();
        prop_assert_eq!(first.suffixes(), second.suffixes());
    }

    #[test]
    fn search_agrees_with_scan(
        text in "[aAbB]{1,40}",
        pattern in "[aAbB]{1,4}",
        case_insensitive in any::<bool>(),
    ) {
        let config = SuffixArrayConfig { case_insensitive };
        let sa = SuffixArray::with_config(config, &text).unwrap();
        let reader = sa.reader();
        let expected = naive_find_all(text.as_bytes(), pattern.as_bytes(), case_insensitive);

        match reader.search(&pattern) {
            Some(position) => {
                prop_assert!(expected.contains(&position));
            }
            None => prop_assert!(expected.is_empty()),
        }

        prop_assert_eq!(reader.find_all(&pattern), expected.clone());
        prop_assert_eq!(reader.count_matches(&pattern), expected.len());
        prop_assert_eq!(reader.contains(&pattern), !expected.is_empty());
    }

    #[test]
    fn any_non_letter_is_rejected(
        prefix in "[a-z]{0,10}",
        bad in "[0-9 .,;!?\\-]",
        suffix in "[a-z]{0,10}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let rejected = matches!(
            SuffixArray::new(&input),
            Err(Error::Validation(ValidationError::InvalidCharacter { offset, .. })) if offset == prefix.len()
        );
        prop_assert!(rejected);
    }

    #[test]
    fn found_matches_highlight_cleanly(text in "[a-z]{1,50}", start in 0usize..50, len in 1usize..6) {
        prop_assume!(start + len <= text.len());
        let pattern = &text[start..start + len];
        let sa = SuffixArray::new(&text).unwrap();

        let position = sa.reader().search(pattern);
        prop_assert!(position.is_some());
        let position = position.unwrap();
        prop_assert_eq!(&text[position..position + len], pattern);

        let h = highlight(&sa, position, len).unwrap();
        prop_assert_eq!(h.matched(), pattern);
        prop_assert_eq!(h.underline().trim_start().len(), len);
    }
}
