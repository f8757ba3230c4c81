#![no_main]

use libfuzzer_sys::fuzz_target;
use sfx::index::SuffixArray;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either be rejected or produce a sorted index
    if let Ok(array) = SuffixArray::new(data) {
        assert!(array.is_sorted());
        assert_eq!(array.suffixes().len(), data.len());
    }
});
