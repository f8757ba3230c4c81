#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sfx::highlight::highlight;
use sfx::index::SuffixArray;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    start: usize,
    length: usize,
}

fuzz_target!(|input: Input<'_>| {
    let Ok(array) = SuffixArray::new(input.text) else {
        return;
    };
    let reader = array.reader();

    if let Some(position) = reader.search(input.pattern) {
        assert!(input.text[position..].starts_with(input.pattern));
        assert!(highlight(&array, position, input.pattern.len()).is_ok());
    }

    // Out-of-range highlights are reported, never a panic
    let _ = highlight(&array, input.start, input.length);
});
