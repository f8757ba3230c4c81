pub mod queue;
pub mod suffix_array;

pub use queue::BucketQueue;
pub use suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, SuffixArrayReader};
