pub mod normalizer;
pub mod parser;

pub use normalizer::normalize;
pub use parser::{RangeDescriptor, RangeEndpoint, parse_bounded_range, parse_range_info};
