mod decoder;
mod extractor;
mod types;

pub use decoder::{decode_rmc, parse_coordinate, parse_date};
pub use extractor::SentenceExtractor;
pub use types::GeoFix;
