// Fri Oct 16 2026 - Alex

pub mod error;
pub mod hex;
pub mod normalize;
pub mod pattern;

pub use error::PatternError;
pub use hex::{parse_hex, parse_hex_with};
pub use normalize::{normalize, EdgeRun, ReducedPattern};
pub use pattern::{Pattern, PatternBuilder};
