// Fri Oct 16 2026 - Alex

pub mod config;
pub mod engine;
pub mod pattern;
pub mod stream;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use config::{Config, ConfigError};
pub use engine::Engine;
pub use pattern::{Pattern, PatternBuilder, PatternError};
pub use stream::{Advance, StreamError};
