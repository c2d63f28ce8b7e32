// Fri Oct 16 2026 - Alex

pub mod core;

pub use self::core::Engine;
