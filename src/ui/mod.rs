// Sat Oct 17 2026 - Alex

pub mod cli;
pub mod terminal;

pub use cli::{Args, Command, CommandHandler, Outcome};
pub use terminal::Terminal;
