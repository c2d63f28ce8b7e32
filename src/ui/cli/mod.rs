// Sat Oct 17 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Amount, Args, Command, FindArgs, OverwriteArgs, PasteArgs, ReplaceArgs, Selection};
pub use handler::{CommandHandler, Outcome};

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run() -> anyhow::Result<Outcome> {
    let args = parse_args();
    let handler = CommandHandler::from_args(&args)?;
    handler.setup_logging();
    handler.execute(args.command)
}
