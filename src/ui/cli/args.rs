// Sat Oct 17 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hexpatch")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Find and patch byte sequences in files of any size", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Window size in bytes; overrides the config file.
    #[arg(short, long, global = true)]
    pub buffer_size: Option<usize>,

    /// JSON config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Print only the matched offsets.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the offsets of a pattern.
    Find(FindArgs),
    /// Replace a pattern with a sequence of the same length.
    Replace(ReplaceArgs),
    /// Write a sequence of any length where a pattern matches.
    Overwrite(OverwriteArgs),
    /// Write a sequence at an explicit offset.
    Paste(PasteArgs),
}

/// How many matches a command acts on. Defaults to the first one.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct Selection {
    #[arg(short = 'n', long, conflicts_with = "all")]
    pub count: Option<usize>,

    #[arg(short, long)]
    pub all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    First,
    Count(usize),
    All,
}

impl Selection {
    pub fn amount(&self) -> Amount {
        match (self.all, self.count) {
            (true, _) => Amount::All,
            (false, Some(count)) => Amount::Count(count),
            (false, None) => Amount::First,
        }
    }
}

#[derive(Parser, Debug)]
pub struct FindArgs {
    pub file: PathBuf,

    /// Hex pattern, `??` marks a wildcard byte.
    pub pattern: String,

    #[command(flatten)]
    pub selection: Selection,

    /// Start offset, decimal or 0x-prefixed hex.
    #[arg(short, long, default_value = "0", value_parser = parse_offset)]
    pub from: u64,
}

#[derive(Parser, Debug)]
pub struct ReplaceArgs {
    pub file: PathBuf,

    pub pattern: String,

    /// Wildcard bytes in the replacement keep the file's bytes.
    pub replacement: String,

    #[command(flatten)]
    pub selection: Selection,
}

#[derive(Parser, Debug)]
pub struct OverwriteArgs {
    pub file: PathBuf,

    pub pattern: String,

    pub insert: String,

    #[command(flatten)]
    pub selection: Selection,
}

#[derive(Parser, Debug)]
pub struct PasteArgs {
    pub file: PathBuf,

    #[arg(value_parser = parse_offset)]
    pub offset: u64,

    pub insert: String,
}

pub fn parse_offset(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid offset {:?}: {}", s, e))
}
