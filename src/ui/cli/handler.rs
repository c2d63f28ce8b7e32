// Sat Oct 17 2026 - Alex

use super::args::{Amount, Args, Command, FindArgs, OverwriteArgs, PasteArgs, ReplaceArgs};
use crate::config::Config;
use crate::engine::Engine;
use crate::pattern::{parse_hex_with, Pattern};
use crate::ui::terminal::Terminal;
use crate::utils::logging::LoggingUtils;
use crate::utils::{format_bytes, format_offsets, pluralize};
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Whether a command found anything to act on. Drives the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NotMatched,
}

impl Outcome {
    fn from_count(count: usize) -> Self {
        if count == 0 {
            Outcome::NotMatched
        } else {
            Outcome::Matched
        }
    }
}

pub struct CommandHandler {
    config: Config,
    terminal: Terminal,
}

impl CommandHandler {
    pub fn new(config: Config, terminal: Terminal) -> Self {
        Self { config, terminal }
    }

    /// Loads the config file if one was given, then applies command line overrides.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(buffer_size) = args.buffer_size {
            config.buffer_size = buffer_size;
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }
        if args.no_color {
            config.color = false;
        }
        config.validate()?;

        let terminal = Terminal::new()
            .with_color(config.color)
            .with_quiet(args.quiet);

        Ok(Self::new(config, terminal))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn setup_logging(&self) {
        LoggingUtils::init_logger(self.config.level_filter());
    }

    pub fn execute(&self, command: Command) -> anyhow::Result<Outcome> {
        match command {
            Command::Find(args) => self.handle_find(args),
            Command::Replace(args) => self.handle_replace(args),
            Command::Overwrite(args) => self.handle_overwrite(args),
            Command::Paste(args) => self.handle_paste(args),
        }
    }

    fn parse(&self, text: &str) -> anyhow::Result<Pattern> {
        parse_hex_with(text, &self.config.wildcard_token)
            .with_context(|| format!("invalid hex sequence {:?}", text))
    }

    fn open_read(&self, path: &Path) -> anyhow::Result<Engine<File>> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Ok(Engine::from_config(file, &self.config)?)
    }

    fn open_write(&self, path: &Path) -> anyhow::Result<Engine<File>> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("failed to open {} for writing", path.display()))?;
        Ok(Engine::from_config(file, &self.config)?)
    }

    fn handle_find(&self, args: FindArgs) -> anyhow::Result<Outcome> {
        let pattern = self.parse(&args.pattern)?;
        let mut engine = self.open_read(&args.file)?;

        self.terminal.print_info(&format!(
            "Searching {} ({}) for {}",
            args.file.display(),
            format_bytes(engine.stream_len()?),
            pattern
        ));

        let offsets: Vec<u64> = match args.selection.amount() {
            Amount::First => engine.find_from(&pattern, args.from)?.into_iter().collect(),
            Amount::Count(count) => engine.find_n_from(&pattern, args.from, count)?,
            Amount::All => engine.find_all_from(&pattern, args.from)?,
        };

        self.report("Found", &offsets);
        Ok(Outcome::from_count(offsets.len()))
    }

    fn handle_replace(&self, args: ReplaceArgs) -> anyhow::Result<Outcome> {
        let pattern = self.parse(&args.pattern)?;
        let replacement = self.parse(&args.replacement)?;
        let mut engine = self.open_write(&args.file)?;

        let offsets: Vec<u64> = match args.selection.amount() {
            Amount::First => engine.replace_once(&pattern, &replacement)?.into_iter().collect(),
            Amount::Count(count) => engine.replace_n(&pattern, &replacement, count)?,
            Amount::All => engine.replace_all(&pattern, &replacement)?,
        };

        self.report("Replaced", &offsets);
        Ok(Outcome::from_count(offsets.len()))
    }

    fn handle_overwrite(&self, args: OverwriteArgs) -> anyhow::Result<Outcome> {
        let pattern = self.parse(&args.pattern)?;
        let insert = self.parse(&args.insert)?;
        let mut engine = self.open_write(&args.file)?;

        let offsets: Vec<u64> = match args.selection.amount() {
            Amount::First => engine.overwrite_first(&pattern, &insert)?.into_iter().collect(),
            Amount::Count(count) => engine.overwrite_n(&pattern, &insert, count)?,
            Amount::All => engine.overwrite_all(&pattern, &insert)?,
        };

        self.report("Overwrote", &offsets);
        Ok(Outcome::from_count(offsets.len()))
    }

    fn handle_paste(&self, args: PasteArgs) -> anyhow::Result<Outcome> {
        let insert = self.parse(&args.insert)?;
        let mut engine = self.open_write(&args.file)?;

        engine.paste_at(args.offset, &insert)?;

        self.terminal.print_success(&format!(
            "Pasted {} at 0x{:X}",
            pluralize(insert.len(), "byte", "bytes"),
            args.offset
        ));
        Ok(Outcome::Matched)
    }

    fn report(&self, verb: &str, offsets: &[u64]) {
        if self.terminal.is_quiet() {
            self.terminal.print_offsets(offsets);
            return;
        }

        if offsets.is_empty() {
            self.terminal.print_warning("No matches");
            return;
        }

        self.terminal.print_success(&format!(
            "{} {}",
            verb,
            pluralize(offsets.len(), "match", "matches")
        ));
        self.terminal.print_key_value("offsets", &format_offsets(offsets));
    }
}
