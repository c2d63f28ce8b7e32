// Sat Oct 17 2026 - Alex

use hexpatch::ui::cli::{self, Outcome};
use hexpatch::ui::Terminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(Outcome::Matched) => ExitCode::SUCCESS,
        Ok(Outcome::NotMatched) => ExitCode::from(1),
        Err(e) => {
            Terminal::new().print_error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}
