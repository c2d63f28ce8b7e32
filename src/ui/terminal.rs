// Sat Oct 17 2026 - Alex

use colored::*;

pub struct Terminal {
    use_color: bool,
    quiet: bool,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            use_color: true,
            quiet: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        if !use_color {
            colored::control::set_override(false);
        }
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn print_info(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            println!("{} {}", "[*]".blue(), message);
        } else {
            println!("[*] {}", message);
        }
    }

    pub fn print_success(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            println!("{} {}", "[+]".green(), message);
        } else {
            println!("[+] {}", message);
        }
    }

    pub fn print_warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            println!("{} {}", "[!]".yellow(), message.yellow());
        } else {
            println!("[!] {}", message);
        }
    }

    /// Errors are printed even in quiet mode.
    pub fn print_error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "[!]".red().bold(), message.red());
        } else {
            eprintln!("[!] {}", message);
        }
    }

    pub fn print_key_value(&self, key: &str, value: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            println!("    {}: {}", key.cyan(), value);
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Machine-readable offset list, one decimal offset per line.
    pub fn print_offsets(&self, offsets: &[u64]) {
        for offset in offsets {
            println!("{}", offset);
        }
    }
}
