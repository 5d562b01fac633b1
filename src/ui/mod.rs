//! Terminal output and prompts for the gclone CLI.

pub mod prompt;

pub use prompt::{Prompter, TerminalPrompter};

use colored::Colorize;

pub fn info(message: impl AsRef<str>) {
	println!("{} {}", "ℹ".blue(), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
	println!("{} {}", "✓".green(), message.as_ref());
}

pub fn warning(message: impl AsRef<str>) {
	println!("{} {}", "!".yellow(), message.as_ref().yellow());
}

/// Bold, underlined section heading preceded by a blank line.
pub fn section(title: impl AsRef<str>) {
	println!();
	println!("{}", title.as_ref().bold().underline());
}

pub fn key_value(key: &str, value: &str) {
	println!("  {}: {}", key.bold(), value);
}

pub fn highlight(text: &str) -> String {
	text.cyan().bold().to_string()
}

/// Print multi-line text indented under the preceding message.
pub fn block(text: &str) {
	for line in text.lines() {
		println!("    {line}");
	}
}
