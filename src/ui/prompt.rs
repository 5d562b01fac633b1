use crate::error::{GcloneError, Result};
use dialoguer::{Confirm, Input, Select};

/// Interactive questions the CLI may need to ask.
pub trait Prompter {
	/// Pick one of `items`, returning its index.
	fn select(&self, prompt: &str, items: &[&str]) -> Result<usize>;

	/// Ask for a line of text; an empty answer yields `default` when given.
	fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

	fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Prompts on the controlling terminal using dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

fn prompt_err(source: dialoguer::Error) -> GcloneError {
	GcloneError::Prompt { source }
}

impl Prompter for TerminalPrompter {
	fn select(&self, prompt: &str, items: &[&str]) -> Result<usize> {
		Select::new()
			.with_prompt(prompt)
			.items(items)
			.default(0)
			.interact()
			.map_err(prompt_err)
	}

	fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
		let mut input = Input::<String>::new().with_prompt(prompt);
		if let Some(default) = default {
			input = input.default(default.to_string());
		} else {
			input = input.allow_empty(true);
		}
		input.interact_text().map_err(prompt_err)
	}

	fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
		Confirm::new()
			.with_prompt(prompt)
			.default(default)
			.interact()
			.map_err(prompt_err)
	}
}
