//! Interactive prompts: choosing from a list, confirming, entering text.
//!
//! Every prompt may come back without an answer when the user cancels; the
//! caller treats that as cancellation of the current action.
//!
//! # User Interface
//!
//! The selection list supports:
//! - Arrow keys or vim-style (j/k) navigation, wrapping at both ends
//! - Enter to choose
//! - '/' to filter the list (fuzzy search), Escape to stop filtering
//! - 'q', Escape or Ctrl-C to cancel

pub mod input;
pub mod types;
pub mod ui;

use std::io::{stdin, stdout};

use cmake_pilot_core::error::Result;

pub use types::Choice;

/// The three questions the dispatcher can ask.
pub trait Prompter {
    /// Returns the value of the chosen entry, or `None` if cancelled.
    fn select<T: Clone>(&mut self, prompt: &str, choices: &[Choice<T>]) -> Result<Option<T>>;

    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Returns the entered text, or `None` if nothing was entered.
    fn text(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Returns the entered text as typed, which may be empty.
    ///
    /// `None` means the user gave no answer at all.
    fn value(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select<T: Clone>(&mut self, prompt: &str, choices: &[Choice<T>]) -> Result<Option<T>> {
        let labels: Vec<String> = choices.iter().map(|choice| choice.label.clone()).collect();
        let selected = ui::prompt_for_choice(prompt, &labels)?;
        Ok(selected.map(|index| choices[index].value.clone()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        input::confirm(&mut stdin().lock(), &mut stdout(), prompt)
    }

    fn text(&mut self, prompt: &str) -> Result<Option<String>> {
        input::prompt_text(&mut stdin().lock(), &mut stdout(), prompt)
    }

    fn value(&mut self, prompt: &str) -> Result<Option<String>> {
        input::prompt_value(&mut stdin().lock(), &mut stdout(), prompt)
    }
}
