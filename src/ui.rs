// Terminal helpers: `dialoguer` prompts for credentials and an `indicatif`
// spinner shown while a request is in flight. Both draw on stderr so the
// diagnostics on stdout stay clean.

use std::io;
use std::time::Duration;

use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};

use crate::credentials::SecretInput;

/// Prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl SecretInput for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let line: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(line)
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        // `Password` does not echo what is typed.
        Password::new().with_prompt(prompt).interact()
    }
}

/// Start a spinner with `msg`. Callers clear it with `finish_and_clear`.
pub fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
