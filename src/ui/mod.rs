//! UI/Progress presentation layer
//!
//! This module handles:
//! - Spinner feedback while a registration is in flight
//! - Rendering repository rows for the terminal
//!
//! Progress goes through the `ProgressReporter` trait so commands can stay
//! silent when stdout is not a terminal.

pub mod display;
pub mod formatter;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a single long-running step
pub trait ProgressReporter: Send + Sync {
    /// Start showing `message`
    fn start(&mut self, message: &str);

    /// Finish and clear the progress line
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive spinner reporter
pub struct InteractiveProgressReporter {
    spinner: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self { spinner: None }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

/// Silent progress reporter for non-interactive output
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _message: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter for the current stdout
pub fn reporter_for_terminal() -> Box<dyn ProgressReporter> {
    if console::Term::stdout().is_term() {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    }
}
