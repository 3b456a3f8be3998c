//! Spinner shown while a step is running.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    pub fn succeed(self, message: &str) {
        self.bar
            .finish_with_message(format!("{} {}", "✔".green(), message.green()));
    }

    pub fn fail(self, message: &str) {
        self.bar
            .abandon_with_message(format!("{} {}", "✗".red(), message.red()));
    }
}
