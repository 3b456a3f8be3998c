//! Interactive prompts for the URL, type name and save location.

use crate::config::Configuration;
use crate::error::Result;
use crate::paths::SavePaths;
use crate::validate::{validate_existing_dir, validate_type_name, validate_url};
use colored::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;

/// Terminal operations the prompter needs.
pub trait Terminal {
    /// Read a line of text. An empty answer is returned as-is.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Print a line for the user.
    fn message(&mut self, text: &str);
}

/// [`Terminal`] backed by dialoguer.
pub struct DialoguerTerminal {
    theme: ColorfulTheme,
}

impl DialoguerTerminal {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for DialoguerTerminal {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn message(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Where the user chose to save the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveChoice {
    Desktop,
    Current,
    Custom,
}

impl SaveChoice {
    const ALL: [SaveChoice; 3] = [SaveChoice::Desktop, SaveChoice::Current, SaveChoice::Custom];

    fn label(self, paths: &SavePaths) -> String {
        match self {
            SaveChoice::Desktop => format!("💻 Desktop ({})", paths.desktop.display()),
            SaveChoice::Current => format!("📁 Current directory ({})", paths.current.display()),
            SaveChoice::Custom => "🔍 Custom path".to_string(),
        }
    }
}

/// Collects a [`Configuration`] from the user, re-asking on invalid input.
pub struct Prompter<'a, T: Terminal> {
    terminal: &'a mut T,
    paths: &'a SavePaths,
    default_name: &'a str,
}

impl<'a, T: Terminal> Prompter<'a, T> {
    pub fn new(terminal: &'a mut T, paths: &'a SavePaths, default_name: &'a str) -> Self {
        Self {
            terminal,
            paths,
            default_name,
        }
    }

    pub fn prompt_configuration(&mut self) -> Result<Configuration> {
        self.terminal.message(
            &"\n👋 Welcome! Let's generate TypeScript types from your API.\n"
                .cyan()
                .to_string(),
        );

        let url = self.ask_until_valid("🌐 API URL", None, validate_url)?;
        let default_name = self.default_name;
        let name = self.ask_until_valid("📝 Type name", Some(default_name), validate_type_name)?;
        let path = self.prompt_save_path()?;

        Ok(Configuration { url, name, path })
    }

    fn prompt_save_path(&mut self) -> Result<PathBuf> {
        let items: Vec<String> = SaveChoice::ALL
            .iter()
            .map(|choice| choice.label(self.paths))
            .collect();
        let index = self.terminal.select("📂 Save location", &items, 0)?;

        match SaveChoice::ALL.get(index).copied().unwrap_or(SaveChoice::Custom) {
            SaveChoice::Desktop => Ok(self.paths.desktop.clone()),
            SaveChoice::Current => Ok(self.paths.current.clone()),
            SaveChoice::Custom => {
                let current = self.paths.current.to_string_lossy().to_string();
                self.ask_until_valid("📁 Save path", Some(current.as_str()), validate_existing_dir)
            }
        }
    }

    /// Ask until `validate` accepts the answer. Empty answers take `default`.
    fn ask_until_valid<V>(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: impl Fn(&str) -> Result<V>,
    ) -> Result<V> {
        loop {
            let answer = self.terminal.input(prompt, default)?;
            let answer = match (answer.trim().is_empty(), default) {
                (true, Some(default)) => default.to_string(),
                _ => answer,
            };

            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.terminal.message(&format!("{} {}", "✗".red(), e.to_string().red())),
            }
        }
    }
}
