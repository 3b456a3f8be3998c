//! Testing utilities: a scripted [`Terminal`] for driving prompts.

use crate::error::{Api2tsError, Result};
use crate::prompt::Terminal;
use std::collections::VecDeque;

/// A [`Terminal`] that replays canned answers and records what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    selects: VecDeque<usize>,
    confirms: VecDeque<bool>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    pub fn with_selects(mut self, selects: impl IntoIterator<Item = usize>) -> Self {
        self.selects.extend(selects);
        self
    }

    pub fn with_confirms(mut self, confirms: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(confirms);
        self
    }

    /// How many times `prompt` was shown.
    pub fn prompts_for(&self, prompt: &str) -> usize {
        self.prompts.iter().filter(|p| p.as_str() == prompt).count()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn exhausted(prompt: &str) -> Api2tsError {
        Api2tsError::Prompt(format!("no scripted answer for '{}'", prompt))
    }
}

impl Terminal for ScriptedTerminal {
    fn input(&mut self, prompt: &str, _default: Option<&str>) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or_else(|| Self::exhausted(prompt))
    }

    fn select(&mut self, prompt: &str, items: &[String], _default: usize) -> Result<usize> {
        self.prompts.push(prompt.to_string());
        let index = self.selects.pop_front().ok_or_else(|| Self::exhausted(prompt))?;
        if index >= items.len() {
            return Err(Api2tsError::Prompt(format!(
                "scripted choice {} out of range for '{}'",
                index, prompt
            )));
        }
        Ok(index)
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        self.confirms.pop_front().ok_or_else(|| Self::exhausted(prompt))
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
