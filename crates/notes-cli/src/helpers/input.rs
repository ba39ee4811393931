//! Operator prompting for the interactive menu.
//!
//! On a TTY prompts go through `dialoguer`. Otherwise answers are read one
//! line at a time, so a session can be scripted through stdin.

use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Source of operator answers.
///
/// `Ok(None)` means input has ended (EOF, or the selection was cancelled).
pub trait Prompter {
    /// Offer a numbered list of actions and return the raw answer.
    fn choose(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<String>>;

    /// Ask for free text. An empty answer becomes `default` when one is given.
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>>;
}

/// Prompter backed by `dialoguer` widgets.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn choose(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<String>> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| anyhow::anyhow!("Failed to read selection: {}", e))?;
        Ok(selection.map(|idx| (idx + 1).to_string()))
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(value) = default {
            input = input.default(value.to_string());
        }
        let answer = input
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        Ok(Some(answer))
    }
}

/// Prompter that reads answers line by line from any reader.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn choose(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<String>> {
        writeln!(self.writer)?;
        for (idx, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}. {}", idx + 1, item)?;
        }
        write!(self.writer, "{} (From 1-{}): ", prompt, items.len())?;
        self.writer.flush()?;
        Ok(self.read_answer()?.map(|answer| answer.trim().to_string()))
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
        match default {
            Some(value) => write!(self.writer, "{} (ex. {}): ", prompt, value)?,
            None => write!(self.writer, "{}: ", prompt)?,
        }
        self.writer.flush()?;
        let answer = self.read_answer()?;
        Ok(answer.map(|text| match default {
            Some(value) if text.is_empty() => value.to_string(),
            _ => text,
        }))
    }
}
