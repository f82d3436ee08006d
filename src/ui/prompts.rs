//! ui::prompts
//!
//! Interactive prompts over a line-oriented reader and a writer.
//!
//! # Design
//!
//! [`Console`] owns both streams so the whole questionnaire can run against
//! in-memory buffers in tests. Menu prompts never give up on bad input: they
//! re-ask until a listed key arrives. The only way out is end of input,
//! reported as [`PromptError::Cancelled`].

use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::output;
use crate::core::types::MenuChoice;

/// Label printed before every menu answer.
pub const SELECTION_LABEL: &str = "Seçiminiz: ";

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A question with its ordered single-key options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub question: String,
    pub options: Vec<(char, String)>,
}

impl Menu {
    /// Create a menu from a question and `(key, description)` pairs.
    pub fn new<K, D>(question: impl Into<String>, options: impl IntoIterator<Item = (K, D)>) -> Self
    where
        K: Into<char>,
        D: Into<String>,
    {
        Self {
            question: question.into(),
            options: options
                .into_iter()
                .map(|(key, description)| (key.into(), description.into()))
                .collect(),
        }
    }

    /// Build the menu for a [`MenuChoice`] type.
    pub fn for_choice<T: MenuChoice>(question: impl Into<String>) -> Self {
        Self::new(question, T::ALL.iter().map(|c| (c.key(), c.label())))
    }

    /// Valid keys, lowercased, in display order.
    pub fn valid_keys(&self) -> Vec<char> {
        self.options
            .iter()
            .map(|(key, _)| key.to_lowercase().next().unwrap_or(*key))
            .collect()
    }
}

/// Reduce a raw answer to the key it selects.
///
/// Trims, lowercases and takes the first character. Returns `None` for
/// blank input.
pub fn normalize(raw: &str) -> Option<char> {
    raw.trim().to_lowercase().chars().next()
}

/// Input and output streams for one session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Ask a menu question until a valid key is entered.
    ///
    /// Returns the position of the chosen option in `menu.options`.
    pub fn select(&mut self, menu: &Menu) -> Result<usize, PromptError> {
        write!(self.output, "{}", output::format_menu(menu))?;
        let valid = menu.valid_keys();

        loop {
            let answer = self.line(SELECTION_LABEL)?;
            let position = normalize(&answer).and_then(|key| valid.iter().position(|v| *v == key));
            match position {
                Some(index) => return Ok(index),
                None => self.say(output::format_invalid_choice(&valid))?,
            }
        }
    }

    /// Like [`Console::select`], returning the lowercased key.
    pub fn choose_key(&mut self, menu: &Menu) -> Result<char, PromptError> {
        let index = self.select(menu)?;
        Ok(menu.valid_keys()[index])
    }

    /// Ask a menu question built from `T`'s options.
    pub fn choose<T: MenuChoice>(&mut self, question: &str) -> Result<T, PromptError> {
        // The menu lists T::ALL in order, so positions line up.
        let index = self.select(&Menu::for_choice::<T>(question))?;
        Ok(T::ALL[index])
    }

    /// Print a label and read one line of free-form text.
    ///
    /// Only the line terminator is removed; empty input is returned as-is.
    pub fn line(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Cancelled);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }
}
