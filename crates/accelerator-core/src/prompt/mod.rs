//! Validated question/answer steps
//!
//! A [`PromptStep`] asks one question through a [`Prompter`] and keeps asking
//! until the answer passes its validator. Empty answers resolve to the step's
//! default when it has one. There is no retry limit.

#[cfg(test)]
pub(crate) mod scripted;

use crate::project::Variant;
use anyhow::Result;

/// Line-oriented interaction with the user
pub trait Prompter {
    /// Ask a question and block until a line is entered.
    /// `default` is only a display hint; defaulting is applied by [`PromptStep`].
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String>;

    fn info(&mut self, message: &str) -> Result<()>;

    fn success(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;

    /// Show a titled block of text (dependency lists, summaries)
    fn note(&mut self, title: &str, body: &str) -> Result<()>;
}

/// A single question with an optional default and a validator
pub struct PromptStep<'q, F> {
    question: &'q str,
    default: Option<&'q str>,
    validator: F,
}

/// Validator signature of the canonical steps
pub type Validator<T> = fn(&str) -> Result<T, String>;

impl<'q, F> PromptStep<'q, F> {
    pub fn new(question: &'q str, validator: F) -> Self {
        Self {
            question,
            default: None,
            validator,
        }
    }

    pub fn with_default(mut self, default: &'q str) -> Self {
        self.default = Some(default);
        self
    }

    /// Ask until a valid answer is given
    pub fn ask<T, P>(&self, prompter: &mut P) -> Result<T>
    where
        F: Fn(&str) -> Result<T, String>,
        P: Prompter + ?Sized,
    {
        loop {
            let raw = prompter.ask(self.question, self.default)?;
            match self.resolve(&raw) {
                Ok(value) => return Ok(value),
                Err(reason) => prompter.error(&reason)?,
            }
        }
    }

    /// Validate one raw answer without any interaction
    pub fn resolve<T>(&self, raw: &str) -> Result<T, String>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        let trimmed = raw.trim();
        let answer = match (trimmed.is_empty(), self.default) {
            (true, Some(default)) => default,
            (true, None) => return Err("An answer is required".to_string()),
            (false, _) => trimmed,
        };
        (self.validator)(answer)
    }
}

/// Project names must be non-empty after trimming
pub fn validate_name(answer: &str) -> Result<String, String> {
    let name = answer.trim();
    if name.is_empty() {
        Err("Project name cannot be empty".to_string())
    } else {
        Ok(name.to_string())
    }
}

pub fn validate_variant(answer: &str) -> Result<Variant, String> {
    Variant::parse(answer).ok_or_else(|| "Please enter \"js\" or \"ts\"".to_string())
}

pub fn validate_yes_no(answer: &str) -> Result<bool, String> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err("Please answer \"yes\" or \"no\"".to_string()),
    }
}

/// Free-text project name prompt
pub fn name_step(default: &str) -> PromptStep<'_, Validator<String>> {
    PromptStep::new("Enter your project name", validate_name as Validator<String>)
        .with_default(default)
}

/// Closed-choice language prompt, defaulting to JavaScript
pub fn variant_step() -> PromptStep<'static, Validator<Variant>> {
    PromptStep::new("Select language (js/ts)", validate_variant as Validator<Variant>)
        .with_default("js")
}

/// Yes/no gate
pub fn yes_no_step(question: &str, default: bool) -> PromptStep<'_, Validator<bool>> {
    PromptStep::new(question, validate_yes_no as Validator<bool>)
        .with_default(if default { "yes" } else { "no" })
}
