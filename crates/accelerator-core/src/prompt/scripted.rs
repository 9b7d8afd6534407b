//! Prompter fed from a fixed list of answers, for tests

use super::Prompter;
use anyhow::Result;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
    Note(String, String),
}

pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub messages: Vec<Message>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                Message::Error(e) => Some(e.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str, _default: Option<&str>) -> Result<String> {
        self.questions.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => anyhow::bail!("No scripted answer left for '{}'", question),
        }
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.messages.push(Message::Info(message.to_string()));
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.messages.push(Message::Success(message.to_string()));
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.messages.push(Message::Warning(message.to_string()));
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.messages.push(Message::Error(message.to_string()));
        Ok(())
    }

    fn note(&mut self, title: &str, body: &str) -> Result<()> {
        self.messages
            .push(Message::Note(title.to_string(), body.to_string()));
        Ok(())
    }
}
