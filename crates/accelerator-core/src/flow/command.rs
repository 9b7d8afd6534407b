//! Dependency editor command grammar
//!
//! ```text
//! command := "add" name+ | "remove" name+ | "skip" | <empty line>
//! ```
//!
//! Verbs are matched case-insensitively; package names are kept as typed.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Add(Vec<String>),
    Remove(Vec<String>),
    Skip,
}

/// Why an editor line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingAddNames,
    MissingRemoveNames,
    UnexpectedSkipArguments,
    UnknownVerb(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingAddNames => {
                write!(f, "Please specify packages to add (e.g., \"add express mongoose\")")
            }
            UsageError::MissingRemoveNames => {
                write!(f, "Please specify packages to remove (e.g., \"remove express\")")
            }
            UsageError::UnexpectedSkipArguments => {
                write!(f, "\"skip\" does not take any packages")
            }
            UsageError::UnknownVerb(verb) => {
                write!(
                    f,
                    "Invalid command \"{}\". Use \"add\", \"remove\", or \"skip\"",
                    verb
                )
            }
        }
    }
}

impl std::error::Error for UsageError {}

impl EditCommand {
    pub fn parse(line: &str) -> Result<Self, UsageError> {
        let mut words = line.split_whitespace();

        let Some(verb) = words.next() else {
            return Ok(EditCommand::Skip);
        };
        let names: Vec<String> = words.map(str::to_string).collect();

        match verb.to_lowercase().as_str() {
            "add" if names.is_empty() => Err(UsageError::MissingAddNames),
            "add" => Ok(EditCommand::Add(names)),
            "remove" if names.is_empty() => Err(UsageError::MissingRemoveNames),
            "remove" => Ok(EditCommand::Remove(names)),
            "skip" if names.is_empty() => Ok(EditCommand::Skip),
            "skip" => Err(UsageError::UnexpectedSkipArguments),
            _ => Err(UsageError::UnknownVerb(verb.to_string())),
        }
    }
}
