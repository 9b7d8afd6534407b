//! External command execution
//!
//! Package manager calls go through [`CommandRunner`] so the materializer can
//! be driven by a fake in tests. [`SystemRunner`] echoes the command, streams
//! its output and waits for it to exit. There is no timeout.

use async_trait::async_trait;
use colored::Colorize;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `npm init -y`
    pub fn npm_init() -> Self {
        Self::new("npm", ["init", "-y"])
    }

    /// `npm install --no-save <names...>`
    ///
    /// The synthesized manifest already records every dependency, so the
    /// install must not rewrite it.
    pub fn npm_install<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = vec!["install".to_string(), "--no-save".to_string()];
        args.extend(names.into_iter().map(Into::into));
        Self {
            program: "npm".to_string(),
            args,
        }
    }

    /// `npx tsc --init`
    pub fn tsc_init() -> Self {
        Self::new("npx", ["tsc", "--init"])
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {}", exit_code(.code))]
    Failed { command: String, code: Option<i32> },
}

fn exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion in `cwd`; a non-zero exit is an error
    async fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<CommandOutput, CommandError>;
}

/// Runs commands as child processes of this one
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

/// npm and npx are batch shims on Windows
fn resolve_program(program: &str) -> String {
    if cfg!(windows) && matches!(program, "npm" | "npx") {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<CommandOutput, CommandError> {
        let command = invocation.to_string();
        println!("{} {}", "Running:".dimmed(), command.yellow());

        let spawn_error = |source: std::io::Error| CommandError::Spawn {
            command: command.clone(),
            source,
        };

        let mut child = TokioCommand::new(resolve_program(&invocation.program))
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        let mut output = CommandOutput::default();

        if let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) {
            let mut stdout_reader = BufReader::new(stdout).lines();
            let mut stderr_reader = BufReader::new(stderr).lines();
            let mut stdout_open = true;
            let mut stderr_open = true;

            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => {
                                println!("  {}", line);
                                output.stdout.push_str(&line);
                                output.stdout.push('\n');
                            }
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => {
                                eprintln!("  {}", line.yellow());
                                output.stderr.push_str(&line);
                                output.stderr.push('\n');
                            }
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        }

        let status = child.wait().await.map_err(spawn_error)?;
        if status.success() {
            Ok(output)
        } else {
            Err(CommandError::Failed {
                command,
                code: status.code(),
            })
        }
    }
}
