//! Runtime detection and external commands
//!
//! This module provides:
//! - Node.js / npm detection with a minimum-version advisory
//! - The command executor used for package manager calls

pub mod check;
pub mod command;

pub use check::{check_node, check_npm, check_runtimes, node_version_warning, RuntimeInfo};
pub use command::{CommandError, CommandOutput, CommandRunner, Invocation, SystemRunner};
