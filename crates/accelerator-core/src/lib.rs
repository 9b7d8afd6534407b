//! Accelerator Core - Shared library for Node.js project scaffolding
//!
//! This library collects a handful of decisions from the user (project name,
//! language, dependencies, lint tooling) and turns them into a ready-to-run
//! Node.js server project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model and pure generation** - `DependencySet`, `ProjectConfig`,
//!   template bodies and `package.json` synthesis, bundled as an `ArtifactSet`
//! - **Layer 2: Workflow** - validated `PromptStep`s driven by the
//!   `ConfigurationFlow` state machine, and the `ProjectMaterializer` that writes
//!   files and runs the package manager through a `CommandRunner`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use accelerator_core::{ArtifactSet, ProjectConfig, ProjectMaterializer, SystemRunner, Variant};
//!
//! let config = ProjectConfig {
//!     name: "demo".to_string(),
//!     variant: Variant::JavaScript,
//!     dependencies: ["express", "cors"].into_iter().collect(),
//!     use_lint: false,
//! };
//! let artifacts = ArtifactSet::build(&config)?;
//! let root = ProjectMaterializer::new(SystemRunner, ".")
//!     .create(&config, &artifacts)
//!     .await?;
//! ```

pub mod flow;
pub mod materializer;
pub mod product;
pub mod project;
pub mod prompt;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use flow::{ConfigurationFlow, FlowOptions, FlowOutcome};
pub use materializer::{MaterializeError, ProjectMaterializer};
pub use product::ProductConfig;
pub use project::{DependencySet, ProjectConfig, Variant};
pub use prompt::{PromptStep, Prompter};
pub use runtime::{CommandError, CommandRunner, Invocation, SystemRunner};
pub use templates::{ArtifactSet, PackageManifest};

#[cfg(feature = "tui")]
pub use tui::run;
