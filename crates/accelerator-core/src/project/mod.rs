//! Project configuration model

pub mod config;
pub mod dependencies;
pub mod packages;

pub use config::{ProjectConfig, Variant};
pub use dependencies::{AddOutcome, DependencySet, RemoveOutcome};
