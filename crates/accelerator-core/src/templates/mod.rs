//! Generated project content
//!
//! This module provides:
//! - Static file bodies per variant (resolver)
//! - `package.json` synthesis with dependency classification (manifest)
//! - [`ArtifactSet`], every generated document bundled before any disk write

pub mod manifest;
pub mod resolver;

use crate::project::ProjectConfig;
use anyhow::{Context, Result};

pub use manifest::{classify, DependencyKind, PackageManifest, Scripts};

pub const ENV_FILE: &str = ".env";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const MANIFEST_FILE: &str = "package.json";
pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const LINT_CONFIG_FILE: &str = "eslint.config.mjs";

/// Everything written into a new project, built once per confirmed configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    /// Entry file path relative to the project root
    pub entry_path: String,
    pub entry_body: String,
    pub manifest: PackageManifest,
    pub manifest_body: String,
    pub tsconfig: Option<String>,
    pub lint_config: Option<String>,
    pub env: String,
    pub gitignore: String,
}

impl ArtifactSet {
    pub fn build(config: &ProjectConfig) -> Result<Self> {
        let manifest = PackageManifest::synthesize(config);
        let manifest_body = manifest
            .to_json()
            .context("Failed to serialize package.json")?;

        Ok(Self {
            entry_path: config.variant.entry_path(),
            entry_body: resolver::entry_file(config.variant).to_string(),
            manifest,
            manifest_body,
            tsconfig: resolver::tsconfig(config.variant).map(str::to_string),
            lint_config: resolver::lint_config(config.variant, config.use_lint).map(str::to_string),
            env: resolver::env_file().to_string(),
            gitignore: resolver::gitignore().to_string(),
        })
    }

    /// Paths of every file this set produces, relative to the project root
    pub fn file_paths(&self) -> Vec<&str> {
        let mut paths = vec![
            self.entry_path.as_str(),
            ENV_FILE,
            GITIGNORE_FILE,
            MANIFEST_FILE,
        ];
        if self.lint_config.is_some() {
            paths.push(LINT_CONFIG_FILE);
        }
        if self.tsconfig.is_some() {
            paths.push(TSCONFIG_FILE);
        }
        paths
    }
}
