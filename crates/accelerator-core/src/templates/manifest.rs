//! `package.json` synthesis and dependency classification

use crate::project::packages::{
    LINT_TOOLING, PROCESS_WATCHER, TYPESCRIPT_LINT_TOOLING, TYPESCRIPT_TOOLCHAIN, TYPES_PREFIX,
};
use crate::project::{ProjectConfig, Variant};
use serde::Serialize;
use std::collections::BTreeMap;

/// Version marker meaning "resolve to latest at install time"
pub const LATEST: &str = "latest";

/// Initial version of every generated project
pub const INITIAL_VERSION: &str = "1.0.0";

/// Packages that only support development, beyond the fixed tables
const DEV_ONLY_EXTRA: &[&str] = &["typescript-eslint"];

/// Prefixes whose packages are always development-only
const DEV_PREFIXES: &[&str] = &[TYPES_PREFIX, "@typescript-eslint/"];

/// Dependency bucket in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Development,
}

/// Classify a package name; anything not known as tooling is a runtime dependency
pub fn classify(name: &str) -> DependencyKind {
    let is_dev = DEV_PREFIXES.iter().any(|p| name.starts_with(p))
        || name == PROCESS_WATCHER
        || LINT_TOOLING.contains(&name)
        || TYPESCRIPT_LINT_TOOLING.contains(&name)
        || TYPESCRIPT_TOOLCHAIN.contains(&name)
        || DEV_ONLY_EXTRA.contains(&name);

    if is_dev {
        DependencyKind::Development
    } else {
        DependencyKind::Runtime
    }
}

/// npm scripts block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub start: String,
    pub dev: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint: Option<String>,
    #[serde(rename = "lint:fix", skip_serializing_if = "Option::is_none")]
    pub lint_fix: Option<String>,
}

impl Scripts {
    pub fn for_variant(variant: Variant, use_lint: bool) -> Self {
        let mut scripts = match variant {
            Variant::JavaScript => Scripts {
                start: "node src/server.js".to_string(),
                dev: "nodemon src/server.js".to_string(),
                build: None,
                lint: None,
                lint_fix: None,
            },
            Variant::TypeScript => Scripts {
                start: "tsc && node dist/server.js".to_string(),
                dev: "nodemon --watch src --ext ts --exec ts-node src/server.ts".to_string(),
                build: Some("tsc".to_string()),
                lint: None,
                lint_fix: None,
            },
        };

        if use_lint {
            scripts.lint = Some("eslint .".to_string());
            scripts.lint_fix = Some("eslint . --fix".to_string());
        }

        scripts
    }
}

/// Generated `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub main: String,
    pub scripts: Scripts,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Build the manifest for a finished configuration
    pub fn synthesize(config: &ProjectConfig) -> Self {
        let mut dependencies = BTreeMap::new();
        let mut dev_dependencies = BTreeMap::new();

        for name in config.dependencies.iter() {
            let bucket = match classify(name) {
                DependencyKind::Runtime => &mut dependencies,
                DependencyKind::Development => &mut dev_dependencies,
            };
            bucket.insert(name.to_string(), LATEST.to_string());
        }

        let main = match config.variant {
            Variant::JavaScript => "src/server.js",
            Variant::TypeScript => "dist/server.js",
        };

        Self {
            name: config.name.clone(),
            version: INITIAL_VERSION.to_string(),
            main: main.to_string(),
            scripts: Scripts::for_variant(config.variant, config.use_lint),
            dependencies,
            dev_dependencies,
        }
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// All dependency names, runtime first
    pub fn all_dependency_names(&self) -> Vec<String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .cloned()
            .collect()
    }
}
