//! Finished project configuration and language variant

use super::dependencies::DependencySet;
use std::fmt;

/// Language flavor of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    JavaScript,
    TypeScript,
}

impl Variant {
    /// Parse a user token, case-insensitively
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "js" | "javascript" => Some(Variant::JavaScript),
            "ts" | "typescript" => Some(Variant::TypeScript),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::JavaScript => "JavaScript",
            Variant::TypeScript => "TypeScript",
        }
    }

    /// Short token, also the source file extension
    pub fn token(&self) -> &'static str {
        match self {
            Variant::JavaScript => "js",
            Variant::TypeScript => "ts",
        }
    }

    /// Path of the server entry file relative to the project root
    pub fn entry_path(&self) -> String {
        format!("src/server.{}", self.token())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// User decisions collected by the configuration flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub variant: Variant,
    pub dependencies: DependencySet,
    pub use_lint: bool,
}

impl ProjectConfig {
    /// Multi-line summary shown before confirmation
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Project name: {}", self.name),
            format!("Language:     {}", self.variant),
            format!("ESLint:       {}", if self.use_lint { "Yes" } else { "No" }),
            "Dependencies:".to_string(),
        ];
        if self.dependencies.is_empty() {
            lines.push("  (none)".to_string());
        }
        lines.extend(self.dependencies.iter().map(|d| format!("  ✓ {}", d)));
        lines.join("\n")
    }
}
