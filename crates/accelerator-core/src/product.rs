//! Product configuration trait for CLI binaries
//!
//! The binary supplies its identity and the defaults the configuration flow
//! starts from.

use crate::project::ProjectConfig;
use std::path::Path;

/// Configuration trait for a scaffolding CLI
///
/// Implementors define:
/// - Product identity (display name)
/// - The default project name and dependency set
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Name offered when the user just presses enter
    fn default_project_name(&self) -> &'static str {
        "my-project"
    }

    /// Dependencies every new project starts with
    fn default_dependencies(&self) -> &'static [&'static str];

    /// Page opened when Node.js is missing
    fn runtime_docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, config: &ProjectConfig) -> Vec<String>;
}
