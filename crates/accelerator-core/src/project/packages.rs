//! Fixed package tables shared by the flow and the manifest synthesizer

/// Prefix of DefinitelyTyped declaration packages
pub const TYPES_PREFIX: &str = "@types/";

/// Added to every TypeScript project
pub const TYPESCRIPT_TOOLCHAIN: &[&str] = &["typescript", "ts-node", "@types/node"];

/// Added when lint tooling is accepted
pub const LINT_TOOLING: &[&str] = &["eslint", "@eslint/js", "globals"];

/// Added on top of [`LINT_TOOLING`] for TypeScript projects
pub const TYPESCRIPT_LINT_TOOLING: &[&str] =
    &["@typescript-eslint/eslint-plugin", "@typescript-eslint/parser"];

/// Restarts the server on file changes during development
pub const PROCESS_WATCHER: &str = "nodemon";

/// Declarations package for a runtime dependency.
///
/// Scoped packages follow the DefinitelyTyped naming (`@scope/pkg` becomes
/// `@types/scope__pkg`). Declaration packages themselves get none.
pub fn types_package_for(name: &str) -> Option<String> {
    if name.starts_with(TYPES_PREFIX) {
        return None;
    }
    match name.strip_prefix('@') {
        Some(scoped) => {
            let (scope, pkg) = scoped.split_once('/')?;
            Some(format!("{}{}__{}", TYPES_PREFIX, scope, pkg))
        }
        None => Some(format!("{}{}", TYPES_PREFIX, name)),
    }
}
