//! Static file bodies keyed by variant and flags

use crate::project::Variant;

const SERVER_JS: &str = include_str!("../../templates/server.js");
const SERVER_TS: &str = include_str!("../../templates/server.ts");
const ESLINT_JS: &str = include_str!("../../templates/eslint/javascript.mjs");
const ESLINT_TS: &str = include_str!("../../templates/eslint/typescript.mjs");
const TSCONFIG: &str = include_str!("../../templates/tsconfig.json");
const ENV_FILE: &str = include_str!("../../templates/env");
const GITIGNORE: &str = include_str!("../../templates/gitignore");

/// Server entry file for a variant
pub fn entry_file(variant: Variant) -> &'static str {
    match variant {
        Variant::JavaScript => SERVER_JS,
        Variant::TypeScript => SERVER_TS,
    }
}

/// `eslint.config.mjs` body, or `None` when lint tooling is off
pub fn lint_config(variant: Variant, use_lint: bool) -> Option<&'static str> {
    if !use_lint {
        return None;
    }
    Some(match variant {
        Variant::JavaScript => ESLINT_JS,
        Variant::TypeScript => ESLINT_TS,
    })
}

/// `tsconfig.json` body, TypeScript only
pub fn tsconfig(variant: Variant) -> Option<&'static str> {
    match variant {
        Variant::TypeScript => Some(TSCONFIG),
        Variant::JavaScript => None,
    }
}

pub fn env_file() -> &'static str {
    ENV_FILE
}

pub fn gitignore() -> &'static str {
    GITIGNORE
}
