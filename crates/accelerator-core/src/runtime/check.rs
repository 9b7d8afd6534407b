//! Runtime detection for Node.js and npm

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release that runs the flat ESLint config
pub const MIN_NODE_VERSION: &str = "18.18.0";

/// Where to send users without Node.js
pub const NODE_DOWNLOAD_URL: &str = "https://nodejs.org/en/download";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let program = if cfg!(windows) && program == "npm" {
        "npm.cmd"
    } else {
        program
    };
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

/// Detect Node.js and npm; fails listing whichever is missing
pub fn check_runtimes() -> Result<Vec<RuntimeInfo>> {
    ensure_available(vec![check_node(), check_npm()])
}

fn ensure_available(runtimes: Vec<RuntimeInfo>) -> Result<Vec<RuntimeInfo>> {
    let missing: Vec<String> = runtimes
        .iter()
        .filter(|r| !r.available)
        .map(|r| format!("  - {} (install from {})", r.name, NODE_DOWNLOAD_URL))
        .collect();

    if !missing.is_empty() {
        anyhow::bail!("Missing required runtimes:\n{}", missing.join("\n"));
    }

    Ok(runtimes)
}

/// Parse version string, tolerating a leading 'v' as printed by `node --version`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Warning for Node.js releases too old for the generated lint setup
pub fn node_version_warning(node_version: &str) -> Option<String> {
    let installed = parse_version(node_version).ok()?;
    let minimum = Version::parse(MIN_NODE_VERSION).ok()?;

    if installed < minimum {
        Some(format!(
            "Node.js {} detected. ESLint flat config needs {} or newer; consider upgrading.",
            node_version.trim(),
            MIN_NODE_VERSION
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &'static str, available: bool) -> RuntimeInfo {
        RuntimeInfo {
            name,
            version: available.then(|| "1.0.0".to_string()),
            available,
        }
    }

    #[test]
    fn test_parse_version_strips_v() {
        assert_eq!(parse_version("v20.11.1\n").unwrap(), Version::new(20, 11, 1));
        assert_eq!(parse_version("10.2.4").unwrap(), Version::new(10, 2, 4));
        assert!(parse_version("not-a-version").is_err());
    }

    #[test]
    fn test_old_node_warns() {
        let warning = node_version_warning("v16.20.2");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains(MIN_NODE_VERSION));
    }

    #[test]
    fn test_current_node_does_not_warn() {
        assert!(node_version_warning("v18.18.0").is_none());
        assert!(node_version_warning("v22.3.0").is_none());
    }

    #[test]
    fn test_unparseable_node_version_does_not_warn() {
        assert!(node_version_warning("unknown").is_none());
    }

    #[test]
    fn test_ensure_available_lists_missing() {
        let err = ensure_available(vec![info("Node.js", true), info("npm", false)]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("npm"));
        assert!(!message.contains("- Node.js"));

        let ok = ensure_available(vec![info("Node.js", true), info("npm", true)]).unwrap();
        assert_eq!(ok.len(), 2);
    }
}
