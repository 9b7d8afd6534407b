//! node-accelerator - Node.js server project scaffolding

use accelerator_core::tui::CreateArgs;
use accelerator_core::{ProductConfig, ProjectConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Node Accelerator product configuration
#[derive(Clone)]
pub struct AcceleratorConfig;

impl ProductConfig for AcceleratorConfig {
    fn display_name(&self) -> &'static str {
        "Node CLI Accelerator"
    }

    fn default_dependencies(&self) -> &'static [&'static str] {
        &["express", "nodemon", "better-sqlite3", "dotenv", "cors"]
    }

    fn runtime_docs_url(&self) -> &'static str {
        "https://nodejs.org/en/download"
    }

    fn next_steps(&self, dir: &Path, config: &ProjectConfig) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push("npm run dev".to_string());

        if config.use_lint {
            steps.push("npm run lint".to_string());
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "node-accelerator")]
#[command(about = "CLI for scaffolding Node.js server projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Node.js project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name (also the directory created)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Language to use (js, ts, javascript or typescript)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Skip Node.js and npm detection
    #[arg(long = "skip-runtime-check")]
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            language: args.language,
            directory: args.directory,
            skip_runtime_check: args.skip_runtime_check,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = AcceleratorConfig;

    // No subcommand provided, default to create behavior (interactive mode)
    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        None => CreateArgs::default(),
    };

    let result = accelerator_core::run(&config, create_args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use accelerator_core::Variant;

    fn project(use_lint: bool) -> ProjectConfig {
        ProjectConfig {
            name: "demo".to_string(),
            variant: Variant::JavaScript,
            dependencies: ["express"].into_iter().collect(),
            use_lint,
        }
    }

    #[test]
    fn test_next_steps_include_cd_for_other_directory() {
        let steps = AcceleratorConfig.next_steps(Path::new("/tmp/somewhere/demo"), &project(true));
        assert_eq!(
            steps,
            vec!["cd /tmp/somewhere/demo", "npm run dev", "npm run lint"]
        );
    }

    #[test]
    fn test_next_steps_without_lint() {
        let steps = AcceleratorConfig.next_steps(Path::new("/tmp/somewhere/demo"), &project(false));
        assert!(!steps.iter().any(|s| s.contains("lint")));
    }

    #[test]
    fn test_create_args_parse() {
        let args = Args::parse_from([
            "node-accelerator",
            "create",
            "--name",
            "demo",
            "-l",
            "ts",
            "--yes",
        ]);
        let Some(Command::Create(create)) = args.command else {
            panic!("expected create subcommand");
        };
        let create: CreateArgs = create.into();
        assert_eq!(create.name.as_deref(), Some("demo"));
        assert_eq!(create.language.as_deref(), Some("ts"));
        assert!(create.yes);
        assert!(!create.skip_runtime_check);
    }
}
