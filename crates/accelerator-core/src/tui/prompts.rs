//! Charm-style CLI prompts using cliclack

use crate::flow::{ConfigurationFlow, FlowOptions, FlowOutcome};
use crate::materializer::ProjectMaterializer;
use crate::product::ProductConfig;
use crate::project::{ProjectConfig, Variant};
use crate::prompt::Prompter;
use crate::runtime::{check, SystemRunner};
use crate::templates::ArtifactSet;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, skips the name prompt
    pub name: Option<String>,

    /// Language token (js/ts), skips the language prompt
    pub language: Option<String>,

    /// Parent directory the project is created in
    pub directory: Option<PathBuf>,

    /// Skip Node.js / npm detection
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// [`Prompter`] backed by cliclack inputs and log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let mut input = cliclack::input(question).required(false);
        if let Some(default) = default {
            input = input.placeholder(default);
        }
        Ok(input.interact()?)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::info(message)?)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::success(message)?)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::warning(message)?)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::error(message)?)
    }

    fn note(&mut self, title: &str, body: &str) -> Result<()> {
        Ok(cliclack::note(title, body)?)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(product: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("{} v{}", product.display_name(), cli_version))?;

    // Step 1: Check Node.js and npm
    if args.skip_runtime_check {
        cliclack::log::info("Skipping runtime check")?;
    } else {
        handle_runtime_check(product, &args)?;
    }

    // Step 2: Resolve where the project goes
    let parent_dir = select_parent_directory(&args)?;

    // Step 3: Collect the configuration
    let options = FlowOptions {
        name: args.name.clone(),
        variant: parse_language_arg(args.language.as_deref())?,
        assume_yes: args.yes,
    };
    let flow = ConfigurationFlow::new(
        product.default_project_name(),
        product.default_dependencies(),
        options,
    );

    let config = match flow.run(&mut CliclackPrompter)? {
        FlowOutcome::Confirmed(config) => config,
        FlowOutcome::Cancelled => {
            cliclack::outro_cancel("Project creation cancelled")?;
            return Ok(());
        }
    };

    // Step 4: Generate and write
    let artifacts = ArtifactSet::build(&config)?;
    let project_dir = create_project(&config, &artifacts, &parent_dir).await?;

    // Step 5: Show next steps
    print_next_steps(product, &project_dir, &config)?;

    Ok(())
}

fn parse_language_arg(language: Option<&str>) -> Result<Option<Variant>> {
    match language {
        None => Ok(None),
        Some(token) => match Variant::parse(token) {
            Some(variant) => Ok(Some(variant)),
            None => anyhow::bail!("Unknown language '{}'. Use \"js\" or \"ts\".", token),
        },
    }
}

fn handle_runtime_check<C: ProductConfig>(product: &C, args: &CreateArgs) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let error = match check::check_runtimes() {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

            let node_warning = runtimes
                .iter()
                .find(|r| r.name == "Node.js")
                .and_then(|r| r.version.as_deref())
                .and_then(check::node_version_warning);
            if let Some(warning) = node_warning {
                cliclack::log::warning(warning)?;
            }
            return Ok(());
        }
        Err(e) => e,
    };

    spinner.stop("Missing runtimes");
    cliclack::log::error(format!("{}", error))?;

    // In non-interactive mode, just continue
    if args.yes {
        cliclack::log::info("Continuing without Node.js (--yes mode)")?;
        return Ok(());
    }

    let action: &str = cliclack::select("What would you like to do?")
        .item("docs", format!("Open Node.js downloads ({})", product.runtime_docs_url()), "")
        .item("continue", "Continue anyway", "files are written, installs will fail")
        .item("cancel", "Cancel", "")
        .interact()?;

    match action {
        "docs" => {
            open::that(product.runtime_docs_url())?;
            cliclack::outro("After installing Node.js, run this command again.")?;
            std::process::exit(0);
        }
        "cancel" => anyhow::bail!("Setup cancelled."),
        _ => {
            cliclack::log::info("Continuing without Node.js")?;
        }
    }

    Ok(())
}

fn select_parent_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Parent directory does not exist: {}", path.display());
    }

    Ok(path)
}

async fn create_project(
    config: &ProjectConfig,
    artifacts: &ArtifactSet,
    parent_dir: &Path,
) -> Result<PathBuf> {
    cliclack::log::step(format!(
        "Creating {} in {}",
        config.name,
        parent_dir.display()
    ))?;

    let materializer = ProjectMaterializer::new(SystemRunner, parent_dir);
    match materializer.create(config, artifacts).await {
        Ok(project_dir) => {
            cliclack::log::success(format!(
                "Created {} files in {}",
                artifacts.file_paths().len(),
                project_dir.display()
            ))?;
            Ok(project_dir)
        }
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Failed to create project");
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    product: &C,
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<()> {
    let steps = product.next_steps(project_dir, config);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_arg() {
        assert_eq!(parse_language_arg(None).unwrap(), None);
        assert_eq!(
            parse_language_arg(Some("TS")).unwrap(),
            Some(Variant::TypeScript)
        );
        assert!(parse_language_arg(Some("ruby")).is_err());
    }

    #[test]
    fn test_select_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = CreateArgs {
            directory: Some(dir.path().to_path_buf()),
            ..CreateArgs::default()
        };
        assert_eq!(select_parent_directory(&args).unwrap(), dir.path());

        let args = CreateArgs {
            directory: Some(dir.path().join("missing")),
            ..CreateArgs::default()
        };
        assert!(select_parent_directory(&args).is_err());
    }
}
