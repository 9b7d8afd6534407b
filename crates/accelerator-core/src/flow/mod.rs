//! Configuration flow: collects a [`ProjectConfig`] step by step
//!
//! States run in a fixed order:
//!
//! ```text
//! CollectName -> SelectVariant -> ReviewDependencies -> [EditDependencies]
//!   -> InjectVariantDependencies -> OptionalLintInjection -> ConfirmSummary
//! ```
//!
//! The only loop is the dependency editor, which is re-entered for as long as
//! the dependency set is empty.

pub mod command;

use crate::project::packages::{
    types_package_for, LINT_TOOLING, TYPESCRIPT_LINT_TOOLING, TYPESCRIPT_TOOLCHAIN,
};
use crate::project::{AddOutcome, DependencySet, ProjectConfig, Variant};
use crate::prompt::{self, PromptStep, Prompter};
use anyhow::Result;
pub use command::{EditCommand, UsageError};

/// Answers supplied up front (command line flags)
#[derive(Debug, Clone, Default)]
pub struct FlowOptions {
    /// Pre-answered project name; still validated
    pub name: Option<String>,

    /// Pre-selected language variant
    pub variant: Option<Variant>,

    /// Resolve every yes/no gate to its default without asking
    pub assume_yes: bool,
}

/// Result of a completed flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Confirmed(ProjectConfig),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowState {
    CollectName,
    SelectVariant,
    ReviewDependencies,
    EditDependencies,
    InjectVariantDependencies,
    OptionalLintInjection,
    ConfirmSummary,
}

/// Owns the in-progress configuration until it is confirmed
pub struct ConfigurationFlow {
    default_name: String,
    options: FlowOptions,
    name: String,
    variant: Variant,
    dependencies: DependencySet,
    use_lint: bool,
}

impl ConfigurationFlow {
    pub fn new<I, S>(default_name: &str, default_dependencies: I, options: FlowOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            default_name: default_name.to_string(),
            options,
            name: String::new(),
            variant: Variant::default(),
            dependencies: default_dependencies.into_iter().collect(),
            use_lint: false,
        }
    }

    /// Drive the state machine to completion
    pub fn run<P: Prompter + ?Sized>(mut self, prompter: &mut P) -> Result<FlowOutcome> {
        let mut state = FlowState::CollectName;

        loop {
            state = match state {
                FlowState::CollectName => {
                    self.collect_name(prompter)?;
                    FlowState::SelectVariant
                }
                FlowState::SelectVariant => {
                    self.select_variant(prompter)?;
                    FlowState::ReviewDependencies
                }
                FlowState::ReviewDependencies => {
                    prompter.note("Default dependencies", &self.dependencies.to_string())?;
                    let customize =
                        self.confirm(prompter, "Would you like to customize dependencies?", false)?;

                    if customize {
                        FlowState::EditDependencies
                    } else if self.dependencies.is_empty() {
                        prompter.error("Your project needs at least one dependency!")?;
                        FlowState::EditDependencies
                    } else {
                        FlowState::InjectVariantDependencies
                    }
                }
                FlowState::EditDependencies => {
                    self.edit_dependencies(prompter)?;
                    if self.dependencies.is_empty() {
                        prompter.error("Your project needs at least one dependency!")?;
                        FlowState::EditDependencies
                    } else {
                        FlowState::InjectVariantDependencies
                    }
                }
                FlowState::InjectVariantDependencies => {
                    if self.variant == Variant::TypeScript {
                        inject_variant_dependencies(&mut self.dependencies, self.variant);
                        prompter.success("TypeScript dependencies added automatically")?;
                    }
                    FlowState::OptionalLintInjection
                }
                FlowState::OptionalLintInjection => {
                    self.use_lint = self.confirm(
                        prompter,
                        "Would you like to include ESLint for code linting?",
                        true,
                    )?;
                    if self.use_lint {
                        inject_lint_dependencies(&mut self.dependencies, self.variant);
                        prompter.success("ESLint dependencies added")?;
                    }
                    FlowState::ConfirmSummary
                }
                FlowState::ConfirmSummary => {
                    let config = ProjectConfig {
                        name: self.name.clone(),
                        variant: self.variant,
                        dependencies: self.dependencies.clone(),
                        use_lint: self.use_lint,
                    };
                    prompter.note("Project summary", &config.summary())?;

                    let confirmed =
                        self.confirm(prompter, "Create project with these settings?", true)?;
                    return Ok(if confirmed {
                        FlowOutcome::Confirmed(config)
                    } else {
                        FlowOutcome::Cancelled
                    });
                }
            };
        }
    }

    fn collect_name<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<()> {
        self.name = match &self.options.name {
            Some(preset) => prompt::validate_name(preset).map_err(anyhow::Error::msg)?,
            None => prompt::name_step(&self.default_name).ask(prompter)?,
        };
        prompter.success(&format!("Project name: {}", self.name))
    }

    fn select_variant<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<()> {
        self.variant = match self.options.variant {
            Some(variant) => variant,
            None => {
                prompter.info("Choose your preferred language: js (JavaScript) or ts (TypeScript)")?;
                prompt::variant_step().ask(prompter)?
            }
        };
        prompter.success(&format!("{} selected", self.variant))
    }

    fn confirm<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
        question: &str,
        default: bool,
    ) -> Result<bool> {
        if self.options.assume_yes {
            return Ok(default);
        }
        prompt::yes_no_step(question, default).ask(prompter)
    }

    /// Apply add/remove commands until the user skips
    fn edit_dependencies<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<()> {
        prompter.note("Current dependencies", &self.dependencies.to_string())?;
        prompter.info(
            "Commands: add <package> ... | remove <package> ... | skip (continue with current dependencies)",
        )?;

        let step = PromptStep::new("What would you like to do?", |answer: &str| {
            EditCommand::parse(answer).map_err(|e| e.to_string())
        })
        .with_default("skip");

        loop {
            match step.ask(prompter)? {
                EditCommand::Skip => return Ok(()),
                EditCommand::Add(names) => {
                    let outcome = self.dependencies.add(&names);
                    for name in &outcome.rejected {
                        prompter.error(&format!("{} is already in the list", name))?;
                    }
                    if !outcome.added.is_empty() {
                        prompter.success(&format!("Added: {}", outcome.added.join(", ")))?;
                        prompter
                            .note("Current dependencies", &self.dependencies.to_string())?;
                    }
                }
                EditCommand::Remove(names) => {
                    let outcome = self.dependencies.remove(&names);
                    for name in &outcome.missing {
                        prompter.error(&format!("{} is not in the list", name))?;
                    }
                    if !outcome.removed.is_empty() {
                        prompter.success(&format!("Removed: {}", outcome.removed.join(", ")))?;
                        prompter
                            .note("Current dependencies", &self.dependencies.to_string())?;
                    }
                }
            }
        }
    }
}

/// Append the variant's toolchain and one declarations package per existing dependency
pub fn inject_variant_dependencies(dependencies: &mut DependencySet, variant: Variant) -> AddOutcome {
    if variant != Variant::TypeScript {
        return AddOutcome::default();
    }

    let mut additions: Vec<String> = TYPESCRIPT_TOOLCHAIN.iter().map(|s| s.to_string()).collect();
    additions.extend(dependencies.iter().filter_map(types_package_for));
    dependencies.add(additions)
}

/// Append lint tooling, with the TypeScript parser and plugin for TS projects
pub fn inject_lint_dependencies(dependencies: &mut DependencySet, variant: Variant) -> AddOutcome {
    let mut outcome = dependencies.add(LINT_TOOLING);
    if variant == Variant::TypeScript {
        let ts = dependencies.add(TYPESCRIPT_LINT_TOOLING);
        outcome.added.extend(ts.added);
        outcome.rejected.extend(ts.rejected);
    }
    outcome
}
