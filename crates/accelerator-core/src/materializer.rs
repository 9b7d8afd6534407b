//! Writes a confirmed project to disk and runs the package manager in it

use crate::project::{ProjectConfig, Variant};
use crate::runtime::command::{CommandError, CommandRunner, Invocation};
use crate::templates::{
    ArtifactSet, ENV_FILE, GITIGNORE_FILE, LINT_CONFIG_FILE, MANIFEST_FILE, TSCONFIG_FILE,
};
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Directories created in every project, relative to its root
pub const PROJECT_DIRECTORIES: &[&str] = &[
    "src",
    "src/shared/middleware",
    "src/shared/utils",
    "src/shared/config",
    "src/modules/users/controllers",
    "src/modules/users/services",
    "src/modules/users/models",
    "src/modules/users/repositories",
    "src/modules/auth/controllers",
    "src/modules/auth/services",
    "src/modules/auth/middleware",
    "public",
    "test/integration",
    "test/unit",
];

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("Directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Parent directory does not exist: {}", .0.display())]
    ParentMissing(PathBuf),

    #[error("Invalid project name \"{0}\": must be a single directory name")]
    InvalidName(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Command(#[from] CommandError),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> MaterializeError + '_ {
    move |source| MaterializeError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates projects under a parent directory.
///
/// Steps run in order and the first failure stops the run. Nothing written
/// before the failure is removed.
pub struct ProjectMaterializer<R> {
    runner: R,
    parent_dir: PathBuf,
}

impl<R: CommandRunner> ProjectMaterializer<R> {
    pub fn new(runner: R, parent_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            parent_dir: parent_dir.into(),
        }
    }

    /// Project root for a configuration
    pub fn target_dir(&self, config: &ProjectConfig) -> PathBuf {
        self.parent_dir.join(&config.name)
    }

    /// Materialize the project; returns its root directory
    pub async fn create(
        &self,
        config: &ProjectConfig,
        artifacts: &ArtifactSet,
    ) -> Result<PathBuf, MaterializeError> {
        if !is_single_component(&config.name) {
            return Err(MaterializeError::InvalidName(config.name.clone()));
        }
        if !fs::metadata(&self.parent_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
        {
            return Err(MaterializeError::ParentMissing(self.parent_dir.clone()));
        }

        let root = self.target_dir(config);

        // Conflict check: never merge into an existing directory
        if fs::try_exists(&root).await.map_err(io_error(&root))? {
            return Err(MaterializeError::DirectoryExists(root));
        }

        for dir in PROJECT_DIRECTORIES {
            let path = root.join(dir);
            fs::create_dir_all(&path).await.map_err(io_error(&path))?;
        }

        write_file(&root, &artifacts.entry_path, &artifacts.entry_body).await?;
        write_file(&root, ENV_FILE, &artifacts.env).await?;
        write_file(&root, GITIGNORE_FILE, &artifacts.gitignore).await?;

        // npm init writes its own package.json; the synthesized one replaces it
        self.runner.run(&Invocation::npm_init(), &root).await?;
        write_file(&root, MANIFEST_FILE, &artifacts.manifest_body).await?;

        if let Some(lint_config) = &artifacts.lint_config {
            write_file(&root, LINT_CONFIG_FILE, lint_config).await?;
        }

        let install = Invocation::npm_install(artifacts.manifest.all_dependency_names());
        self.runner.run(&install, &root).await?;

        if config.variant == Variant::TypeScript {
            self.runner.run(&Invocation::tsc_init(), &root).await?;
            if let Some(tsconfig) = &artifacts.tsconfig {
                write_file(&root, TSCONFIG_FILE, tsconfig).await?;
            }
        }

        Ok(root)
    }
}

/// The project must land directly under the parent directory
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

async fn write_file(root: &Path, relative: &str, contents: &str) -> Result<(), MaterializeError> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(io_error(parent))?;
    }
    fs::write(&path, contents).await.map_err(io_error(&path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::command::CommandOutput;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records invocations, imitates npm/tsc side effects and fails on request
    #[derive(Default)]
    struct FakeRunner {
        calls: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl FakeRunner {
        fn failing_on(arg: &'static str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: Some(arg),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(
            &self,
            invocation: &Invocation,
            cwd: &Path,
        ) -> Result<CommandOutput, CommandError> {
            self.calls.lock().unwrap().push(invocation.to_string());

            if let Some(arg) = self.fail_on {
                if invocation.args.iter().any(|a| a == arg) {
                    return Err(CommandError::Failed {
                        command: invocation.to_string(),
                        code: Some(1),
                    });
                }
            }

            match invocation.args.first().map(String::as_str) {
                Some("init") => std::fs::write(cwd.join("package.json"), "{\"name\":\"npm\"}").unwrap(),
                Some("tsc") => std::fs::write(cwd.join("tsconfig.json"), "{}").unwrap(),
                _ => {}
            }
            Ok(CommandOutput::default())
        }
    }

    fn config(name: &str, variant: Variant, deps: &[&str], use_lint: bool) -> ProjectConfig {
        ProjectConfig {
            name: name.to_string(),
            variant,
            dependencies: deps.iter().collect(),
            use_lint,
        }
    }

    fn read(root: &Path, relative: &str) -> String {
        std::fs::read_to_string(root.join(relative)).unwrap()
    }

    #[tokio::test]
    async fn test_create_javascript_project() {
        let parent = tempfile::tempdir().unwrap();
        let cfg = config("demo", Variant::JavaScript, &["express", "cors"], false);
        let artifacts = ArtifactSet::build(&cfg).unwrap();
        let materializer = ProjectMaterializer::new(FakeRunner::default(), parent.path());

        let root = materializer.create(&cfg, &artifacts).await.unwrap();

        assert_eq!(root, parent.path().join("demo"));
        assert_eq!(read(&root, "src/server.js"), artifacts.entry_body);
        assert_eq!(read(&root, ".env"), "PORT=3000\nNODE_ENV=development\n");
        assert_eq!(read(&root, "package.json"), artifacts.manifest_body);
        assert!(!root.join("tsconfig.json").exists());
        assert!(!root.join("eslint.config.mjs").exists());
        for dir in PROJECT_DIRECTORIES {
            assert!(root.join(dir).is_dir(), "missing {}", dir);
        }
        assert_eq!(
            materializer.runner.calls(),
            vec!["npm init -y", "npm install --no-save cors express"]
        );
    }

    #[tokio::test]
    async fn test_create_typescript_project_with_lint() {
        let parent = tempfile::tempdir().unwrap();
        let cfg = config(
            "api",
            Variant::TypeScript,
            &["express", "typescript", "eslint"],
            true,
        );
        let artifacts = ArtifactSet::build(&cfg).unwrap();
        let materializer = ProjectMaterializer::new(FakeRunner::default(), parent.path());

        let root = materializer.create(&cfg, &artifacts).await.unwrap();

        assert_eq!(read(&root, "src/server.ts"), artifacts.entry_body);
        assert_eq!(
            read(&root, "tsconfig.json"),
            artifacts.tsconfig.clone().unwrap()
        );
        assert_eq!(
            read(&root, "eslint.config.mjs"),
            artifacts.lint_config.clone().unwrap()
        );
        assert_eq!(read(&root, "package.json"), artifacts.manifest_body);
        assert_eq!(
            materializer.runner.calls(),
            vec![
                "npm init -y",
                "npm install --no-save express eslint typescript",
                "npx tsc --init"
            ]
        );
    }

    #[tokio::test]
    async fn test_existing_directory_is_untouched() {
        let parent = tempfile::tempdir().unwrap();
        let existing = parent.path().join("demo");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "original").unwrap();

        let cfg = config("demo", Variant::JavaScript, &["express"], true);
        let artifacts = ArtifactSet::build(&cfg).unwrap();
        let materializer = ProjectMaterializer::new(FakeRunner::default(), parent.path());

        let err = materializer.create(&cfg, &artifacts).await.unwrap_err();

        assert!(matches!(err, MaterializeError::DirectoryExists(ref p) if p == &existing));
        assert_eq!(read(&existing, "keep.txt"), "original");
        assert_eq!(std::fs::read_dir(&existing).unwrap().count(), 1);
        assert!(materializer.runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_parent_directory() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("nope");
        let cfg = config("demo", Variant::JavaScript, &["express"], false);
        let artifacts = ArtifactSet::build(&cfg).unwrap();
        let materializer = ProjectMaterializer::new(FakeRunner::default(), &missing);

        let err = materializer.create(&cfg, &artifacts).await.unwrap_err();
        assert!(matches!(err, MaterializeError::ParentMissing(_)));
        assert!(!missing.exists());
    }

    #[tokio::test]
    async fn test_command_failure_keeps_written_files() {
        let parent = tempfile::tempdir().unwrap();
        let cfg = config("api", Variant::TypeScript, &["express"], false);
        let artifacts = ArtifactSet::build(&cfg).unwrap();
        let materializer = ProjectMaterializer::new(FakeRunner::failing_on("install"), parent.path());

        let err = materializer.create(&cfg, &artifacts).await.unwrap_err();

        assert!(matches!(err, MaterializeError::Command(CommandError::Failed { .. })));
        let root = parent.path().join("api");
        assert!(root.join("src/server.ts").exists());
        assert_eq!(read(&root, "package.json"), artifacts.manifest_body);
        // tsc never ran, so no tsconfig was written
        assert!(!root.join("tsconfig.json").exists());
        assert_eq!(materializer.runner.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_name_must_stay_inside_parent() {
        let parent = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let outside = elsewhere.path().join("victim");

        for name in [outside.to_str().unwrap(), "a/../..", "nested/demo", "..", "."] {
            let cfg = config(name, Variant::JavaScript, &["express"], false);
            let artifacts = ArtifactSet::build(&cfg).unwrap();
            let materializer = ProjectMaterializer::new(FakeRunner::default(), parent.path());

            let err = materializer.create(&cfg, &artifacts).await.unwrap_err();
            assert!(matches!(err, MaterializeError::InvalidName(ref n) if n == name), "{}", name);
            assert!(materializer.runner.calls().is_empty());
        }

        assert!(!outside.exists());
        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_parent_that_is_a_file() {
        let parent = tempfile::tempdir().unwrap();
        let file = parent.path().join("file");
        std::fs::write(&file, "").unwrap();
        let cfg = config("demo", Variant::JavaScript, &["express"], false);
        let artifacts = ArtifactSet::build(&cfg).unwrap();
        let materializer = ProjectMaterializer::new(FakeRunner::default(), &file);

        let err = materializer.create(&cfg, &artifacts).await.unwrap_err();
        assert!(matches!(err, MaterializeError::ParentMissing(ref p) if p == &file));
    }
}
