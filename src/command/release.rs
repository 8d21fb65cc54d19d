//! Release workflow: version bump, VSIX packaging, git commit and push.
use log::*;
use std::path::PathBuf;

use crate::{
    cli::{self, ReleaseAction},
    error::GuardianError,
    exec::{self, CommandRunner, SystemRunner},
    layout::{EXTENSION_DIR, Layout},
    manifest::Manifest,
    result::Result,
    version::Bump,
};

/// Branch pushed to by the release workflow.
const RELEASE_BRANCH: &str = "main";

/// Options controlling which release steps run.
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    pub commit: bool,
    pub push: bool,
    pub build: bool,
    pub output_name: Option<String>,
    pub commit_message: Option<String>,
}

/// Outcome of a completed release, reported in the final summary.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    pub old_version: String,
    pub new_version: String,
    pub vsix_path: Option<PathBuf>,
    pub committed: bool,
    pub pushed: bool,
}

/// Execute the release subcommand.
pub fn execute(args: &cli::Args, release: &cli::ReleaseArgs) -> Result<()> {
    let layout = Layout::new(&args.project_root);
    let runner = SystemRunner;
    run(&layout, &runner, release)
}

pub(crate) fn run(
    layout: &Layout,
    runner: &dyn CommandRunner,
    args: &cli::ReleaseArgs,
) -> Result<()> {
    let automator = Automator::new(layout, runner)?;

    let wants_quick_version = args.quick_version.is_some()
        && matches!(
            args.action,
            ReleaseAction::Release | ReleaseAction::Info
        );

    if matches!(args.action, ReleaseAction::Info) || wants_quick_version {
        info!("Current version: {}", automator.current_version()?);

        if wants_quick_version
            && let Some(version) = &args.quick_version
        {
            automator.quick_release(&Bump::parse_quick(version)?)?;
            return Ok(());
        }
    }

    match args.action {
        ReleaseAction::Version => {
            let current = automator.current_version()?;
            info!("Current version: {current}");

            if let Some(version) = &args.version {
                let version = crate::version::parse_triple(version)?;
                automator.update_manifest(&version.to_string())?;
                info!("Updated to: {version}");
            } else {
                let next = Bump::from(args.bump).apply(&current)?;
                automator.update_manifest(&next.to_string())?;
                info!("Updated to: {next}");
            }
        }
        ReleaseAction::Build => {
            let vsix_path = automator.build_vsix(args.output.as_deref())?;
            info!("VSIX built: {}", vsix_path.display());
        }
        ReleaseAction::Release => {
            let outcome = if args.quick {
                automator.quick_release(&Bump::from(args.bump))?
            } else {
                // --version is a literal triple; keywords only belong to
                // --quick-version.
                let bump = match &args.version {
                    Some(version) => {
                        Bump::Custom(crate::version::parse_triple(version)?)
                    }
                    None => Bump::from(args.bump),
                };
                let commit = !args.no_commit;
                automator.create_release(
                    &bump,
                    &ReleaseOptions {
                        commit,
                        push: !args.no_push && commit,
                        build: !args.no_build,
                        output_name: args.output.clone(),
                        commit_message: args.message.clone(),
                    },
                )?
            };

            print_summary(&outcome);
        }
        ReleaseAction::Info => {}
    }

    info!("✅ Done!");
    Ok(())
}

fn print_summary(outcome: &ReleaseOutcome) {
    info!("Release summary:");
    info!("  old_version: {}", outcome.old_version);
    info!("  new_version: {}", outcome.new_version);
    match &outcome.vsix_path {
        Some(path) => info!("  vsix_path: {}", path.display()),
        None => info!("  vsix_path: none"),
    }
    info!("  committed: {}", outcome.committed);
    info!("  pushed: {}", outcome.pushed);
}

/// Drives the release sequence against a fixed layout and command runner.
pub(crate) struct Automator<'a> {
    layout: &'a Layout,
    runner: &'a dyn CommandRunner,
}

impl std::fmt::Debug for Automator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automator")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<'a> Automator<'a> {
    /// A missing manifest aborts before any mutation.
    pub(crate) fn new(
        layout: &'a Layout,
        runner: &'a dyn CommandRunner,
    ) -> Result<Self> {
        let manifest_path = layout.manifest_path();
        if !manifest_path.exists() {
            return Err(GuardianError::MissingInput(manifest_path).into());
        }

        Ok(Self { layout, runner })
    }

    pub(crate) fn current_version(&self) -> Result<String> {
        Ok(Manifest::load(&self.layout.manifest_path())?.version())
    }

    /// Rewrite the manifest version, returning the previous value.
    pub(crate) fn update_manifest(&self, new_version: &str) -> Result<String> {
        Manifest::load(&self.layout.manifest_path())?.set_version(new_version)
    }

    /// Package the extension into a VSIX in the project root.
    ///
    /// The output name defaults to `guardian-vs-<version>`. A zero exit that
    /// leaves no file behind still counts as a failure.
    pub(crate) fn build_vsix(
        &self,
        output_name: Option<&str>,
    ) -> Result<PathBuf> {
        let name = match output_name {
            Some(name) => name.to_string(),
            None => format!("guardian-vs-{}", self.current_version()?),
        };

        let output_path = self.layout.vsix_output(&name);

        info!("Building VSIX: {name}.vsix");

        self.runner.run(
            "npx",
            &exec::args(&[
                "vsce",
                "package",
                "--allow-package-secrets",
                "sendgrid",
                "--out",
                &output_path.display().to_string(),
            ]),
            &self.layout.extension_dir(),
        )?;

        if !output_path.exists() {
            return Err(GuardianError::MissingArtifact(output_path).into());
        }

        let size = output_path.metadata()?.len();
        info!("✓ VSIX created: {name}.vsix ({size} bytes)");

        Ok(output_path)
    }

    /// Stage the manifest and commit with the given or generated message.
    pub(crate) fn git_commit(
        &self,
        version: &str,
        message: Option<&str>,
    ) -> Result<()> {
        let default_message = format!(
            "Release {version}: Automated version update and VSIX creation"
        );
        let message = message.unwrap_or(&default_message);

        info!("Committing to git: {message}");

        self.runner.run(
            "git",
            &exec::args(&["add", &format!("{EXTENSION_DIR}/package.json")]),
            &self.layout.project_root,
        )?;
        self.runner.run(
            "git",
            &exec::args(&["commit", "-m", message]),
            &self.layout.project_root,
        )?;

        info!("✓ Git commit created");
        Ok(())
    }

    pub(crate) fn git_push(&self) -> Result<()> {
        info!("Pushing to git remote (branch: {RELEASE_BRANCH})");

        self.runner.run(
            "git",
            &exec::args(&["push", "origin", RELEASE_BRANCH]),
            &self.layout.project_root,
        )?;

        info!("✓ Git push completed");
        Ok(())
    }

    /// Run the full release sequence.
    ///
    /// If packaging fails after the version rewrite, the previous version is
    /// restored before the error propagates. Push only runs after a
    /// successful commit.
    pub(crate) fn create_release(
        &self,
        bump: &Bump,
        options: &ReleaseOptions,
    ) -> Result<ReleaseOutcome> {
        info!("{}", "=".repeat(60));
        info!("GUARDIAN VS RELEASE AUTOMATION");
        info!("{}", "=".repeat(60));

        let current_version = self.current_version()?;
        info!("Current version: {current_version}");

        let new_version = bump.apply(&current_version)?.to_string();
        info!("New version: {new_version}");

        info!("1. Updating package.json...");
        self.update_manifest(&new_version)?;

        let mut vsix_path = None;
        if options.build {
            info!("2. Building VSIX...");
            match self.build_vsix(options.output_name.as_deref()) {
                Ok(path) => vsix_path = Some(path),
                Err(err) => {
                    error!("✗ VSIX build failed: {err:#}");
                    info!("  Rolling back version change...");
                    self.update_manifest(&current_version)?;
                    return Err(err);
                }
            }
        }

        if options.commit {
            info!("3. Committing changes...");
            self.git_commit(
                &new_version,
                options.commit_message.as_deref(),
            )?;

            if options.push {
                info!("4. Pushing to git...");
                self.git_push()?;
            }
        }

        info!("{}", "=".repeat(60));
        info!("✅ RELEASE COMPLETE");
        info!("{}", "=".repeat(60));
        info!("Version: {current_version} → {new_version}");

        if let Some(path) = &vsix_path {
            let size = path.metadata()?.len();
            info!(
                "VSIX: {} ({size} bytes)",
                path.file_name().unwrap_or_default().to_string_lossy()
            );
        }

        if options.commit {
            let status = if options.push {
                "Committed and pushed"
            } else {
                "Committed"
            };
            info!("Git: {status}");
        }

        Ok(ReleaseOutcome {
            old_version: current_version,
            new_version,
            vsix_path,
            committed: options.commit,
            pushed: options.commit && options.push,
        })
    }

    /// Quick release: bump-or-literal, build, commit, push.
    pub(crate) fn quick_release(&self, bump: &Bump) -> Result<ReleaseOutcome> {
        let message =
            format!("Release {}: Automated release", self.current_version()?);

        self.create_release(
            bump,
            &ReleaseOptions {
                commit: true,
                push: true,
                build: true,
                output_name: None,
                commit_message: Some(message),
            },
        )
    }
}
