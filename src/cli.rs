//! CLI argument parsing for guardian-tools.
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use crate::version::Bump;

/// Global CLI arguments and subcommand selection.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = ".", global = true)]
    /// Project root containing the guardian-vs directory.
    pub project_root: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline subcommands, one per maintenance task.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bump the extension version, package a VSIX, and commit/push.
    Release(ReleaseArgs),

    /// Derive icon.png and icon.svg from the source logo using ImageMagick
    /// and potrace, with embedded-PNG and placeholder fallbacks.
    ConvertLogo,

    /// Derive icon.png and icon.svg without external binaries: copy plus
    /// base64-embedded SVG.
    ConvertLogoSimple,

    /// Produce the optimized official logo and its usage document.
    OptimizeLogo,

    /// Delete the superseded Cline logo files from docs/assets.
    RemoveOldLogos,

    /// Replace Cline branding with Guardian VS logos and repoint docs.json.
    ReplaceLogos,
}

/// What the release command should do.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReleaseAction {
    /// Full release: bump, build, optionally commit and push.
    #[default]
    Release,
    /// Only bump the version in package.json.
    Version,
    /// Only build the VSIX from the current version.
    Build,
    /// Print the current version.
    Info,
}

/// Version bump keyword accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl From<BumpKind> for Bump {
    fn from(kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Bump::Major,
            BumpKind::Minor => Bump::Minor,
            BumpKind::Patch => Bump::Patch,
        }
    }
}

/// Arguments for the release workflow.
#[derive(ClapArgs, Debug, Default)]
pub struct ReleaseArgs {
    #[arg(value_enum, default_value = "release")]
    /// Action to perform.
    pub action: ReleaseAction,

    #[arg(long, value_enum, default_value = "patch")]
    /// Version bump type.
    pub bump: BumpKind,

    #[arg(long)]
    /// Set a specific version (e.g. 3.99.0) instead of bumping.
    pub version: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Don't commit changes.
    pub no_commit: bool,

    #[arg(long, default_value_t = false)]
    /// Don't push to git.
    pub no_push: bool,

    #[arg(long, default_value_t = false)]
    /// Don't build the VSIX.
    pub no_build: bool,

    #[arg(long)]
    /// Custom VSIX output name (without .vsix).
    pub output: Option<String>,

    #[arg(long)]
    /// Custom commit message.
    pub message: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Quick release with all defaults: bump, build, commit, push.
    pub quick: bool,

    #[arg(long)]
    /// Quick release with a specific version (e.g. 3.99.0).
    pub quick_version: Option<String>,
}
