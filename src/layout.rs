//! Fixed project layout shared by every subcommand.
//!
//! All tools operate on the same directory convention rooted at the project
//! checkout: the extension lives in `guardian-vs/`, branding sources under
//! `guardian-vs/assets/`, and documentation assets under `guardian-vs/docs/`.

use std::path::{Path, PathBuf};

/// Directory containing the extension sources, relative to the project root.
pub const EXTENSION_DIR: &str = "guardian-vs";

/// Filename of the ChatGPT-generated source logo (spaces included).
pub const SOURCE_LOGO: &str = "ChatGPT Image Feb 18, 2026, 11_49_01 PM.png";

/// Base name for the official optimized logo, without extension.
pub const OFFICIAL_LOGO_NAME: &str = "guardian-vs-logo";

/// Project directory layout used by all commands.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Root of the project checkout (parent of the extension directory).
    pub project_root: PathBuf,
}

impl Layout {
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
        }
    }

    /// The extension directory: `<root>/guardian-vs`.
    pub fn extension_dir(&self) -> PathBuf {
        self.project_root.join(EXTENSION_DIR)
    }

    /// The extension manifest: `<root>/guardian-vs/package.json`.
    pub fn manifest_path(&self) -> PathBuf {
        self.extension_dir().join("package.json")
    }

    /// The ChatGPT-generated source logo under `assets/logo/`.
    pub fn source_logo(&self) -> PathBuf {
        self.extension_dir().join("assets/logo").join(SOURCE_LOGO)
    }

    /// Icon output directory: `assets/icons/`.
    pub fn icons_dir(&self) -> PathBuf {
        self.extension_dir().join("assets/icons")
    }

    pub fn icon_png(&self) -> PathBuf {
        self.icons_dir().join("icon.png")
    }

    pub fn icon_svg(&self) -> PathBuf {
        self.icons_dir().join("icon.svg")
    }

    /// Official logo output directory: `assets/official-logos/`.
    pub fn official_logos_dir(&self) -> PathBuf {
        self.extension_dir().join("assets/official-logos")
    }

    pub fn official_logo_png(&self) -> PathBuf {
        self.official_logos_dir()
            .join(format!("{OFFICIAL_LOGO_NAME}.png"))
    }

    pub fn logo_readme(&self) -> PathBuf {
        self.official_logos_dir().join("LOGO_README.md")
    }

    /// Documentation asset directory: `docs/assets/`.
    pub fn docs_assets_dir(&self) -> PathBuf {
        self.extension_dir().join("docs/assets")
    }

    /// Backup directory for replaced documentation assets.
    pub fn docs_backup_dir(&self) -> PathBuf {
        self.docs_assets_dir().join("backup")
    }

    /// The documentation manifest: `docs/docs.json`.
    pub fn docs_json(&self) -> PathBuf {
        self.extension_dir().join("docs/docs.json")
    }

    /// VSIX output path in the project root for a given base name.
    pub fn vsix_output(&self, name: &str) -> PathBuf {
        self.project_root.join(format!("{name}.vsix"))
    }
}
