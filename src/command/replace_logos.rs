//! Branding replacement: swap Cline logos for Guardian VS and repoint
//! docs.json.
use log::*;
use std::fs;
use std::path::Path;

use crate::{
    cli, error::GuardianError, layout::Layout, result::Result, svg,
};

/// Logos being replaced; backed up before anything is overwritten.
const CLINE_LOGO_FILES: &[&str] = &[
    "Cline_Logo-complete_black.png",
    "Cline_Logo-complete_white.png",
];

/// New light-theme logo filename (replaces the black Cline variant).
const LIGHT_LOGO: &str = "Guardian_VS_Logo-complete_black.png";

/// New dark-theme logo filename (replaces the white Cline variant).
const DARK_LOGO: &str = "Guardian_VS_Logo-complete_white.png";

/// Literal substitutions applied to docs.json. These are plain substring
/// replacements, not a structured JSON rewrite.
const DOCS_REPLACEMENTS: &[(&str, &str)] = &[
    ("Cline_Logo-complete_black.png", "Guardian_VS_Logo-complete_black.png"),
    ("Cline_Logo-complete_white.png", "Guardian_VS_Logo-complete_white.png"),
    (r#""name": "Cline""#, r#""name": "Guardian VS""#),
    (
        r#""description": "AI-powered coding agent for complex work""#,
        r#""description": "Guardian VS - AI-powered coding assistant""#,
    ),
];

/// Canvas used for the documentation SVG wrappers.
const DOCS_SVG_CANVAS: (u32, u32) = (256, 256);

/// Execute the replace-logos subcommand.
pub fn execute(args: &cli::Args) -> Result<()> {
    let layout = Layout::new(&args.project_root);
    run(&layout)
}

pub(crate) fn run(layout: &Layout) -> Result<()> {
    let input = layout.source_logo();
    if !input.exists() {
        return Err(GuardianError::MissingInput(input).into());
    }

    info!("=== Replacing Cline logos with Guardian VS logos ===");
    info!("Input file: {}", input.display());

    info!("1. Backing up original Cline logos...");
    backup_cline_logos(layout)?;

    info!("2. Creating Guardian VS logo images...");
    create_guardian_logos(layout, &input)?;

    info!("3. Updating docs.json...");
    update_docs_json(&layout.docs_json())?;

    info!("✅ Successfully replaced Cline logos with Guardian VS logos!");
    info!("Summary of changes:");
    info!("  - Backed up original Cline logos to docs/assets/backup/");
    info!("  - Created {LIGHT_LOGO} (light theme)");
    info!("  - Created {DARK_LOGO} (dark theme)");
    info!("  - Created SVG versions of both logos");
    info!("  - Updated docs.json to reference new logos and name");

    Ok(())
}

/// Copy any pre-existing Cline logos into the sibling backup directory
/// before they get replaced.
fn backup_cline_logos(layout: &Layout) -> Result<()> {
    let assets_dir = layout.docs_assets_dir();
    let backup_dir = layout.docs_backup_dir();
    fs::create_dir_all(&backup_dir)?;

    for filename in CLINE_LOGO_FILES {
        let src = assets_dir.join(filename);
        if src.exists() {
            let dst = backup_dir.join(filename);
            fs::copy(&src, &dst)?;
            info!("✓ Backed up {filename} to {}", dst.display());
        }
    }

    Ok(())
}

/// Copy the source logo to the light and dark theme filenames and write the
/// matching SVG wrappers. The same artwork serves both themes until separate
/// variants exist.
fn create_guardian_logos(layout: &Layout, input: &Path) -> Result<()> {
    let assets_dir = layout.docs_assets_dir();
    fs::create_dir_all(&assets_dir)?;

    let light_output = assets_dir.join(LIGHT_LOGO);
    let dark_output = assets_dir.join(DARK_LOGO);

    fs::copy(input, &light_output)?;
    fs::copy(input, &dark_output)?;
    info!("✓ Created light theme logo: {}", light_output.display());
    info!("✓ Created dark theme logo: {}", dark_output.display());

    svg::embed(
        input,
        &light_output.with_extension("svg"),
        Some(DOCS_SVG_CANVAS),
    )?;
    svg::embed(
        input,
        &dark_output.with_extension("svg"),
        Some(DOCS_SVG_CANVAS),
    )?;

    Ok(())
}

/// Rewrite docs.json references via literal substring substitution, leaving
/// unrelated bytes untouched. Applying it twice is a no-op.
fn update_docs_json(docs_json_path: &Path) -> Result<()> {
    if !docs_json_path.exists() {
        return Err(
            GuardianError::MissingInput(docs_json_path.to_path_buf()).into()
        );
    }

    let content = fs::read_to_string(docs_json_path)?;

    let mut updated = content;
    for (old, new) in DOCS_REPLACEMENTS {
        updated = updated.replace(old, new);
    }

    fs::write(docs_json_path, updated)?;
    info!("✓ Updated {}", docs_json_path.display());

    Ok(())
}
