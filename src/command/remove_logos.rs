//! Cleanup of superseded Cline logo files.
use log::*;
use std::fs;
use std::path::Path;

use crate::{cli, layout::Layout, result::Result};

/// Files replaced by the Guardian VS branding and no longer referenced by
/// docs.json.
const OLD_LOGO_FILES: &[&str] = &[
    "Cline_Logo-complete_black.png",
    "Cline_Logo-complete_white.png",
];

/// Per-file result of the cleanup batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    AlreadyAbsent,
    Failed(String),
}

/// Execute the remove-old-logos subcommand.
///
/// Individual failures are reported but never abort the batch or the
/// process; the command exits zero regardless.
pub fn execute(args: &cli::Args) -> Result<()> {
    let layout = Layout::new(&args.project_root);
    run(&layout)
}

pub(crate) fn run(layout: &Layout) -> Result<()> {
    info!("=== Removing old Cline logo files ===");
    info!("Note: Original files are backed up in docs/assets/backup/");
    info!("These files are no longer referenced in docs.json");

    let report = remove_old_logos(&layout.docs_assets_dir());

    let removed: Vec<&String> = report
        .iter()
        .filter(|(_, outcome)| *outcome == RemovalOutcome::Removed)
        .map(|(name, _)| name)
        .collect();
    let failed: Vec<(&String, &String)> = report
        .iter()
        .filter_map(|(name, outcome)| match outcome {
            RemovalOutcome::Failed(reason) => Some((name, reason)),
            _ => None,
        })
        .collect();

    if !removed.is_empty() {
        info!("✅ Removed {} Cline logo file(s):", removed.len());
        for name in &removed {
            info!("   - {name}");
        }
    }

    if !failed.is_empty() {
        warn!("⚠ Failed to remove {} file(s):", failed.len());
        for (name, reason) in &failed {
            warn!("   - {name}: {reason}");
        }
    }

    if removed.is_empty() && failed.is_empty() {
        info!("ℹ No Cline logo files found to remove");
    }

    Ok(())
}

/// Delete each old logo if present, reporting every file independently.
pub(crate) fn remove_old_logos(
    docs_assets_dir: &Path,
) -> Vec<(String, RemovalOutcome)> {
    let mut report = Vec::with_capacity(OLD_LOGO_FILES.len());

    for filename in OLD_LOGO_FILES {
        let path = docs_assets_dir.join(filename);

        let outcome = if path.exists() {
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("✓ Removed {filename}");
                    RemovalOutcome::Removed
                }
                Err(err) => {
                    error!("✗ Failed to remove {filename}: {err}");
                    RemovalOutcome::Failed(err.to_string())
                }
            }
        } else {
            info!("ℹ {filename} not found (already removed)");
            RemovalOutcome::AlreadyAbsent
        };

        report.push((filename.to_string(), outcome));
    }

    report
}
