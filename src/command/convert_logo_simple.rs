//! Simplified logo conversion: file copy plus embedded SVG, no external
//! binaries.
use log::*;
use std::fs;

use crate::{
    cli, error::GuardianError, layout::Layout, result::Result, svg,
};

/// Execute the convert-logo-simple subcommand.
pub fn execute(args: &cli::Args) -> Result<()> {
    let layout = Layout::new(&args.project_root);
    run(&layout)
}

pub(crate) fn run(layout: &Layout) -> Result<()> {
    let input = layout.source_logo();
    if !input.exists() {
        return Err(GuardianError::MissingInput(input).into());
    }

    let png_output = layout.icon_png();
    let svg_output = layout.icon_svg();

    info!("Input file: {}", input.display());
    info!("PNG output: {}", png_output.display());
    info!("SVG output: {}", svg_output.display());

    fs::create_dir_all(layout.icons_dir())?;

    info!("1. Processing PNG...");
    fs::copy(&input, &png_output)?;
    info!("✓ Copied PNG to: {}", png_output.display());
    warn!("⚠ Note: PNG was not resized to 256x256 (requires ImageMagick)");

    info!("2. Creating SVG...");
    svg::run_tiers(vec![
        ("embed", Box::new(|| svg::embed(&png_output, &svg_output, None))),
        ("placeholder", Box::new(|| svg::placeholder(&svg_output))),
    ])?;

    info!("✅ Conversion complete!");
    info!("   PNG: {}", png_output.display());
    info!("   SVG: {}", svg_output.display());
    if let Ok(metadata) = png_output.metadata() {
        info!("   PNG size: {} bytes", metadata.len());
    }
    if let Ok(metadata) = svg_output.metadata() {
        info!("   SVG size: {} bytes", metadata.len());
    }

    warn!("⚠ Note: For production use, consider:");
    info!("   - Install ImageMagick: brew install imagemagick");
    info!("   - Then run the full convert-logo pipeline");

    Ok(())
}
