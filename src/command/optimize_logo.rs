//! Official logo optimization: resize to 512×512, write the usage document.
use image::{DynamicImage, RgbImage, imageops};
use log::*;
use std::fs;
use std::path::Path;

use crate::{
    cli,
    error::GuardianError,
    exec::{self, CommandRunner, SystemRunner, tool_available},
    layout::{Layout, OFFICIAL_LOGO_NAME},
    result::Result,
};

/// Square target resolution for the official logo.
const TARGET_SIZE: u32 = 512;

/// Execute the optimize-logo subcommand.
pub fn execute(args: &cli::Args) -> Result<()> {
    let layout = Layout::new(&args.project_root);
    let runner = SystemRunner;
    run(&layout, &runner)
}

pub(crate) fn run(layout: &Layout, runner: &dyn CommandRunner) -> Result<()> {
    let input = layout.source_logo();
    if !input.exists() {
        return Err(GuardianError::MissingInput(input).into());
    }

    info!("{}", "=".repeat(60));
    info!("GUARDIAN VS LOGO OPTIMIZATION TOOL");
    info!("{}", "=".repeat(60));

    fs::create_dir_all(layout.official_logos_dir())?;
    let output = layout.official_logo_png();

    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    info!("Official name: {OFFICIAL_LOGO_NAME}.png");

    optimize(runner, &input, &output)?;

    info!("2. Creating documentation...");
    write_logo_readme(layout, &output)?;

    info!("{}", "=".repeat(60));
    info!("✅ OPTIMIZATION COMPLETE");
    info!("{}", "=".repeat(60));
    info!("Official logo created: {}", output.display());

    let original_size = input.metadata()?.len();
    let new_size = output.metadata()?.len();
    if original_size != new_size {
        let reduction = reduction_percent(original_size, new_size);
        info!(
            "Size reduction: {original_size} bytes → {new_size} bytes ({reduction:.1}% smaller)"
        );
    } else {
        info!("File size: {new_size} bytes (no optimization available)");
    }

    info!("Next steps:");
    info!("1. Use '{OFFICIAL_LOGO_NAME}.png' for all official branding");
    info!("2. Update any references to use the new official logo");
    info!("3. Check the LOGO_README.md for usage guidelines");

    Ok(())
}

/// Resize backends in priority order: in-process image crate, external
/// ImageMagick, plain byte copy.
fn optimize(
    runner: &dyn CommandRunner,
    input: &Path,
    output: &Path,
) -> Result<()> {
    info!("1. Attempting optimization with the image crate...");
    match optimize_in_process(input, output) {
        Ok(()) => return Ok(()),
        Err(err) => warn!("  ✗ image crate optimization failed: {err:#}"),
    }

    if tool_available("convert") {
        info!("1. Attempting optimization with ImageMagick...");
        match optimize_with_imagemagick(runner, input, output) {
            Ok(()) => return Ok(()),
            Err(err) => warn!("  ✗ ImageMagick optimization failed: {err:#}"),
        }
    }

    info!("1. No optimization backends found, using simple copy...");
    fs::copy(input, output)?;
    info!("  Copied (no optimization): {} bytes", input.metadata()?.len());
    Ok(())
}

/// Decode, flatten alpha onto white, Lanczos-resize, re-encode.
fn optimize_in_process(input: &Path, output: &Path) -> Result<()> {
    info!("  Using the image crate to optimize image...");

    let img = image::open(input)?;
    let flattened = flatten_onto_white(&img);

    let resized = if flattened.dimensions() != (TARGET_SIZE, TARGET_SIZE) {
        info!(
            "  Resizing from {:?} to ({TARGET_SIZE}, {TARGET_SIZE})",
            flattened.dimensions()
        );
        imageops::resize(
            &flattened,
            TARGET_SIZE,
            TARGET_SIZE,
            imageops::FilterType::Lanczos3,
        )
    } else {
        flattened
    };

    resized.save(output)?;
    log_reduction(input, output)?;
    Ok(())
}

/// Composite any transparency onto a white background.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as u32;
        let blend = |channel: u8| -> u8 {
            ((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        out.put_pixel(
            x,
            y,
            image::Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]),
        );
    }

    out
}

fn optimize_with_imagemagick(
    runner: &dyn CommandRunner,
    input: &Path,
    output: &Path,
) -> Result<()> {
    info!("  Using ImageMagick to optimize image...");

    runner.run(
        "convert",
        &exec::args(&[
            &input.display().to_string(),
            "-resize",
            &format!("{TARGET_SIZE}x{TARGET_SIZE}"),
            "-strip",
            "-quality",
            "85",
            &output.display().to_string(),
        ]),
        Path::new("."),
    )?;

    log_reduction(input, output)?;
    Ok(())
}

fn log_reduction(input: &Path, output: &Path) -> Result<()> {
    let original_size = input.metadata()?.len();
    let new_size = output.metadata()?.len();
    let reduction = reduction_percent(original_size, new_size);

    info!(
        "  Optimized: {original_size} bytes → {new_size} bytes ({reduction:.1}% reduction)"
    );
    Ok(())
}

fn reduction_percent(original: u64, new: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - new as f64) / original as f64 * 100.0
}

/// Generated usage document recording the chosen output.
fn write_logo_readme(layout: &Layout, logo_path: &Path) -> Result<()> {
    let created = chrono::Local::now().format("%Y-%m-%d");
    let size = logo_path.metadata()?.len();
    let readme_path = layout.logo_readme();

    let content = format!(
        r#"# Guardian VS Logo

## Official Logo File
- **File**: `{OFFICIAL_LOGO_NAME}.png`
- **Source**: Generated from ChatGPT-created design
- **Purpose**: Official branding logo for Guardian VS extension

## Usage Guidelines
1. Use this logo for all official Guardian VS branding
2. Maintain aspect ratio when resizing
3. Use PNG format for digital applications
4. For print, consider vector formats if available

## File Details
- **Format**: PNG
- **Location**: `{location}`
- **Created**: {created}
- **Size**: {size} bytes

## Optimization Notes
This logo has been optimized for:
- Web and digital use
- Fast loading in VS Code Marketplace
- Clear display at various sizes

## Original Source
The original ChatGPT-generated file is preserved in `../logo/` directory.
"#,
        location = logo_path.display(),
    );

    fs::write(&readme_path, content)?;
    info!("✓ Created README: {}", readme_path.display());
    Ok(())
}
