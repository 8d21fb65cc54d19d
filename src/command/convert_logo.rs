//! Full logo conversion: 256×256 padded PNG plus traced/embedded SVG.
use log::*;
use std::fs;
use std::path::Path;

use crate::{
    cli,
    error::GuardianError,
    exec::{self, CommandRunner, SystemRunner, tool_available},
    layout::Layout,
    result::Result,
    svg,
};

/// Target icon resolution for the VS Code marketplace.
const ICON_SIZE: &str = "256x256";

/// External tools the primary path depends on.
const REQUIRED_TOOLS: &[&str] = &["convert", "rsvg-convert"];

/// Execute the convert-logo subcommand.
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

    let png_output = layout.icon_png();
    let svg_output = layout.icon_svg();

    info!("Input file: {}", input.display());
    info!("PNG output: {}", png_output.display());
    info!("SVG output: {}", svg_output.display());

    let missing: Vec<&str> = REQUIRED_TOOLS
        .iter()
        .copied()
        .filter(|tool| !tool_available(tool))
        .collect();
    if !missing.is_empty() {
        warn!("⚠ Missing tools: {}", missing.join(", "));
        info!("Will attempt fallback methods...");
    }

    fs::create_dir_all(layout.icons_dir())?;

    info!("1. Creating 256x256 PNG...");
    create_icon_png(runner, &input, &png_output)?;

    info!("2. Creating SVG...");
    svg::run_tiers(vec![
        (
            "trace",
            Box::new(|| svg::trace(runner, &png_output, &svg_output)),
        ),
        ("embed", Box::new(|| svg::embed(&png_output, &svg_output, None))),
        ("placeholder", Box::new(|| svg::placeholder(&svg_output))),
    ])?;

    info!("✅ Conversion complete!");
    info!("   PNG: {}", png_output.display());
    info!("   SVG: {}", svg_output.display());
    report_size("PNG", &png_output);
    report_size("SVG", &svg_output);

    Ok(())
}

/// Resize-and-pad onto a transparent square canvas. Content is centered,
/// never cropped.
fn create_icon_png(
    runner: &dyn CommandRunner,
    input: &Path,
    output: &Path,
) -> Result<()> {
    runner.run(
        "convert",
        &exec::args(&[
            &input.display().to_string(),
            "-resize",
            ICON_SIZE,
            "-background",
            "transparent",
            "-gravity",
            "center",
            "-extent",
            ICON_SIZE,
            &output.display().to_string(),
        ]),
        Path::new("."),
    )?;

    info!("✓ Created 256x256 PNG: {}", output.display());
    Ok(())
}

fn report_size(label: &str, path: &Path) {
    if let Ok(metadata) = path.metadata() {
        info!("   {label} size: {} bytes", metadata.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{CommandOutput, MockCommandRunner};
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn project_with_logo() -> (TempDir, Layout) {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        let logo = layout.source_logo();
        fs::create_dir_all(logo.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(64, 64, Rgba([200, 30, 30, 255]))
            .save(&logo)
            .unwrap();
        (dir, layout)
    }

    #[test]
    fn missing_source_logo_is_fatal() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        let runner = MockCommandRunner::new();

        let err = run(&layout, &runner)
            .unwrap_err()
            .downcast::<GuardianError>()
            .unwrap();
        assert!(matches!(err, GuardianError::MissingInput(_)));
    }

    #[test]
    fn png_resize_failure_is_fatal() {
        let (_dir, layout) = project_with_logo();
        let mut runner = MockCommandRunner::new();

        runner
            .expect_run()
            .withf(|program, args, _| {
                program == "convert" && args.contains(&"-resize".to_string())
            })
            .returning(|_, _, _| {
                Err(GuardianError::command_failed("convert", 1, "bad input")
                    .into())
            });

        assert!(run(&layout, &runner).is_err());
        assert!(!layout.icon_png().exists());
    }

    #[test]
    fn falls_back_to_embed_when_trace_tools_missing() {
        let (_dir, layout) = project_with_logo();
        let mut runner = MockCommandRunner::new();

        // Resize succeeds and leaves a real PNG behind.
        let icon_png = layout.icon_png();
        runner
            .expect_run()
            .withf(|program, args, _| {
                program == "convert" && args.contains(&"-resize".to_string())
            })
            .returning(move |_, _, _| {
                RgbaImage::from_pixel(256, 256, Rgba([0, 0, 0, 255]))
                    .save(&icon_png)
                    .unwrap();
                Ok(CommandOutput::default())
            });
        // The trace tier's threshold pass dies.
        runner
            .expect_run()
            .withf(|program, args, _| {
                program == "convert"
                    && args.contains(&"-threshold".to_string())
            })
            .returning(|_, _, _| {
                Err(GuardianError::ToolNotFound("convert".into()).into())
            });

        run(&layout, &runner).unwrap();

        let xml = fs::read_to_string(layout.icon_svg()).unwrap();
        assert!(xml.contains("data:image/png;base64,"));
        assert!(xml.contains(r#"width="256""#));
    }

    #[test]
    fn falls_back_to_placeholder_when_png_is_unreadable() {
        let (_dir, layout) = project_with_logo();
        let mut runner = MockCommandRunner::new();

        // Resize "succeeds" but writes garbage, so the embed tier cannot
        // read pixel dimensions.
        let icon_png = layout.icon_png();
        runner
            .expect_run()
            .withf(|program, args, _| {
                program == "convert" && args.contains(&"-resize".to_string())
            })
            .returning(move |_, _, _| {
                fs::write(&icon_png, b"not a png").unwrap();
                Ok(CommandOutput::default())
            });
        runner
            .expect_run()
            .withf(|program, args, _| {
                program == "convert"
                    && args.contains(&"-threshold".to_string())
            })
            .returning(|_, _, _| {
                Err(GuardianError::ToolNotFound("convert".into()).into())
            });

        run(&layout, &runner).unwrap();

        let xml = fs::read_to_string(layout.icon_svg()).unwrap();
        assert!(xml.contains("GV"));
        assert!(!xml.contains("base64"));
    }
}
