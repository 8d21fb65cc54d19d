//! SVG derivation tiers for logo assets.
//!
//! Three strategies, tried in order by the converter commands:
//!
//! 1. `trace` — threshold the bitmap to monochrome with ImageMagick and trace
//!    it into true vector paths with potrace.
//! 2. `embed` — wrap the bitmap as a base64 data URI in a minimal SVG sized
//!    to its pixel dimensions.
//! 3. `placeholder` — a static rounded rectangle with the "GV" monogram,
//!    independent of the source image.
//!
//! The trace intermediate (a PBM file) lives only for the duration of that
//! attempt; `NamedTempFile` removes it on every exit path.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::*;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::path::Path;

use crate::{
    exec::{self, CommandRunner},
    result::Result,
};

/// Fill color of the placeholder icon.
const PLACEHOLDER_FILL: &str = "#4F46E5";

/// Two-letter monogram shown on the placeholder icon.
const PLACEHOLDER_MONOGRAM: &str = "GV";

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// One SVG generation strategy: a name for reporting plus a single attempt.
pub type Tier<'a> = (&'static str, Box<dyn FnOnce() -> Result<()> + 'a>);

/// Try each tier in order and return the name of the first that succeeds.
///
/// A failed tier is reported and never retried; the last error propagates
/// when every tier fails.
pub fn run_tiers(tiers: Vec<Tier<'_>>) -> Result<&'static str> {
    let mut last_err = None;

    for (name, attempt) in tiers {
        match attempt() {
            Ok(()) => return Ok(name),
            Err(err) => {
                warn!("⚠ SVG {name} tier failed: {err:#}");
                last_err = Some(err);
            }
        }
    }

    match last_err {
        Some(err) => Err(err),
        None => Err(color_eyre::eyre::eyre!("no SVG tiers configured")),
    }
}

/// Trace a bitmap into vector paths: `convert -threshold 50%` to a temporary
/// PBM, then `potrace -s` to SVG.
pub fn trace(
    runner: &dyn CommandRunner,
    png_path: &Path,
    svg_path: &Path,
) -> Result<()> {
    trace_in(runner, png_path, svg_path, &std::env::temp_dir())
}

fn trace_in(
    runner: &dyn CommandRunner,
    png_path: &Path,
    svg_path: &Path,
    tmp_dir: &Path,
) -> Result<()> {
    // Dropped at the end of this attempt, success or failure.
    let pbm = tempfile::Builder::new()
        .prefix("guardian-trace-")
        .suffix(".pbm")
        .tempfile_in(tmp_dir)?;
    let pbm_path = pbm.path().display().to_string();

    runner.run(
        "convert",
        &exec::args(&[
            &png_path.display().to_string(),
            "-threshold",
            "50%",
            &pbm_path,
        ]),
        Path::new("."),
    )?;

    runner.run(
        "potrace",
        &exec::args(&[
            &pbm_path,
            "-s",
            "-o",
            &svg_path.display().to_string(),
        ]),
        Path::new("."),
    )?;

    info!("✓ Created SVG via potrace: {}", svg_path.display());
    Ok(())
}

/// Embed a bitmap as a base64 data URI inside a minimal SVG wrapper.
///
/// With `canvas` unset the wrapper is sized to the bitmap's actual pixel
/// dimensions; pass an explicit canvas to pin the historical 256×256 frame
/// used by the documentation logos.
pub fn embed(
    png_path: &Path,
    svg_path: &Path,
    canvas: Option<(u32, u32)>,
) -> Result<()> {
    let (width, height) = match canvas {
        Some(size) => size,
        None => image::image_dimensions(png_path)?,
    };

    let png_data = fs::read(png_path)?;
    let data_uri =
        format!("data:image/png;base64,{}", STANDARD.encode(&png_data));
    let width_attr = width.to_string();
    let height_attr = height.to_string();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        None,
    )))?;

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("width", width_attr.as_str()));
    svg.push_attribute(("height", height_attr.as_str()));
    svg.push_attribute(("xmlns", SVG_NS));
    svg.push_attribute(("xmlns:xlink", XLINK_NS));
    writer.write_event(Event::Start(svg))?;

    let mut img = BytesStart::new("image");
    img.push_attribute(("href", data_uri.as_str()));
    img.push_attribute(("width", width_attr.as_str()));
    img.push_attribute(("height", height_attr.as_str()));
    writer.write_event(Event::Empty(img))?;

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    fs::write(svg_path, writer.into_inner())?;

    info!("✓ Created SVG with embedded PNG: {}", svg_path.display());
    Ok(())
}

/// Write the static placeholder icon: rounded rectangle plus monogram, with
/// no dependency on any source image.
pub fn placeholder(svg_path: &Path) -> Result<()> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        None,
    )))?;

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("width", "256"));
    svg.push_attribute(("height", "256"));
    svg.push_attribute(("xmlns", SVG_NS));
    writer.write_event(Event::Start(svg))?;

    let mut rect = BytesStart::new("rect");
    rect.push_attribute(("width", "256"));
    rect.push_attribute(("height", "256"));
    rect.push_attribute(("rx", "20"));
    rect.push_attribute(("fill", PLACEHOLDER_FILL));
    writer.write_event(Event::Empty(rect))?;

    let mut text = BytesStart::new("text");
    text.push_attribute(("x", "128"));
    text.push_attribute(("y", "128"));
    text.push_attribute(("font-family", "Arial, sans-serif"));
    text.push_attribute(("font-size", "48"));
    text.push_attribute(("font-weight", "bold"));
    text.push_attribute(("fill", "white"));
    text.push_attribute(("text-anchor", "middle"));
    text.push_attribute(("dy", ".3em"));
    writer.write_event(Event::Start(text))?;
    writer.write_event(Event::Text(BytesText::new(PLACEHOLDER_MONOGRAM)))?;
    writer.write_event(Event::End(BytesEnd::new("text")))?;

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    fs::write(svg_path, writer.into_inner())?;

    info!("✓ Created fallback SVG: {}", svg_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardianError;
    use crate::exec::{CommandOutput, MockCommandRunner};
    use image::{Rgba, RgbaImage};
    use quick_xml::Reader;
    use tempfile::TempDir;

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => panic!("malformed XML: {err}"),
            }
        }
    }

    fn write_test_png(dir: &TempDir, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.path().join("logo.png");
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn placeholder_is_well_formed_and_self_contained() {
        let dir = TempDir::new().unwrap();
        let svg_path = dir.path().join("icon.svg");

        placeholder(&svg_path).unwrap();

        let xml = std::fs::read_to_string(&svg_path).unwrap();
        assert_well_formed(&xml);
        assert!(xml.contains(PLACEHOLDER_MONOGRAM));
        assert!(xml.contains(PLACEHOLDER_FILL));
        assert!(!xml.contains("base64"));
    }

    #[test]
    fn embed_uses_actual_pixel_dimensions() {
        let dir = TempDir::new().unwrap();
        let png_path = write_test_png(&dir, 3, 5);
        let svg_path = dir.path().join("icon.svg");

        embed(&png_path, &svg_path, None).unwrap();

        let xml = std::fs::read_to_string(&svg_path).unwrap();
        assert_well_formed(&xml);
        assert!(xml.contains("data:image/png;base64,"));
        assert!(xml.contains(r#"width="3""#));
        assert!(xml.contains(r#"height="5""#));
    }

    #[test]
    fn embed_honors_explicit_canvas() {
        let dir = TempDir::new().unwrap();
        let png_path = write_test_png(&dir, 10, 10);
        let svg_path = dir.path().join("logo.svg");

        embed(&png_path, &svg_path, Some((256, 256))).unwrap();

        let xml = std::fs::read_to_string(&svg_path).unwrap();
        assert!(xml.contains(r#"width="256""#));
        assert!(xml.contains(r#"height="256""#));
    }

    #[test]
    fn trace_invokes_convert_then_potrace() {
        let dir = TempDir::new().unwrap();
        let mut runner = MockCommandRunner::new();

        runner
            .expect_run()
            .withf(|program, args, _| {
                program == "convert" && args.contains(&"-threshold".to_string())
            })
            .times(1)
            .returning(|_, _, _| Ok(CommandOutput::default()));
        runner
            .expect_run()
            .withf(|program, args, _| {
                program == "potrace" && args.contains(&"-s".to_string())
            })
            .times(1)
            .returning(|_, _, _| Ok(CommandOutput::default()));

        let result = trace_in(
            &runner,
            Path::new("icon.png"),
            Path::new("icon.svg"),
            dir.path(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn trace_cleans_up_intermediate_even_on_failure() {
        let dir = TempDir::new().unwrap();
        let mut runner = MockCommandRunner::new();

        runner
            .expect_run()
            .withf(|program, _, _| program == "convert")
            .returning(|_, _, _| Ok(CommandOutput::default()));
        runner
            .expect_run()
            .withf(|program, _, _| program == "potrace")
            .returning(|_, _, _| {
                Err(GuardianError::ToolNotFound("potrace".into()).into())
            });

        let result = trace_in(
            &runner,
            Path::new("icon.png"),
            Path::new("icon.svg"),
            dir.path(),
        );
        assert!(result.is_err());

        // The temporary PBM must not outlive the attempt.
        let leftovers: Vec<_> =
            std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn tiers_fall_through_to_first_success() {
        let failing: Tier = (
            "trace",
            Box::new(|| {
                Err(GuardianError::ToolNotFound("potrace".into()).into())
            }),
        );
        let succeeding: Tier = ("embed", Box::new(|| Ok(())));
        let never_reached: Tier =
            ("placeholder", Box::new(|| panic!("tier ran past a success")));

        let winner =
            run_tiers(vec![failing, succeeding, never_reached]).unwrap();
        assert_eq!(winner, "embed");
    }

    #[test]
    fn tiers_propagate_last_error_when_all_fail() {
        let a: Tier = (
            "trace",
            Box::new(|| Err(GuardianError::ToolNotFound("a".into()).into())),
        );
        let b: Tier = (
            "embed",
            Box::new(|| Err(GuardianError::ToolNotFound("b".into()).into())),
        );

        let err = run_tiers(vec![a, b]).unwrap_err();
        let err = err.downcast::<GuardianError>().unwrap();
        assert!(matches!(err, GuardianError::ToolNotFound(name) if name == "b"));
    }
}
