//! Pipeline subcommand implementations.
//!
//! One module per maintenance task. Each follows the same shape: resolve the
//! fixed project layout, validate required inputs, perform a linear sequence
//! of file and external-command operations, and report progress. The modules
//! are independent of one another; they share only the layout convention and
//! the execution/SVG helpers.

/// Version bump, VSIX packaging, and git commit/push workflow.
pub mod release;

/// Full icon derivation via ImageMagick and potrace.
pub mod convert_logo;

/// Icon derivation without external binaries.
pub mod convert_logo_simple;

/// Official logo optimization and usage-document generation.
pub mod optimize_logo;

/// Deletion of superseded documentation logos.
pub mod remove_logos;

/// Branding replacement across documentation assets and docs.json.
pub mod replace_logos;
