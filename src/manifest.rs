//! Extension manifest (`package.json`) reading and version rewriting.

use log::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{error::GuardianError, result::Result};

/// Fallback when the manifest has no `version` field.
const DEFAULT_VERSION: &str = "0.0.0";

/// The extension manifest, held as a JSON document so a version rewrite
/// leaves every other field and the key order untouched (`serde_json` is
/// compiled with `preserve_order`).
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    doc: Value,
}

impl Manifest {
    /// Load the manifest from disk. A missing file is fatal before any
    /// mutation happens.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GuardianError::MissingInput(path.to_path_buf()).into());
        }

        let content = fs::read_to_string(path)?;
        let doc: Value = serde_json::from_str(&content)?;
        if !doc.is_object() {
            return Err(color_eyre::eyre::eyre!(
                "manifest root is not a JSON object: {}",
                path.display()
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Current version string, defaulting to `0.0.0` when the field is
    /// missing.
    pub fn version(&self) -> String {
        self.doc
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_VERSION)
            .to_string()
    }

    /// Rewrite the `version` field and persist the document.
    ///
    /// Returns the previous version so callers can roll back a failed
    /// packaging step.
    pub fn set_version(&mut self, new_version: &str) -> Result<String> {
        let old_version = self.version();
        self.doc["version"] = json!(new_version);
        self.save()?;

        info!("✓ Updated package.json: {old_version} → {new_version}");

        Ok(old_version)
    }

    fn save(&self) -> Result<()> {
        let formatted = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, formatted)?;
        Ok(())
    }
}
