//! `repolink manifest <path>` – parse a manifest's `repository` field.

use anyhow::Result;
use repolink_core::source::{ManifestSource, ReferenceSource};
use std::path::Path;

use crate::cli::output::{report, OutputSettings};

pub fn run_manifest(path: &Path, settings: &OutputSettings) -> Result<()> {
    let references = ManifestSource::new(path).references()?;
    if references.is_empty() {
        println!("No repository field in {}.", path.display());
        return Ok(());
    }
    report(&references, settings)
}
