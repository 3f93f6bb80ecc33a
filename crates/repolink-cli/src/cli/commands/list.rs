//! `repolink list <path>` – parse every reference in a list file.

use anyhow::Result;
use repolink_core::source::{ListSource, ReferenceSource};
use std::path::Path;

use crate::cli::output::{report, OutputSettings};

pub fn run_list(path: &Path, settings: &OutputSettings) -> Result<()> {
    let references = ListSource::new(path).references()?;
    if references.is_empty() {
        println!("No references in {}.", path.display());
        return Ok(());
    }
    report(&references, settings)
}
