//! `repolink parse <reference>...` – parse references given on the command line.

use anyhow::Result;

use crate::cli::output::{report, OutputSettings};

pub fn run_parse(references: &[String], settings: &OutputSettings) -> Result<()> {
    report(references, settings)
}
