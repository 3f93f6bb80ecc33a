//! Reference sources: where batches of repository references come from.
//!
//! The parser itself only sees strings; sources turn files (package manifests,
//! plain reference lists) into those strings.

mod list;
mod manifest;

pub use list::ListSource;
pub use manifest::{ManifestRepository, ManifestSource};

/// Trait implemented by anything that yields raw repository references.
pub trait ReferenceSource {
    fn references(&self) -> anyhow::Result<Vec<String>>;
}
