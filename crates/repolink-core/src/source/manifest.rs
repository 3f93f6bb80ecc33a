//! `package.json`-style manifests: the `repository` field.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::ReferenceSource;

/// The `repository` field: either a bare reference or an object with a `url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ManifestRepository {
    Reference(String),
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        url: String,
        /// Monorepo sub-directory; not part of the reference.
        #[serde(default)]
        directory: Option<String>,
    },
}

impl ManifestRepository {
    pub fn reference(&self) -> &str {
        match self {
            ManifestRepository::Reference(r) => r,
            ManifestRepository::Detailed { url, .. } => url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    repository: Option<ManifestRepository>,
}

/// Reads the `repository` reference from a JSON manifest.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The manifest's `repository` field, if any.
    pub fn repository(&self) -> Result<Option<ManifestRepository>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read manifest: {}", self.path.display()))?;
        let manifest: Manifest = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse manifest JSON: {}", self.path.display()))?;
        Ok(manifest.repository)
    }
}

impl ReferenceSource for ManifestSource {
    fn references(&self) -> Result<Vec<String>> {
        let repository = self.repository()?;
        if repository.is_none() {
            tracing::debug!(path = %self.path.display(), "manifest has no repository field");
        }
        Ok(repository
            .iter()
            .map(|r| r.reference().trim().to_string())
            .filter(|r| !r.is_empty())
            .collect())
    }
}
