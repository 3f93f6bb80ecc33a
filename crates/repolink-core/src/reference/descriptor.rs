//! Fixed-shape repository descriptor and its browse URL.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::decompose::{Decomposed, Scheme};
use super::grammar::PathCaptures;
use super::host::ProviderType;

/// Why a descriptor has no browse URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("reference has no host to browse")]
    MissingHost,
    #[error("reference has no recognizable owner")]
    MissingOwner,
    #[error("reference has no recognizable project")]
    MissingProject,
}

/// Canonical browse link. Holds its parts; formatting happens on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browse {
    scheme: Scheme,
    host: Option<String>,
    owner: Option<String>,
    project: Option<String>,
}

impl Browse {
    pub(crate) fn new(decomposed: &Decomposed, captures: &PathCaptures) -> Self {
        Self {
            scheme: decomposed.scheme,
            host: decomposed.host.clone(),
            owner: captures.owner.clone(),
            project: captures.project.clone(),
        }
    }

    /// `scheme://host/owner/project`, or the first missing part.
    pub fn url(&self) -> Result<String, BrowseError> {
        let host = self.host.as_deref().ok_or(BrowseError::MissingHost)?;
        let owner = self.owner.as_deref().ok_or(BrowseError::MissingOwner)?;
        let project = self.project.as_deref().ok_or(BrowseError::MissingProject)?;
        Ok(format!("{}://{host}/{owner}/{project}", self.scheme))
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }
}

impl Serialize for Browse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.url() {
            Ok(url) => serializer.serialize_some(&url),
            Err(_) => serializer.serialize_none(),
        }
    }
}

/// Normalized view of a repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    /// Owner path; nested groups are joined with `/`.
    pub user: Option<String>,
    pub project: Option<String>,
    /// Host as written, including a non-default port.
    pub domain: Option<String>,
    pub provider: Option<ProviderType>,
    pub browse: Browse,
}

impl RepositoryDescriptor {
    pub(crate) fn build(
        decomposed: &Decomposed,
        provider: Option<ProviderType>,
        captures: PathCaptures,
    ) -> Self {
        let browse = Browse::new(decomposed, &captures);
        Self {
            user: captures.owner,
            project: captures.project,
            domain: decomposed.host.clone(),
            provider,
            browse,
        }
    }

    /// Browse URL, if host, owner and project are all known.
    ///
    /// Shorthand such as `user/project` has no host, so this is `None` even
    /// though [`is_match`](Self::is_match) holds. [`Browse::url`] reports which
    /// part is missing.
    pub fn browse(&self) -> Option<String> {
        self.browse.url().ok()
    }

    /// True when both owner and project were recognized.
    pub fn is_match(&self) -> bool {
        self.user.is_some() && self.project.is_some()
    }
}

impl Serialize for RepositoryDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RepositoryDescriptor", 5)?;
        s.serialize_field("browse", &self.browse)?;
        s.serialize_field("domain", &self.domain)?;
        s.serialize_field("project", &self.project)?;
        s.serialize_field("type", &self.provider)?;
        s.serialize_field("user", &self.user)?;
        s.end()
    }
}
