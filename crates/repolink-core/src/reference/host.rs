//! Host classification: provider type and path grammar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of the hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Github,
    Gitlab,
}

impl ProviderType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderType::Github => "github",
            ProviderType::Gitlab => "gitlab",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path shape expected for a given host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `api.github.com/repos/<owner>/<project>/(tarball|zipball)`
    ApiArchive,
    /// `codeload.github.com/<owner>/<project>/legacy.(zip|tar.gz)`
    CodeloadArchive,
    /// `<owner-path>/<project>`
    Generic,
}

/// Provider type by substring search on the host (never the path).
pub fn provider_type(host: Option<&str>) -> Option<ProviderType> {
    let host = host?;
    if host.contains("github") {
        Some(ProviderType::Github)
    } else if host.contains("gitlab") {
        Some(ProviderType::Gitlab)
    } else {
        None
    }
}

/// Selects the path grammar for a host; first match wins.
pub fn grammar_for(host: Option<&str>) -> Grammar {
    match host {
        Some(h) if h.contains("api.github.com") => Grammar::ApiArchive,
        Some(h) if h.contains("codeload.github.com") => Grammar::CodeloadArchive,
        _ => Grammar::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_classification() {
        assert_eq!(provider_type(Some("github.com")), Some(ProviderType::Github));
        assert_eq!(
            provider_type(Some("www.github.example.net")),
            Some(ProviderType::Github)
        );
        assert_eq!(provider_type(Some("github")), Some(ProviderType::Github));
        assert_eq!(
            provider_type(Some("gitlab.example.com:8080")),
            Some(ProviderType::Gitlab)
        );
        assert_eq!(provider_type(Some("git.example.net")), None);
        assert_eq!(provider_type(None), None);
    }

    #[test]
    fn github_wins_over_gitlab() {
        assert_eq!(
            provider_type(Some("github.gitlab.example")),
            Some(ProviderType::Github)
        );
    }

    #[test]
    fn archive_hosts_select_archive_grammars() {
        assert_eq!(grammar_for(Some("api.github.com")), Grammar::ApiArchive);
        assert_eq!(
            grammar_for(Some("codeload.github.com")),
            Grammar::CodeloadArchive
        );
        assert_eq!(grammar_for(Some("github.com")), Grammar::Generic);
        assert_eq!(grammar_for(None), Grammar::Generic);
    }
}
