//! Path grammars for repository-shaped paths.
//!
//! Segments are limited to ASCII word characters, `.` and `-`. Each grammar
//! accepts an optional trailing slash after the last recognized segment.

use regex::Regex;
use std::sync::OnceLock;

use super::host::Grammar;

fn generic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^/?:?([A-Za-z0-9_./\-]+)/([A-Za-z0-9_.\-]+)/?$")
            .expect("generic path regex is valid")
    })
}

fn api_archive_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^/repos/([A-Za-z0-9_.\-]+)/([A-Za-z0-9_.\-]+)/(?:tarball|zipball)(?:/.+)?/?$")
            .expect("API archive path regex is valid")
    })
}

fn codeload_archive_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^/([A-Za-z0-9_.\-]+)/([A-Za-z0-9_.\-]+)/legacy\.(?:zip|tar\.gz)(?:/.+)?/?$")
            .expect("codeload archive path regex is valid")
    })
}

/// Owner path and project name recognized in a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCaptures {
    /// May contain `/` for nested groups.
    pub owner: Option<String>,
    /// Never contains `/`.
    pub project: Option<String>,
}

impl PathCaptures {
    pub fn is_match(&self) -> bool {
        self.owner.is_some() && self.project.is_some()
    }

    /// The recognized path as `/owner.../project` split on `/`: the empty
    /// root slot, owner sub-segments, then the project. Empty on a non-match.
    pub fn segments(&self) -> Vec<&str> {
        let (Some(owner), Some(project)) = (self.owner.as_deref(), self.project.as_deref())
        else {
            return Vec::new();
        };
        std::iter::once("")
            .chain(owner.split('/'))
            .chain(std::iter::once(project))
            .collect()
    }
}

/// Applies `grammar` to `path`. A non-match leaves both captures empty.
pub fn match_path(grammar: Grammar, path: &str) -> PathCaptures {
    let re = match grammar {
        Grammar::ApiArchive => api_archive_regex(),
        Grammar::CodeloadArchive => codeload_archive_regex(),
        Grammar::Generic => generic_regex(),
    };

    match re.captures(path) {
        Some(cap) => PathCaptures {
            owner: cap.get(1).map(|m| m.as_str().to_string()),
            project: cap.get(2).map(|m| m.as_str().to_string()),
        },
        None => PathCaptures::default(),
    }
}
