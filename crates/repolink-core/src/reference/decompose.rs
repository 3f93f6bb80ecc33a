//! Splitting a normalized reference into scheme, host and path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use url::{ParseError, Url};

/// Base used to resolve shorthand (`user/project`) into a path.
const NEUTRAL_BASE: &str = "https://example.com/";

fn neutral_base() -> &'static Url {
    static BASE: OnceLock<Url> = OnceLock::new();
    BASE.get_or_init(|| Url::parse(NEUTRAL_BASE).expect("neutral base URL is valid"))
}

/// Scheme used when building the browse URL. Anything but `http` browses over https.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    fn from_url_scheme(scheme: &str) -> Self {
        if scheme == "http" {
            Scheme::Http
        } else {
            Scheme::Https
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural pieces of a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposed {
    pub scheme: Scheme,
    /// Host with a non-default port appended (`host:port`); `None` for shorthand.
    pub host: Option<String>,
    pub path: String,
}

/// Decomposes a normalized reference. Never fails: unparseable input yields
/// no host and an empty path, which no grammar matches.
pub fn decompose(normalized: &str) -> Decomposed {
    match Url::parse(normalized) {
        Ok(url) => from_url(&url, true),
        Err(ParseError::RelativeUrlWithoutBase) => {
            // `//host/path` names its authority; bare shorthand does not.
            let keep_host = normalized.starts_with("//");
            match neutral_base().join(normalized) {
                Ok(url) => from_url(&url, keep_host),
                Err(err) => {
                    tracing::debug!(reference = normalized, error = %err, "relative reference did not resolve");
                    Decomposed {
                        scheme: Scheme::Https,
                        host: None,
                        path: normalized.to_string(),
                    }
                }
            }
        }
        Err(err) => {
            tracing::debug!(reference = normalized, error = %err, "reference is not a URL");
            Decomposed {
                scheme: Scheme::Https,
                host: None,
                path: String::new(),
            }
        }
    }
}

fn from_url(url: &Url, keep_host: bool) -> Decomposed {
    let host = url
        .host_str()
        .filter(|_| keep_host)
        .filter(|h| !h.is_empty())
        .map(|h| match url.port() {
            Some(port) => format!("{h}:{port}"),
            None => h.to_string(),
        });

    Decomposed {
        scheme: Scheme::from_url_scheme(url.scheme()),
        host,
        path: url.path().to_string(),
    }
}
