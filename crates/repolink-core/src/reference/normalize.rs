//! SSH-remote rewriting and `.git` suffix stripping.

use regex::Regex;
use std::sync::OnceLock;

/// `git@<host>:` where `<host>` is word characters and dots.
fn scp_remote_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"git@([A-Za-z0-9_.]+):").expect("scp remote regex is valid"))
}

/// Rewrites a raw reference so that it can be parsed as a URL.
///
/// - `git@host:path` becomes `https://git@host/path`
/// - `git@host:8080/path` keeps the port (`https://git@host:8080/path`)
/// - a trailing `.git` is removed
pub fn normalize_reference(raw: &str) -> String {
    let mut out = match raw.strip_prefix("git@") {
        Some(rest) => format!("https://git@{rest}"),
        None => raw.to_string(),
    };

    // Only the first `git@host:` whose colon is not followed by a port digit.
    let colon = scp_remote_regex().captures_iter(&out).find_map(|cap| {
        let m = cap.get(0)?;
        let followed_by_digit = out[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());
        (!followed_by_digit).then(|| m.end() - 1)
    });
    if let Some(idx) = colon {
        out.replace_range(idx..idx + 1, "/");
    }

    if let Some(stripped) = out.strip_suffix(".git") {
        out.truncate(stripped.len());
    }

    tracing::trace!(raw, normalized = %out, "normalized repository reference");
    out
}
