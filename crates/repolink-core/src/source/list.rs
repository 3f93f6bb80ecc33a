//! Plain text list of references, one per line.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::ReferenceSource;

/// Reads references from a text file. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone)]
pub struct ListSource {
    path: PathBuf,
}

impl ListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trimmed, non-empty, non-comment lines of `text`.
pub(crate) fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

impl ReferenceSource for ListSource {
    fn references(&self) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read reference list: {}", self.path.display()))?;
        let refs = parse_list(&text);
        tracing::debug!(path = %self.path.display(), count = refs.len(), "loaded reference list");
        Ok(refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "# deps\nuser/project\n\n   https://gitlab.com/a/b  \n#https://ignored/x/y\n";
        assert_eq!(
            parse_list(text),
            vec!["user/project".to_string(), "https://gitlab.com/a/b".to_string()]
        );
    }

    #[test]
    fn reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"git@github.com:user/project.git\r\nuser/other\n").unwrap();
        f.flush().unwrap();
        let refs = ListSource::new(f.path()).references().unwrap();
        assert_eq!(refs, vec!["git@github.com:user/project.git", "user/other"]);
    }

    #[test]
    fn missing_file_errs() {
        let dir = tempfile::tempdir().unwrap();
        let source = ListSource::new(dir.path().join("nope.txt"));
        assert!(source.references().is_err());
    }
}
