//! Repository reference parsing.
//!
//! Turns shorthand (`user/project`), SSH remotes (`git@host:user/project.git`),
//! http(s)/git URLs and GitHub archive endpoints into a [`RepositoryDescriptor`]
//! or, given a [`Template`], a [`CustomDescriptor`].
//!
//! Parsing never fails. References that do not look like a repository yield
//! descriptors with empty fields; host-derived fields are still filled in when
//! a host is present.

mod decompose;
mod descriptor;
mod grammar;
mod host;
mod normalize;
mod template;

use serde::Serialize;

pub use decompose::{decompose, Decomposed, Scheme};
pub use descriptor::{Browse, BrowseError, RepositoryDescriptor};
pub use grammar::{match_path, PathCaptures};
pub use host::{grammar_for, provider_type, Grammar, ProviderType};
pub use normalize::normalize_reference;
pub use template::{CustomDescriptor, Template};

/// Result of [`parse`]: fixed shape, or the shape requested by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Parsed {
    Repository(RepositoryDescriptor),
    Custom(CustomDescriptor),
}

impl Parsed {
    pub fn browse(&self) -> Option<String> {
        match self {
            Parsed::Repository(d) => d.browse(),
            Parsed::Custom(d) => d.browse(),
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Parsed::Repository(d) => d.domain.as_deref(),
            Parsed::Custom(d) => d.domain.as_deref(),
        }
    }

    pub fn provider(&self) -> Option<ProviderType> {
        match self {
            Parsed::Repository(d) => d.provider,
            Parsed::Custom(d) => d.provider,
        }
    }
}

/// Everything the descriptor builders need, computed once per reference.
struct Analysis {
    decomposed: Decomposed,
    provider: Option<ProviderType>,
    captures: PathCaptures,
}

fn analyze(reference: &str) -> Analysis {
    let normalized = normalize_reference(reference);
    let decomposed = decompose(&normalized);
    let host = decomposed.host.as_deref();
    let grammar = grammar_for(host);
    let provider = provider_type(host);
    let captures = match_path(grammar, &decomposed.path);

    tracing::debug!(
        reference,
        host = host.unwrap_or("-"),
        ?grammar,
        provider = provider.map(ProviderType::as_str).unwrap_or("-"),
        owner = captures.owner.as_deref().unwrap_or("-"),
        project = captures.project.as_deref().unwrap_or("-"),
        "parsed repository reference"
    );

    Analysis {
        decomposed,
        provider,
        captures,
    }
}

/// Parses a reference into the fixed descriptor shape.
///
/// # Examples
///
/// - `"user/project"` → user `user`, project `project`, no domain
/// - `"git@gitlab.com:group/sub/project.git"` → user `group/sub`, type gitlab
/// - `"https://api.github.com/repos/user/project/tarball"` → user `user`, type github
pub fn parse_repository(reference: &str) -> RepositoryDescriptor {
    let a = analyze(reference);
    RepositoryDescriptor::build(&a.decomposed, a.provider, a.captures)
}

/// Parses a reference and shapes the captured path segments with `template`.
pub fn parse_custom(reference: &str, template: &Template) -> CustomDescriptor {
    let a = analyze(reference);
    let fields = template.apply(&a.captures.segments());
    CustomDescriptor {
        fields,
        domain: a.decomposed.host.clone(),
        provider: a.provider,
        browse: Browse::new(&a.decomposed, &a.captures),
    }
}

/// Parses a reference, using `template` when one is given and non-empty.
pub fn parse(reference: &str, template: Option<&str>) -> Parsed {
    match template.filter(|t| !t.is_empty()) {
        Some(t) => Parsed::Custom(parse_custom(reference, &Template::parse(t))),
        None => Parsed::Repository(parse_repository(reference)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand() {
        let d = parse_repository("user/project");
        assert_eq!(d.user.as_deref(), Some("user"));
        assert_eq!(d.project.as_deref(), Some("project"));
        assert_eq!(d.domain, None);
        assert_eq!(d.provider, None);
        assert_eq!(d.browse(), None);
    }

    #[test]
    fn github_url() {
        let d = parse_repository("https://github.com/user/project");
        assert_eq!(d.domain.as_deref(), Some("github.com"));
        assert_eq!(d.provider, Some(ProviderType::Github));
        assert_eq!(d.browse().as_deref(), Some("https://github.com/user/project"));
    }

    #[test]
    fn scp_remote_with_port() {
        let d = parse_repository("git@git.example.com:8080/user/project.git");
        assert_eq!(d.user.as_deref(), Some("user"));
        assert_eq!(d.project.as_deref(), Some("project"));
        assert_eq!(d.domain.as_deref(), Some("git.example.com:8080"));
        assert_eq!(d.provider, None);
        assert_eq!(
            d.browse().as_deref(),
            Some("https://git.example.com:8080/user/project")
        );
    }

    #[test]
    fn classification_ignores_path() {
        let d = parse_repository("https://git.example.net/user/gitlab");
        assert_eq!(d.provider, None);
        assert_eq!(d.project.as_deref(), Some("gitlab"));
    }

    #[test]
    fn host_only_keeps_domain_and_type() {
        let d = parse_repository("https://github.com/user");
        assert_eq!(d.user, None);
        assert_eq!(d.project, None);
        assert_eq!(d.domain.as_deref(), Some("github.com"));
        assert_eq!(d.provider, Some(ProviderType::Github));
        assert_eq!(d.browse.url(), Err(BrowseError::MissingOwner));
    }

    #[test]
    fn archive_endpoints_agree() {
        let api = parse_repository("https://api.github.com/repos/user/project/tarball");
        let codeload = parse_repository("https://codeload.github.com/user/project/legacy.zip");
        for d in [&api, &codeload] {
            assert_eq!(d.user.as_deref(), Some("user"));
            assert_eq!(d.project.as_deref(), Some("project"));
            assert_eq!(d.provider, Some(ProviderType::Github));
        }
        assert_eq!(
            api.browse().as_deref(),
            Some("https://api.github.com/user/project")
        );
    }

    #[test]
    fn api_host_does_not_fall_back_to_generic() {
        let d = parse_repository("https://api.github.com/user/project");
        assert!(!d.is_match());
        assert_eq!(d.domain.as_deref(), Some("api.github.com"));
    }

    #[test]
    fn custom_template_nested_owner() {
        let t = Template::parse("{{owner}}/{{owner}}/{{name}}");
        let d = parse_custom("https://gitlab.com/a/b/c/project", &t);
        assert_eq!(d.get("owner"), Some("a/b"));
        assert_eq!(d.get("name"), Some("c"));
        assert_eq!(d.domain.as_deref(), Some("gitlab.com"));
        assert_eq!(d.provider, Some(ProviderType::Gitlab));
        assert_eq!(d.browse().as_deref(), Some("https://gitlab.com/a/b/c/project"));
    }

    #[test]
    fn custom_template_with_leading_literal() {
        let t = Template::parse("repo/{{owner}}/{{name}}");
        let d = parse_custom("https://github.com/user/project", &t);
        assert_eq!(d.get("owner"), Some("user"));
        assert_eq!(d.get("name"), Some("project"));

        let d = parse_custom("git@gitlab.com:group/sub/project.git", &t);
        assert_eq!(d.get("owner"), Some("group"));
        assert_eq!(d.get("name"), Some("sub"));
    }

    #[test]
    fn custom_template_on_archive_endpoint() {
        let t = Template::parse("{{owner}}/{{repo}}");
        let d = parse_custom("https://codeload.github.com/user/project/legacy.tar.gz", &t);
        assert_eq!(d.get("owner"), Some("user"));
        assert_eq!(d.get("repo"), Some("project"));
    }

    #[test]
    fn custom_template_without_match() {
        let t = Template::parse("{{owner}}/{{repo}}");
        let d = parse_custom("https://github.com", &t);
        assert_eq!(
            d.fields,
            vec![("owner".to_string(), None), ("repo".to_string(), None)]
        );
        assert_eq!(d.domain.as_deref(), Some("github.com"));
    }

    #[test]
    fn custom_serializes_reserved_keys_last() {
        let d = parse("https://github.com/user/project", Some("{{type}}/{{repo}}"));
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r#"{"repo":"project","browse":"https://github.com/user/project","type":"github","domain":"github.com"}"#
        );
    }

    #[test]
    fn empty_template_means_fixed_shape() {
        assert!(matches!(parse("user/project", Some("")), Parsed::Repository(_)));
        assert!(matches!(parse("user/project", None), Parsed::Repository(_)));
        assert!(matches!(
            parse("user/project", Some("{{a}}/{{b}}")),
            Parsed::Custom(_)
        ));
    }
}
