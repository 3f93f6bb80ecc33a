//! Tests for output settings and rendering.

use crate::cli::output::{render_json, render_text, unbrowsable, OutputSettings};
use crate::cli::{FormatArg, OutputArgs};
use repolink_core::config::{OutputFormat, RepolinkConfig};
use repolink_core::reference::{parse_custom, parse_repository, Parsed, Template};

#[test]
fn settings_flags_override_config() {
    let cfg = RepolinkConfig {
        default_template: Some(Template::parse("{{a}}/{{b}}")),
        output: OutputFormat::Json,
        pretty: false,
        strict: true,
    };
    let args = OutputArgs {
        template: Some("{{owner}}/{{repo}}".to_string()),
        format: Some(FormatArg::Text),
    };
    let s = OutputSettings::resolve(&cfg, &args);
    assert_eq!(s.template, Some(Template::parse("{{owner}}/{{repo}}")));
    assert_eq!(s.format, OutputFormat::Text);
    assert!(!s.pretty);
    assert!(s.strict);
}

#[test]
fn settings_fall_back_to_config() {
    let cfg = RepolinkConfig {
        default_template: Some(Template::parse("{{a}}/{{b}}")),
        ..RepolinkConfig::default()
    };
    let s = OutputSettings::resolve(&cfg, &OutputArgs::default());
    assert_eq!(s.template, Some(Template::parse("{{a}}/{{b}}")));
    assert_eq!(s.format, OutputFormat::Json);
}

#[test]
fn empty_template_flag_disables_config_template() {
    let cfg = RepolinkConfig {
        default_template: Some(Template::parse("{{a}}/{{b}}")),
        ..RepolinkConfig::default()
    };
    let args = OutputArgs {
        template: Some(String::new()),
        format: None,
    };
    assert_eq!(OutputSettings::resolve(&cfg, &args).template, None);
}

#[test]
fn json_is_one_document_per_reference() {
    let parsed = vec![
        ("user/project", Parsed::Repository(parse_repository("user/project"))),
        (
            "https://github.com/user/project",
            Parsed::Repository(parse_repository("https://github.com/user/project")),
        ),
    ];
    let out = render_json(&parsed, false).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        r#"{"browse":null,"domain":null,"project":"project","type":null,"user":"user"}"#
    );
    assert_eq!(
        lines[1],
        r#"{"browse":"https://github.com/user/project","domain":"github.com","project":"project","type":"github","user":"user"}"#
    );
}

#[test]
fn text_table_has_header_and_dashes() {
    let parsed = vec![(
        "https://github.com/user",
        Parsed::Repository(parse_repository("https://github.com/user")),
    )];
    let out = render_text(&parsed);
    let mut lines = out.lines();
    assert!(lines.next().unwrap().starts_with("REFERENCE"));
    let row: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
    assert_eq!(
        row,
        vec!["https://github.com/user", "github", "github.com", "-", "-", "-"]
    );
}

#[test]
fn text_custom_is_key_value() {
    let t = Template::parse("{{owner}}/{{repo}}");
    let parsed = vec![(
        "git@gitlab.com:user/project.git",
        Parsed::Custom(parse_custom("git@gitlab.com:user/project.git", &t)),
    )];
    let out = render_text(&parsed);
    assert_eq!(
        out,
        "git@gitlab.com:user/project.git\n  owner=user\n  repo=project\n  browse=https://gitlab.com/user/project\n  type=gitlab\n  domain=gitlab.com\n"
    );
}

#[test]
fn text_custom_prints_reserved_keys_once() {
    let t = Template::parse("{{type}}/{{repo}}");
    let parsed = vec![(
        "https://github.com/user/project",
        Parsed::Custom(parse_custom("https://github.com/user/project", &t)),
    )];
    let out = render_text(&parsed);
    assert_eq!(out.matches("  type=").count(), 1);
    assert_eq!(
        out,
        "https://github.com/user/project\n  repo=project\n  browse=https://github.com/user/project\n  type=github\n  domain=github.com\n"
    );
}

#[test]
fn unbrowsable_lists_references() {
    let parsed = vec![
        ("user/project", Parsed::Repository(parse_repository("user/project"))),
        (
            "https://gitlab.com/a/b",
            Parsed::Repository(parse_repository("https://gitlab.com/a/b")),
        ),
        ("https://somewhere", Parsed::Repository(parse_repository("https://somewhere"))),
    ];
    assert_eq!(unbrowsable(&parsed), vec!["user/project", "https://somewhere"]);
}
