//! Rendering parsed references as JSON or a text table.

use anyhow::Result;
use repolink_core::config::{OutputFormat, RepolinkConfig};
use repolink_core::reference::{parse_custom, parse_repository, Parsed, Template};

use super::OutputArgs;

/// Effective output options: command-line flags over config file values.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub template: Option<Template>,
    pub format: OutputFormat,
    pub pretty: bool,
    pub strict: bool,
}

impl OutputSettings {
    pub fn resolve(cfg: &RepolinkConfig, args: &OutputArgs) -> Self {
        let template = match args.template.as_deref() {
            Some(t) => Some(Template::parse(t)),
            None => cfg.default_template.clone(),
        }
        .filter(|t| !t.as_str().is_empty());

        Self {
            template,
            format: args.format.map(Into::into).unwrap_or(cfg.output),
            pretty: cfg.pretty,
            strict: cfg.strict,
        }
    }
}

fn parse_one(reference: &str, template: Option<&Template>) -> Parsed {
    match template {
        Some(t) => Parsed::Custom(parse_custom(reference, t)),
        None => Parsed::Repository(parse_repository(reference)),
    }
}

/// One JSON document per line (or pretty-printed block).
pub fn render_json(parsed: &[(&str, Parsed)], pretty: bool) -> Result<String> {
    let mut out = String::new();
    for (_, p) in parsed {
        let doc = if pretty {
            serde_json::to_string_pretty(p)?
        } else {
            serde_json::to_string(p)?
        };
        out.push_str(&doc);
        out.push('\n');
    }
    Ok(out)
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Column table for fixed descriptors, `key=value` blocks for templated ones.
pub fn render_text(parsed: &[(&str, Parsed)]) -> String {
    let mut out = String::new();
    let has_fixed = parsed
        .iter()
        .any(|(_, p)| matches!(p, Parsed::Repository(_)));
    if has_fixed {
        out.push_str(&format!(
            "{:<40} {:<7} {:<24} {:<24} {:<20} {}\n",
            "REFERENCE", "TYPE", "DOMAIN", "USER", "PROJECT", "BROWSE"
        ));
    }

    for (reference, p) in parsed {
        let provider = p.provider().map(|t| t.as_str());
        let browse = p.browse();
        match p {
            Parsed::Repository(d) => {
                out.push_str(&format!(
                    "{:<40} {:<7} {:<24} {:<24} {:<20} {}\n",
                    reference,
                    or_dash(provider),
                    or_dash(d.domain.as_deref()),
                    or_dash(d.user.as_deref()),
                    or_dash(d.project.as_deref()),
                    or_dash(browse.as_deref()),
                ));
            }
            Parsed::Custom(d) => {
                out.push_str(reference);
                out.push('\n');
                for (key, value) in d.own_fields() {
                    out.push_str(&format!("  {}={}\n", key, or_dash(value)));
                }
                out.push_str(&format!("  browse={}\n", or_dash(browse.as_deref())));
                out.push_str(&format!("  type={}\n", or_dash(provider)));
                out.push_str(&format!("  domain={}\n", or_dash(d.domain.as_deref())));
            }
        }
    }
    out
}

/// References without a browse URL.
pub fn unbrowsable<'a>(parsed: &[(&'a str, Parsed)]) -> Vec<&'a str> {
    parsed
        .iter()
        .filter(|(_, p)| p.browse().is_none())
        .map(|(r, _)| *r)
        .collect()
}

/// Parses, prints, and in strict mode fails on unbrowsable references.
pub fn report(references: &[String], settings: &OutputSettings) -> Result<()> {
    let parsed: Vec<(&str, Parsed)> = references
        .iter()
        .map(|r| (r.as_str(), parse_one(r, settings.template.as_ref())))
        .collect();

    let rendered = match settings.format {
        OutputFormat::Json => render_json(&parsed, settings.pretty)?,
        OutputFormat::Text => render_text(&parsed),
    };
    print!("{rendered}");

    if settings.strict {
        let missing = unbrowsable(&parsed);
        if !missing.is_empty() {
            anyhow::bail!(
                "{} reference(s) have no browse URL: {}",
                missing.len(),
                missing.join(", ")
            );
        }
    }
    Ok(())
}
