//! Caller-defined output shapes (`{{owner}}/{{owner}}/{{name}}`).
//!
//! A template is compiled once into `(name, segment index)` bindings. Segments
//! are the reference path split on `/`, starting with the empty root slot in
//! front of the first `/`. A template that opens with a literal token
//! (`repo/{{owner}}/{{name}}`) lines that token up with the root slot; one that
//! opens with a placeholder (`{{owner}}/{{name}}`) starts at the first real
//! segment. Applying the bindings yields an insertion-ordered mapping in which
//! a repeated name accumulates its segments joined by `/`. Placeholders past
//! the last segment stay unresolved (`None`).

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::descriptor::Browse;
use super::host::ProviderType;

/// Keys always added after the template's own keys; they win on collision.
const RESERVED_KEYS: [&str; 3] = ["browse", "type", "domain"];

fn is_placeholder(token: &str) -> bool {
    token.contains("{{")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    name: String,
    index: usize,
}

/// Compiled output template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Template {
    source: String,
    #[serde(skip)]
    bindings: Vec<Binding>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        // Only a literal first token occupies the root slot.
        let offset = match source.split('/').next() {
            Some(first) if is_placeholder(first) => 1,
            _ => 0,
        };
        let bindings = source
            .split('/')
            .enumerate()
            .filter(|(_, token)| is_placeholder(token))
            .map(|(position, token)| Binding {
                name: token.replacen("{{", "", 1).replacen("}}", "", 1),
                index: position + offset,
            })
            .collect();

        Self {
            source: source.to_string(),
            bindings,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholder names in first-appearance order, without repeats.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for b in &self.bindings {
            if !keys.contains(&b.name.as_str()) {
                keys.push(&b.name);
            }
        }
        keys
    }

    /// Resolves every binding against `segments`, whose first entry is the
    /// (empty) root slot.
    pub fn apply(&self, segments: &[&str]) -> Vec<(String, Option<String>)> {
        self.bindings
            .iter()
            .fold(Vec::new(), |mut fields: Vec<(String, Option<String>)>, b| {
                let segment = segments.get(b.index).copied();
                match fields.iter_mut().find(|(name, _)| *name == b.name) {
                    Some((_, value)) => {
                        if let Some(segment) = segment {
                            *value = Some(match value.take() {
                                Some(prev) => format!("{prev}/{segment}"),
                                None => segment.to_string(),
                            });
                        }
                    }
                    None => fields.push((b.name.clone(), segment.map(String::from))),
                }
                fields
            })
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::parse(&source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::parse(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Descriptor shaped by a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDescriptor {
    /// Template keys in first-appearance order.
    pub fields: Vec<(String, Option<String>)>,
    pub domain: Option<String>,
    pub provider: Option<ProviderType>,
    pub browse: Browse,
}

impl CustomDescriptor {
    /// Template fields that are not shadowed by `browse`, `type` or `domain`.
    pub fn own_fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .filter(|(name, _)| !RESERVED_KEYS.contains(&name.as_str()))
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Value bound to `key`, if the key exists and resolved.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn browse(&self) -> Option<String> {
        self.browse.url().ok()
    }
}

impl Serialize for CustomDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let own: Vec<_> = self.own_fields().collect();
        let mut map = serializer.serialize_map(Some(own.len() + RESERVED_KEYS.len()))?;
        for (name, value) in own {
            map.serialize_entry(name, &value)?;
        }
        map.serialize_entry("browse", &self.browse)?;
        map.serialize_entry("type", &self.provider)?;
        map.serialize_entry("domain", &self.domain)?;
        map.end()
    }
}
