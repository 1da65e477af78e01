//! Declarative description of a search-filter template.
//!
//! A template is never filled in locally. It is rendered as JSON and
//! embedded in an instruction so the generative side knows which fields it
//! may return and what each one holds.

use serde_json::{Map, Value, json};

/// Placeholder text marking a free-form string field.
pub const TEXT_PLACEHOLDER: &str = "string";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// List of free-form strings, rendered as `["string"]`.
    Text,
    /// Inclusive numeric range, rendered as `{"min":0,"max":0}`. 0 means unset.
    Range,
    /// List restricted to the given tokens, rendered in order.
    OneOf(&'static [&'static str]),
}

impl FieldKind {
    pub fn placeholder(&self) -> Value {
        match self {
            FieldKind::Text => json!([TEXT_PLACEHOLDER]),
            FieldKind::Range => {
                let mut range = Map::new();
                range.insert("min".to_string(), json!(0));
                range.insert("max".to_string(), json!(0));
                Value::Object(range)
            }
            FieldKind::OneOf(tokens) => json!(tokens),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateField {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl TemplateField {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn range(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Range,
        }
    }

    pub const fn one_of(name: &'static str, tokens: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::OneOf(tokens),
        }
    }
}

/// Ordered set of optional filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTemplate {
    pub fields: &'static [TemplateField],
}

impl FilterTemplate {
    pub const fn new(fields: &'static [TemplateField]) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&TemplateField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Tokens allowed for an enumerated field, `None` for other kinds.
    pub fn permitted_values(&self, name: &str) -> Option<&'static [&'static str]> {
        match self.field(name)?.kind {
            FieldKind::OneOf(tokens) => Some(tokens),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.kind.placeholder()))
            .collect();
        Value::Object(map)
    }

    /// Compact JSON text, fields in declaration order.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_value())
    }
}
