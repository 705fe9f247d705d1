//! Data model for extraction results and parsed documentation.

use serde::Serialize;
use std::fmt;

/// The construct kind a query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Module,
    Class,
    Function,
    Method,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Module => "module",
            Kind::Class => "class",
            Kind::Function => "function",
            Kind::Method => "method",
        };
        f.write_str(name)
    }
}

/// A record field that is a single value, or a parallel sequence of values
/// for overload-aggregated results.
///
/// Serializes untagged, so consumers see either a plain string or an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Single(String),
    Multiple(Vec<String>),
}

impl Field {
    /// The scalar value, or None for an overload sequence.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Field::Single(s) => Some(s),
            Field::Multiple(_) => None,
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Field::Multiple(_))
    }

    /// All values, in order. A single value yields a one-element Vec.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Field::Single(s) => vec![s.as_str()],
            Field::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }

    /// The first value, or an empty string.
    pub fn first(&self) -> &str {
        self.values().first().copied().unwrap_or("")
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::Single(String::new())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Single(s)
    }
}

/// One extraction result: the construct's names, signature, docstring, and
/// a reconstructed source stub. Immutable once constructed.
///
/// Serialized keys match the output record contract consumed by renderers:
/// `class`, `function`, `signature`, `docstring`, `return_type`, `source`,
/// `type`, `label`, `filename`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocRecord {
    #[serde(rename = "class")]
    pub class_name: Field,
    #[serde(rename = "function")]
    pub function_name: Field,
    pub signature: Field,
    pub docstring: Field,
    pub return_type: Field,
    /// Minimal equivalent source stub. Empty for class/module kinds.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// The original query string.
    #[serde(rename = "label")]
    pub query: String,
    pub filename: String,
}

/// A contiguous block of documentation text introduced by a header line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<ArgEntry>>,
}

/// One parsed entry within an argument-list-shaped section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgEntry {
    /// Argument or return-value name/label.
    pub specifier: String,
    /// Parenthesized type annotation, empty when absent.
    pub signature: String,
    /// Sanitized description: dedented, continuations joined, trimmed.
    pub description: String,
}
