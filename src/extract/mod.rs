//! Locator stage: slice a docstring and its owning signature out of raw
//! source text.
//!
//! One [`Locate`] implementation per source dialect. Each dialect builds a
//! pattern for the requested construct kind and describes its capture groups
//! with a [`GroupMap`]; the shared machinery here runs the pattern, reads the
//! mapped groups, dedents the captured docstring, and consumes the trailing
//! body with a continuation pattern built from the captured indentation.

pub mod pybind;
pub mod python;
mod query;

pub use pybind::PybindLocator;
pub use python::PythonLocator;
pub use query::Query;

use crate::error::Result;
use crate::model::{DocRecord, Field, Kind};
use crate::text::{dedent, remove_indent};
use regex::{Captures, Regex};
use std::path::Path;
use tracing::debug;

/// Capability interface implemented once per source dialect.
pub trait Locate {
    fn locate_function(&self, source: &str, name: &str) -> Result<Hit>;
    fn locate_class(&self, source: &str, name: &str) -> Result<Hit>;
    fn locate_method(&self, source: &str, class: &str, name: &str) -> Result<Hit>;
    fn locate_module(&self, source: &str) -> Result<Hit>;

    /// Keyword that introduces a callable in reconstructed source.
    fn function_keyword(&self) -> &'static str {
        "def "
    }

    fn dialect(&self) -> &'static str;
}

/// A successful pattern match, before assembly into a [`DocRecord`].
#[derive(Debug, Clone)]
pub enum Hit {
    One(RawHit),
    /// Numbered overloads sharing one documentation block.
    Many(Vec<OverloadHit>),
}

/// Scalar fields read from one pattern match.
#[derive(Debug, Clone, Default)]
pub struct RawHit {
    pub class_name: String,
    pub function: String,
    pub signature: String,
    pub return_type: String,
    /// Width of the construct's body indentation, in columns.
    pub indent: usize,
    /// Dedented documentation text.
    pub docstring: String,
    /// Raw body lines following the documentation block.
    pub body: String,
}

/// One aggregated overload from a generated-binding documentation block.
#[derive(Debug, Clone)]
pub struct OverloadHit {
    pub function: String,
    pub signature: String,
    pub return_type: String,
    pub docstring: String,
}

/// Mapping from logical field to capture-group index. Dialects reorder or
/// omit groups; an absent group reads as the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GroupMap {
    pub class_name: Option<usize>,
    pub function: Option<usize>,
    pub signature: Option<usize>,
    pub return_type: Option<usize>,
    pub indent: Option<usize>,
    pub docstring: Option<usize>,
}

/// What follows the main pattern match.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Tail {
    /// Nothing to consume (class and module constructs).
    None,
    /// Indented body lines after the documentation block.
    Body,
    /// The documentation block itself is the indented run of lines starting
    /// at the indentation group (generated-binding dialect).
    Docstring,
}

/// Run `pattern` over `source` and assemble the first surviving match.
///
/// `skip` rejects candidate matches the pattern itself cannot exclude, such
/// as a parameter list opening with `self`.
pub(crate) fn find_first(
    source: &str,
    pattern: &Regex,
    groups: &GroupMap,
    tail: Tail,
    skip: &dyn Fn(&Captures) -> bool,
) -> Result<Option<RawHit>> {
    for caps in pattern.captures_iter(source) {
        if skip(&caps) {
            continue;
        }
        let indent_str = group(&caps, groups.indent);
        let indent = indent_str.chars().count();
        let mut docstring = remove_indent(group(&caps, groups.docstring), indent);
        let mut body = String::new();

        match tail {
            Tail::None => {}
            Tail::Body => {
                if let (Some(whole), false) = (caps.get(0), indent_str.is_empty()) {
                    if let Some(m) = continuation(indent_str)?.find(&source[whole.end()..]) {
                        body = m.as_str().to_string();
                    }
                }
            }
            Tail::Docstring => {
                if let Some(start) = groups.indent.and_then(|i| caps.get(i)) {
                    if let Some(m) = continuation(indent_str)?.find(&source[start.start()..]) {
                        docstring = remove_indent(m.as_str(), indent);
                    }
                }
            }
        }

        return Ok(Some(RawHit {
            class_name: group(&caps, groups.class_name).to_string(),
            function: group(&caps, groups.function).to_string(),
            signature: group(&caps, groups.signature).to_string(),
            return_type: group(&caps, groups.return_type).to_string(),
            indent,
            docstring,
            body,
        }));
    }
    Ok(None)
}

/// A run of lines each starting with the captured indentation, including any
/// blank lines that follow them.
fn continuation(indent: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"\A(?:{}.*\n+)+",
        regex::escape(indent)
    ))?)
}

fn group<'t>(caps: &Captures<'t>, index: Option<usize>) -> &'t str {
    index
        .and_then(|i| caps.get(i))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Locate the construct named by `query` in `source` and assemble the
/// extraction record.
pub fn locate(
    source: &str,
    query: &str,
    locator: &dyn Locate,
    filename: &str,
) -> Result<DocRecord> {
    let q = Query::parse(query)?;
    debug!(
        query,
        kind = %q.kind,
        dialect = locator.dialect(),
        "locating docstring"
    );

    let hit = match q.kind {
        Kind::Function => locator.locate_function(source, &q.function_name)?,
        Kind::Class => locator.locate_class(source, &q.class_name)?,
        Kind::Method => locator.locate_method(source, &q.class_name, &q.function_name)?,
        Kind::Module => locator.locate_module(source)?,
    };

    Ok(match hit {
        Hit::One(raw) => {
            let source_stub = match q.kind {
                Kind::Function | Kind::Method => {
                    reconstruct(locator.function_keyword(), &raw)
                }
                Kind::Class | Kind::Module => String::new(),
            };
            DocRecord {
                class_name: Field::Single(raw.class_name),
                function_name: Field::Single(raw.function),
                signature: Field::Single(raw.signature),
                docstring: Field::Single(raw.docstring),
                return_type: Field::Single(raw.return_type),
                source: source_stub,
                kind: q.kind,
                query: query.to_string(),
                filename: filename.to_string(),
            }
        }
        Hit::Many(overloads) => DocRecord {
            class_name: Field::default(),
            function_name: Field::Multiple(
                overloads.iter().map(|o| o.function.clone()).collect(),
            ),
            signature: Field::Multiple(
                overloads.iter().map(|o| o.signature.clone()).collect(),
            ),
            docstring: Field::Multiple(
                overloads.iter().map(|o| o.docstring.clone()).collect(),
            ),
            return_type: Field::Multiple(
                overloads.iter().map(|o| o.return_type.clone()).collect(),
            ),
            source: String::new(),
            kind: q.kind,
            query: query.to_string(),
            filename: filename.to_string(),
        },
    })
}

/// Minimal equivalent source: introducer keyword, name, parameter list,
/// colon, return type, newline, body.
fn reconstruct(keyword: &str, raw: &RawHit) -> String {
    dedent(&format!(
        "{keyword}{}{}:{}\n{}",
        raw.function, raw.signature, raw.return_type, raw.body
    ))
}

/// Map a filename's extension to the locator dialect wired for it.
///
/// Only the hand-written-source dialect is selected by extension; the
/// generated-binding dialect must be requested explicitly.
pub fn locator_for_path(path: &Path) -> Option<Box<dyn Locate>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("py" | "pyi") => {
            debug!(path = %path.display(), "dispatching to python dialect");
            Some(Box::new(PythonLocator))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn malformed_query_fails_before_matching() {
        let err = locate("def a(): pass", "a.b.c", &PythonLocator, "").unwrap_err();
        assert!(matches!(err, Error::MalformedQuery { .. }));
    }

    #[test]
    fn dispatch_by_extension() {
        assert!(locator_for_path(Path::new("pkg/mod.py")).is_some());
        assert!(locator_for_path(Path::new("stubs.pyi")).is_some());
        assert!(locator_for_path(Path::new("script.sh")).is_none());
        assert!(locator_for_path(Path::new("noext")).is_none());
    }

    #[test]
    fn reconstruct_keeps_body_indentation() {
        let raw = RawHit {
            function: "f".to_string(),
            signature: "(a)".to_string(),
            body: "    return a\n".to_string(),
            ..Default::default()
        };
        assert_eq!(reconstruct("def ", &raw), "def f(a):\n    return a\n");
    }
}
