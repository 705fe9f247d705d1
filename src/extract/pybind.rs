//! Generated-binding dialect.
//!
//! Matches the stub text emitted by compiled-extension generators:
//! `name(params) -> type` followed by free-form indented text and no code
//! body. There is no class marker; only the function shape is supported.
//!
//! A documentation block may aggregate numbered overloads of the shape
//! `N. name(params) -> type`. When present, the match is widened into one
//! logical result carrying a sequence per field, in numeric order.

use crate::error::{Error, Result};
use crate::extract::{find_first, GroupMap, Hit, Locate, OverloadHit, Tail};
use crate::model::Kind;
use crate::text::dedent;
use regex::{Captures, Regex};

pub struct PybindLocator;

/// Reject candidates whose parameter list opens with a self-reference; the
/// signature is always the second capture group.
fn opens_with_self(caps: &Captures) -> bool {
    caps.get(2)
        .is_some_and(|m| m.as_str().starts_with("(self"))
}

impl Locate for PybindLocator {
    fn locate_function(&self, source: &str, name: &str) -> Result<Hit> {
        let pattern = Regex::new(&format!(
            r"(?m)^[ \t]*({})(\(.*\))[ \t]*(?:->[ \t]*(\w+))?[ \t]*\n+([ \t]+)",
            regex::escape(name)
        ))?;
        let groups = GroupMap {
            function: Some(1),
            signature: Some(2),
            return_type: Some(3),
            indent: Some(4),
            ..Default::default()
        };
        let raw = find_first(source, &pattern, &groups, Tail::Docstring, &opens_with_self)?
            .ok_or_else(|| Error::NotFound {
                query: name.to_string(),
            })?;

        if let Some(overloads) = split_overloads(&raw.docstring, name)? {
            return Ok(Hit::Many(overloads));
        }
        Ok(Hit::One(raw))
    }

    fn locate_class(&self, _source: &str, _name: &str) -> Result<Hit> {
        Err(Error::UnsupportedQuery {
            dialect: self.dialect(),
            kind: Kind::Class,
        })
    }

    fn locate_method(&self, _source: &str, _class: &str, _name: &str) -> Result<Hit> {
        Err(Error::UnsupportedQuery {
            dialect: self.dialect(),
            kind: Kind::Method,
        })
    }

    fn locate_module(&self, _source: &str) -> Result<Hit> {
        Err(Error::UnsupportedQuery {
            dialect: self.dialect(),
            kind: Kind::Module,
        })
    }

    /// Generated stubs carry no introducer keyword.
    fn function_keyword(&self) -> &'static str {
        ""
    }

    fn dialect(&self) -> &'static str {
        "pybind"
    }
}

/// Split a documentation block into its numbered overloads, or None when the
/// block documents a single signature.
fn split_overloads(docstring: &str, name: &str) -> Result<Option<Vec<OverloadHit>>> {
    let header = Regex::new(&format!(
        r"(?m)^[ \t]*(\d+)\.[ \t]*({})(\(.*\))[ \t]*(?:->[ \t]*(\w+))?[ \t]*$",
        regex::escape(name)
    ))?;

    let mut heads: Vec<(u32, OverloadHit, usize, usize)> = Vec::new();
    for caps in header.captures_iter(docstring) {
        let Some(whole) = caps.get(0) else { continue };
        let number = caps[1].parse::<u32>().unwrap_or(0);
        let hit = OverloadHit {
            function: caps[2].to_string(),
            signature: caps[3].to_string(),
            return_type: caps.get(4).map(|m| m.as_str().to_string()).unwrap_or_default(),
            docstring: String::new(),
        };
        heads.push((number, hit, whole.start(), whole.end()));
    }
    if heads.is_empty() {
        return Ok(None);
    }

    // Each overload's text runs from its header to the next header.
    let count = heads.len();
    for i in 0..count {
        let chunk_start = heads[i].3;
        let chunk_end = if i + 1 < count {
            heads[i + 1].2
        } else {
            docstring.len()
        };
        let chunk = &docstring[chunk_start..chunk_end];
        heads[i].1.docstring = dedent(chunk).trim_matches('\n').to_string();
    }

    heads.sort_by_key(|(number, ..)| *number);
    Ok(Some(heads.into_iter().map(|(_, hit, ..)| hit).collect()))
}

/// Tokenize a generated-binding parameter list such as `(a: int, b: int)`
/// into ordered `(name, type)` pairs. Untyped parameters are skipped.
pub fn parse_signature(signature: &str) -> Vec<(String, String)> {
    let inner = signature
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    inner
        .split(',')
        .filter_map(|param| param.split_once(':'))
        .map(|(name, ty)| (name.trim().to_string(), ty.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::locate;
    use crate::model::Field;

    const SINGLE: &str = "\n    add(arg0: int, arg1: int) -> int\n    \n    \n           Add two numbers\n    \n           Some other explanation about the add function.\n    ";

    #[test]
    fn single_function() {
        let record = locate(SINGLE, "add", &PybindLocator, "").unwrap();
        assert_eq!(record.function_name.as_single(), Some("add"));
        assert_eq!(record.signature.as_single(), Some("(arg0: int, arg1: int)"));
        assert_eq!(record.return_type.as_single(), Some("int"));
        let doc = record.docstring.as_single().unwrap();
        assert!(doc.contains("Add two numbers"));
        assert!(doc.contains("Some other"));
    }

    #[test]
    fn overloads_become_sequences() {
        let source = "\
overloaded(*args, **kwargs)
    Overloaded function.

    1. overloaded(arg0: int) -> int

    Adds one integer.

    2. overloaded(arg0: float) -> float

    Adds one float.
";
        let record = locate(source, "overloaded", &PybindLocator, "").unwrap();
        assert_eq!(
            record.function_name,
            Field::Multiple(vec!["overloaded".to_string(), "overloaded".to_string()])
        );
        assert_eq!(
            record.signature,
            Field::Multiple(vec!["(arg0: int)".to_string(), "(arg0: float)".to_string()])
        );
        assert_eq!(
            record.return_type,
            Field::Multiple(vec!["int".to_string(), "float".to_string()])
        );
        let docs = record.docstring.values().join("|");
        assert!(docs.starts_with("Adds one integer."));
        assert!(docs.ends_with("Adds one float."));
    }

    #[test]
    fn overloads_sorted_numerically() {
        let source = "\
f(*args)
    2. f(b: float) -> float

    Second.

    1. f(a: int) -> int

    First.
";
        let record = locate(source, "f", &PybindLocator, "").unwrap();
        assert_eq!(
            record.return_type,
            Field::Multiple(vec!["int".to_string(), "float".to_string()])
        );
        assert_eq!(record.docstring.values()[0], "First.");
    }

    #[test]
    fn class_queries_unsupported() {
        let err = locate("Widget(x)\n    doc\n", "Widget", &PybindLocator, "").unwrap_err();
        assert!(matches!(err, Error::UnsupportedQuery { .. }));
    }

    #[test]
    fn signature_tokenization() {
        let args = parse_signature("(arg0: int, arg1: int)");
        assert_eq!(
            args,
            vec![
                ("arg0".to_string(), "int".to_string()),
                ("arg1".to_string(), "int".to_string())
            ]
        );
        assert!(parse_signature("()").is_empty());
    }
}
