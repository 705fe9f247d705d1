//! Hand-written-source dialect.
//!
//! Matches `def`/`class` constructs followed by a triple-quoted
//! documentation block at a fixed indentation. The query name is escaped and
//! interpolated into the pattern at call time.

use crate::error::{Error, Result};
use crate::extract::{find_first, GroupMap, Hit, Locate, Tail};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The first triple-quoted block anchored at a line start with no preceding
/// construct.
static MODULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^"""((?s:.*?))""""#).unwrap());

pub struct PythonLocator;

/// Reject candidates whose parameter list opens with a self-reference; the
/// signature is always the second capture group.
fn opens_with_self(caps: &Captures) -> bool {
    caps.get(2)
        .is_some_and(|m| m.as_str().starts_with("(self"))
}

fn keep_all(_: &Captures) -> bool {
    false
}

impl Locate for PythonLocator {
    fn locate_function(&self, source: &str, name: &str) -> Result<Hit> {
        let pattern = Regex::new(&format!(
            r#"(?m)^\s*def\s+({})(\(.*\)):.*\n*([ \t]+)"""((?s:.*?))"""\n"#,
            regex::escape(name)
        ))?;
        let groups = GroupMap {
            function: Some(1),
            signature: Some(2),
            indent: Some(3),
            docstring: Some(4),
            ..Default::default()
        };
        find_first(source, &pattern, &groups, Tail::Body, &opens_with_self)?
            .map(Hit::One)
            .ok_or_else(|| Error::NotFound {
                query: name.to_string(),
            })
    }

    fn locate_class(&self, source: &str, name: &str) -> Result<Hit> {
        let pattern = Regex::new(&format!(
            r#"(?m)^\s*class\s+({})(\(\w*\))?:\n+([ \t]+)"""((?s:.*?))""""#,
            regex::escape(name)
        ))?;
        let groups = GroupMap {
            class_name: Some(1),
            signature: Some(2),
            indent: Some(3),
            docstring: Some(4),
            ..Default::default()
        };
        find_first(source, &pattern, &groups, Tail::None, &keep_all)?
            .map(Hit::One)
            .ok_or_else(|| Error::NotFound {
                query: name.to_string(),
            })
    }

    fn locate_method(&self, source: &str, class: &str, name: &str) -> Result<Hit> {
        let pattern = Regex::new(&format!(
            r#"class\s+({})(?:\(\w*\))?:\s+(?s:.*?)\s+def\s+({})(\(self.*\)):.*\n([ \t]+)"""((?s:.*?))"""\n"#,
            regex::escape(class),
            regex::escape(name)
        ))?;
        let groups = GroupMap {
            class_name: Some(1),
            function: Some(2),
            signature: Some(3),
            indent: Some(4),
            docstring: Some(5),
            ..Default::default()
        };
        find_first(source, &pattern, &groups, Tail::Body, &keep_all)?
            .map(Hit::One)
            .ok_or_else(|| Error::NotFound {
                query: format!("{class}.{name}"),
            })
    }

    fn locate_module(&self, source: &str) -> Result<Hit> {
        let groups = GroupMap {
            docstring: Some(1),
            ..Default::default()
        };
        find_first(source, &MODULE_RE, &groups, Tail::None, &keep_all)?
            .map(Hit::One)
            .ok_or_else(|| Error::NotFound {
                query: String::new(),
            })
    }

    fn dialect(&self) -> &'static str {
        "python"
    }
}
