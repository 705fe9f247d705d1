//! Sectionizer stage: split documentation text into named sections and
//! tokenize argument-list entries.
//!
//! Operates purely on doc text handed over by the extraction stage; it never
//! sees source code. A section starts with a header line (`Name:`) whose next
//! non-blank line is indented at or beyond the configured threshold; the
//! first block of a section may parse as an argument list of
//! `name (type): description` entries with indented continuation lines.

use crate::error::{Error, Result};
use crate::model::{ArgEntry, Section};
use crate::text::dedent;
use regex::Regex;
use std::fmt;

/// Default alias set for the argument section.
pub const ARG_KEYWORDS: &str = "Args|Arguments";

/// Delimiters and indentation threshold for section parsing. Read-only per
/// instance once handed to [`GoogleDocstring`].
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// Separates an argument specifier from its description. The trailing
    /// space avoids clashing with inline role markup such as `:any:`.
    pub arg_delimiter: String,
    /// Placed after a section name to mark a header line.
    pub section_delimiter: String,
    /// Minimum number of columns for a continuation line.
    pub indent: usize,
}

impl Default for SectionConfig {
    fn default() -> Self {
        SectionConfig {
            arg_delimiter: ": ".to_string(),
            section_delimiter: ":".to_string(),
            indent: 2,
        }
    }
}

/// Non-fatal signal produced during section lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A required section was not present in the documentation text.
    MissingSection { keywords: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingSection { keywords } => {
                write!(f, "unable to find section `{keywords}`")
            }
        }
    }
}

/// A keyword-section lookup: the section text when found, plus any
/// diagnostics raised along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLookup {
    pub text: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parser for documentation formatted according to the Google style guide.
pub struct GoogleDocstring {
    docstring: String,
    config: SectionConfig,
    header_re: Regex,
    indent_re: Regex,
    arg_re: Regex,
}

impl GoogleDocstring {
    pub fn new(docstring: &str) -> Self {
        Self::with_config(docstring, SectionConfig::default())
    }

    pub fn with_config(docstring: &str, config: SectionConfig) -> Self {
        let delimiter = regex::escape(&config.section_delimiter);
        let header_re = Regex::new(&format!(r"^\s*(\w+){delimiter}\s*")).unwrap();
        let indent_re = Regex::new(&format!(r"^\s{{{},}}", config.indent)).unwrap();
        let arg_re = Regex::new(&format!(
            r"(?m)^(\w*)\s*(?:\((.*)\))*\s*{}(.*\n?(?:^\s{{{},}}.*)*)",
            regex::escape(&config.arg_delimiter),
            config.indent
        ))
        .unwrap();
        GoogleDocstring {
            docstring: docstring.to_string(),
            config,
            header_re,
            indent_re,
            arg_re,
        }
    }

    /// Parse the whole docstring into its ordered sequence of sections.
    pub fn parse(&self) -> Vec<Section> {
        self.split_sections()
            .iter()
            .map(|section| self.parse_section(section))
            .collect()
    }

    /// Split the docstring into raw section blocks.
    ///
    /// A header line opens a new section only when the next non-blank line
    /// is indented at or beyond the threshold; otherwise it is ordinary
    /// text. Blank lines are dropped, so every non-blank input line lands in
    /// exactly one block.
    pub fn split_sections(&self) -> Vec<String> {
        let mut sections: Vec<String> = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut pending: Option<&str> = None;

        for line in self.docstring.split('\n') {
            if let Some(header) = pending.take() {
                if self.indent_re.is_match(line) {
                    // Confirmed: close the previous section, start the next.
                    sections.push(current.join("\n"));
                    current = vec![header, line];
                    continue;
                }
                if line.is_empty() {
                    // Still awaiting the first indented line.
                    pending = Some(header);
                    continue;
                }
                current.push(header);
            }
            if self.header_re.is_match(line) {
                pending = Some(line);
            } else if !line.is_empty() {
                current.push(line);
            }
        }
        if let Some(header) = pending {
            current.push(header);
        }
        sections.push(current.join("\n"));
        sections
    }

    /// Parse one raw section block into a header, an optional argument
    /// list, and remaining free text.
    ///
    /// Only the first blank-line-delimited block is eligible to be an
    /// argument list; when it does not parse as one, it is kept as text.
    pub fn parse_section(&self, section: &str) -> Section {
        let mut lines: Vec<&str> = section.split('\n').collect();
        // A header only counts when its next line is indented; a lone
        // header-shaped first line is ordinary text.
        let header = if lines.len() >= 2 && self.indent_re.is_match(lines[1]) {
            self.header_re
                .captures(lines[0])
                .map(|caps| caps[1].to_string())
        } else {
            None
        };
        if header.is_some() {
            lines.remove(0);
        }

        let body = dedent(&lines.join("\n"));
        let body = body.trim();

        let mut args = None;
        let mut text: Vec<&str> = Vec::new();
        for (idx, block) in body.split("\n\n").enumerate() {
            if idx == 0 {
                args = self.arg_list(block);
                if args.is_none() {
                    text.push(block);
                }
            } else {
                text.push(block);
            }
        }

        let text = text.join("\n\n");
        Section {
            header,
            text: if text.is_empty() { None } else { Some(text) },
            args,
        }
    }

    /// Tokenize a text block as an argument list, or None when the block
    /// does not match the entry pattern.
    pub fn arg_list(&self, block: &str) -> Option<Vec<ArgEntry>> {
        let entries: Vec<ArgEntry> = self
            .arg_re
            .captures_iter(block)
            .map(|caps| ArgEntry {
                specifier: caps[1].to_string(),
                signature: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
                description: sanitize(caps.get(3).map(|m| m.as_str()).unwrap_or("")),
            })
            .collect();
        if entries.is_empty() {
            None
        } else {
            Some(entries)
        }
    }

    /// Extract the text of the section matching any of the `|`-separated
    /// keyword aliases.
    ///
    /// A missing section is not an error: when `required`, it is reported
    /// as a diagnostic alongside the absent value.
    pub fn find_section(&self, keywords: &str, required: bool) -> Result<SectionLookup> {
        let header = Regex::new(&format!(
            r"(?:{keywords}){}\s*",
            regex::escape(&self.config.section_delimiter)
        ))?;
        let doc = dedent(&self.docstring);
        let doc = doc.trim();

        let mut in_section = false;
        let mut collected: Vec<&str> = Vec::new();
        for line in doc.split('\n') {
            if in_section {
                if line.is_empty() || self.indent_re.is_match(line) {
                    collected.push(line);
                } else {
                    break;
                }
            }
            if header.is_match(line) {
                in_section = true;
            }
        }

        if !in_section {
            let diagnostics = if required {
                vec![Diagnostic::MissingSection {
                    keywords: keywords.to_string(),
                }]
            } else {
                Vec::new()
            };
            return Ok(SectionLookup {
                text: None,
                diagnostics,
            });
        }
        Ok(SectionLookup {
            text: Some(dedent(&collected.join("\n"))),
            diagnostics: Vec::new(),
        })
    }

    /// Parse the argument list of the section matching `keywords`.
    ///
    /// The list is mandatory here: absence is a hard failure, unlike a
    /// merely missing section in [`find_section`].
    pub fn args(&self, keywords: &str) -> Result<Vec<ArgEntry>> {
        let lookup = self.find_section(keywords, false)?;
        let text = lookup.text.unwrap_or_default();
        self.arg_list(&text)
            .ok_or(Error::MissingArgList { block: text })
    }
}

/// Remove indentation and line breaks from a description: each line is
/// dedented independently, lines are joined with single spaces, and the
/// result is trimmed. Idempotent.
pub fn sanitize(text: &str) -> String {
    text.split('\n')
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// First line of a text.
pub fn summary(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}
