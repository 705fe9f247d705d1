//! Markdown renderer.
//!
//! One heading per construct, a fenced signature block per matched
//! signature, then the parsed sections in order.

use crate::model::{ArgEntry, DocRecord, Kind, Section};
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, record: &DocRecord, sections: &[Section]) -> String {
        let mut out = String::new();

        out.push_str(&format!("## {}\n\n", title(record)));

        if record.kind != Kind::Module {
            out.push_str(&render_signatures(record));
        }

        for section in sections {
            out.push_str(&render_section(section));
        }

        if !record.source.is_empty() {
            out.push_str("#### Source\n\n```python\n");
            out.push_str(&record.source);
            if !record.source.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out
    }
}

fn title(record: &DocRecord) -> String {
    match record.kind {
        Kind::Method => format!(
            "{}.{}",
            record.class_name.first(),
            record.function_name.first()
        ),
        Kind::Class => record.class_name.first().to_string(),
        Kind::Function => record.function_name.first().to_string(),
        Kind::Module => {
            if record.filename.is_empty() {
                "module".to_string()
            } else {
                record.filename.clone()
            }
        }
    }
}

/// One fenced block per signature; overload-aggregated results produce a
/// parallel run of blocks.
fn render_signatures(record: &DocRecord) -> String {
    let names = record.function_name.values();
    let signatures = record.signature.values();
    let return_types = record.return_type.values();

    let mut out = String::new();
    for (i, signature) in signatures.iter().enumerate() {
        let mut name = names.get(i).copied().unwrap_or("");
        if name.is_empty() && record.kind == Kind::Class {
            name = record.class_name.first();
        }
        if name.is_empty() && signature.is_empty() {
            continue;
        }
        out.push_str("```python\n");
        out.push_str(name);
        out.push_str(signature);
        if let Some(rt) = return_types.get(i).filter(|rt| !rt.is_empty()) {
            out.push_str(" -> ");
            out.push_str(rt);
        }
        out.push_str("\n```\n\n");
    }
    out
}

fn render_section(section: &Section) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(ref header) = section.header {
        lines.push(format!("#### {header}\n"));
    }
    if let Some(ref args) = section.args {
        for arg in args {
            lines.push(render_arg(arg));
        }
        lines.push(String::new());
    }
    if let Some(ref text) = section.text {
        lines.push(text.clone());
        lines.push(String::new());
    }

    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `arg1` with signature `int` renders as `* **arg1** (int): description`.
fn render_arg(arg: &ArgEntry) -> String {
    if arg.signature.is_empty() {
        format!("* **{}**: {}", arg.specifier, arg.description)
    } else {
        format!("* **{}** ({}): {}", arg.specifier, arg.signature, arg.description)
    }
}
