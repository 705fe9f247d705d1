//! Plain-text renderer: the dedented docstring verbatim.

use crate::model::{DocRecord, Section};
use crate::render::Renderer;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, record: &DocRecord, _sections: &[Section]) -> String {
        let mut out = record.docstring.values().join("\n\n");
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
