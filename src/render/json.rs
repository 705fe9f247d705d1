//! JSON renderer: structured output for tooling integration.

use crate::model::{DocRecord, Section};
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDoc<'a> {
    #[serde(flatten)]
    record: &'a DocRecord,
    sections: &'a [Section],
}

impl Renderer for JsonRenderer {
    fn render(&self, record: &DocRecord, sections: &[Section]) -> String {
        let doc = JsonDoc { record, sections };
        let mut out =
            serde_json::to_string_pretty(&doc).expect("record and sections serialize to JSON");
        out.push('\n');
        out
    }
}
