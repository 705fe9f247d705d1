//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod text;

use crate::error::{Error, Result};
use crate::model::{DocRecord, Section};

/// Render an extraction record and its parsed sections into an output format.
pub trait Renderer {
    fn render(&self, record: &DocRecord, sections: &[Section]) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "text" => Ok(Box::new(text::TextRenderer)),
        _ => Err(Error::UnknownFormat {
            format: format.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert!(create_renderer("markdown").is_ok());
        assert!(create_renderer("md").is_ok());
        assert!(create_renderer("json").is_ok());
        assert!(create_renderer("text").is_ok());
    }

    #[test]
    fn unknown_format_fails() {
        assert!(matches!(
            create_renderer("xml"),
            Err(Error::UnknownFormat { .. })
        ));
    }
}
