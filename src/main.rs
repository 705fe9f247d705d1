//! docstr: extract a docstring from source by name and parse its sections.
//!
//! The binary owns the external collaborator duties: resolving the input
//! argument to text (falling back to treating it as literal source when the
//! path does not exist), mapping file extensions to a locator dialect, and
//! rendering the result.

use anyhow::{Context, Result};
use clap::Parser;
use docstr::extract::{self, Locate, PybindLocator, PythonLocator};
use docstr::parse::GoogleDocstring;
use docstr::render;
use docstr::model::{DocRecord, Section};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docstr",
    about = "Extract a docstring from source by name and parse its sections"
)]
struct Cli {
    /// Source file. Treated as literal source text when no such file exists.
    input: String,

    /// Dotted query: `function`, `Class`, or `Class.method`.
    /// Omit for the module docstring.
    #[arg(default_value = "")]
    query: String,

    /// Output format: markdown (default), json, text
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Source dialect: python, pybind. Defaults to the file extension mapping.
    #[arg(long)]
    dialect: Option<String>,

    /// Emit only the extraction record, without parsed sections
    #[arg(long)]
    no_sections: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = Path::new(&cli.input);
    let (source, filename) = if path.is_file() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        (content, cli.input.clone())
    } else {
        tracing::debug!("input is not a file, treating it as literal source text");
        (cli.input.clone(), String::new())
    };

    let locator = resolve_locator(cli.dialect.as_deref(), &filename)?;
    let record = extract::locate(&source, &cli.query, locator.as_ref(), &filename)?;

    let sections = if cli.no_sections {
        Vec::new()
    } else {
        parse_sections(&record)
    };

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&record, &sections));
    Ok(())
}

/// Pick the locator dialect: an explicit flag wins, then the file extension;
/// literal text defaults to the hand-written-source dialect.
fn resolve_locator(dialect: Option<&str>, filename: &str) -> Result<Box<dyn Locate>> {
    match dialect {
        Some("python") => Ok(Box::new(PythonLocator)),
        Some("pybind") => Ok(Box::new(PybindLocator)),
        Some(other) => anyhow::bail!("unknown dialect: {other}. Use python or pybind"),
        None if filename.is_empty() => Ok(Box::new(PythonLocator)),
        None => extract::locator_for_path(Path::new(filename))
            .ok_or_else(|| anyhow::anyhow!("unsupported file type: {filename}")),
    }
}

/// Parse every docstring value of the record, in order. Overload-aggregated
/// records contribute the sections of each overload.
fn parse_sections(record: &DocRecord) -> Vec<Section> {
    record
        .docstring
        .values()
        .into_iter()
        .flat_map(|doc| GoogleDocstring::new(doc).parse())
        .collect()
}
