//! Error types for docstring extraction and parsing.

use crate::model::Kind;
use thiserror::Error;

/// A specialized Result type for docstr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for docstring extraction and parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// No pattern match for the requested construct in the given source.
    #[error("unable to extract docstring for `{query}`")]
    NotFound { query: String },

    /// Query has more than two dotted segments.
    #[error("unable to parse query `{query}`: expected `function`, `Class`, or `Class.method`")]
    MalformedQuery { query: String },

    /// A caller declared an argument list mandatory and none was parseable.
    #[error("failed to parse argument list in:\n`{block}`")]
    MissingArgList { block: String },

    /// The dialect has no pattern for this construct kind.
    #[error("the {dialect} dialect does not support {kind} queries")]
    UnsupportedQuery { dialect: &'static str, kind: Kind },

    /// A runtime-built pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Unknown output format name.
    #[error("unknown format: {format}. Use markdown, json, or text")]
    UnknownFormat { format: String },
}
