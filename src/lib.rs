//! Extract a single docstring from source text by dotted query, then parse
//! its Google-style sections into a structured record.
//!
//! Two stages, used in sequence:
//!
//! - [`extract`] locates a construct (`function`, `Class`, `Class.method`,
//!   or the module itself) in raw source text and slices out its name,
//!   signature, dedented docstring, return type, and a minimal source stub.
//! - [`parse`] splits a docstring into named sections and tokenizes
//!   argument-list entries. It never sees source code, only doc text.

pub mod error;
pub mod extract;
pub mod model;
pub mod parse;
pub mod render;
mod text;

pub use error::{Error, Result};
