//! Pretty-printer for goscm output.
//!
//! The transducer writes one long line. This crate lays it out for people:
//!
//! 1. [`reader::read`] parses the stream into a [`Datum`] tree, rejecting
//!    anything unbalanced or containing `<unhandled:...>` placeholders
//! 2. [`walker::walk`] turns the tree into a Wadler-Lindig document
//! 3. [`printer::print`] renders the document within the configured width
//!
//! Only whitespace between elements changes, so formatting is idempotent.

mod cursor;
pub mod ir;
pub mod printer;
pub mod reader;
pub mod walker;

use tracing::debug;

pub use printer::FormatConfig;
pub use reader::{read, Datum, DatumKind, ReadError};

/// Read `source` and print it with the given layout.
///
/// # Example
///
/// ```
/// use goscm_fmt::{format_source, FormatConfig};
///
/// let config = FormatConfig { max_width: 20, ..FormatConfig::default() };
/// let out = format_source("(when (< x 0) (return x))", &config).unwrap();
/// assert_eq!(out, "(when\n  (< x 0)\n  (return x))\n");
/// ```
pub fn format_source(source: &str, config: &FormatConfig) -> Result<String, ReadError> {
    let datum = read(source)?;
    debug!(bytes = source.len(), width = config.max_width, "formatting");
    Ok(format_datum(&datum, config))
}

/// Print an already-read datum.
pub fn format_datum(datum: &Datum, config: &FormatConfig) -> String {
    printer::print(&walker::walk(datum), config)
}
