//! Syntax tree to prefix-notation transducer.
//!
//! Walks a [`goscm_ast::File`] once, in document order, and writes a single
//! fully parenthesized expression to an [`OutputSink`]:
//!
//! ```text
//! func Add(a int, b int) int { return a + b }
//!
//! (define-func (Add #(a int) #(b int) int) (return (+ a b)))
//! ```
//!
//! The output is a minimal stream (no indentation); `goscm-fmt` lays it out
//! for humans.
//!
//! # Failure
//!
//! A run either completes and finishes the sink, or returns a
//! [`TransduceError`] and leaves the sink partially written without
//! finishing it. Nodes the tree marks `Unsupported` are written as
//! `<unhandled:KIND>` placeholders unless [`EmitOptions::strict`] is set.
//!
//! # Example
//!
//! ```
//! use goscm_ast::{Decl, Expr, File, ValueSpec};
//! use goscm_emit::{emit_to_string, EmitOptions};
//!
//! let file = File::new(
//!     "main",
//!     vec![Decl::Const {
//!         specs: vec![ValueSpec::new(&["answer"], None, vec![Expr::int("42")])],
//!     }],
//! );
//! let text = emit_to_string(&file, &EmitOptions::default()).unwrap();
//! assert_eq!(text, "(package main (define-const (= answer 42)))");
//! ```

mod emitter;
mod literal;
mod options;
mod sink;

use goscm_ast::File;
use tracing::debug;

pub use goscm_common::TransduceError;
pub use options::{CharLiteralMode, EmitOptions};
pub use sink::{IoSink, OutputSink};

use emitter::{emit_file, Out};

/// Transduce `file` into `sink` with default options.
pub fn transduce<S: OutputSink + ?Sized>(file: &File, sink: &mut S) -> Result<(), TransduceError> {
    transduce_with(file, sink, &EmitOptions::default())
}

/// Transduce `file` into `sink`, finishing the sink on success only.
pub fn transduce_with<S: OutputSink + ?Sized>(
    file: &File,
    sink: &mut S,
    opts: &EmitOptions,
) -> Result<(), TransduceError> {
    debug!(package = %file.package, decls = file.decls.len(), "transducing");
    let mut out = Out::new(sink, opts);
    emit_file(&mut out, file)?;
    sink.finish()?;
    debug!(package = %file.package, "transduction finished");
    Ok(())
}

/// Transduce into a fresh `String`.
pub fn emit_to_string(file: &File, opts: &EmitOptions) -> Result<String, TransduceError> {
    let mut text = String::new();
    transduce_with(file, &mut text, opts)?;
    Ok(text)
}
