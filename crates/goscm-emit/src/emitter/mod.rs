//! Recursive descent over the syntax tree.
//!
//! One function per node category, each taking the [`Out`] writer
//! explicitly. Every form is written as `(` head, then a single space before
//! each child, then `)`, so no stray whitespace is ever produced.
//!
//! Submodules:
//! - `decl`: declarations, fields and signatures
//! - `stmt`: statements and blocks
//! - `expr`: expressions
//! - `types`: type literals

mod decl;
mod expr;
mod stmt;
mod types;

use goscm_ast::File;
use goscm_common::TransduceError;
use tracing::warn;

use crate::options::EmitOptions;
use crate::sink::OutputSink;

pub(crate) type Result<T = ()> = std::result::Result<T, TransduceError>;

/// Writer threaded through every emit function: the sink plus run options.
pub(crate) struct Out<'a, S: OutputSink + ?Sized> {
    sink: &'a mut S,
    opts: &'a EmitOptions,
}

impl<'a, S: OutputSink + ?Sized> Out<'a, S> {
    pub(crate) fn new(sink: &'a mut S, opts: &'a EmitOptions) -> Self {
        Self { sink, opts }
    }

    pub(crate) fn opts(&self) -> &EmitOptions {
        self.opts
    }

    /// Write text verbatim.
    pub(crate) fn text(&mut self, s: &str) -> Result {
        self.sink.write_str(s)?;
        Ok(())
    }

    /// Start a form: `(head`.
    pub(crate) fn open(&mut self, head: &str) -> Result {
        self.text("(")?;
        self.text(head)
    }

    pub(crate) fn close(&mut self) -> Result {
        self.text(")")
    }

    pub(crate) fn space(&mut self) -> Result {
        self.text(" ")
    }

    /// Write names separated by single spaces.
    pub(crate) fn words<'n>(&mut self, names: impl IntoIterator<Item = &'n String>) -> Result {
        for (i, name) in names.into_iter().enumerate() {
            if i > 0 {
                self.space()?;
            }
            self.text(name)?;
        }
        Ok(())
    }

    /// Stand-in for a node kind with no rule.
    ///
    /// Writes `<unhandled:KIND>` so the rest of the tree still comes out,
    /// unless the run is strict. The kind comes from the front end and is
    /// written as one symbol: whitespace, parentheses and double quotes
    /// become `_`.
    pub(crate) fn placeholder(&mut self, node: &str) -> Result {
        if self.opts.strict {
            return Err(TransduceError::Unsupported(node.to_string()));
        }
        warn!(node, "no rule for node kind, writing placeholder");
        self.text("<unhandled:")?;
        self.text(&placeholder_kind(node))?;
        self.text(">")
    }
}

fn placeholder_kind(node: &str) -> String {
    node.chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '(' | ')' | '"') {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// `(package <name> <decl>...)`.
pub(crate) fn emit_file<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, file: &File) -> Result {
    out.open("package")?;
    out.space()?;
    out.text(&file.package)?;
    for decl in &file.decls {
        out.space()?;
        decl::emit_decl(out, decl)?;
    }
    out.close()
}
