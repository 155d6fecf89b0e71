//! Wadler-Lindig document IR.
//!
//! The walker describes layout intent (groups that may break, indentation)
//! and the printer picks the concrete layout for the configured width.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIR {
    /// Verbatim text. May contain newlines (Go raw strings); such text never
    /// fits on one line.
    Text(String),
    /// A space when the enclosing group is flat, newline plus indentation
    /// when it is broken.
    Space,
    /// Child IR one indentation level deeper.
    Indent(Box<FormatIR>),
    /// Rendered flat if it fits on the rest of the line, broken otherwise.
    Group(Box<FormatIR>),
    Concat(Vec<FormatIR>),
}

pub fn text(s: impl Into<String>) -> FormatIR {
    FormatIR::Text(s.into())
}

pub fn space() -> FormatIR {
    FormatIR::Space
}

pub fn indent(ir: FormatIR) -> FormatIR {
    FormatIR::Indent(Box::new(ir))
}

pub fn group(ir: FormatIR) -> FormatIR {
    FormatIR::Group(Box::new(ir))
}

pub fn concat(parts: Vec<FormatIR>) -> FormatIR {
    FormatIR::Concat(parts)
}
