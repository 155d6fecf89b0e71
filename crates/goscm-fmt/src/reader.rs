//! Strict reader for the transducer's output dialect.
//!
//! Accepts exactly one top-level datum surrounded by optional whitespace.
//! The dialect is small:
//!
//! - lists `( ... )` and vector literals `#( ... )`
//! - strings `"..."` with backslash escapes, and Go raw strings `` `...` ``
//!   copied through by the transducer
//! - characters `#\a`, `#\(`, `#\newline`, `#\x1f`
//! - booleans `#t` / `#f` and keywords `#:Name`
//! - symbols: any other run of characters up to whitespace, `(`, `)` or `"`
//!   (numbers are symbols too; the reader never interprets them)
//!
//! An `<unhandled:KIND>` placeholder reads as an error: it marks a hole the
//! transducer could not fill, and nothing downstream can interpret it.

use std::fmt;

use goscm_common::Span;
use thiserror::Error;

use crate::cursor::Cursor;

/// Names accepted after `#\` in addition to single characters.
const CHAR_NAMES: &[&str] = &[
    "space",
    "newline",
    "tab",
    "return",
    "nul",
    "alarm",
    "backspace",
    "vtab",
    "page",
    "esc",
    "delete",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datum {
    pub kind: DatumKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatumKind {
    List(Vec<Datum>),
    Vector(Vec<Datum>),
    Symbol(String),
    /// Raw text, quotes included.
    Str(String),
    /// Raw text, `#\` included.
    Char(String),
    Bool(bool),
    /// Name without the `#:` prefix.
    Keyword(String),
}

impl Datum {
    /// Elements of a list or vector; empty for atoms.
    pub fn children(&self) -> &[Datum] {
        match &self.kind {
            DatumKind::List(items) | DatumKind::Vector(items) => items,
            _ => &[],
        }
    }

    pub fn is_atom(&self) -> bool {
        !matches!(self.kind, DatumKind::List(_) | DatumKind::Vector(_))
    }
}

/// Single-line rendering with one space between elements.
impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DatumKind::List(items) => write_seq(f, "(", items),
            DatumKind::Vector(items) => write_seq(f, "#(", items),
            DatumKind::Symbol(text) | DatumKind::Str(text) | DatumKind::Char(text) => {
                f.write_str(text)
            }
            DatumKind::Bool(true) => f.write_str("#t"),
            DatumKind::Bool(false) => f.write_str("#f"),
            DatumKind::Keyword(name) => write!(f, "#:{name}"),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Datum]) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(")")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("expected a form, found end of input")]
    Empty { span: Span },
    #[error("unexpected `)` with no open form")]
    UnexpectedClose { span: Span },
    #[error("unclosed {what}")]
    Unclosed { what: &'static str, span: Span },
    #[error("unexpected data after the top-level form")]
    Trailing { span: Span },
    #[error("`<unhandled:{node}>` placeholder left by the transducer")]
    Placeholder { node: String, span: Span },
    #[error("invalid character literal `{text}`")]
    InvalidChar { text: String, span: Span },
    #[error("unknown `#` syntax")]
    UnknownDispatch { span: Span },
}

impl ReadError {
    /// Where in the input the error was found.
    pub fn span(&self) -> Span {
        match self {
            ReadError::Empty { span }
            | ReadError::UnexpectedClose { span }
            | ReadError::Unclosed { span, .. }
            | ReadError::Trailing { span }
            | ReadError::Placeholder { span, .. }
            | ReadError::InvalidChar { span, .. }
            | ReadError::UnknownDispatch { span } => *span,
        }
    }
}

/// Read exactly one datum from `source`.
pub fn read(source: &str) -> Result<Datum, ReadError> {
    let mut reader = Reader {
        cursor: Cursor::new(source),
    };
    reader.skip_whitespace();
    let datum = reader.datum()?;
    reader.skip_whitespace();
    if !reader.cursor.is_eof() {
        let start = reader.cursor.pos();
        return Err(ReadError::Trailing {
            span: Span::new(start, source.len() as u32),
        });
    }
    Ok(datum)
}

fn is_symbol_char(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, '(' | ')' | '"'))
}

struct Reader<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Reader<'src> {
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(char::is_whitespace);
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }

    fn datum(&mut self) -> Result<Datum, ReadError> {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            None => Err(ReadError::Empty {
                span: Span::point(start),
            }),
            Some('(') => {
                self.cursor.advance();
                let items = self.items(start, "list")?;
                Ok(self.node(start, DatumKind::List(items)))
            }
            Some(')') => {
                self.cursor.advance();
                Err(ReadError::UnexpectedClose {
                    span: self.span_from(start),
                })
            }
            Some('"') => self.string(start),
            Some('`') => self.raw_string(start),
            Some('#') => self.dispatch(start),
            Some(_) => self.symbol(start),
        }
    }

    fn node(&self, start: u32, kind: DatumKind) -> Datum {
        Datum {
            kind,
            span: self.span_from(start),
        }
    }

    /// Elements up to the closing `)`; the opening delimiter is consumed.
    fn items(&mut self, start: u32, what: &'static str) -> Result<Vec<Datum>, ReadError> {
        let open = self.span_from(start);
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.cursor.peek() {
                None => return Err(ReadError::Unclosed { what, span: open }),
                Some(')') => {
                    self.cursor.advance();
                    return Ok(items);
                }
                Some(_) => items.push(self.datum()?),
            }
        }
    }

    fn string(&mut self, start: u32) -> Result<Datum, ReadError> {
        self.cursor.advance();
        let unclosed = ReadError::Unclosed {
            what: "string",
            span: Span::new(start, start + 1),
        };
        loop {
            match self.cursor.advance() {
                Some('"') => break,
                Some('\\') => {
                    if self.cursor.advance().is_none() {
                        return Err(unclosed);
                    }
                }
                Some(_) => {}
                None => return Err(unclosed),
            }
        }
        let text = self.cursor.since(start).to_string();
        Ok(self.node(start, DatumKind::Str(text)))
    }

    fn raw_string(&mut self, start: u32) -> Result<Datum, ReadError> {
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '`');
        if !self.cursor.eat('`') {
            return Err(ReadError::Unclosed {
                what: "raw string",
                span: Span::new(start, start + 1),
            });
        }
        let text = self.cursor.since(start).to_string();
        Ok(self.node(start, DatumKind::Str(text)))
    }

    fn dispatch(&mut self, start: u32) -> Result<Datum, ReadError> {
        self.cursor.advance();
        match self.cursor.advance() {
            Some('(') => {
                let items = self.items(start, "vector")?;
                Ok(self.node(start, DatumKind::Vector(items)))
            }
            Some('\\') => self.character(start),
            Some(':') => {
                self.cursor.eat_while(is_symbol_char);
                let name = &self.cursor.since(start)[2..];
                if name.is_empty() {
                    return Err(ReadError::UnknownDispatch {
                        span: self.span_from(start),
                    });
                }
                let name = name.to_string();
                Ok(self.node(start, DatumKind::Keyword(name)))
            }
            Some(_) => {
                self.cursor.eat_while(is_symbol_char);
                let value = match self.cursor.since(start) {
                    "#t" => true,
                    "#f" => false,
                    _ => {
                        return Err(ReadError::UnknownDispatch {
                            span: self.span_from(start),
                        })
                    }
                };
                Ok(self.node(start, DatumKind::Bool(value)))
            }
            None => Err(ReadError::UnknownDispatch {
                span: self.span_from(start),
            }),
        }
    }

    /// `#\` has been consumed. One character always follows; a letter or
    /// digit may continue into a name or hex code.
    fn character(&mut self, start: u32) -> Result<Datum, ReadError> {
        let invalid = |reader: &Self| ReadError::InvalidChar {
            text: reader.cursor.since(start).to_string(),
            span: reader.span_from(start),
        };
        let Some(first) = self.cursor.advance() else {
            return Err(invalid(self));
        };
        if first.is_alphanumeric() {
            self.cursor.eat_while(is_symbol_char);
        }
        let body = &self.cursor.since(start)[2..];
        let valid = body.chars().count() == 1
            || CHAR_NAMES.contains(&body)
            || body
                .strip_prefix('x')
                .is_some_and(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()));
        if !valid {
            return Err(invalid(self));
        }
        let text = self.cursor.since(start).to_string();
        Ok(self.node(start, DatumKind::Char(text)))
    }

    fn symbol(&mut self, start: u32) -> Result<Datum, ReadError> {
        self.cursor.eat_while(is_symbol_char);
        let text = self.cursor.since(start);
        if let Some(rest) = text.strip_prefix("<unhandled:") {
            return Err(ReadError::Placeholder {
                node: rest.trim_end_matches('>').to_string(),
                span: self.span_from(start),
            });
        }
        let text = text.to_string();
        Ok(self.node(start, DatumKind::Symbol(text)))
    }
}
