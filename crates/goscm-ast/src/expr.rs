//! Expression nodes.
//!
//! Go puts type names wherever an expression may appear (`make([]int, n)`,
//! `T{...}`, conversions), so type names are ordinary identifiers,
//! selectors and stars here, and type literals ride along as
//! [`Expr::Type`].

use serde::{Deserialize, Serialize};

use goscm_common::LitKind;

use crate::ty::TypeExpr;

// ── Expr enum ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    BasicLit(BasicLit),
    CompositeLit(CompositeLit),
    /// `...T` in a variadic parameter, or `...` alone.
    Ellipsis {
        #[serde(default)]
        elt: Option<Box<Expr>>,
    },
    Ident {
        name: String,
    },
    #[serde(rename = "BinaryExpr")]
    Binary {
        op: String,
        x: Box<Expr>,
        y: Box<Expr>,
    },
    #[serde(rename = "CallExpr")]
    Call(CallExpr),
    #[serde(rename = "IndexExpr")]
    Index {
        x: Box<Expr>,
        index: Box<Expr>,
    },
    #[serde(rename = "KeyValueExpr")]
    KeyValue {
        key: Box<Expr>,
        value: Box<Expr>,
    },
    #[serde(rename = "ParenExpr")]
    Paren {
        x: Box<Expr>,
    },
    #[serde(rename = "SelectorExpr")]
    Selector {
        x: Box<Expr>,
        sel: String,
    },
    #[serde(rename = "SliceExpr")]
    Slice(SliceExpr),
    /// `*x`: a dereference or a pointer type, depending on context.
    #[serde(rename = "StarExpr")]
    Star {
        x: Box<Expr>,
    },
    /// `x.(T)`; `ty` is `None` for the `x.(type)` guard of a type switch.
    #[serde(rename = "TypeAssertExpr")]
    TypeAssert {
        x: Box<Expr>,
        #[serde(default, rename = "type")]
        ty: Option<Box<Expr>>,
    },
    #[serde(rename = "UnaryExpr")]
    Unary {
        op: String,
        x: Box<Expr>,
    },
    /// A type literal in expression position.
    Type {
        #[serde(rename = "type")]
        ty: TypeExpr,
    },
    Unsupported {
        node: String,
    },
}

impl Expr {
    /// Name of the node kind, for diagnostics.
    pub fn node_name(&self) -> &str {
        match self {
            Expr::BasicLit(_) => "BasicLit",
            Expr::CompositeLit(_) => "CompositeLit",
            Expr::Ellipsis { .. } => "Ellipsis",
            Expr::Ident { .. } => "Ident",
            Expr::Binary { .. } => "BinaryExpr",
            Expr::Call(_) => "CallExpr",
            Expr::Index { .. } => "IndexExpr",
            Expr::KeyValue { .. } => "KeyValueExpr",
            Expr::Paren { .. } => "ParenExpr",
            Expr::Selector { .. } => "SelectorExpr",
            Expr::Slice(_) => "SliceExpr",
            Expr::Star { .. } => "StarExpr",
            Expr::TypeAssert { .. } => "TypeAssertExpr",
            Expr::Unary { .. } => "UnaryExpr",
            Expr::Type { ty } => ty.node_name(),
            Expr::Unsupported { node } => node,
        }
    }

    /// The identifier name, if this is a bare identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Expr::Ident { name } => Some(name),
            _ => None,
        }
    }

    // ── Constructors ─────────────────────────────────────────────────────

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident { name: name.into() }
    }

    pub fn lit(kind: LitKind, value: impl Into<String>) -> Self {
        Expr::BasicLit(BasicLit {
            kind,
            value: value.into(),
        })
    }

    pub fn int(value: impl Into<String>) -> Self {
        Self::lit(LitKind::Int, value)
    }

    /// A string literal; `raw` includes its quotes.
    pub fn string(raw: impl Into<String>) -> Self {
        Self::lit(LitKind::String, raw)
    }

    /// A character literal; `raw` includes its single quotes.
    pub fn char(raw: impl Into<String>) -> Self {
        Self::lit(LitKind::Char, raw)
    }

    pub fn binary(op: impl Into<String>, x: Expr, y: Expr) -> Self {
        Expr::Binary {
            op: op.into(),
            x: Box::new(x),
            y: Box::new(y),
        }
    }

    pub fn unary(op: impl Into<String>, x: Expr) -> Self {
        Expr::Unary {
            op: op.into(),
            x: Box::new(x),
        }
    }

    pub fn call(fun: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr::new(fun, args))
    }

    pub fn selector(x: Expr, sel: impl Into<String>) -> Self {
        Expr::Selector {
            x: Box::new(x),
            sel: sel.into(),
        }
    }

    pub fn index(x: Expr, index: Expr) -> Self {
        Expr::Index {
            x: Box::new(x),
            index: Box::new(index),
        }
    }

    pub fn paren(x: Expr) -> Self {
        Expr::Paren { x: Box::new(x) }
    }

    pub fn star(x: Expr) -> Self {
        Expr::Star { x: Box::new(x) }
    }

    pub fn key_value(key: Expr, value: Expr) -> Self {
        Expr::KeyValue {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn type_assert(x: Expr, ty: Option<Expr>) -> Self {
        Expr::TypeAssert {
            x: Box::new(x),
            ty: ty.map(Box::new),
        }
    }

    pub fn ty(ty: TypeExpr) -> Self {
        Expr::Type { ty }
    }

    pub fn unsupported(node: impl Into<String>) -> Self {
        Expr::Unsupported { node: node.into() }
    }
}

// ── Literals ─────────────────────────────────────────────────────────────

/// A literal token with its raw source lexeme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicLit {
    #[serde(rename = "lit")]
    pub kind: LitKind,
    /// Exactly as written in source: quotes, prefixes and escapes intact.
    pub value: String,
}

/// `T{a, b}` or `T{k: v}`; `ty` is elided for nested literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLit {
    #[serde(default, rename = "type")]
    pub ty: Option<Box<Expr>>,
    #[serde(default)]
    pub elts: Vec<Expr>,
}

// ── Calls and slices ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    #[serde(default)]
    pub args: Vec<Expr>,
    /// Whether the final argument is spread with `...`.
    #[serde(default)]
    pub ellipsis: bool,
}

impl CallExpr {
    pub fn new(fun: Expr, args: Vec<Expr>) -> Self {
        Self {
            fun: Box::new(fun),
            args,
            ellipsis: false,
        }
    }

    pub fn spread(mut self) -> Self {
        self.ellipsis = true;
        self
    }
}

/// `x[low:high]` or `x[low:high:max]`; every bound may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExpr {
    pub x: Box<Expr>,
    #[serde(default)]
    pub low: Option<Box<Expr>>,
    #[serde(default)]
    pub high: Option<Box<Expr>>,
    #[serde(default)]
    pub max: Option<Box<Expr>>,
}
