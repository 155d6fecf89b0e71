//! Type literals.

use serde::{Deserialize, Serialize};

use goscm_common::ChanDir;

use crate::expr::Expr;
use crate::item::{FieldList, FuncType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeExpr {
    #[serde(rename = "ArrayType")]
    Array {
        #[serde(default)]
        len: ArrayLen,
        elt: Box<Expr>,
    },
    #[serde(rename = "ChanType")]
    Chan {
        #[serde(default)]
        dir: ChanDir,
        value: Box<Expr>,
    },
    #[serde(rename = "FuncType")]
    Func(FuncType),
    #[serde(rename = "InterfaceType")]
    Interface {
        #[serde(default)]
        methods: FieldList,
    },
    #[serde(rename = "MapType")]
    Map { key: Box<Expr>, value: Box<Expr> },
    #[serde(rename = "StructType")]
    Struct {
        #[serde(default)]
        fields: FieldList,
    },
}

/// The length clause of an array type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayLen {
    /// `[]T`, a slice.
    #[default]
    Unbounded,
    /// `[...]T`, length taken from the literal.
    Ellipsis,
    /// `[N]T`.
    Fixed(Box<Expr>),
}

impl TypeExpr {
    pub fn node_name(&self) -> &'static str {
        match self {
            TypeExpr::Array { .. } => "ArrayType",
            TypeExpr::Chan { .. } => "ChanType",
            TypeExpr::Func(_) => "FuncType",
            TypeExpr::Interface { .. } => "InterfaceType",
            TypeExpr::Map { .. } => "MapType",
            TypeExpr::Struct { .. } => "StructType",
        }
    }

    pub fn slice(elt: Expr) -> Self {
        TypeExpr::Array {
            len: ArrayLen::Unbounded,
            elt: Box::new(elt),
        }
    }

    pub fn array(len: Expr, elt: Expr) -> Self {
        TypeExpr::Array {
            len: ArrayLen::Fixed(Box::new(len)),
            elt: Box::new(elt),
        }
    }

    pub fn chan(dir: ChanDir, value: Expr) -> Self {
        TypeExpr::Chan {
            dir,
            value: Box::new(value),
        }
    }

    pub fn map(key: Expr, value: Expr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}
