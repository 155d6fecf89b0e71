//! Declarations, fields and function signatures.

use serde::{Deserialize, Serialize};

use crate::expr::Expr;
use crate::stmt::Block;

/// A top-level or statement-level declaration.
///
/// `go/ast` folds import/const/type/var into a single `GenDecl` keyed by a
/// token; here each keyword owns its spec type, so a declaration whose
/// specs disagree with its keyword cannot be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Decl {
    #[serde(rename = "ImportDecl")]
    Import { specs: Vec<ImportSpec> },
    #[serde(rename = "TypeDecl")]
    Type { specs: Vec<TypeSpec> },
    #[serde(rename = "ConstDecl")]
    Const { specs: Vec<ValueSpec> },
    #[serde(rename = "VarDecl")]
    Var { specs: Vec<ValueSpec> },
    #[serde(rename = "FuncDecl")]
    Func(FuncDecl),
    Unsupported { node: String },
}

impl Decl {
    /// Name of the node kind, for diagnostics.
    pub fn node_name(&self) -> &str {
        match self {
            Decl::Import { .. } => "ImportDecl",
            Decl::Type { .. } => "TypeDecl",
            Decl::Const { .. } => "ConstDecl",
            Decl::Var { .. } => "VarDecl",
            Decl::Func(_) => "FuncDecl",
            Decl::Unsupported { node } => node,
        }
    }
}

/// One entry of an import declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpec {
    /// Local name: an alias, `.` for a dot import, `_` for a blank import.
    #[serde(default)]
    pub name: Option<String>,
    /// The quoted path lexeme, quotes included.
    pub path: String,
}

impl ImportSpec {
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
        }
    }

    pub fn named(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Expr,
}

/// A const or var spec: `a, b T = x, y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<String>,
    #[serde(default, rename = "type")]
    pub ty: Option<Expr>,
    #[serde(default)]
    pub values: Vec<Expr>,
}

impl ValueSpec {
    pub fn new(names: &[&str], ty: Option<Expr>, values: Vec<Expr>) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            ty,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    /// Receiver list for methods; `None` for plain functions.
    #[serde(default)]
    pub recv: Option<FieldList>,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FuncType,
    /// `None` for a forward declaration (body supplied elsewhere).
    #[serde(default)]
    pub body: Option<Block>,
}

/// A signature: parameters and optional results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuncType {
    #[serde(default)]
    pub params: FieldList,
    #[serde(default)]
    pub results: Option<FieldList>,
}

impl FuncType {
    pub fn new(params: Vec<Field>, results: Vec<Field>) -> Self {
        Self {
            params: FieldList(params),
            results: if results.is_empty() {
                None
            } else {
                Some(FieldList(results))
            },
        }
    }
}

/// A typed slot shared by parameters, results, struct members and
/// interface methods.
///
/// Zero names means an anonymous parameter/result or an embedded member;
/// several names share the one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub ty: Expr,
}

impl Field {
    pub fn named(names: &[&str], ty: Expr) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            ty,
        }
    }

    pub fn anon(ty: Expr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }
}

/// Ordered fields; order is preserved in output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList(pub Vec<Field>);

impl FieldList {
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
