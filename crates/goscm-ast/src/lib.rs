//! Syntax tree for a Go compilation unit, as handed over by a front end.
//!
//! The tree is built once by the caller and only read afterwards. Every
//! child is owned by its parent; there is no sharing and there are no back
//! references, so plain `Box`/`Vec` ownership is all the structure needs.
//!
//! # Categories
//!
//! - [`Decl`]: import, type, const, var and func declarations
//! - [`Stmt`]: every statement kind
//! - [`Expr`]: every expression kind, including type names in expression
//!   position
//! - [`TypeExpr`]: type literals (array, chan, func, interface, map, struct),
//!   reachable through [`Expr::Type`]
//!
//! Each of `Decl`, `Stmt` and `Expr` has an `Unsupported` variant. A front
//! end uses it for constructs the transducer has no rule for; nothing else
//! produces a placeholder.
//!
//! # Interchange
//!
//! All nodes (de)serialize with serde using an internally tagged `"kind"`
//! field named after the corresponding `go/ast` node, so a front end written
//! in any language can pass the tree as JSON:
//!
//! ```
//! let json = r#"{
//!     "package": "main",
//!     "decls": [{ "kind": "ImportDecl", "specs": [{ "path": "\"fmt\"" }] }]
//! }"#;
//! let file: goscm_ast::File = serde_json::from_str(json).unwrap();
//! assert_eq!(file.decls.len(), 1);
//! ```

pub mod expr;
pub mod item;
pub mod stmt;
pub mod ty;

use serde::{Deserialize, Serialize};

pub use expr::{BasicLit, CallExpr, CompositeLit, Expr, SliceExpr};
pub use item::{Decl, Field, FieldList, FuncDecl, FuncType, ImportSpec, TypeSpec, ValueSpec};
pub use stmt::{
    AssignStmt, Block, CaseClause, CommClause, ForStmt, IfStmt, RangeStmt, Stmt, SwitchStmt,
    TypeSwitchStmt,
};
pub use ty::{ArrayLen, TypeExpr};

pub use goscm_common::{BranchTok, ChanDir, IncDecTok, LitKind};

/// The root of one compilation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Package clause name.
    pub package: String,
    /// Top-level declarations in source order.
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl File {
    pub fn new(package: impl Into<String>, decls: Vec<Decl>) -> Self {
        Self {
            package: package.into(),
            decls,
        }
    }
}
