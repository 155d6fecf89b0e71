//! Statement nodes.

use serde::{Deserialize, Serialize};

use goscm_common::{BranchTok, IncDecTok};

use crate::expr::{CallExpr, Expr};
use crate::item::Decl;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Stmt {
    #[serde(rename = "AssignStmt")]
    Assign(AssignStmt),
    /// A bare `{ ... }` nested in a statement list.
    #[serde(rename = "BlockStmt")]
    Block(Block),
    #[serde(rename = "BranchStmt")]
    Branch {
        tok: BranchTok,
        #[serde(default)]
        label: Option<String>,
    },
    #[serde(rename = "DeclStmt")]
    Decl { decl: Decl },
    #[serde(rename = "DeferStmt")]
    Defer { call: CallExpr },
    #[serde(rename = "EmptyStmt")]
    Empty,
    #[serde(rename = "ExprStmt")]
    Expr { x: Expr },
    #[serde(rename = "ForStmt")]
    For(ForStmt),
    #[serde(rename = "GoStmt")]
    Go { call: CallExpr },
    #[serde(rename = "IfStmt")]
    If(IfStmt),
    #[serde(rename = "IncDecStmt")]
    IncDec { x: Expr, tok: IncDecTok },
    #[serde(rename = "LabeledStmt")]
    Labeled { label: String, stmt: Box<Stmt> },
    #[serde(rename = "RangeStmt")]
    Range(RangeStmt),
    #[serde(rename = "ReturnStmt")]
    Return {
        #[serde(default)]
        results: Vec<Expr>,
    },
    #[serde(rename = "SelectStmt")]
    Select {
        #[serde(default)]
        clauses: Vec<CommClause>,
    },
    #[serde(rename = "SendStmt")]
    Send { chan: Expr, value: Expr },
    #[serde(rename = "SwitchStmt")]
    Switch(SwitchStmt),
    #[serde(rename = "TypeSwitchStmt")]
    TypeSwitch(TypeSwitchStmt),
    Unsupported { node: String },
}

impl Stmt {
    /// Name of the node kind, for diagnostics.
    pub fn node_name(&self) -> &str {
        match self {
            Stmt::Assign(_) => "AssignStmt",
            Stmt::Block(_) => "BlockStmt",
            Stmt::Branch { .. } => "BranchStmt",
            Stmt::Decl { .. } => "DeclStmt",
            Stmt::Defer { .. } => "DeferStmt",
            Stmt::Empty => "EmptyStmt",
            Stmt::Expr { .. } => "ExprStmt",
            Stmt::For(_) => "ForStmt",
            Stmt::Go { .. } => "GoStmt",
            Stmt::If(_) => "IfStmt",
            Stmt::IncDec { .. } => "IncDecStmt",
            Stmt::Labeled { .. } => "LabeledStmt",
            Stmt::Range(_) => "RangeStmt",
            Stmt::Return { .. } => "ReturnStmt",
            Stmt::Select { .. } => "SelectStmt",
            Stmt::Send { .. } => "SendStmt",
            Stmt::Switch(_) => "SwitchStmt",
            Stmt::TypeSwitch(_) => "TypeSwitchStmt",
            Stmt::Unsupported { node } => node,
        }
    }

    // ── Constructors ─────────────────────────────────────────────────────

    pub fn expr(x: Expr) -> Self {
        Stmt::Expr { x }
    }

    pub fn assign(lhs: Vec<Expr>, tok: impl Into<String>, rhs: Vec<Expr>) -> Self {
        Stmt::Assign(AssignStmt {
            lhs,
            tok: tok.into(),
            rhs,
        })
    }

    pub fn ret(results: Vec<Expr>) -> Self {
        Stmt::Return { results }
    }

    pub fn send(chan: Expr, value: Expr) -> Self {
        Stmt::Send { chan, value }
    }

    pub fn branch(tok: BranchTok, label: Option<&str>) -> Self {
        Stmt::Branch {
            tok,
            label: label.map(str::to_string),
        }
    }

    pub fn inc_dec(x: Expr, tok: IncDecTok) -> Self {
        Stmt::IncDec { x, tok }
    }

    pub fn labeled(label: impl Into<String>, stmt: Stmt) -> Self {
        Stmt::Labeled {
            label: label.into(),
            stmt: Box::new(stmt),
        }
    }

    pub fn unsupported(node: impl Into<String>) -> Self {
        Stmt::Unsupported { node: node.into() }
    }
}

/// Ordered statements of a `{ ... }` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

/// `lhs tok rhs`, where `tok` is `=`, `:=` or a compound assignment, kept
/// as its raw lexeme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub tok: String,
    pub rhs: Vec<Expr>,
}

/// Three-clause or condition-only loop; every clause may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    #[serde(default)]
    pub cond: Option<Expr>,
    #[serde(default)]
    pub post: Option<Box<Stmt>>,
    #[serde(default)]
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    #[serde(default)]
    pub body: Block,
    /// Either a nested `IfStmt` (`else if`) or a `BlockStmt`.
    #[serde(default, rename = "else")]
    pub else_: Option<Box<Stmt>>,
}

/// `for key, value tok range x { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStmt {
    #[serde(default)]
    pub key: Option<Expr>,
    #[serde(default)]
    pub value: Option<Expr>,
    /// `:=` or `=`; absent together with `key` in `for range x`.
    #[serde(default)]
    pub tok: Option<String>,
    pub x: Expr,
    #[serde(default)]
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    /// `None` for the conditional form `switch { case cond: ... }`.
    #[serde(default)]
    pub tag: Option<Expr>,
    #[serde(default)]
    pub clauses: Vec<CaseClause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSwitchStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    /// `x := y.(type)` or `y.(type)`.
    pub assign: Box<Stmt>,
    #[serde(default)]
    pub clauses: Vec<CaseClause>,
}

/// A `case` of a switch or type switch; an empty `list` is `default`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    #[serde(default)]
    pub list: Vec<Expr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

/// A `case` of a select; `comm` is `None` for `default`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommClause {
    #[serde(default)]
    pub comm: Option<Box<Stmt>>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}
