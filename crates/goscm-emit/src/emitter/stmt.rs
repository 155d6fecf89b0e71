//! Statements.

use goscm_ast::{
    AssignStmt, Block, CaseClause, CommClause, ForStmt, IfStmt, RangeStmt, Stmt, SwitchStmt,
    TypeSwitchStmt,
};
use goscm_common::TransduceError;

use super::{
    decl::emit_decl,
    expr::{emit_call, emit_expr},
    Out, Result,
};
use crate::sink::OutputSink;

pub(crate) fn emit_stmt<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, stmt: &Stmt) -> Result {
    match stmt {
        Stmt::Assign(assign) => emit_assign(out, assign),
        Stmt::Block(block) => {
            out.open("begin")?;
            emit_block_items(out, block)?;
            out.close()
        }
        Stmt::Branch { tok, label } => {
            out.open(tok.as_str())?;
            if let Some(label) = label {
                out.space()?;
                out.text(label)?;
            }
            out.close()
        }
        Stmt::Decl { decl } => emit_decl(out, decl),
        Stmt::Defer { call } => {
            out.open("defer")?;
            out.space()?;
            emit_call(out, call)?;
            out.close()
        }
        Stmt::Empty => out.text("(void)"),
        Stmt::Expr { x } => emit_expr(out, x),
        Stmt::For(for_stmt) => emit_for(out, for_stmt),
        Stmt::Go { call } => {
            out.open("go")?;
            out.space()?;
            emit_call(out, call)?;
            out.close()
        }
        Stmt::If(if_stmt) => emit_if(out, if_stmt),
        Stmt::IncDec { x, tok } => {
            out.open(tok.as_str())?;
            out.space()?;
            emit_expr(out, x)?;
            out.close()
        }
        Stmt::Labeled { label, stmt } => {
            out.open("label")?;
            out.space()?;
            out.text(label)?;
            out.space()?;
            emit_stmt(out, stmt)?;
            out.close()
        }
        Stmt::Range(range) => emit_range(out, range),
        Stmt::Return { results } => {
            out.open("return")?;
            for result in results {
                out.space()?;
                emit_expr(out, result)?;
            }
            out.close()
        }
        Stmt::Select { clauses } => {
            out.open("comm!")?;
            for clause in clauses {
                out.space()?;
                emit_comm_clause(out, clause)?;
            }
            out.close()
        }
        Stmt::Send { chan, value } => {
            out.open("<-!")?;
            out.space()?;
            emit_expr(out, chan)?;
            out.space()?;
            emit_expr(out, value)?;
            out.close()
        }
        Stmt::Switch(switch) => emit_switch(out, switch),
        Stmt::TypeSwitch(switch) => emit_type_switch(out, switch),
        Stmt::Unsupported { node } => out.placeholder(node),
    }
}

/// The statements of a block, each preceded by a space. Blocks have no
/// parentheses of their own; the enclosing form provides them.
pub(crate) fn emit_block_items<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, block: &Block) -> Result {
    emit_stmts(out, &block.stmts)
}

fn emit_stmts<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, stmts: &[Stmt]) -> Result {
    for stmt in stmts {
        out.space()?;
        emit_stmt(out, stmt)?;
    }
    Ok(())
}

/// `(<tok> <lhs> <rhs>...)`; the token is written raw, never translated.
fn emit_assign<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, assign: &AssignStmt) -> Result {
    out.open(&assign.tok)?;
    out.space()?;
    if let [target] = assign.lhs.as_slice() {
        emit_expr(out, target)?;
    } else {
        out.text("(")?;
        for (i, target) in assign.lhs.iter().enumerate() {
            if i > 0 {
                out.space()?;
            }
            emit_expr(out, target)?;
        }
        out.close()?;
    }
    for value in &assign.rhs {
        out.space()?;
        emit_expr(out, value)?;
    }
    out.close()
}

/// `(while <cond> ...)` when there is neither init nor post, otherwise
/// `(for <init> <cond> <post> ...)`. Missing clauses become `#f`, a missing
/// condition `#t`.
fn emit_for<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, for_stmt: &ForStmt) -> Result {
    let three_clause = for_stmt.init.is_some() || for_stmt.post.is_some();
    if three_clause {
        out.open("for")?;
        out.space()?;
        emit_opt_stmt(out, for_stmt.init.as_deref())?;
    } else {
        out.open("while")?;
    }
    out.space()?;
    match &for_stmt.cond {
        Some(cond) => emit_expr(out, cond)?,
        None => out.text("#t")?,
    }
    if three_clause {
        out.space()?;
        emit_opt_stmt(out, for_stmt.post.as_deref())?;
    }
    emit_block_items(out, &for_stmt.body)?;
    out.close()
}

fn emit_opt_stmt<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, stmt: Option<&Stmt>) -> Result {
    match stmt {
        Some(stmt) => emit_stmt(out, stmt),
        None => out.text("#f"),
    }
}

/// `(when <cond> ...)` or `(when* <init> <cond> ...)`, with a trailing
/// `(else ...)` clause when an else branch exists.
fn emit_if<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, if_stmt: &IfStmt) -> Result {
    emit_starred_head(out, "when", if_stmt.init.as_deref())?;
    out.space()?;
    emit_expr(out, &if_stmt.cond)?;
    emit_block_items(out, &if_stmt.body)?;
    if let Some(else_branch) = &if_stmt.else_ {
        out.space()?;
        out.open("else")?;
        match else_branch.as_ref() {
            Stmt::Block(block) => emit_block_items(out, block)?,
            chained => {
                out.space()?;
                emit_stmt(out, chained)?;
            }
        }
        out.close()?;
    }
    out.close()
}

/// Opens `(head` or, when an init clause exists, `(head* <init>`.
fn emit_starred_head<S: OutputSink + ?Sized>(
    out: &mut Out<'_, S>,
    head: &str,
    init: Option<&Stmt>,
) -> Result {
    out.open(head)?;
    if let Some(init) = init {
        out.text("*")?;
        out.space()?;
        emit_stmt(out, init)?;
    }
    Ok(())
}

/// `(range (<tok> <binding> <x>) ...)`; the binding is the key alone or a
/// `(<key> <value>)` pair. Without a key the clause is `(#f <x>)`.
fn emit_range<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, range: &RangeStmt) -> Result {
    out.open("range")?;
    out.space()?;
    out.text("(")?;
    match (&range.key, &range.value) {
        (Some(key), value) => {
            let tok = range.tok.as_deref().ok_or_else(|| {
                TransduceError::structural("RangeStmt", "a range with a key needs `:=` or `=`")
            })?;
            out.text(tok)?;
            out.space()?;
            match value {
                Some(value) => {
                    out.text("(")?;
                    emit_expr(out, key)?;
                    out.space()?;
                    emit_expr(out, value)?;
                    out.close()?;
                }
                None => emit_expr(out, key)?,
            }
        }
        (None, None) => out.text("#f")?,
        (None, Some(_)) => {
            return Err(TransduceError::structural(
                "RangeStmt",
                "a range value needs a key",
            ))
        }
    }
    out.space()?;
    emit_expr(out, &range.x)?;
    out.close()?;
    emit_block_items(out, &range.body)?;
    out.close()
}

/// `(else <stmt>...)` for `default`, `(<comm> <stmt>...)` otherwise.
fn emit_comm_clause<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, clause: &CommClause) -> Result {
    match &clause.comm {
        None => out.open("else")?,
        Some(comm) => {
            out.text("(")?;
            emit_stmt(out, comm)?;
        }
    }
    emit_stmts(out, &clause.body)?;
    out.close()
}

/// `(cond! ...)` without a tag, `(case! <tag> ...)` with one.
fn emit_switch<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, switch: &SwitchStmt) -> Result {
    let head = if switch.tag.is_some() { "case!" } else { "cond!" };
    emit_starred_head(out, head, switch.init.as_deref())?;
    if let Some(tag) = &switch.tag {
        out.space()?;
        emit_expr(out, tag)?;
    }
    let form = if switch.tag.is_some() {
        CaseForm::List
    } else {
        CaseForm::Condition
    };
    for clause in &switch.clauses {
        out.space()?;
        emit_case_clause(out, clause, form)?;
    }
    out.close()
}

/// `(type! <init>? <assign> <case>...)`; cases name types, so they always
/// use the list form.
fn emit_type_switch<S: OutputSink + ?Sized>(
    out: &mut Out<'_, S>,
    switch: &TypeSwitchStmt,
) -> Result {
    emit_starred_head(out, "type!", switch.init.as_deref())?;
    out.space()?;
    emit_stmt(out, &switch.assign)?;
    for clause in &switch.clauses {
        out.space()?;
        emit_case_clause(out, clause, CaseForm::List)?;
    }
    out.close()
}

#[derive(Clone, Copy)]
enum CaseForm {
    /// `(<cond> <stmt>...)`; several expressions are joined with `or`.
    Condition,
    /// `((<value>...) <stmt>...)`.
    List,
}

fn emit_case_clause<S: OutputSink + ?Sized>(
    out: &mut Out<'_, S>,
    clause: &CaseClause,
    form: CaseForm,
) -> Result {
    if clause.list.is_empty() {
        out.open("else")?;
        emit_stmts(out, &clause.body)?;
        return out.close();
    }

    out.text("(")?;
    match (form, clause.list.as_slice()) {
        (CaseForm::Condition, [cond]) => emit_expr(out, cond)?,
        (CaseForm::Condition, conds) => {
            out.open("or")?;
            for cond in conds {
                out.space()?;
                emit_expr(out, cond)?;
            }
            out.close()?;
        }
        (CaseForm::List, values) => {
            out.text("(")?;
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    out.space()?;
                }
                emit_expr(out, value)?;
            }
            out.close()?;
        }
    }
    emit_stmts(out, &clause.body)?;
    out.close()
}
