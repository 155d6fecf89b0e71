//! Expressions.

use goscm_ast::{BasicLit, CallExpr, CompositeLit, Expr, LitKind, SliceExpr};
use goscm_common::{translate, TransduceError};

use super::{types::emit_type_expr, Out, Result};
use crate::literal::char_literal;
use crate::sink::OutputSink;

pub(crate) fn emit_expr<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, expr: &Expr) -> Result {
    match expr {
        Expr::BasicLit(lit) => emit_basic_lit(out, lit),
        Expr::CompositeLit(lit) => emit_composite_lit(out, lit),
        Expr::Ellipsis { elt } => {
            out.text("...")?;
            if let Some(elt) = elt {
                out.space()?;
                emit_expr(out, elt)?;
            }
            Ok(())
        }
        Expr::Ident { name } => out.text(name),
        Expr::Binary { op, x, y } => {
            out.open(translate(op))?;
            out.space()?;
            emit_expr(out, x)?;
            out.space()?;
            emit_expr(out, y)?;
            out.close()
        }
        Expr::Call(call) => emit_call(out, call),
        Expr::Index { x, index } => {
            out.open("index")?;
            out.space()?;
            emit_expr(out, x)?;
            out.space()?;
            emit_expr(out, index)?;
            out.close()
        }
        Expr::KeyValue { key, value } => {
            let Some(name) = key.as_ident() else {
                return Err(TransduceError::structural(
                    "KeyValueExpr",
                    format!("key must be a plain name, found {}", key.node_name()),
                ));
            };
            out.text("#:")?;
            out.text(name)?;
            out.space()?;
            emit_expr(out, value)
        }
        // Parentheses only group; the prefix form already does that.
        Expr::Paren { x } => emit_expr(out, x),
        Expr::Selector { x, sel } => match x.as_ident() {
            Some(name) => {
                out.text(name)?;
                out.text(".")?;
                out.text(sel)
            }
            None => {
                out.open("dot")?;
                out.space()?;
                emit_expr(out, x)?;
                out.space()?;
                out.text(sel)?;
                out.close()
            }
        },
        Expr::Slice(slice) => emit_slice(out, slice),
        Expr::Star { x } => {
            out.open("ptr")?;
            out.space()?;
            emit_expr(out, x)?;
            out.close()
        }
        Expr::TypeAssert { x, ty } => {
            out.open("as")?;
            out.space()?;
            emit_expr(out, x)?;
            out.space()?;
            match ty {
                Some(ty) => emit_expr(out, ty)?,
                None => out.text("type")?,
            }
            out.close()
        }
        Expr::Unary { op, x } => {
            out.open(translate(op))?;
            out.space()?;
            emit_expr(out, x)?;
            out.close()
        }
        Expr::Type { ty } => emit_type_expr(out, ty),
        Expr::Unsupported { node } => out.placeholder(node),
    }
}

/// Raw lexeme, except character literals which become `#\c`.
///
/// String literals are copied byte for byte; raw strings spanning lines
/// keep their newlines and backquotes.
fn emit_basic_lit<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, lit: &BasicLit) -> Result {
    match lit.kind {
        LitKind::Char => {
            let rendered = char_literal(&lit.value, out.opts().char_literals)?;
            out.text(&rendered)
        }
        LitKind::String | LitKind::Int | LitKind::Float | LitKind::Imag => out.text(&lit.value),
    }
}

/// `#(<type> <element>...)`; the type is left out when elided.
fn emit_composite_lit<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, lit: &CompositeLit) -> Result {
    out.text("#(")?;
    let mut needs_space = false;
    if let Some(ty) = &lit.ty {
        emit_expr(out, ty)?;
        needs_space = true;
    }
    for elt in &lit.elts {
        if needs_space {
            out.space()?;
        }
        emit_expr(out, elt)?;
        needs_space = true;
    }
    out.close()
}

/// `(<fun> <arg>...)`, or `(apply... <fun> <arg>...)` when the last
/// argument is spread.
pub(crate) fn emit_call<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, call: &CallExpr) -> Result {
    out.text("(")?;
    if call.ellipsis {
        out.text("apply...")?;
        out.space()?;
    }
    emit_expr(out, &call.fun)?;
    for arg in &call.args {
        out.space()?;
        emit_expr(out, arg)?;
    }
    out.close()
}

/// `(index <x> <low> <high>)` with `#f` for an omitted bound, plus the max
/// bound of a three-index slice.
fn emit_slice<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, slice: &SliceExpr) -> Result {
    out.open("index")?;
    out.space()?;
    emit_expr(out, &slice.x)?;
    for bound in [&slice.low, &slice.high] {
        out.space()?;
        match bound {
            Some(bound) => emit_expr(out, bound)?,
            None => out.text("#f")?,
        }
    }
    if let Some(max) = &slice.max {
        out.space()?;
        emit_expr(out, max)?;
    }
    out.close()
}
