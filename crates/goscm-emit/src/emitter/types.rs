//! Type literals.

use goscm_ast::{ArrayLen, TypeExpr};

use super::{
    decl::{emit_field, emit_interface_member, emit_signature},
    expr::emit_expr,
    Out, Result,
};
use crate::sink::OutputSink;

pub(crate) fn emit_type_expr<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, ty: &TypeExpr) -> Result {
    match ty {
        TypeExpr::Array { len, elt } => {
            match len {
                ArrayLen::Unbounded => out.open("slice")?,
                ArrayLen::Ellipsis => out.open("array...")?,
                ArrayLen::Fixed(len) => {
                    out.open("array")?;
                    out.space()?;
                    emit_expr(out, len)?;
                }
            }
            out.space()?;
            emit_expr(out, elt)?;
            out.close()
        }
        TypeExpr::Chan { dir, value } => {
            out.open("chan")?;
            out.text(dir.suffix())?;
            out.space()?;
            emit_expr(out, value)?;
            out.close()
        }
        // In type position the signature needs a head; declarations and
        // interface members write the bare lists themselves.
        TypeExpr::Func(sig) => {
            out.open("func")?;
            emit_signature(out, sig)?;
            out.close()
        }
        TypeExpr::Interface { methods } => {
            out.open("interface")?;
            for method in methods {
                out.space()?;
                emit_interface_member(out, method)?;
            }
            out.close()
        }
        TypeExpr::Map { key, value } => {
            out.open("map-type")?;
            out.space()?;
            emit_expr(out, key)?;
            out.space()?;
            emit_expr(out, value)?;
            out.close()
        }
        TypeExpr::Struct { fields } => {
            out.open("struct")?;
            for field in fields {
                out.space()?;
                emit_field(out, field)?;
            }
            out.close()
        }
    }
}
