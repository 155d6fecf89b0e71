//! Declarations, fields and signatures.

use goscm_ast::{Decl, Expr, Field, FieldList, FuncDecl, FuncType, ImportSpec, TypeExpr, ValueSpec};
use goscm_common::TransduceError;

use super::{expr::emit_expr, stmt::emit_block_items, Out, Result};
use crate::sink::OutputSink;

pub(crate) fn emit_decl<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, decl: &Decl) -> Result {
    match decl {
        Decl::Import { specs } => {
            out.open("import")?;
            for spec in specs {
                out.space()?;
                emit_import_spec(out, spec)?;
            }
            out.close()
        }
        Decl::Type { specs } => {
            // Grouped declarations share one form as name/type pairs.
            out.open("define-type")?;
            for spec in specs {
                out.space()?;
                out.text(&spec.name)?;
                out.space()?;
                emit_expr(out, &spec.ty)?;
            }
            out.close()
        }
        Decl::Const { specs } => emit_value_decl(out, "define-const", specs),
        Decl::Var { specs } => emit_value_decl(out, "define-var", specs),
        Decl::Func(func) => emit_func_decl(out, func),
        Decl::Unsupported { node } => out.placeholder(node),
    }
}

/// `"path"`, `(as alias "path")` or `(dot "path")`.
fn emit_import_spec<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, spec: &ImportSpec) -> Result {
    match spec.name.as_deref() {
        None => out.text(&spec.path),
        Some(name) => {
            if name == "." {
                out.open("dot")?;
            } else {
                out.open("as")?;
                out.space()?;
                out.text(name)?;
            }
            out.space()?;
            out.text(&spec.path)?;
            out.close()
        }
    }
}

fn emit_value_decl<S: OutputSink + ?Sized>(
    out: &mut Out<'_, S>,
    head: &str,
    specs: &[ValueSpec],
) -> Result {
    out.open(head)?;
    for spec in specs {
        out.space()?;
        emit_value_spec(out, spec)?;
    }
    out.close()
}

/// One of four shapes, depending on which of type and values are present:
///
/// - `x` / `(x y)`
/// - `(= x 1)` / `(= (x y) 1 2)`
/// - `#(x y T)`
/// - `(= #(x y T) 1 2)`
fn emit_value_spec<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, spec: &ValueSpec) -> Result {
    if spec.names.is_empty() {
        return Err(TransduceError::structural(
            "ValueSpec",
            "a value spec must bind at least one name",
        ));
    }

    let has_values = !spec.values.is_empty();
    if has_values {
        out.open("=")?;
        out.space()?;
    }
    match &spec.ty {
        Some(ty) => emit_typed_names(out, &spec.names, ty)?,
        None => emit_names(out, &spec.names)?,
    }
    if has_values {
        for value in &spec.values {
            out.space()?;
            emit_expr(out, value)?;
        }
        out.close()?;
    }
    Ok(())
}

/// A single name alone, several names grouped in parentheses.
fn emit_names<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, names: &[String]) -> Result {
    if let [name] = names {
        return out.text(name);
    }
    out.text("(")?;
    out.words(names)?;
    out.close()
}

/// `#(<names> <type>)`.
fn emit_typed_names<S: OutputSink + ?Sized>(
    out: &mut Out<'_, S>,
    names: &[String],
    ty: &Expr,
) -> Result {
    out.text("#(")?;
    out.words(names)?;
    out.space()?;
    emit_expr(out, ty)?;
    out.close()
}

/// `(define-func (<receiver>? <name> <params> <results>) <stmt>...)`.
fn emit_func_decl<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, func: &FuncDecl) -> Result {
    out.open("define-func")?;
    out.space()?;
    out.text("(")?;
    if let Some(recv) = &func.recv {
        for field in recv {
            emit_field(out, field)?;
            out.space()?;
        }
    }
    out.text(&func.name)?;
    emit_signature(out, &func.ty)?;
    out.close()?;
    if let Some(body) = &func.body {
        emit_block_items(out, body)?;
    }
    out.close()
}

/// Parameters then results, each preceded by a space, with no head of its
/// own: callers supply the surrounding form.
pub(crate) fn emit_signature<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, ty: &FuncType) -> Result {
    for field in &ty.params {
        out.space()?;
        emit_field(out, field)?;
    }
    out.space()?;
    emit_results(out, ty.results.as_ref())
}

/// `(void)`, the lone field, or `(values <field>...)`.
fn emit_results<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, results: Option<&FieldList>) -> Result {
    match results.map(|list| list.0.as_slice()) {
        None | Some([]) => out.text("(void)"),
        Some([field]) => emit_field(out, field),
        Some(fields) => {
            out.open("values")?;
            for field in fields {
                out.space()?;
                emit_field(out, field)?;
            }
            out.close()
        }
    }
}

/// The bare type for an anonymous field, `#(<names> <type>)` otherwise.
pub(crate) fn emit_field<S: OutputSink + ?Sized>(out: &mut Out<'_, S>, field: &Field) -> Result {
    if field.names.is_empty() {
        return emit_expr(out, &field.ty);
    }
    emit_typed_names(out, &field.names, &field.ty)
}

/// Interface members: a named method is `#(<name> <params> <results>)`,
/// anything else (embedded interfaces) is an ordinary field.
pub(crate) fn emit_interface_member<S: OutputSink + ?Sized>(
    out: &mut Out<'_, S>,
    field: &Field,
) -> Result {
    match &field.ty {
        Expr::Type {
            ty: TypeExpr::Func(sig),
        } if !field.names.is_empty() => {
            out.text("#(")?;
            out.words(&field.names)?;
            emit_signature(out, sig)?;
            out.close()
        }
        _ => emit_field(out, field),
    }
}
