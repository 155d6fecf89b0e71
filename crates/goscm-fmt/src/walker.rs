//! Datum to [`FormatIR`].
//!
//! Every list and vector is one group. The opening delimiter, the head and
//! any atoms directly after it (`(package main`, `(label outer`) stay on
//! one line; the remaining elements follow on the same line if the whole
//! form fits, otherwise one per line one level deeper.
//!
//! ```text
//! (package main
//!   (define-func
//!     (Add #(a int) #(b int) int)
//!     (return (+ a b))))
//! ```

use crate::ir::{concat, group, indent, space, text, FormatIR};
use crate::reader::{Datum, DatumKind};

pub fn walk(datum: &Datum) -> FormatIR {
    match &datum.kind {
        DatumKind::List(items) => walk_form("(", items),
        DatumKind::Vector(items) => walk_form("#(", items),
        _ => text(datum.to_string()),
    }
}

fn walk_form(open: &str, items: &[Datum]) -> FormatIR {
    let Some((head, rest)) = items.split_first() else {
        return text(format!("{open})"));
    };
    let lead = rest.iter().take_while(|item| item.is_atom()).count();
    let (atoms, rest) = rest.split_at(lead);

    let mut parts = vec![text(open), walk(head)];
    for atom in atoms {
        parts.push(text(" "));
        parts.push(walk(atom));
    }
    let mut tail = Vec::with_capacity(rest.len() * 2);
    for item in rest {
        tail.push(space());
        tail.push(walk(item));
    }
    parts.push(indent(concat(tail)));
    parts.push(text(")"));
    group(concat(parts))
}
