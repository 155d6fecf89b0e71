//! Printer for [`FormatIR`].
//!
//! Stack-based: each `Group` is measured flat and rendered flat when it fits
//! in the remaining width, broken otherwise. Widths are counted in
//! characters, so `#\é` is three columns wide.

use serde::Deserialize;

use crate::ir::FormatIR;

/// Layout settings, also the `[format]` section of the CLI config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Spaces per nesting level. Default: 2.
    pub indent_size: usize,
    /// Line width before groups break. Default: 80.
    pub max_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_width: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

struct PrintCmd<'a> {
    indent: usize,
    mode: Mode,
    ir: &'a FormatIR,
}

/// Render `ir`; the result always ends with a newline unless empty.
pub fn print(ir: &FormatIR, config: &FormatConfig) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    let mut stack = vec![PrintCmd {
        indent: 0,
        mode: Mode::Break,
        ir,
    }];

    while let Some(cmd) = stack.pop() {
        match cmd.ir {
            FormatIR::Text(s) => {
                out.push_str(s);
                col = match s.rfind('\n') {
                    Some(nl) => s[nl + 1..].chars().count(),
                    None => col + s.chars().count(),
                };
            }
            FormatIR::Space => match cmd.mode {
                Mode::Flat => {
                    out.push(' ');
                    col += 1;
                }
                Mode::Break => {
                    out.push('\n');
                    out.extend(std::iter::repeat(' ').take(cmd.indent));
                    col = cmd.indent;
                }
            },
            FormatIR::Indent(child) => stack.push(PrintCmd {
                indent: cmd.indent + config.indent_size,
                mode: cmd.mode,
                ir: child,
            }),
            FormatIR::Group(child) => {
                let fits = col.saturating_add(measure_flat(child)) <= config.max_width;
                stack.push(PrintCmd {
                    indent: cmd.indent,
                    mode: if fits { Mode::Flat } else { Mode::Break },
                    ir: child,
                });
            }
            FormatIR::Concat(parts) => {
                stack.extend(parts.iter().rev().map(|part| PrintCmd {
                    indent: cmd.indent,
                    mode: cmd.mode,
                    ir: part,
                }));
            }
        }
    }

    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Flat width of `ir`, or `usize::MAX` when it cannot be flat.
fn measure_flat(ir: &FormatIR) -> usize {
    match ir {
        FormatIR::Text(s) if s.contains('\n') => usize::MAX,
        FormatIR::Text(s) => s.chars().count(),
        FormatIR::Space => 1,
        FormatIR::Indent(child) | FormatIR::Group(child) => measure_flat(child),
        FormatIR::Concat(parts) => parts
            .iter()
            .map(measure_flat)
            .try_fold(0usize, |total, w| total.checked_add(w))
            .unwrap_or(usize::MAX),
    }
}
