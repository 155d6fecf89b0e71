//! Character literal rendering.
//!
//! Go rune literals (`'a'`, `'\n'`, `'é'`) become reader character
//! syntax (`#\a`, `#\newline`, `#\é`). Characters a reader would split on
//! or cannot see are spelled by name or in `#\xNN` hex form.

use goscm_common::TransduceError;

use crate::options::CharLiteralMode;

const NODE: &str = "BasicLit";

/// Render the raw rune literal `raw` (quotes included).
pub(crate) fn char_literal(raw: &str, mode: CharLiteralMode) -> Result<String, TransduceError> {
    let body = raw
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .filter(|body| !body.is_empty())
        .ok_or_else(|| malformed(raw))?;

    let c = match mode {
        CharLiteralMode::FirstByte => {
            let byte = body.as_bytes()[0];
            if !byte.is_ascii() {
                return Ok(format!("#\\x{byte:02x}"));
            }
            char::from(byte)
        }
        CharLiteralMode::Decode => decode(body).ok_or_else(|| malformed(raw))?,
    };
    Ok(render(c))
}

fn malformed(raw: &str) -> TransduceError {
    TransduceError::structural(NODE, format!("malformed character literal {raw}"))
}

/// Decode the text between the quotes into exactly one character.
fn decode(body: &str) -> Option<char> {
    let mut chars = body.chars();
    let first = chars.next()?;
    let c = if first == '\\' {
        let esc = chars.next()?;
        match esc {
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            '\\' | '\'' | '"' => esc,
            'x' => hex(&mut chars, 2)?,
            'u' => hex(&mut chars, 4)?,
            'U' => hex(&mut chars, 8)?,
            '0'..='7' => {
                let rest: String = chars.by_ref().take(2).collect();
                if rest.len() != 2 {
                    return None;
                }
                let value = u32::from_str_radix(&format!("{esc}{rest}"), 8).ok()?;
                if value > 0xff {
                    return None;
                }
                char::from_u32(value)?
            }
            _ => return None,
        }
    } else {
        first
    };
    // Anything left over means more than one character between the quotes.
    chars.next().is_none().then_some(c)
}

fn hex(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let text: String = chars.by_ref().take(digits).collect();
    if text.len() != digits {
        return None;
    }
    char::from_u32(u32::from_str_radix(&text, 16).ok()?)
}

fn render(c: char) -> String {
    let name = match c {
        ' ' => "space",
        '\n' => "newline",
        '\t' => "tab",
        '\r' => "return",
        '\0' => "nul",
        '\u{7}' => "alarm",
        '\u{8}' => "backspace",
        '\u{b}' => "vtab",
        '\u{c}' => "page",
        '\u{1b}' => "esc",
        '\u{7f}' => "delete",
        c if c.is_control() || c.is_whitespace() => {
            return format!("#\\x{:x}", c as u32);
        }
        c => return format!("#\\{c}"),
    };
    format!("#\\{name}")
}
