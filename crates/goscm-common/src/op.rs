//! Operator translation table.
//!
//! Maps Go operator lexemes to the symbols the downstream reader expects.
//! Tokens missing from the table are returned unchanged, so the function is
//! total over arbitrary input.

/// Translate a binary or unary operator token to its output symbol.
///
/// Assignment tokens (`=`, `:=`, `+=`, ...) and `++`/`--` are written raw
/// by the emitter and never pass through here.
pub fn translate(token: &str) -> &str {
    match token {
        "!" => "not",
        "&" => "bitwise-and",
        "&&" => "and",
        "&=" => "bitwise-and=",
        "&^" => "bitwise-but",
        "&^=" => "bitwise-but=",
        "^" => "bitwise-xor",
        "^=" => "bitwise-xor=",
        "|" => "bitwise-or",
        "|=" => "bitwise-or=",
        "||" => "or",
        other => other,
    }
}
