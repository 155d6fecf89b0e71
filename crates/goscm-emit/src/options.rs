use serde::{Deserialize, Serialize};

/// Knobs for a transduction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitOptions {
    /// How character literals are rendered.
    pub char_literals: CharLiteralMode,
    /// Fail on `Unsupported` nodes instead of writing a placeholder.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharLiteralMode {
    /// Decode the whole code point, escapes included.
    #[default]
    Decode,
    /// Take the first byte after the opening quote, as older output did.
    FirstByte,
}
