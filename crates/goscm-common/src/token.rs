use std::fmt;

use serde::{Deserialize, Serialize};

/// The lexical kind of a basic literal.
///
/// Only character literals are rewritten by the emitter; every other kind
/// passes its raw lexeme through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LitKind {
    Char,
    String,
    Int,
    Float,
    Imag,
}

/// The keyword of a branch statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchTok {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

impl BranchTok {
    /// The keyword exactly as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Goto => "goto",
            Self::Fallthrough => "fallthrough",
        }
    }
}

/// The operator of an increment/decrement statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncDecTok {
    #[serde(rename = "++")]
    Inc,
    #[serde(rename = "--")]
    Dec,
}

impl IncDecTok {
    /// `++` or `--`. Never translated.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inc => "++",
            Self::Dec => "--",
        }
    }
}

/// Direction of a channel type.
///
/// `Send` is `chan<- T`, `Recv` is `<-chan T`, `Both` is a plain `chan T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

impl ChanDir {
    /// Suffix appended to the `chan` head in output.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Both => "",
            Self::Recv => "<-",
            Self::Send => "<-!",
        }
    }
}

impl fmt::Display for BranchTok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IncDecTok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
