use std::io;

/// Why a transduction run was abandoned.
///
/// Any of these leaves the sink partially written; callers discard the
/// output rather than resume it.
#[derive(Debug, thiserror::Error)]
pub enum TransduceError {
    /// A node invariant does not hold, e.g. a key-value key that is not a
    /// plain name.
    #[error("structural violation in {node}: {message}")]
    Structural { node: &'static str, message: String },

    /// An `Unsupported` node was reached while placeholders are disabled.
    #[error("unsupported node kind `{0}`")]
    Unsupported(String),

    /// Writing to the output sink failed.
    #[error("output sink failed: {0}")]
    Sink(#[from] io::Error),
}

impl TransduceError {
    /// Build a structural violation for the named node kind.
    pub fn structural(node: &'static str, message: impl Into<String>) -> Self {
        Self::Structural {
            node,
            message: message.into(),
        }
    }
}
