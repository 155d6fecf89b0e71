//! Shared types for the goscm transducer.
//!
//! Holds the pieces every other crate agrees on: the closed token sets that
//! appear in the syntax tree, the operator translation table, the error
//! type a transduction run fails with, and source positions for reports.

pub mod error;
pub mod op;
pub mod span;
pub mod token;

pub use error::TransduceError;
pub use op::translate;
pub use span::{LineIndex, Span};
pub use token::{BranchTok, ChanDir, IncDecTok, LitKind};
