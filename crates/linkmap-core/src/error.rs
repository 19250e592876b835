//! Error type shared by decomposition, editing and link rendering.

use thiserror::Error;

use crate::catalog::InternalVariable;

/// Errors surfaced by the template core.
///
/// Stale slot references during an edit are deliberately absent: those are
/// no-ops, not failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Input was empty after sanitation.
    #[error("no URL given")]
    MissingUrl,
    /// Input is not a valid absolute URL; carries the parser's message.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// A variable key outside the fixed catalog.
    #[error("unknown variable: {0}")]
    UnknownVariable(String),
    /// A slot id string key that does not follow `kind:ordinal[:name]`.
    #[error("invalid slot id: {0}")]
    InvalidSlotId(String),
    /// Rendering needed a value the caller did not supply.
    #[error("no value supplied for {0}")]
    MissingValue(InternalVariable),
    /// A URL value did not match the rule's format pattern.
    #[error("value {value:?} does not match date pattern {pattern:?}")]
    InvalidDate { pattern: String, value: String },
    /// A count-typed slot held something other than an unsigned integer.
    #[error("value {value:?} for {variable} is not a number")]
    InvalidNumber {
        variable: InternalVariable,
        value: String,
    },
}
