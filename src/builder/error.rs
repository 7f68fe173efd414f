//! Build errors for transition declarations.

use std::fmt;
use thiserror::Error;

/// A required part of a transition declaration that was never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// `.from(state)` was not called
    From,
    /// `.to(state)` was not called
    To,
    /// `.on(event)` was not called
    Event,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("source state (.from)"),
            Self::To => f.write_str("target state (.to)"),
            Self::Event => f.write_str("event (.on)"),
        }
    }
}

/// Errors reported by the strict declaration path.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Transition declaration is incomplete; missing {}", describe(.missing))]
    IncompleteTransition { missing: Vec<MissingField> },
}

pub(crate) fn describe(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
