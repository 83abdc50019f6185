//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Input validation failure.
///
/// Every variant is raised at the point the malformed input is seen and is
/// handed back to the caller untouched; nothing in the domain retries or
/// recovers from these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A note had fewer than two whitespace-separated tokens.
    #[error("malformed note {note:?}: expected '<title> <quantity> [<date>|none]'")]
    MalformedNote { note: String },

    /// A token expected to be a date is not `YYYY-MM-DD`.
    #[error("invalid expiration date {input:?}: expected YYYY-MM-DD")]
    DateFormat { input: String },

    /// A token selected as quantity is not a decimal number.
    #[error("invalid quantity {input:?}: expected a decimal number")]
    QuantityFormat { input: String },
}

impl InventoryError {
    pub fn malformed_note(note: impl Into<String>) -> Self {
        Self::MalformedNote { note: note.into() }
    }

    pub fn date_format(input: impl Into<String>) -> Self {
        Self::DateFormat {
            input: input.into(),
        }
    }

    pub fn quantity_format(input: impl Into<String>) -> Self {
        Self::QuantityFormat {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_quote_the_offending_input() {
        let err = InventoryError::quantity_format("abc");
        assert_eq!(
            err.to_string(),
            "invalid quantity \"abc\": expected a decimal number"
        );

        let err = InventoryError::date_format("2023/07/15");
        assert!(err.to_string().contains("\"2023/07/15\""));
    }
}
