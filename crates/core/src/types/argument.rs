//! Argument validation errors.

/// A caller-supplied argument was missing or malformed.
///
/// Raised before any store access. The `Display` output is safe to return to
/// clients verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The argument was absent, empty, or only whitespace.
    #[error("{0} is required")]
    Missing(&'static str),
    /// The argument exceeds the column width of the store.
    #[error("{argument} must be at most {max} characters")]
    TooLong {
        /// Argument name as it appears on the wire.
        argument: &'static str,
        /// Maximum allowed length.
        max: usize,
    },
    /// The argument is not an ISO date or timestamp.
    #[error("{argument} is not a valid ISO date: {value:?}")]
    InvalidDate {
        /// Argument name as it appears on the wire.
        argument: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ArgumentError {
    /// Name of the offending argument.
    #[must_use]
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::Missing(argument)
            | Self::TooLong { argument, .. }
            | Self::InvalidDate { argument, .. } => argument,
        }
    }
}

/// Trim `value` and reject it if blank or longer than `max` characters.
///
/// # Errors
///
/// Returns `ArgumentError::Missing` for blank input and
/// `ArgumentError::TooLong` when the trimmed value exceeds `max`.
pub fn require_text<'a>(
    argument: &'static str,
    value: &'a str,
    max: usize,
) -> Result<&'a str, ArgumentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ArgumentError::Missing(argument));
    }
    if trimmed.chars().count() > max {
        return Err(ArgumentError::TooLong { argument, max });
    }
    Ok(trimmed)
}
