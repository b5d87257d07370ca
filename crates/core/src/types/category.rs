//! Product category filter.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{ArgumentError, require_text};

/// A product category name used as a filter.
///
/// Free text matched exactly against `product_category_name` after trimming.
/// The store column is nullable, but a filter value never is: products without
/// a category cannot be selected by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Argument name on the wire.
    pub const ARGUMENT: &'static str = "category";

    /// Width of the store column.
    pub const MAX_LEN: usize = 100;

    /// Validate caller input.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::Missing` if blank, `ArgumentError::TooLong` if
    /// longer than the store column.
    pub fn parse(value: &str) -> Result<Self, ArgumentError> {
        require_text(Self::ARGUMENT, value, Self::MAX_LEN).map(|v| Self(v.to_owned()))
    }

    /// Get the category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
