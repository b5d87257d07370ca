//! Core types for Retail Analytics.
//!
//! This module provides type-safe wrappers for the arguments and values that
//! flow between the gateway and the store.

pub mod argument;
pub mod category;
pub mod count;
pub mod date_range;
pub mod id;

pub use argument::{ArgumentError, require_text};
pub use category::Category;
pub use count::{CountError, CountValue};
pub use date_range::DateRange;
pub use id::*;
