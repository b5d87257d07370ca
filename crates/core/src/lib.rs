//! Retail Analytics Core - Shared types library.
//!
//! This crate provides common types used across all Retail Analytics components:
//! - `api` - GraphQL gateway and client UI server
//! - `cli` - Command-line tools for running aggregations and inspecting the schema
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed string IDs, argument validation, count coercion
//! - [`entities`] - Read-only records for the six store tables
//! - [`analytics`] - Row shapes produced by the aggregation operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod entities;
pub mod types;

pub use analytics::*;
pub use entities::*;
pub use types::*;
