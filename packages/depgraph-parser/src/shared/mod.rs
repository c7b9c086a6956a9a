//! Shared module - Common types and utilities
//!
//! Types shared across all features. Nothing in here knows about tree-sitter.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
