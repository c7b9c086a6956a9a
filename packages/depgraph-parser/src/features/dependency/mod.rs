//! Dependency Feature
//!
//! Extracts `require`, `require.resolve` and `require.async` dependencies
//! from a parsed JavaScript file.
//!
//! ## Structure
//! - `domain/` - categories, buckets, usage violations
//! - `infrastructure/` - matcher, tree walker, comment scanner
//! - `application/` - parse orchestration, batch parsing, source loading

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::{
    parse, parse_batch, parse_with_callback, DependencyParser, ErrorCode, ParseError, ParseResult,
    SourceFile,
};
pub use domain::{DependencyCategory, UsageViolation, ViolationKind};
