//! Utility modules shared across features
//!
//! - `tree_sitter`: Tree-sitter AST traversal and span conversion
//! - `code_frame`: Message normalization and source snippets for errors

pub mod code_frame;
pub mod tree_sitter;

pub use code_frame::{normalize_message, print_code, CodeFrameOptions, NormalizedMessage};
