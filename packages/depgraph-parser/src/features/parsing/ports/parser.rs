//! Parser port (interface)
//!
//! Defines the contract for turning source text into a `ParsedTree`.

use crate::features::parsing::domain::{ParsedTree, SyntaxError};

/// Parser trait - abstraction over parsing implementation
pub trait Parser: Send + Sync {
    /// Parse source code into a ParsedTree
    ///
    /// Any syntax error fails the whole parse; there is no partial tree.
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree, SyntaxError>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
