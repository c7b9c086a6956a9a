//! Parsing Feature
//!
//! Turns JavaScript source text into an owned syntax tree plus its comments.
//!
//! ## Structure
//! - `domain/` - ParsedTree, SyntaxNode, Comment, SyntaxError
//! - `ports/` - Parser trait
//! - `infrastructure/` - TreeSitterParser, source pre-wrapping

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{Comment, NodeShape, ParsedTree, SyntaxError, SyntaxKind, SyntaxNode};
pub use infrastructure::{wrap_fragment, TreeSitterParser};
pub use ports::Parser;
