//! Parsing domain models

mod parsed_tree;
mod syntax_node;

pub use parsed_tree::{Comment, ParsedTree, SyntaxError};
pub use syntax_node::{NodeShape, SyntaxKind, SyntaxNode};
