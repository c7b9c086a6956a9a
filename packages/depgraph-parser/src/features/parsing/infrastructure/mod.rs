//! Parsing infrastructure - external dependencies

pub mod tree_sitter;
pub mod wrap;

pub use tree_sitter::TreeSitterParser;
pub use wrap::wrap_fragment;
