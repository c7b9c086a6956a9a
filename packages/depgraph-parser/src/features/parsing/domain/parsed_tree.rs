//! Parsed tree representation
//!
//! Abstracts the parsed AST for downstream processing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::syntax_node::SyntaxNode;
use crate::shared::models::Location;

/// Parsed syntax tree
#[derive(Debug)]
pub struct ParsedTree {
    /// Root node of the tree
    pub root: SyntaxNode,

    /// Every comment in the file, in source order
    pub comments: Vec<Comment>,

    /// File path (for error messages)
    pub file_path: String,

    /// Language
    pub language: String,
}

/// A comment and where it starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body without `//`, `/*` and `*/`
    pub text: String,
    pub location: Location,
}

/// The source text is not valid under the grammar
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub location: Option<Location>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    pub fn at(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
        }
    }
}

impl ParsedTree {
    pub fn new(root: SyntaxNode, file_path: String, language: String) -> Self {
        Self {
            root,
            comments: Vec::new(),
            file_path,
            language,
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

impl Comment {
    /// Strip the comment delimiters from raw comment source
    pub fn from_source(raw: &str, location: Location) -> Self {
        let text = if let Some(line) = raw.strip_prefix("//") {
            line
        } else if let Some(block) = raw.strip_prefix("/*") {
            block.strip_suffix("*/").unwrap_or(block)
        } else {
            raw
        };

        Self {
            text: text.to_string(),
            location,
        }
    }
}
