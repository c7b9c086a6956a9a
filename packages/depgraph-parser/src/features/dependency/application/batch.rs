//! Batch parsing
//!
//! Parses hold no shared state, so independent files are parsed in parallel.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::ParseOptions;

use super::parse_dependencies::parse;
use super::result::{ParseError, ParseResult};

/// A file's path and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Parse every file; results are in input order
pub fn parse_batch(
    files: &[SourceFile],
    options: &ParseOptions,
) -> Vec<Result<ParseResult, ParseError>> {
    tracing::debug!(files = files.len(), "parsing batch");

    #[cfg(feature = "parallel")]
    let results = files
        .par_iter()
        .map(|file| parse(&file.path, &file.content, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = files
        .iter()
        .map(|file| parse(&file.path, &file.content, options))
        .collect();

    results
}
