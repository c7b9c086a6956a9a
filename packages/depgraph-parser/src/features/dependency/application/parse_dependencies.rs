//! Parse dependencies use case
//!
//! Sequences the stages of one parse:
//! 1. wrap and tokenize the content (`ERROR_PARSE_JS` on failure)
//! 2. walk the tree with the matcher (`WRONG_USAGE_REQUIRE` on a signaled violation)
//! 3. scan comments for annotation tags, when enabled
//! 4. deduplicate each bucket and assemble the result

use std::path::Path;

use crate::config::ParseOptions;
use crate::features::dependency::domain::{DependencyBuckets, DependencyCategory};
use crate::features::dependency::infrastructure::{scan_comments, walk, DependencyMatcher, MatchPolicy};
use crate::features::parsing::{wrap_fragment, Parser, TreeSitterParser};

use super::result::{ParseError, ParseResult};

/// Dependency extraction over any `Parser`
pub struct DependencyParser<P: Parser> {
    parser: P,
    options: ParseOptions,
}

impl<P: Parser> DependencyParser<P> {
    pub fn new(parser: P, options: ParseOptions) -> Self {
        Self { parser, options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Extract the dependencies declared by `content`
    pub fn parse(&self, path: &str, content: &str) -> Result<ParseResult, ParseError> {
        tracing::debug!(path, bytes = content.len(), "parsing dependencies");

        let wrapped = wrap_fragment(content);
        let tree = self.parser.parse(&wrapped, path).map_err(|error| {
            tracing::debug!(path, %error, "syntax error");
            ParseError::syntax(path, content, error)
        })?;

        let policy = MatchPolicy::from(&self.options);
        let matcher = DependencyMatcher::new(policy);
        let mut buckets = DependencyBuckets::new();

        walk(&tree.root, &matcher, &mut buckets).map_err(|violation| {
            tracing::debug!(
                path,
                line = violation.location.line,
                kind = ?violation.kind,
                "wrong usage of require"
            );
            ParseError::usage(path, content, violation)
        })?;

        if self.options.comment_require {
            scan_comments(&tree.comments, &policy, &mut buckets);
        }

        let result = ParseResult::new(path, buckets.into_unique());
        tracing::debug!(
            path,
            normal = result.require.len(),
            resolve = result.resolve.len(),
            asynchronous = result.r#async.len(),
            "parsed dependencies"
        );
        Ok(result)
    }

    /// Completion-callback form of `parse`; the callback runs before this returns
    pub fn parse_with_callback<F>(&self, path: &str, content: &str, callback: F)
    where
        F: FnOnce(Result<ParseResult, ParseError>),
    {
        callback(self.parse(path, content))
    }
}

impl DependencyParser<TreeSitterParser> {
    /// Parser chosen from the file extension of `path`, plain JavaScript otherwise
    pub fn for_path(path: &str, options: ParseOptions) -> Self {
        let parser = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(TreeSitterParser::for_extension)
            .unwrap_or_else(TreeSitterParser::javascript);
        Self::new(parser, options)
    }
}

/// Extract the dependencies of one file
///
/// ```rust
/// use depgraph_parser::{parse, ParseOptions};
///
/// let result = parse("a.js", "require('a'); require('a');", &ParseOptions::default()).unwrap();
/// assert_eq!(result.require, vec!["a"]);
/// ```
pub fn parse(path: &str, content: &str, options: &ParseOptions) -> Result<ParseResult, ParseError> {
    DependencyParser::for_path(path, *options).parse(path, content)
}

/// Completion-callback form of [`parse`]
pub fn parse_with_callback<F>(path: &str, content: &str, options: &ParseOptions, callback: F)
where
    F: FnOnce(Result<ParseResult, ParseError>),
{
    callback(parse(path, content, options))
}

/// Every dependency of `category` in `result`
pub fn dependencies_of(result: &ParseResult, category: DependencyCategory) -> &[String] {
    match category {
        DependencyCategory::Normal => &result.require,
        DependencyCategory::Resolve => &result.resolve,
        DependencyCategory::Async => &result.r#async,
    }
}
