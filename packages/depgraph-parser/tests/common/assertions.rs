//! Domain-specific assertions

use depgraph_parser::{ErrorCode, ParseError, ParseResult};
use pretty_assertions::assert_eq;

/// Assert the three dependency lists of a result
pub fn assert_dependencies(
    result: &ParseResult,
    require: &[&str],
    resolve: &[&str],
    r#async: &[&str],
) {
    assert_eq!(result.require, require, "require bucket");
    assert_eq!(result.resolve, resolve, "resolve bucket");
    assert_eq!(result.r#async, r#async, "async bucket");
}

/// Assert a failure carries `code` and a message starting with `prefix`
pub fn assert_error(error: &ParseError, code: ErrorCode, prefix: &str) {
    assert_eq!(error.code, code);
    assert!(
        error.message.starts_with(prefix),
        "Expected message to start with {prefix:?}, got:\n{}",
        error.message
    );
}
