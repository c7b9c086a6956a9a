//! JavaScript tree-sitter configuration
//!
//! One grammar covers plain JavaScript and JSX. TypeScript-only syntax
//! (type annotations, interfaces) is a syntax error.

use tree_sitter::Language;

/// Tree-sitter node kinds the dependency walk cares about
///
/// Source: https://github.com/tree-sitter/tree-sitter-javascript/blob/master/grammar.js
pub mod node_kinds {
    // Program structure
    pub const PROGRAM: &str = "program";
    pub const COMMENT: &str = "comment";

    // Expressions
    pub const CALL_EXPRESSION: &str = "call_expression";
    pub const MEMBER_EXPRESSION: &str = "member_expression";
    pub const IDENTIFIER: &str = "identifier";
    pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
    pub const ARGUMENTS: &str = "arguments";
    pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";

    // Literals
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
    pub const TRUE: &str = "true";
    pub const FALSE: &str = "false";
    pub const NULL: &str = "null";
    pub const REGEX: &str = "regex";
    pub const TEMPLATE_STRING: &str = "template_string";
}

/// Tree-sitter field names used by the dependency matcher
pub mod fields {
    pub const FUNCTION: &str = "function";
    pub const ARGUMENTS: &str = "arguments";
    pub const OBJECT: &str = "object";
    pub const PROPERTY: &str = "property";
}

/// File extensions parsed as plain JavaScript
pub const JAVASCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// File extensions parsed with JSX support
pub const JSX_EXTENSIONS: &[&str] = &["jsx"];

pub fn javascript_language() -> Language {
    tree_sitter_javascript::language()
}
