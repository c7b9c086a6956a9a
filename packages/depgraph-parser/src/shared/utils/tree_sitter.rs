//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter AST nodes.

use crate::shared::models::{Location, Span};
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find all descendants by kind, in document order
pub fn find_descendants_by_kind<'a>(node: &'a Node, kind: &str) -> Vec<Node<'a>> {
    let mut result = Vec::new();
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

/// First `ERROR` or `MISSING` node in document order
///
/// Subtrees without errors are skipped using `has_error`.
pub fn find_first_error<'a>(node: &'a Node) -> Option<Node<'a>> {
    if !node.has_error() {
        return None;
    }
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                if child.has_error() {
                    stack.push(child);
                }
            }
        }
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
///
/// Returns an empty string when the byte range does not fall on char boundaries.
#[inline]
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}

/// Start location of a node
#[inline]
pub fn node_location(node: &Node) -> Location {
    node_to_span(node).start()
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_js(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::language())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_find_descendants_by_kind_in_order() {
        let code = "// one\nvar a = 1; /* two */\n// three\n";
        let tree = parse_js(code);
        let root = tree.root_node();

        let comments: Vec<&str> = find_descendants_by_kind(&root, "comment")
            .iter()
            .map(|n| node_text(n, code))
            .collect();
        assert_eq!(comments, vec!["// one", "/* two */", "// three"]);
    }

    #[test]
    fn test_find_first_error_on_valid_source() {
        let tree = parse_js("var a = require('a');");
        assert!(find_first_error(&tree.root_node()).is_none());
    }

    #[test]
    fn test_find_first_error_on_unbalanced_braces() {
        let code = "function a() {\n  require('a');\n";
        let tree = parse_js(code);
        let root = tree.root_node();
        let error = find_first_error(&root);
        assert!(error.is_some());
    }

    #[test]
    fn test_node_to_span() {
        let code = "function foo() {\n  return 1;\n}";
        let tree = parse_js(code);
        let root = tree.root_node();
        let func = root.child(0).unwrap();

        let span = node_to_span(&func);
        assert_eq!(span.start_line, 1);
        assert_eq!(span.start_col, 0);
        assert_eq!(span.end_line, 3);
        assert_eq!(node_location(&func), Location::new(1, 0));
    }
}
