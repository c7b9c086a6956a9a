//! Tree-sitter parser implementation
//!
//! This is where tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser, Tree};

use super::languages::javascript::{self, node_kinds};
use crate::features::parsing::domain::{Comment, ParsedTree, SyntaxError, SyntaxKind, SyntaxNode};
use crate::features::parsing::ports::Parser;
use crate::shared::utils::tree_sitter::{
    find_descendants_by_kind, find_first_error, node_location, node_text, node_to_span,
};

/// Longest token quoted in an `Unexpected token` message
const MAX_TOKEN_PREVIEW: usize = 32;

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// A converted node waiting for its children
struct PendingNode<'tree> {
    node: SyntaxNode,
    children: Vec<SyntaxNode>,
    remaining: std::vec::IntoIter<(Node<'tree>, Option<&'static str>)>,
}

impl PendingNode<'_> {
    fn finish(self) -> SyntaxNode {
        self.node.with_children(self.children)
    }
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSitterLanguage {
    JavaScript,
    Jsx,
}

impl TreeSitterParser {
    /// Create a JavaScript parser
    pub fn javascript() -> Self {
        Self {
            language: TreeSitterLanguage::JavaScript,
        }
    }

    /// Create a JavaScript parser that accepts JSX
    pub fn jsx() -> Self {
        Self {
            language: TreeSitterLanguage::Jsx,
        }
    }

    /// Pick the parser for a file extension (without the dot)
    pub fn for_extension(ext: &str) -> Option<Self> {
        if javascript::JAVASCRIPT_EXTENSIONS.contains(&ext) {
            Some(Self::javascript())
        } else if javascript::JSX_EXTENSIONS.contains(&ext) {
            Some(Self::jsx())
        } else {
            None
        }
    }

    /// Get the tree-sitter language (the JavaScript grammar parses JSX too)
    fn get_ts_language(&self) -> tree_sitter::Language {
        javascript::javascript_language()
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> ParsedTree {
        let root_node = tree.root_node();
        let root = self.convert_node(&root_node, source);

        let comments = find_descendants_by_kind(&root_node, node_kinds::COMMENT)
            .iter()
            .map(|c| Comment::from_source(node_text(c, source), node_location(c)))
            .collect();

        ParsedTree::new(
            root,
            file_path.to_string(),
            self.language_name().to_string(),
        )
        .with_comments(comments)
    }

    /// Convert a tree-sitter node to SyntaxNode
    ///
    /// Only named, non-extra children are kept: punctuation and comments never
    /// show up in the domain tree. Nodes under construction live on an explicit
    /// stack, so nesting depth does not grow the call stack.
    fn convert_node(&self, node: &Node, source: &str) -> SyntaxNode {
        let mut root = self.open_node(*node, None, source);
        let mut stack: Vec<PendingNode<'_>> = Vec::new();

        loop {
            let top = match stack.last_mut() {
                Some(pending) => pending,
                None => &mut root,
            };
            if let Some((child, field)) = top.remaining.next() {
                let opened = self.open_node(child, field, source);
                stack.push(opened);
                continue;
            }

            let Some(finished) = stack.pop() else {
                return root.finish();
            };
            let converted = finished.finish();
            match stack.last_mut() {
                Some(parent) => parent.children.push(converted),
                None => root.children.push(converted),
            }
        }
    }

    /// Childless SyntaxNode for `node`, with its children still to convert
    fn open_node<'tree>(
        &self,
        node: Node<'tree>,
        field: Option<&'static str>,
        source: &str,
    ) -> PendingNode<'tree> {
        let mut remaining = Vec::new();
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.is_named() && !child.is_extra() {
                    remaining.push((child, cursor.field_name()));
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        let kind = self.map_node_kind(node.kind());
        let keeps_text = remaining.is_empty() || kind.keeps_text();
        let mut converted = SyntaxNode::new(kind, node_to_span(&node));
        if keeps_text {
            converted = converted.with_text(node_text(&node, source));
        }
        if let Some(field) = field {
            converted = converted.with_field(field);
        }

        PendingNode {
            children: Vec::with_capacity(remaining.len()),
            remaining: remaining.into_iter(),
            node: converted,
        }
    }

    /// Map tree-sitter node kind to our SyntaxKind
    fn map_node_kind(&self, ts_kind: &str) -> SyntaxKind {
        match ts_kind {
            node_kinds::PROGRAM => SyntaxKind::Program,

            // Expressions
            node_kinds::CALL_EXPRESSION => SyntaxKind::CallExpr,
            node_kinds::MEMBER_EXPRESSION => SyntaxKind::MemberExpr,
            node_kinds::IDENTIFIER => SyntaxKind::Identifier,
            node_kinds::PROPERTY_IDENTIFIER => SyntaxKind::PropertyIdentifier,
            node_kinds::ARGUMENTS => SyntaxKind::Arguments,
            node_kinds::PARENTHESIZED_EXPRESSION => SyntaxKind::ParenthesizedExpr,

            // Literals
            node_kinds::STRING => SyntaxKind::StringLiteral,
            node_kinds::NUMBER => SyntaxKind::NumberLiteral,
            node_kinds::TRUE | node_kinds::FALSE => SyntaxKind::BooleanLiteral,
            node_kinds::NULL => SyntaxKind::NullLiteral,
            node_kinds::REGEX => SyntaxKind::RegexLiteral,
            node_kinds::TEMPLATE_STRING => SyntaxKind::TemplateString,

            node_kinds::COMMENT => SyntaxKind::Comment,

            // Unknown
            other => SyntaxKind::Other(other.to_string()),
        }
    }

    /// Describe the first syntax error in the tree, if any
    fn first_syntax_error(&self, tree: &Tree, source: &str) -> Option<SyntaxError> {
        let root = tree.root_node();
        let error = find_first_error(&root)?;
        let location = node_location(&error);

        let detail = if error.is_missing() {
            format!("Missing \"{}\"", error.kind())
        } else {
            match unexpected_token(node_text(&error, source)) {
                Some(token) => format!("Unexpected token {}", token),
                None => "Unexpected end of input".to_string(),
            }
        };

        Some(SyntaxError::at(
            format!("Line {}: {}", location.line, detail),
            location,
        ))
    }
}

/// First whitespace-delimited token of an error node's text
fn unexpected_token(text: &str) -> Option<String> {
    let token = text.split_whitespace().next()?;
    Some(token.chars().take(MAX_TOKEN_PREVIEW).collect())
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree, SyntaxError> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| SyntaxError::new(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| SyntaxError::new("Failed to parse source code"))?;

        if let Some(error) = self.first_syntax_error(&tree, source) {
            return Err(error);
        }

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::JavaScript => javascript::JAVASCRIPT_EXTENSIONS.contains(&ext),
            TreeSitterLanguage::Jsx => javascript::JSX_EXTENSIONS.contains(&ext),
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::JavaScript => "javascript",
            TreeSitterLanguage::Jsx => "jsx",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::domain::NodeShape;

    fn find_kind<'a>(node: &'a SyntaxNode, kind: &SyntaxKind) -> Option<&'a SyntaxNode> {
        if &node.kind == kind {
            return Some(node);
        }
        node.children.iter().find_map(|c| find_kind(c, kind))
    }

    #[test]
    fn test_parse_require_call() {
        let parser = TreeSitterParser::javascript();
        let tree = parser.parse("var a = require('a');", "a.js").unwrap();

        assert_eq!(tree.root.kind, SyntaxKind::Program);
        let call = find_kind(&tree.root, &SyntaxKind::CallExpr).unwrap();
        let callee = call.child_by_field("function").unwrap();
        assert!(callee.is_identifier("require"));
        assert_eq!(callee.start().line, 1);
        assert_eq!(callee.start().column, 8);

        let args = call.child_by_field("arguments").unwrap();
        assert_eq!(args.children.len(), 1);
        assert_eq!(args.children[0].kind, SyntaxKind::StringLiteral);
        assert_eq!(args.children[0].text(), "'a'");
    }

    #[test]
    fn test_parse_member_callee_fields() {
        let parser = TreeSitterParser::javascript();
        let tree = parser.parse("require.resolve('c');", "a.js").unwrap();

        let member = find_kind(&tree.root, &SyntaxKind::MemberExpr).unwrap();
        assert!(member.child_by_field("object").unwrap().is_identifier("require"));
        assert_eq!(member.child_by_field("property").unwrap().text(), "resolve");
    }

    #[test]
    fn test_comments_are_collected_not_walked() {
        let parser = TreeSitterParser::javascript();
        let source = "// @require('a')\nrequire(/* inline */ 'b');\n/* tail */";
        let tree = parser.parse(source, "a.js").unwrap();

        let texts: Vec<&str> = tree.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec![" @require('a')", " inline ", " tail "]);
        assert_eq!(tree.comments[1].location.line, 2);
        assert!(find_kind(&tree.root, &SyntaxKind::Comment).is_none());

        let args = find_kind(&tree.root, &SyntaxKind::Arguments).unwrap();
        assert_eq!(args.children.len(), 1);
    }

    #[test]
    fn test_leaves_keep_text() {
        let parser = TreeSitterParser::javascript();
        let tree = parser.parse("x;", "a.js").unwrap();
        let ident = find_kind(&tree.root, &SyntaxKind::Identifier).unwrap();
        assert!(matches!(ident.shape(), NodeShape::Leaf("x")));
    }

    #[test]
    fn test_unbalanced_braces_is_syntax_error() {
        let parser = TreeSitterParser::javascript();
        let result = parser.parse("function a() {\n  require('a');\n", "a.js");

        let error = result.unwrap_err();
        assert!(error.message.starts_with("Line "));
        assert!(error.location.is_some());
    }

    #[test]
    fn test_unexpected_token_message() {
        let parser = TreeSitterParser::javascript();
        let error = parser.parse("var a = 1;\nvar = ;\n", "a.js").unwrap_err();
        assert_eq!(error.location.unwrap().line, 2);
        assert!(error.message.starts_with("Line 2: "));
    }

    #[test]
    fn test_jsx_parser() {
        let parser = TreeSitterParser::for_extension("jsx").unwrap();
        assert!(parser.supports_extension("jsx"));
        assert_eq!(parser.language_name(), "jsx");

        let tree = parser
            .parse("var React = require('react');\nvar el = <div>hi</div>;", "a.jsx")
            .unwrap();
        assert!(find_kind(&tree.root, &SyntaxKind::CallExpr).is_some());
    }

    #[test]
    fn test_for_extension() {
        assert!(TreeSitterParser::for_extension("js").is_some());
        assert!(TreeSitterParser::for_extension("cjs").is_some());
        assert!(TreeSitterParser::for_extension("py").is_none());
    }

    #[test]
    fn test_unexpected_token_preview() {
        assert_eq!(unexpected_token(") + 1"), Some(")".to_string()));
        assert_eq!(unexpected_token("   "), None);
    }
}
