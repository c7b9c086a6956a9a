//! Language-neutral syntax node representation
//!
//! Owned copy of the tree-sitter tree, so the dependency walk does not borrow
//! from the parser. Trees are built and dropped without recursion, so nesting
//! depth is bounded by memory, not by the call stack.

use crate::shared::models::{Location, Span};

/// Syntax node kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    Program,

    // Expressions
    CallExpr,
    MemberExpr,
    Identifier,
    PropertyIdentifier,
    Arguments,
    ParenthesizedExpr,

    // Literals
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,
    NullLiteral,
    RegexLiteral,
    TemplateString,

    Comment,

    // Unknown/Other
    Other(String),
}

impl SyntaxKind {
    /// Compile-time constant values
    ///
    /// Template strings are excluded even without substitutions.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral
                | SyntaxKind::NumberLiteral
                | SyntaxKind::BooleanLiteral
                | SyntaxKind::NullLiteral
                | SyntaxKind::RegexLiteral
        )
    }

    /// Kinds whose full source text is kept on the node
    pub fn keeps_text(&self) -> bool {
        self.is_literal() || matches!(self, SyntaxKind::TemplateString)
    }
}

/// What the walker sees when it looks at a node
#[derive(Debug, Clone, Copy)]
pub enum NodeShape<'a> {
    /// Structured node: its children, in source order
    Branch(&'a [SyntaxNode]),
    /// Scalar: no children, only text
    Leaf(&'a str),
}

/// Syntax node
#[derive(Debug)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,

    /// Field name in the parent (`function`, `arguments`, `object`, ...)
    pub field: Option<&'static str>,

    pub text: Option<String>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self {
            kind,
            span,
            field: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Child stored under a tree-sitter field name
    pub fn child_by_field(&self, field: &str) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.field == Some(field))
    }

    pub fn shape(&self) -> NodeShape<'_> {
        if self.children.is_empty() {
            NodeShape::Leaf(self.text())
        } else {
            NodeShape::Branch(&self.children)
        }
    }

    pub fn start(&self) -> Location {
        self.span.start()
    }

    /// Get text content
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Innermost expression of `((expr))`; parentheses carry no meaning
    pub fn unparenthesized(&self) -> &SyntaxNode {
        let mut node = self;
        while node.kind == SyntaxKind::ParenthesizedExpr {
            match node.children.as_slice() {
                [inner] => node = inner,
                _ => break,
            }
        }
        node
    }

    /// Identifier with exactly this name
    pub fn is_identifier(&self, name: &str) -> bool {
        self.kind == SyntaxKind::Identifier && self.text() == name
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        // Detach descendants onto a heap stack so each node drops childless
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
