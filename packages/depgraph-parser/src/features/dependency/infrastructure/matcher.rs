//! Dependency node matcher
//!
//! Decides whether a syntax node is one of the recognized call shapes and
//! applies the arity and literal-argument policy to it. Matching is purely
//! syntactic: a local variable named `require` is matched all the same.

use crate::config::ParseOptions;
use crate::features::dependency::domain::{
    DependencyCategory, UsageViolation, ViolationKind, LOAD_NAME,
};
use crate::features::parsing::domain::{SyntaxKind, SyntaxNode};
use crate::features::parsing::infrastructure::tree_sitter::languages::javascript::fields;
use crate::shared::models::Location;

use super::literal::literal_value;

/// Which forms are recognized and which misuses are errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    pub resolve_enabled: bool,
    pub async_enabled: bool,
    /// Arity violations are signaled instead of skipped
    pub check_arity: bool,
    /// Non-literal arguments are skipped instead of signaled
    pub allow_non_literal: bool,
}

impl MatchPolicy {
    pub fn is_enabled(&self, category: DependencyCategory) -> bool {
        match category {
            DependencyCategory::Normal => true,
            DependencyCategory::Resolve => self.resolve_enabled,
            DependencyCategory::Async => self.async_enabled,
        }
    }
}

impl From<&ParseOptions> for MatchPolicy {
    fn from(options: &ParseOptions) -> Self {
        Self {
            resolve_enabled: options.require_resolve,
            async_enabled: options.require_async,
            check_arity: options.check_require_length,
            allow_non_literal: options.allow_non_literal_require,
        }
    }
}

/// Result of checking one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Not a dependency-declaring call
    NoMatch,
    /// A well-formed call; its literal argument
    Collected {
        category: DependencyCategory,
        value: String,
    },
    /// A misused call the policy tolerates; contributes nothing
    Skipped {
        category: DependencyCategory,
        kind: ViolationKind,
    },
    /// A misused call the policy rejects
    Violation(UsageViolation),
}

/// Applies a `MatchPolicy` to syntax nodes
#[derive(Debug, Clone, Copy)]
pub struct DependencyMatcher {
    policy: MatchPolicy,
}

impl DependencyMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Call shape of `node`, tried in order normal → resolve → async
    ///
    /// Resolve and async shapes are only considered when enabled. Tagged
    /// templates (`` require`x` ``) are not calls.
    pub fn classify(&self, node: &SyntaxNode) -> Option<DependencyCategory> {
        if node.kind != SyntaxKind::CallExpr {
            return None;
        }
        let arguments = node.child_by_field(fields::ARGUMENTS)?;
        if arguments.kind != SyntaxKind::Arguments {
            return None;
        }

        let callee = node.child_by_field(fields::FUNCTION)?.unparenthesized();
        if callee.is_identifier(LOAD_NAME) {
            return Some(DependencyCategory::Normal);
        }
        if callee.kind != SyntaxKind::MemberExpr {
            return None;
        }

        let object = callee.child_by_field(fields::OBJECT)?.unparenthesized();
        let property = callee.child_by_field(fields::PROPERTY)?;
        if !object.is_identifier(LOAD_NAME) || property.kind != SyntaxKind::PropertyIdentifier {
            return None;
        }

        DependencyCategory::from_property(property.text())
            .filter(|category| self.policy.is_enabled(*category))
    }

    /// Classify `node` and validate its arguments
    pub fn check(&self, node: &SyntaxNode) -> MatchOutcome {
        let Some(category) = self.classify(node) else {
            return MatchOutcome::NoMatch;
        };

        let callee_location = node
            .child_by_field(fields::FUNCTION)
            .map(|callee| callee.start())
            .unwrap_or_else(|| node.start());
        let args: &[SyntaxNode] = node
            .child_by_field(fields::ARGUMENTS)
            .map(|arguments| arguments.children.as_slice())
            .unwrap_or_default();

        let Some(first) = args.first() else {
            return self.arity_violation(ViolationKind::MissingArgument, category, callee_location);
        };
        if category.checks_excess_arity() && args.len() > 1 {
            return self.arity_violation(
                ViolationKind::TooManyArguments,
                category,
                callee_location,
            );
        }

        match literal_value(first) {
            Some(value) => MatchOutcome::Collected { category, value },
            None if self.policy.allow_non_literal => MatchOutcome::Skipped {
                category,
                kind: ViolationKind::NonLiteralArgument,
            },
            None => MatchOutcome::Violation(UsageViolation::new(
                ViolationKind::NonLiteralArgument,
                category,
                first.start(),
            )),
        }
    }

    fn arity_violation(
        &self,
        kind: ViolationKind,
        category: DependencyCategory,
        location: Location,
    ) -> MatchOutcome {
        if self.policy.check_arity {
            MatchOutcome::Violation(UsageViolation::new(kind, category, location))
        } else {
            MatchOutcome::Skipped { category, kind }
        }
    }
}
