//! Tree walker
//!
//! Visits every node of the syntax tree in pre-order and runs the matcher on
//! each one. The walk knows nothing about node semantics: a call nested in a
//! conditional, a function body or an object literal is found the same way.

use crate::features::dependency::domain::{DependencyBuckets, UsageViolation};
use crate::features::parsing::domain::{NodeShape, SyntaxNode};

use super::matcher::{DependencyMatcher, MatchOutcome};

/// Walk `root`, collecting matched dependencies into `buckets`
///
/// The first signaled violation stops the walk. Children are visited in
/// source order; an explicit stack keeps deep trees off the call stack.
pub fn walk(
    root: &SyntaxNode,
    matcher: &DependencyMatcher,
    buckets: &mut DependencyBuckets,
) -> Result<(), UsageViolation> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match matcher.check(node) {
            MatchOutcome::Collected { category, value } => {
                tracing::trace!(%category, %value, line = node.start().line, "dependency");
                buckets.push(category, value);
            }
            MatchOutcome::Skipped { category, kind } => {
                tracing::trace!(%category, ?kind, line = node.start().line, "tolerated misuse");
            }
            MatchOutcome::Violation(violation) => return Err(violation),
            MatchOutcome::NoMatch => {}
        }

        match node.shape() {
            NodeShape::Branch(children) => stack.extend(children.iter().rev()),
            NodeShape::Leaf(_) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dependency::domain::{DependencyCategory, ViolationKind};
    use crate::features::dependency::infrastructure::matcher::MatchPolicy;
    use crate::features::parsing::{Parser, TreeSitterParser};

    fn matcher(check_arity: bool) -> DependencyMatcher {
        DependencyMatcher::new(MatchPolicy {
            resolve_enabled: true,
            async_enabled: true,
            check_arity,
            allow_non_literal: false,
        })
    }

    fn walk_source(source: &str, check_arity: bool) -> Result<DependencyBuckets, UsageViolation> {
        let tree = TreeSitterParser::javascript().parse(source, "test.js").unwrap();
        let mut buckets = DependencyBuckets::new();
        walk(&tree.root, &matcher(check_arity), &mut buckets)?;
        Ok(buckets)
    }

    #[test]
    fn test_finds_nested_calls_in_source_order() {
        let source = r#"
var a = require('a');
function load() {
  if (x) {
    return { b: require('b'), c: [require('c')] };
  }
}
(function () { require('d'); })();
"#;
        let buckets = walk_source(source, true).unwrap();
        assert_eq!(buckets.get(DependencyCategory::Normal), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_call_inside_argument_of_other_call() {
        let buckets = walk_source("define(require('a'), foo(require('b')));", true).unwrap();
        assert_eq!(buckets.get(DependencyCategory::Normal), ["a", "b"]);
    }

    #[test]
    fn test_keeps_duplicates_while_collecting() {
        let buckets = walk_source("require('a'); require('a');", true).unwrap();
        assert_eq!(buckets.get(DependencyCategory::Normal), ["a", "a"]);
    }

    #[test]
    fn test_violation_stops_walk() {
        let violation = walk_source("require('a');\nrequire();\nrequire('b');", true).unwrap_err();
        assert_eq!(violation.kind, ViolationKind::MissingArgument);
        assert_eq!(violation.location.line, 2);
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 500;
        let source = format!("{}require('deep'){};", "[".repeat(depth), "]".repeat(depth));
        let buckets = walk_source(&source, true).unwrap();
        assert_eq!(buckets.get(DependencyCategory::Normal), ["deep"]);
    }
}
