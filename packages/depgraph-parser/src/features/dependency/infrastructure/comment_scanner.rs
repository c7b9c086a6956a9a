//! Comment annotation scanner
//!
//! Finds `@require('x')`, `@require.resolve('x')` and `@require.async('x')`
//! tags in comment text. Malformed tags simply do not match.

use lazy_static::lazy_static;
use regex::Regex;

use crate::features::dependency::domain::{DependencyBuckets, DependencyCategory};
use crate::features::parsing::domain::Comment;

use super::matcher::MatchPolicy;

/// Characters allowed inside an annotated dependency id
const ID_CHARS: &str = r"[A-Za-z0-9_/\-.]+";

lazy_static! {
    static ref REQUIRE_TAG: Regex = tag_pattern(DependencyCategory::Normal, true);
    static ref RESOLVE_TAG: Regex = tag_pattern(DependencyCategory::Resolve, true);
    // The async tag does not require the closing parenthesis, so
    // `@require.async('a', callback)` matches too.
    static ref ASYNC_TAG: Regex = tag_pattern(DependencyCategory::Async, false);
}

/// `<tag>\s*(\s*'id'\s*)` with either quote style
fn tag_pattern(category: DependencyCategory, closed: bool) -> Regex {
    let pattern = format!(
        r#"{tag}\s*\(\s*(?:'({id})'|"({id})")\s*{close}"#,
        tag = regex::escape(category.tag()),
        id = ID_CHARS,
        close = if closed { r"\)" } else { "" },
    );
    Regex::new(&pattern).expect("annotation tag pattern is valid")
}

fn pattern_for(category: DependencyCategory) -> &'static Regex {
    match category {
        DependencyCategory::Normal => &*REQUIRE_TAG,
        DependencyCategory::Resolve => &*RESOLVE_TAG,
        DependencyCategory::Async => &*ASYNC_TAG,
    }
}

/// Every annotated id of `category` in `text`, in order
pub fn scan_text(text: &str, category: DependencyCategory) -> Vec<String> {
    pattern_for(category)
        .captures_iter(text)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Scan every comment for the tags the policy enables
///
/// Normal tags are always scanned; resolve and async tags follow the same
/// switches as the call forms.
pub fn scan_comments(comments: &[Comment], policy: &MatchPolicy, buckets: &mut DependencyBuckets) {
    for comment in comments {
        for category in DependencyCategory::ALL {
            if !policy.is_enabled(category) {
                continue;
            }
            for id in scan_text(&comment.text, category) {
                buckets.push(category, id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Location;

    fn comment(text: &str) -> Comment {
        Comment {
            text: text.to_string(),
            location: Location::new(1, 0),
        }
    }

    fn policy(resolve_enabled: bool, async_enabled: bool) -> MatchPolicy {
        MatchPolicy {
            resolve_enabled,
            async_enabled,
            check_arity: true,
            allow_non_literal: false,
        }
    }

    #[test]
    fn test_require_tag_both_quotes() {
        assert_eq!(scan_text(" @require('a')", DependencyCategory::Normal), vec!["a"]);
        assert_eq!(
            scan_text(r#" @require( "./lib/b.js" ) "#, DependencyCategory::Normal),
            vec!["./lib/b.js"]
        );
    }

    #[test]
    fn test_all_occurrences_in_one_comment() {
        let text = "\n * @require('a')\n * @require('b') @require('c')\n";
        assert_eq!(scan_text(text, DependencyCategory::Normal), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_malformed_tags_are_ignored() {
        for text in [
            "@require('a\")",
            "@require(a)",
            "@require('a b')",
            "@require('a'",
            "@require('@scope/a')",
            "@require()",
        ] {
            assert!(scan_text(text, DependencyCategory::Normal).is_empty(), "{}", text);
        }
    }

    #[test]
    fn test_tags_do_not_overlap() {
        let text = "@require.resolve('r') @require.async('s')";
        assert!(scan_text(text, DependencyCategory::Normal).is_empty());
        assert_eq!(scan_text(text, DependencyCategory::Resolve), vec!["r"]);
        assert_eq!(scan_text(text, DependencyCategory::Async), vec!["s"]);
    }

    #[test]
    fn test_async_tag_accepts_trailing_arguments() {
        // Only the async tag tolerates content after the id
        assert_eq!(
            scan_text("@require.async('a', function(){})", DependencyCategory::Async),
            vec!["a"]
        );
        assert!(scan_text("@require.resolve('a', x)", DependencyCategory::Resolve).is_empty());
        assert!(scan_text("@require('a', x)", DependencyCategory::Normal).is_empty());
    }

    #[test]
    fn test_scan_comments_respects_policy() {
        let comments = vec![
            comment(" @require('a')"),
            comment(" @require.resolve('b') @require.async('c')"),
        ];

        let mut buckets = DependencyBuckets::new();
        scan_comments(&comments, &policy(false, false), &mut buckets);
        assert_eq!(buckets.get(DependencyCategory::Normal), ["a"]);
        assert!(buckets.get(DependencyCategory::Resolve).is_empty());
        assert!(buckets.get(DependencyCategory::Async).is_empty());

        let mut buckets = DependencyBuckets::new();
        scan_comments(&comments, &policy(true, true), &mut buckets);
        assert_eq!(buckets.get(DependencyCategory::Resolve), ["b"]);
        assert_eq!(buckets.get(DependencyCategory::Async), ["c"]);
    }
}
