//! Property-based tests for dependency extraction
//!
//! Invariants that should hold for ALL generated modules:
//! - Uniqueness: no bucket ever holds the same dependency twice
//! - Completeness: every literal `require` call shows up in the result
//! - Gating: disabled categories never collect anything

use depgraph_parser::{parse, ParseOptions};
use proptest::prelude::*;

/// Module identifiers within the annotation tag character set
fn module_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_./-]{0,12}"
}

#[derive(Debug, Clone)]
enum Declaration {
    Require(String),
    Resolve(String),
    Async(String),
    Tag(String),
}

impl Declaration {
    fn render(&self) -> String {
        match self {
            Declaration::Require(name) => format!("require('{name}');"),
            Declaration::Resolve(name) => format!("require.resolve(\"{name}\");"),
            Declaration::Async(name) => format!("require.async('{name}', function () {{}});"),
            Declaration::Tag(name) => format!("// @require('{name}')"),
        }
    }
}

fn declaration() -> impl Strategy<Value = Declaration> {
    prop_oneof![
        module_name().prop_map(Declaration::Require),
        module_name().prop_map(Declaration::Resolve),
        module_name().prop_map(Declaration::Async),
        module_name().prop_map(Declaration::Tag),
    ]
}

fn render(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(Declaration::render)
        .collect::<Vec<_>>()
        .join("\n")
}

fn has_duplicates(values: &[String]) -> bool {
    let mut seen = std::collections::HashSet::new();
    values.iter().any(|value| !seen.insert(value))
}

proptest! {
    #[test]
    fn prop_buckets_are_unique(declarations in prop::collection::vec(declaration(), 0..40)) {
        // Doubling the module guarantees repeated declarations
        let content = format!("{0}\n{0}", render(&declarations));
        let result = parse("gen.js", &content, &ParseOptions::default()).unwrap();

        prop_assert!(!has_duplicates(&result.require));
        prop_assert!(!has_duplicates(&result.resolve));
        prop_assert!(!has_duplicates(&result.r#async));
    }

    #[test]
    fn prop_every_literal_require_is_collected(names in prop::collection::vec(module_name(), 1..20)) {
        let content: String = names.iter().map(|n| format!("require('{n}');\n")).collect();
        let result = parse("gen.js", &content, &ParseOptions::default()).unwrap();

        for name in &names {
            prop_assert!(result.require.contains(name), "missing {}", name);
        }
        prop_assert!(result.require.len() <= names.len());
    }

    #[test]
    fn prop_first_occurrence_order_is_kept(names in prop::collection::vec(module_name(), 1..20)) {
        let content: String = names.iter().map(|n| format!("require('{n}');\n")).collect();
        let result = parse("gen.js", &content, &ParseOptions::default()).unwrap();

        let mut expected: Vec<String> = Vec::new();
        for name in &names {
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }
        prop_assert_eq!(result.require, expected);
    }

    #[test]
    fn prop_disabled_categories_stay_empty(declarations in prop::collection::vec(declaration(), 0..40)) {
        let options = ParseOptions::default().require_resolve(false).require_async(false);
        let result = parse("gen.js", &render(&declarations), &options).unwrap();

        prop_assert!(result.resolve.is_empty());
        prop_assert!(result.r#async.is_empty());
    }
}
