//! Dependency extraction infrastructure
//!
//! - `matcher`: call shape recognition and argument policy
//! - `walker`: pre-order traversal driving the matcher
//! - `comment_scanner`: annotation tags inside comments
//! - `literal`: literal argument values

pub mod comment_scanner;
pub mod literal;
pub mod matcher;
pub mod walker;

pub use comment_scanner::{scan_comments, scan_text};
pub use literal::literal_value;
pub use matcher::{DependencyMatcher, MatchOutcome, MatchPolicy};
pub use walker::walk;
