//! Misuse of a dependency-declaring call

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::DependencyCategory;
use crate::shared::models::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// `require()`
    MissingArgument,
    /// `require('a', 'b')`
    TooManyArguments,
    /// `require(name)`
    NonLiteralArgument,
}

impl ViolationKind {
    pub fn message(&self) -> &'static str {
        match self {
            ViolationKind::MissingArgument => "Method `require` accepts one and only one parameter.",
            ViolationKind::TooManyArguments => {
                "Method `require` should not contain more than one parameter."
            }
            ViolationKind::NonLiteralArgument => "Method `require` only accepts a string literal.",
        }
    }
}

/// A recognized call that breaks the arity or literal-argument rules
///
/// Arity violations point at the callee, literal violations at the argument.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", .kind.message())]
pub struct UsageViolation {
    pub kind: ViolationKind,
    pub category: DependencyCategory,
    pub location: Location,
}

impl UsageViolation {
    pub fn new(kind: ViolationKind, category: DependencyCategory, location: Location) -> Self {
        Self {
            kind,
            category,
            location,
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
