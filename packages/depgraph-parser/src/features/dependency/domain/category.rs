//! Dependency categories

use serde::{Deserialize, Serialize};

/// Name of the dependency-loading function
pub const LOAD_NAME: &str = "require";

/// The three ways a file can declare a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyCategory {
    /// `require('x')`
    Normal,
    /// `require.resolve('x')`
    Resolve,
    /// `require.async('x', callback)`
    Async,
}

impl DependencyCategory {
    pub const ALL: [DependencyCategory; 3] = [
        DependencyCategory::Normal,
        DependencyCategory::Resolve,
        DependencyCategory::Async,
    ];

    /// Key of the category's list in a parse result
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyCategory::Normal => "require",
            DependencyCategory::Resolve => "resolve",
            DependencyCategory::Async => "async",
        }
    }

    /// Property accessed on `require` in the call form, if any
    pub fn property(&self) -> Option<&'static str> {
        match self {
            DependencyCategory::Normal => None,
            DependencyCategory::Resolve => Some("resolve"),
            DependencyCategory::Async => Some("async"),
        }
    }

    /// Annotation tag recognized in comments
    pub fn tag(&self) -> &'static str {
        match self {
            DependencyCategory::Normal => "@require",
            DependencyCategory::Resolve => "@require.resolve",
            DependencyCategory::Async => "@require.async",
        }
    }

    /// Whether more than one argument is an arity violation
    ///
    /// `require.async` takes a callback as its second argument.
    pub fn checks_excess_arity(&self) -> bool {
        !matches!(self, DependencyCategory::Async)
    }

    /// Look up the category whose call form uses `property`
    pub fn from_property(property: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.property() == Some(property))
    }
}

impl std::fmt::Display for DependencyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
