//! Dependency domain models

mod buckets;
mod category;
mod violation;

pub use buckets::{DependencyBuckets, UniqueDependencies};
pub use category::{DependencyCategory, LOAD_NAME};
pub use violation::{UsageViolation, ViolationKind};
