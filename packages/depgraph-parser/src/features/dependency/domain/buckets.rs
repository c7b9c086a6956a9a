//! Per-category dependency collection

use rustc_hash::FxHashSet;

use super::category::DependencyCategory;

/// Dependencies collected during one parse, duplicates included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyBuckets {
    normal: Vec<String>,
    resolve: Vec<String>,
    r#async: Vec<String>,
}

/// Deduplicated buckets, first-seen order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueDependencies {
    pub require: Vec<String>,
    pub resolve: Vec<String>,
    pub r#async: Vec<String>,
}

impl DependencyBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: DependencyCategory, value: impl Into<String>) {
        self.bucket_mut(category).push(value.into());
    }

    pub fn get(&self, category: DependencyCategory) -> &[String] {
        match category {
            DependencyCategory::Normal => &self.normal,
            DependencyCategory::Resolve => &self.resolve,
            DependencyCategory::Async => &self.r#async,
        }
    }

    /// Total entries across all buckets, duplicates counted
    pub fn len(&self) -> usize {
        self.normal.len() + self.resolve.len() + self.r#async.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_unique(self) -> UniqueDependencies {
        UniqueDependencies {
            require: unique(self.normal),
            resolve: unique(self.resolve),
            r#async: unique(self.r#async),
        }
    }

    fn bucket_mut(&mut self, category: DependencyCategory) -> &mut Vec<String> {
        match category {
            DependencyCategory::Normal => &mut self.normal,
            DependencyCategory::Resolve => &mut self.resolve,
            DependencyCategory::Async => &mut self.r#async,
        }
    }
}

/// Drop repeated values, keeping the first occurrence of each
fn unique(values: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
