//! Per-language tree-sitter configuration

pub mod javascript;
