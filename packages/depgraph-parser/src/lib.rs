/*
 * Depgraph Parser - JavaScript dependency extraction
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Location, Span, errors) and utils (code frames)
 * - config/      : ParseOptions, presets, YAML configuration
 * - features/    : Vertical slices (parsing → dependency)
 * - bin/         : depgraph-scan CLI
 *
 * Performance:
 * - Trees are converted, walked and dropped with explicit stacks, so nesting
 *   depth is bounded by memory rather than the call stack
 * - Rayon work-stealing for batches of files
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::upper_case_acronyms)] // BOM, JSX naming

pub mod config;
pub mod features;
pub mod shared;

// Re-export main types
pub use config::{ConfigError, ParseOptions, Preset};
pub use features::dependency::application::{
    dependencies_of, discover_sources, load_sources, parse, parse_batch, parse_with_callback,
    DependencyParser, ErrorCode, ErrorData, ErrorDetail, ParseError, ParseResult, SourceFile,
};
pub use features::dependency::domain::{DependencyCategory, UsageViolation, ViolationKind};
pub use features::parsing::{wrap_fragment, Parser, SyntaxError, TreeSitterParser};
pub use shared::models::{DepgraphError, ErrorKind, Location, Result, Span};
