//! Dependency extraction use cases

pub mod batch;
pub mod parse_dependencies;
pub mod result;
pub mod sources;

pub use batch::{parse_batch, SourceFile};
pub use parse_dependencies::{dependencies_of, parse, parse_with_callback, DependencyParser};
pub use result::{ErrorCode, ErrorData, ErrorDetail, ParseError, ParseResult};
pub use sources::{discover_sources, load_sources, read_source};
