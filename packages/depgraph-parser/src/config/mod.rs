//! Configuration
//!
//! Three ways to obtain `ParseOptions`:
//! - `ParseOptions::default()` or a `Preset`
//! - builder setters on top of either
//! - a versioned YAML file (`ParseOptions::from_yaml`)
//!
//! # Examples
//!
//! ```rust
//! use depgraph_parser::config::{ParseOptions, Preset};
//!
//! let options = ParseOptions::preset(Preset::Strict).require_async(false);
//! assert!(options.check_require_length);
//! ```

pub mod error;
pub mod io;
pub mod parse_options;
pub mod preset;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, ParseOptionsOverrides};
pub use parse_options::ParseOptions;
pub use preset::Preset;
