//! Shared models

mod error;
mod span;

pub use error::{DepgraphError, ErrorKind, Result};
pub use span::{Location, Span};
