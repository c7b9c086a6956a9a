//! Error types for the depgraph-parser crate
//!
//! Infrastructure failures (IO, source discovery, configuration) are reported
//! through `DepgraphError`. Failures of a single parse are `ParseError`s and
//! live with the dependency feature.

use std::fmt;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration errors
    Config,
    /// IO errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
        }
    }
}

/// Unified error type
#[derive(Debug)]
pub struct DepgraphError {
    pub kind: ErrorKind,
    pub message: String,
    pub file_path: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DepgraphError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file_path: None,
            source: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }
}

impl fmt::Display for DepgraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref file) = self.file_path {
            write!(f, " in {}", file)?;
        }
        Ok(())
    }
}

impl std::error::Error for DepgraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DepgraphError>;

impl From<std::io::Error> for DepgraphError {
    fn from(err: std::io::Error) -> Self {
        DepgraphError::io(format!("IO error: {}", err)).with_source(err)
    }
}

impl From<walkdir::Error> for DepgraphError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.display().to_string());
        let mut error = DepgraphError::io(format!("Directory walk error: {}", err));
        if let Some(path) = path {
            error = error.with_file(path);
        }
        error.with_source(err)
    }
}

impl From<crate::config::ConfigError> for DepgraphError {
    fn from(err: crate::config::ConfigError) -> Self {
        DepgraphError::config(err.to_string()).with_source(err)
    }
}
