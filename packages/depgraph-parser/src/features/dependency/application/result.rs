//! Parse outcomes
//!
//! A parse either yields a `ParseResult` or a `ParseError`; there is never a
//! partial result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::dependency::domain::{UniqueDependencies, UsageViolation};
use crate::features::parsing::domain::SyntaxError;
use crate::shared::utils::code_frame::{normalize_message, print_code, CodeFrameOptions};

/// Dependencies declared by one file, each list free of duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub path: String,
    pub require: Vec<String>,
    pub resolve: Vec<String>,
    pub r#async: Vec<String>,
}

impl ParseResult {
    pub fn new(path: impl Into<String>, dependencies: UniqueDependencies) -> Self {
        Self {
            path: path.into(),
            require: dependencies.require,
            resolve: dependencies.resolve,
            r#async: dependencies.r#async,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.require.is_empty() && self.resolve.is_empty() && self.r#async.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The content is not valid JavaScript
    #[serde(rename = "ERROR_PARSE_JS")]
    ErrorParseJs,
    /// A dependency-declaring call is misused
    #[serde(rename = "WRONG_USAGE_REQUIRE")]
    WrongUsageRequire,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ErrorParseJs => "ERROR_PARSE_JS",
            ErrorCode::WrongUsageRequire => "WRONG_USAGE_REQUIRE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The underlying failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ErrorDetail {
    Syntax(SyntaxError),
    Usage(UsageViolation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    pub path: String,
    pub error: ErrorDetail,
}

/// Failed parse
///
/// `message` is a summary line, then a blank line and a code frame when the
/// failing location is known.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub data: ErrorData,
}

impl ParseError {
    /// The tokenizer rejected the content
    pub fn syntax(path: &str, content: &str, error: SyntaxError) -> Self {
        let normalized = normalize_message(&error.message);
        let mut message = format!("Error parsing \"{}\": {}", path, normalized.message);

        let line = normalized.line.or(error.location.map(|l| l.line));
        if let Some(line) = line {
            let mut frame = CodeFrameOptions::line(line);
            frame.column = error
                .location
                .filter(|location| location.line == line)
                .map(|location| location.column);
            append_frame(&mut message, &print_code(content, &frame));
        }

        Self {
            code: ErrorCode::ErrorParseJs,
            message,
            data: ErrorData {
                path: path.to_string(),
                error: ErrorDetail::Syntax(error),
            },
        }
    }

    /// A recognized call violated the arity or literal policy
    pub fn usage(path: &str, content: &str, violation: UsageViolation) -> Self {
        let mut message = format!("Error parsing dependencies: {}", violation.message());
        append_frame(
            &mut message,
            &print_code(content, &CodeFrameOptions::at(violation.location)),
        );

        Self {
            code: ErrorCode::WrongUsageRequire,
            message,
            data: ErrorData {
                path: path.to_string(),
                error: ErrorDetail::Usage(violation),
            },
        }
    }

    pub fn path(&self) -> &str {
        &self.data.path
    }
}

fn append_frame(message: &mut String, frame: &str) {
    if !frame.is_empty() {
        message.push_str("\n\n");
        message.push_str(frame);
    }
}
