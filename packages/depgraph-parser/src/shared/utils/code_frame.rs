//! Location-aware error messages
//!
//! Normalizes raw tokenizer messages into `(message, line)` pairs and renders
//! a source snippet around a line for human readable errors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::models::Location;

lazy_static! {
    static ref LINE_PREFIX: Regex =
        Regex::new(r"^Line (\d+):\s*").expect("line prefix pattern is valid");
}

/// A message with its `Line N:` prefix split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    pub message: String,
    pub line: Option<u32>,
}

/// Split a leading `Line N: ` prefix off a raw error message
pub fn normalize_message(raw: &str) -> NormalizedMessage {
    if let Some(captures) = LINE_PREFIX.captures(raw) {
        let line = captures.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let rest_start = captures.get(0).map(|m| m.end()).unwrap_or(0);
        return NormalizedMessage {
            message: raw[rest_start..].to_string(),
            line,
        };
    }

    NormalizedMessage {
        message: raw.to_string(),
        line: None,
    }
}

/// Where and how much source to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFrameOptions {
    /// 1-based target line
    pub line: u32,
    /// 0-based byte column on the target line; draws a caret when set
    pub column: Option<u32>,
    /// Lines shown before and after the target line
    pub context: u32,
}

impl CodeFrameOptions {
    pub fn line(line: u32) -> Self {
        Self {
            line,
            column: None,
            context: 1,
        }
    }

    pub fn at(location: Location) -> Self {
        Self {
            line: location.line,
            column: Some(location.column),
            context: 1,
        }
    }

    pub fn with_context(mut self, context: u32) -> Self {
        self.context = context;
        self
    }
}

/// Render the lines around `options.line`
///
/// ```text
///   1 | var a = 1;
/// > 2 | require(a);
///     |         ^
///   3 | module.exports = a;
/// ```
///
/// Returns an empty string when the line is outside the content.
pub fn print_code(content: &str, options: &CodeFrameOptions) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let target = options.line as usize;
    if target == 0 || target > lines.len() {
        return String::new();
    }

    let context = options.context as usize;
    let first = target.saturating_sub(context).max(1);
    let last = (target + context).min(lines.len());
    let width = last.to_string().len();

    let mut rendered = Vec::with_capacity(last - first + 2);
    for number in first..=last {
        let text = lines[number - 1];
        let marker = if number == target { '>' } else { ' ' };
        let row = format!("{} {:>width$} | {}", marker, number, text, width = width);
        rendered.push(row.trim_end().to_string());

        if number == target {
            if let Some(column) = options.column {
                rendered.push(format!(
                    "  {:>width$} | {}^",
                    "",
                    caret_padding(text, column as usize),
                    width = width
                ));
            }
        }
    }

    rendered.join("\n")
}

/// Whitespace up to `column`, keeping tabs so the caret lines up
fn caret_padding(line: &str, column: usize) -> String {
    let mut end = column.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line[..end]
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}
