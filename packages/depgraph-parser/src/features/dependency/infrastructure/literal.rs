//! Literal argument values

use std::iter::Peekable;
use std::str::Chars;

use crate::features::parsing::domain::{SyntaxKind, SyntaxNode};

/// Value of a literal argument, `None` for anything that needs evaluation
///
/// Strings yield their unescaped contents; numbers, booleans, `null` and
/// regular expressions yield their source text. Parenthesized literals
/// (`('a')`) are literals too.
pub fn literal_value(node: &SyntaxNode) -> Option<String> {
    let node = node.unparenthesized();
    if !node.kind.is_literal() {
        return None;
    }
    match node.kind {
        SyntaxKind::StringLiteral => Some(unescape_string(node.text())),
        _ => Some(node.text().to_string()),
    }
}

/// Contents of a quoted JavaScript string literal with escapes resolved
pub fn unescape_string(raw: &str) -> String {
    let body = strip_quotes(raw);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(|d| d.is_ascii_digit()) => out.push('\0'),
            'x' => match read_hex(&mut chars, 2) {
                Some(code) => push_code_point(&mut out, code),
                None => out.push('x'),
            },
            'u' => match read_unicode_escape(&mut chars) {
                Some(code) => push_unicode(&mut out, &mut chars, code),
                None => out.push('u'),
            },
            // Line continuations
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }

    out
}

fn strip_quotes(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && (open == '\'' || open == '"') => {
            &raw[1..raw.len() - 1]
        }
        _ => raw,
    }
}

fn read_hex(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Option<u32> {
    let mut lookahead = chars.clone();
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = lookahead.next()?.to_digit(16)?;
        value = value * 16 + digit;
    }
    *chars = lookahead;
    Some(value)
}

/// `XXXX` or `{X...}` after `\u`
fn read_unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    if chars.peek() != Some(&'{') {
        return read_hex(chars, 4);
    }

    let mut lookahead = chars.clone();
    lookahead.next();
    let mut value = 0u32;
    let mut digits = 0;
    loop {
        let c = lookahead.next()?;
        if c == '}' {
            break;
        }
        value = value.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
        digits += 1;
    }
    if digits == 0 {
        return None;
    }
    *chars = lookahead;
    Some(value)
}

/// Push a `\u` escape, joining a high surrogate with a following `\uXXXX` low surrogate
fn push_unicode(out: &mut String, chars: &mut Peekable<Chars<'_>>, code: u32) {
    if (0xD800..0xDC00).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = read_hex(&mut lookahead, 4) {
                if (0xDC00..0xE000).contains(&low) {
                    *chars = lookahead;
                    push_code_point(out, 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00));
                    return;
                }
            }
        }
    }
    push_code_point(out, code);
}

fn push_code_point(out: &mut String, code: u32) {
    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}
