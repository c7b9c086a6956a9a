//! Source pre-wrapping
//!
//! Makes fragment-like file content acceptable to the grammar before it is
//! tokenized. Every rewrite keeps byte offsets, so lines and columns reported
//! on the wrapped text are valid for the original text.

use std::borrow::Cow;

const BOM: char = '\u{feff}';

/// Rewrite `content` into something the grammar accepts
///
/// - a leading byte order mark becomes spaces of the same byte length
/// - a leading `#!` interpreter line becomes a `//` line comment
///
/// Idempotent: wrapping already wrapped content returns it unchanged.
pub fn wrap_fragment(content: &str) -> Cow<'_, str> {
    let without_bom = content.strip_prefix(BOM);
    let body = without_bom.unwrap_or(content);
    let has_shebang = body.starts_with("#!");

    if without_bom.is_none() && !has_shebang {
        return Cow::Borrowed(content);
    }

    let mut wrapped = String::with_capacity(content.len());
    if without_bom.is_some() {
        wrapped.extend(std::iter::repeat(' ').take(BOM.len_utf8()));
    }
    if has_shebang {
        wrapped.push_str("//");
        wrapped.push_str(&body[2..]);
    } else {
        wrapped.push_str(body);
    }
    Cow::Owned(wrapped)
}
