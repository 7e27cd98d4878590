// src/specs/gadget.rs
//! Scraping *spec* for the gadget page.
//!
//! Purpose:
//! - Locate the `gadgetInfo = {...}` pseudo-literal the gadget page embeds
//!   in inline script text and repair it into strict JSON.
//! - Keys in the fragment are bare identifiers (`{name:"x", id:5}`); values
//!   are already JSON-shaped.
//!
//! Responsibilities:
//! - Marker search and fragment capture: first `gadgetInfo = ` immediately
//!   followed by a brace block with no nested braces.
//! - Key quoting via a key-position scanner. Only identifiers in key
//!   position (after `{` or `,` at object level, outside string literals)
//!   are touched, so a key's text recurring inside a value survives intact.
//! - Strict parse: a fragment that still isn't JSON is a hard error, never
//!   a silent empty result.
//!
//! Non-Responsibilities (by design):
//! - **No networking.**
//! - **No caching.** Extraction runs once per pipeline run and is
//!   idempotent.
//!
//! The page format carries no stability guarantee, so "not found" stays
//! distinguishable from a parse failure — callers use the difference to
//! tell site drift from a malformed blob.

use serde_json::{Map, Value};

/// Parsed gadget metadata: string keys, JSON values.
pub type GadgetInfo = Map<String, Value>;

const MARKER: &str = "gadgetInfo = ";

/// Extract and repair the gadget info blob from full HTML page text.
///
/// `Ok(None)` when the marker/brace pattern is absent; `Err` when the
/// repaired fragment fails to parse as JSON.
pub fn extract(html: &str) -> Result<Option<GadgetInfo>, serde_json::Error> {
    let Some(fragment) = find_fragment(html) else {
        return Ok(None);
    };
    let repaired = quote_bare_keys(fragment);
    let info: GadgetInfo = serde_json::from_str(&repaired)?;
    Ok(Some(info))
}

/// First `gadgetInfo = {...}` occurrence, braces included.
/// A marker not directly followed by `{`, or one whose block never closes,
/// is skipped and the search continues.
fn find_fragment(html: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(pos) = html[from..].find(MARKER) {
        let start = from + pos + MARKER.len();
        let rest = &html[start..];
        if let Some(inner) = rest.strip_prefix('{') {
            if let Some(end) = inner.find('}') {
                // '{' + inner up to and including '}'
                return Some(&html[start..start + end + 2]);
            }
        }
        from = start;
    }
    None
}

#[derive(Clone, Copy, PartialEq)]
enum Ctx {
    Obj,
    Arr,
}

/// Wrap bare identifier keys in double quotes, leaving values alone.
///
/// Tracks string literals (with backslash escapes) and object/array
/// nesting; an identifier run is only quoted where a key is legal. Bare
/// words in value position (`true`, `null`, a stray token) pass through
/// untouched and are left for the JSON parser to accept or reject.
fn quote_bare_keys(fragment: &str) -> String {
    let bytes = fragment.as_bytes();
    let mut out = String::with_capacity(fragment.len() + 16);
    let mut stack: Vec<Ctx> = Vec::new();
    let mut expect_key = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                stack.push(Ctx::Obj);
                expect_key = true;
                out.push('{');
                i += 1;
            }
            b'[' => {
                stack.push(Ctx::Arr);
                expect_key = false;
                out.push('[');
                i += 1;
            }
            b'}' | b']' => {
                stack.pop();
                expect_key = false;
                out.push(bytes[i] as char);
                i += 1;
            }
            b',' => {
                expect_key = stack.last() == Some(&Ctx::Obj);
                out.push(',');
                i += 1;
            }
            b':' => {
                expect_key = false;
                out.push(':');
                i += 1;
            }
            b'"' => {
                let end = skip_string(bytes, i);
                out.push_str(&fragment[i..end]);
                expect_key = false;
                i = end;
            }
            c if expect_key && (c.is_ascii_alphanumeric() || c == b'_') => {
                let mut j = i + 1;
                while j < bytes.len()
                    && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_')
                {
                    j += 1;
                }
                out.push('"');
                out.push_str(&fragment[i..j]);
                out.push('"');
                expect_key = false;
                i = j;
            }
            c => {
                // whitespace keeps the key expectation alive
                out.push(c as char);
                i += 1;
            }
        }
    }
    out
}

// Index just past the closing quote (or end of input when unterminated —
// the parser reports that one).
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_fragment() {
        let html = "a gadgetInfo = {x:1} b gadgetInfo = {y:2} c";
        assert_eq!(find_fragment(html), Some("{x:1}"));
    }

    #[test]
    fn skips_marker_without_brace() {
        let html = "gadgetInfo = 42; gadgetInfo = {x:1}";
        assert_eq!(find_fragment(html), Some("{x:1}"));
    }

    #[test]
    fn quotes_keys_not_values() {
        assert_eq!(
            quote_bare_keys(r#"{name:"name", id:5}"#),
            r#"{"name":"name", "id":5}"#
        );
    }

    #[test]
    fn array_elements_are_not_keys() {
        assert_eq!(quote_bare_keys("{ids:[1,2,3]}"), r#"{"ids":[1,2,3]}"#);
    }

    #[test]
    fn bare_value_words_pass_through() {
        assert_eq!(
            quote_bare_keys("{ok:true, gone:null}"),
            r#"{"ok":true, "gone":null}"#
        );
    }
}
