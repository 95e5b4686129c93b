//! Parsing of user-facing evidence strings.
//!
//! The CLI accepts evidence as comma-separated `Name=Value` pairs, e.g.
//! `"WetGrass=true,Cloudy=false"`. Parsing is purely syntactic; the names are
//! validated against a network later, when the caller builds an
//! [`Assignment`](crate::engine::evidence::Assignment).

use crate::engine::errors::InferenceError;

/// Parses `"Name=Value,Name=Value"` evidence text into name/value pairs.
///
/// Accepted boolean spellings, case-insensitive: `true`/`t`/`1` and
/// `false`/`f`/`0`. Empty input (or stray commas) yields no pairs; a pair
/// without `=` or with an unrecognized value fails with
/// [`InferenceError::Parse`].
pub fn parse_evidence(input: &str) -> Result<Vec<(String, bool)>, InferenceError> {
    let mut pairs = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some((name, value)) = part.split_once('=') else {
            return Err(InferenceError::Parse(format!(
                "expected 'Name=Value', got '{part}'"
            )));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(InferenceError::Parse(format!(
                "missing variable name in '{part}'"
            )));
        }
        let value = parse_bool(value.trim()).ok_or_else(|| {
            InferenceError::Parse(format!(
                "'{}' is not a boolean (use true/false, t/f, or 1/0)",
                value.trim()
            ))
        })?;
        pairs.push((name.to_string(), value));
    }
    Ok(pairs)
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}
