//! Token scanner for argv streams.
//!
//! Recognizes `-s value`, `-s=value`, `--long value`, and `--long=value`.
//! Options are keyed by their prefix text without dashes; an option followed
//! by another option (or by nothing) gets an empty value. Repeated options
//! keep the last value. Tokens that are not options are skipped.

use std::collections::HashMap;

pub(crate) fn scan(tokens: &[String]) -> HashMap<String, String> {
    let mut found = HashMap::new();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        let Some(prefix) = strip_dashes(token) else {
            continue;
        };

        if let Some((key, value)) = prefix.split_once('=') {
            found.insert(key.to_string(), value.to_string());
            continue;
        }

        let value = match iter.peek() {
            Some(next) if strip_dashes(next).is_none() => iter.next().cloned().unwrap_or_default(),
            _ => String::new(),
        };
        found.insert(prefix.to_string(), value);
    }

    found
}

/// The option text without leading dashes, or `None` for a non-option token.
/// A lone `-` or negative number is not an option.
fn strip_dashes(token: &str) -> Option<&str> {
    let stripped = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    if stripped.is_empty() || stripped.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(stripped)
}
