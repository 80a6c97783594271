//! Index-list literal parsing
//!
//! Manual pairing takes index lists written as literals, e.g. `(2,4,6)`,
//! `[2,4,6]`, or bare `2,4,6`. A single trailing comma is accepted for
//! one-element tuples, `(2,)`. Anything non-integer is rejected.

use subalign_core::{AlignError, Result};

/// Parse an index-list literal into indices
pub fn parse_index_list(input: &str) -> Result<Vec<usize>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AlignError::MalformedIndexList("empty literal".to_string()));
    }
    let inner = strip_delimiters(trimmed)
        .ok_or_else(|| AlignError::MalformedIndexList(format!("unbalanced brackets in {trimmed:?}")))?;

    // At most one trailing comma: `(2,)` is a literal, `(2,,)` is not
    let inner = inner.trim();
    let inner = inner.strip_suffix(',').unwrap_or(inner);
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<usize>().map_err(|_| {
                AlignError::MalformedIndexList(format!("{token:?} is not a non-negative integer"))
            })
        })
        .collect()
}

/// Strip one matched pair of surrounding `()` or `[]`, if present
fn strip_delimiters(s: &str) -> Option<&str> {
    match (s.chars().next(), s.chars().last()) {
        (Some('('), Some(')')) | (Some('['), Some(']')) => Some(&s[1..s.len() - 1]),
        (Some('('), _) | (Some('['), _) | (_, Some(')')) | (_, Some(']')) => None,
        _ => Some(s),
    }
}
