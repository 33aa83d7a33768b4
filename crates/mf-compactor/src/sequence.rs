//! Sequence compactor: day indices to comma-joined values and `first...last` runs.

use mf_core::config::RANGE_MARKER;
use mf_core::{FormatError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_INDEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.\.\.(\d+))?$").unwrap());

/// Shortest run of consecutive indices written as a range.
pub const MIN_RANGE_RUN: usize = 3;

/// Widest range [`expand_sequence`] will materialize.
pub const MAX_EXPANDED_RANGE: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqToken {
    Single(usize),
    Range(usize, usize),
}

impl fmt::Display for SeqToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(i) => write!(f, "{i}"),
            Self::Range(first, last) => write!(f, "{first}{RANGE_MARKER}{last}"),
        }
    }
}

/// Sort, optionally dedup, and collapse runs of `MIN_RANGE_RUN` or more.
///
/// Without `unique`, a repeated index breaks the run it sits in.
pub fn compact_indices(indices: &[usize], unique: bool) -> Vec<SeqToken> {
    let mut keys = indices.to_vec();
    keys.sort_unstable();
    if unique {
        keys.dedup();
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    while start < keys.len() {
        let mut end = start;
        while end + 1 < keys.len() && keys[end].checked_add(1) == Some(keys[end + 1]) {
            end += 1;
        }
        if end - start + 1 >= MIN_RANGE_RUN {
            tokens.push(SeqToken::Range(keys[start], keys[end]));
        } else {
            tokens.extend(keys[start..=end].iter().map(|&k| SeqToken::Single(k)));
        }
        start = end + 1;
    }
    tokens
}

/// Parse a plain comma-delimited index list.
pub fn parse_indices(s: &str) -> Result<Vec<usize>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|part| {
            let part = part.trim();
            if !RE_INDEX.is_match(part) {
                return Err(FormatError::MalformedSequence(part.to_string()));
            }
            part.parse::<usize>()
                .map_err(|_| FormatError::MalformedSequence(part.to_string()))
        })
        .collect()
}

/// String form of [`compact_indices`]: `"1,3,4,5,5,5,6,11,32"` -> `"1,3...6,11,32"`.
pub fn compact_sequence(s: &str, unique: bool) -> Result<String> {
    let indices = parse_indices(s)?;
    Ok(join_tokens(&compact_indices(&indices, unique)))
}

pub fn join_tokens(tokens: &[SeqToken]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Parse compacted output back into tokens.
pub fn parse_token(raw: &str) -> Result<SeqToken> {
    let token = raw.trim();
    let malformed = || FormatError::MalformedSequence(token.to_string());
    let caps = RE_TOKEN.captures(token).ok_or_else(malformed)?;
    let index = |s: &str| s.parse::<usize>().map_err(|_| malformed());
    let first = index(&caps[1])?;
    match caps.get(2) {
        Some(last) => {
            let last = index(last.as_str())?;
            if first > last {
                return Err(malformed());
            }
            Ok(SeqToken::Range(first, last))
        }
        None => Ok(SeqToken::Single(first)),
    }
}

/// Split a compacted string into tokens; blank input is empty.
pub fn parse_tokens(s: &str) -> Result<Vec<SeqToken>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(parse_token).collect()
}

/// Inverse of [`compact_sequence`]: every index the string covers, in order.
pub fn expand_sequence(s: &str) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    for token in parse_tokens(s)? {
        match token {
            SeqToken::Single(i) => out.push(i),
            SeqToken::Range(first, last) => {
                if last - first >= MAX_EXPANDED_RANGE {
                    return Err(FormatError::MalformedSequence(token.to_string()));
                }
                out.extend(first..=last);
            }
        }
    }
    Ok(out)
}
