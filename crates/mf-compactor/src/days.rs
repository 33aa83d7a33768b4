//! Day labeler: compacted index sequences to day names.

use crate::sequence::{parse_tokens, SeqToken};
use mf_core::config::DAYS_INTERVAL_DELIMITER;
use mf_core::{FormatError, Result};

const TOKEN_SEPARATOR: &str = ", ";

/// `"0...4,6"` with Mon..Sun -> `"Mon-Fri, Sun"`.
pub fn label_days(sequence: &str, day_names: &[String]) -> Result<String> {
    label_tokens(&parse_tokens(sequence)?, day_names)
}

pub fn label_tokens(tokens: &[SeqToken], day_names: &[String]) -> Result<String> {
    let labels = tokens
        .iter()
        .map(|token| match *token {
            SeqToken::Single(i) => day_name(day_names, i).map(str::to_string),
            SeqToken::Range(first, last) => Ok(format!(
                "{}{DAYS_INTERVAL_DELIMITER}{}",
                day_name(day_names, first)?,
                day_name(day_names, last)?
            )),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(labels.join(TOKEN_SEPARATOR))
}

fn day_name(day_names: &[String], index: usize) -> Result<&str> {
    day_names
        .get(index)
        .map(String::as_str)
        .ok_or(FormatError::UnknownDayIndex(index))
}
