//! Time formatter: one day slot to display text.

use mf_core::config::DASH;
use mf_core::{DaySlot, FormatError, Result};
use std::fmt;

/// Length of a normalized two-digit hour, e.g. `"18.00"`.
const CANONICAL_LEN: usize = 5;

/// Opening span plus an optional break span, both display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeText {
    pub span: String,
    pub pause: Option<String>,
}

impl fmt::Display for TimeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.span)?;
        if let Some(pause) = &self.pause {
            write!(f, " ({pause})")?;
        }
        Ok(())
    }
}

/// Normalize and format a raw slot string. Closed or incomplete slots are an error.
pub fn format_time(raw: &str) -> Result<TimeText> {
    let slot = DaySlot::parse(raw)?;
    format_slot(&slot)
        .ok_or_else(|| FormatError::malformed_slot(raw, "missing opening or closing hour"))
}

/// `None` for slots that render nothing (closed, or no open/close pair).
pub fn format_slot(slot: &DaySlot) -> Option<TimeText> {
    if !slot.is_valid() {
        return None;
    }
    let fields = slot.fields();
    let span = interval(fields[0], fields[1]);
    let pause = match (fields.get(2), fields.get(3)) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
            Some(interval(start, end))
        }
        _ => None,
    };
    Some(TimeText { span, pause })
}

fn interval(from: &str, to: &str) -> String {
    format!("{}{DASH}{}", clock(from), clock(to))
}

fn clock(field: &str) -> String {
    let padded = if field.len() != CANONICAL_LEN {
        format!("0{field}")
    } else {
        field.to_string()
    };
    padded.replace('.', ":")
}
