use crate::digest::string_digest;
use crate::error::{FormatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const MAX_SLOT_FIELDS: usize = 4;

/// Category key -> schedule entries, as callers send it.
///
/// `None` categories and `None` entries are tolerated and filtered out.
pub type ScheduleInput = BTreeMap<String, Option<Vec<Option<ModeEntry>>>>;

/// One raw schedule entry: a week of `"open;close[;breakStart;breakEnd]"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeEntry {
    pub mode: Vec<String>,
}

impl ModeEntry {
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { mode: slots.into_iter().map(Into::into).collect() }
    }
}

/// A single day's hours with every numeric field fixed to two decimals.
///
/// Empty means closed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DaySlot(String);

impl DaySlot {
    pub fn parse(raw: &str) -> Result<Self> {
        let fields: Vec<&str> = raw.split(';').collect();
        if fields.len() > MAX_SLOT_FIELDS {
            return Err(FormatError::malformed_slot(
                raw,
                format!("expected at most {MAX_SLOT_FIELDS} fields, got {}", fields.len()),
            ));
        }
        let normalized = fields
            .iter()
            .map(|field| normalize_field(raw, field))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(normalized.join(";")))
    }

    pub fn closed() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.split(';').collect()
    }

    /// Has at least a non-empty open and close field.
    pub fn is_valid(&self) -> bool {
        let fields = self.fields();
        fields.len() >= 2 && !fields[0].is_empty() && !fields[1].is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_field(raw: &str, field: &str) -> Result<String> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(String::new());
    }
    match field.parse::<f64>() {
        Ok(hours) if hours.is_finite() => Ok(format!("{hours:.2}")),
        _ => Err(FormatError::malformed_slot(raw, format!("{field:?} is not a decimal hour"))),
    }
}

/// One week of day slots, positional from the first configured day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeeklyMode {
    slots: Vec<DaySlot>,
}

impl WeeklyMode {
    /// Checks the shape against `day_count`, then normalizes every slot.
    pub fn parse<S: AsRef<str>>(raw: &[S], day_count: usize, category: &str) -> Result<Self> {
        if raw.len() != day_count {
            return Err(FormatError::ShapeMismatch {
                category: category.to_string(),
                expected: day_count,
                got: raw.len(),
            });
        }
        let slots = raw
            .iter()
            .map(|s| DaySlot::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[DaySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots concatenated; the digest input.
    pub fn content(&self) -> String {
        self.slots.iter().map(DaySlot::as_str).collect()
    }

    pub fn is_uniform(&self) -> bool {
        self.slots.windows(2).all(|w| w[0] == w[1])
    }
}

/// A weekly mode plus its derived grouping fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub mode: WeeklyMode,
    pub content_digest: i32,
    pub is_uniform: bool,
}

impl Variant {
    pub fn new(mode: WeeklyMode) -> Self {
        let content_digest = string_digest(&mode.content());
        let is_uniform = mode.is_uniform();
        Self { mode, content_digest, is_uniform }
    }

    /// Same run for rendering: equal digest and identical content.
    pub fn same_content(&self, other: &Variant) -> bool {
        self.content_digest == other.content_digest && self.mode == other.mode
    }
}

/// A named list of variants, e.g. every branch of one business type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub variants: Vec<Variant>,
    pub variants_uniform: bool,
    pub digest: i32,
}

impl Category {
    /// `None` when there are no variants to render.
    pub fn new(key: impl Into<String>, variants: Vec<Variant>) -> Option<Self> {
        let first = variants.first()?;
        let variants_uniform = variants.iter().all(|v| v.mode == first.mode);
        let digest = if variants_uniform {
            first.content_digest
        } else {
            let all: String = variants.iter().map(|v| v.mode.content()).collect();
            string_digest(&all)
        };
        Some(Self { key: key.into(), variants, variants_uniform, digest })
    }

    /// Builds from raw entries, skipping `None` ones.
    pub fn from_entries(
        key: &str,
        entries: &[Option<ModeEntry>],
        day_count: usize,
    ) -> Result<Option<Self>> {
        let variants = entries
            .iter()
            .flatten()
            .map(|entry| WeeklyMode::parse(entry.mode.as_slice(), day_count, key).map(Variant::new))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(key, variants))
    }

    pub fn is_plural(&self) -> bool {
        self.variants.len() > 1
    }

    /// The modes that define this category's digest.
    pub fn significant_modes(&self) -> impl Iterator<Item = &WeeklyMode> {
        let take = if self.variants_uniform { 1 } else { self.variants.len() };
        self.variants.iter().take(take).map(|v| &v.mode)
    }

    /// Merge check for categories whose digests already matched.
    pub fn same_content(&self, other: &Category) -> bool {
        self.digest == other.digest
            && self.variants_uniform == other.variants_uniform
            && self.significant_modes().eq(other.significant_modes())
    }
}
