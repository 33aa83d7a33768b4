//! Construction-time formatter configuration.

use crate::error::{FormatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TYPE_DELIMITER: &str = ",";
pub const TYPE_POSTFIX: &str = ":";
pub const MODES_DELIMITER: &str = ";";
pub const MODE_DELIMITER: &str = ",";
pub const DASH: &str = "\u{2014}";
pub const DAYS_INTERVAL_DELIMITER: &str = "-";
pub const RANGE_MARKER: &str = "...";

/// Caller-supplied names, phrases and extra aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterConfig {
    /// Positional day labels; the length is the day count of every week.
    pub day_names: Vec<String>,
    /// Category key -> (singular, plural) display label.
    pub type_names: HashMap<String, (String, String)>,
    pub noctidial_name: String,
    #[serde(alias = "typeDelimeterLast")]
    pub type_delimiter_last: String,
    /// Exact rendered phrase -> replacement, on top of the seeded ones.
    pub aliases: HashMap<String, String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            day_names: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            type_names: HashMap::new(),
            noctidial_name: "round-the-clock".into(),
            type_delimiter_last: "and".into(),
            aliases: HashMap::new(),
        }
    }
}

impl FormatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_day_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.day_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_type_name(
        mut self,
        key: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        self.type_names.insert(key.into(), (singular.into(), plural.into()));
        self
    }

    pub fn with_noctidial_name(mut self, name: impl Into<String>) -> Self {
        self.noctidial_name = name.into();
        self
    }

    pub fn with_type_delimiter_last(mut self, word: impl Into<String>) -> Self {
        self.type_delimiter_last = word.into();
        self
    }

    pub fn with_alias(mut self, phrase: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.aliases.insert(phrase.into(), replacement.into());
        self
    }

    pub fn day_count(&self) -> usize {
        self.day_names.len()
    }

    /// Display label for a category key, falling back to the key itself.
    pub fn type_label(&self, key: &str, plural: bool) -> String {
        match self.type_names.get(key) {
            Some((singular, _)) if !plural => singular.clone(),
            Some((_, many)) => many.clone(),
            None => key.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.day_names.is_empty() {
            return Err(FormatError::InvalidConfig("dayNames must not be empty".into()));
        }
        if self.noctidial_name.trim().is_empty() {
            return Err(FormatError::InvalidConfig("noctidialName must not be blank".into()));
        }
        Ok(())
    }
}

/// Display forms of the fixed glyphs, padded once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub type_delimiter: String,
    pub type_delimiter_last: String,
    pub type_postfix: String,
    pub modes_delimiter: String,
    pub mode_delimiter: String,
}

impl Delimiters {
    pub fn new(config: &FormatterConfig) -> Self {
        let pad = |s: &str| format!("{} ", s.trim());
        Self {
            type_delimiter: pad(TYPE_DELIMITER),
            type_delimiter_last: format!(" {} ", config.type_delimiter_last.trim()),
            type_postfix: pad(TYPE_POSTFIX),
            modes_delimiter: pad(MODES_DELIMITER),
            mode_delimiter: pad(MODE_DELIMITER),
        }
    }
}
