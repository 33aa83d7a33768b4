//! Alias resolver: exact rendered phrases to fixed replacements.

use mf_core::config::{DASH, DAYS_INTERVAL_DELIMITER};
use mf_core::FormatterConfig;
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Seeds the full-week and 24-hour phrases, then adds the configured extras.
    pub fn seeded(config: &FormatterConfig) -> Self {
        let every_hour = format!("00:00{DASH}24:00");
        let first = config.day_names.first().map(String::as_str).unwrap_or_default();
        let last = config.day_names.last().map(String::as_str).unwrap_or_default();
        let every_day = format!("{first}{DAYS_INTERVAL_DELIMITER}{last}");
        let noctidial = &config.noctidial_name;

        let mut entries = HashMap::new();
        entries.insert(format!("{every_day} {every_hour}"), noctidial.clone());
        entries.insert(format!("{every_day} {noctidial}"), noctidial.clone());
        entries.insert(every_hour, noctidial.clone());
        entries.extend(config.aliases.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }

    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.entries.get(phrase).map(String::as_str)
    }

    /// The replacement, or the phrase itself when none matches.
    pub fn resolve<'a>(&'a self, phrase: &'a str) -> &'a str {
        match self.get(phrase) {
            Some(alias) => alias,
            None => {
                trace!(phrase, "no alias");
                phrase
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
