//! Core data model for the opening-hours mode formatter.
//!
//! Holds the schedule types, the content digest used for grouping,
//! construction-time configuration and the shared error type.

pub mod config;
pub mod digest;
pub mod error;
pub mod types;

pub use config::{Delimiters, FormatterConfig};
pub use digest::string_digest;
pub use error::{FormatError, Result};
pub use types::{Category, DaySlot, ModeEntry, ScheduleInput, Variant, WeeklyMode};
