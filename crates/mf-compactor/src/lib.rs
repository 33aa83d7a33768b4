//! Mode formatter: compacts weekly opening hours into short human text.
//!
//! Stages, leaves first:
//! 1. Sequence: sorted day indices to `a...b` runs
//! 2. Days: runs to day labels (`Mon-Fri, Sun`)
//! 3. Time: one day slot to display text (`09:00—18:00 (13:00—14:00)`)
//! 4. Alias: full-coverage phrases to a fixed name
//! 5. Mode / category renderers: digest grouping and markup

pub mod alias;
pub mod category;
pub mod days;
pub mod markup;
pub mod mode;
pub mod pipeline;
pub mod sequence;
pub mod time;

pub use alias::AliasTable;
pub use markup::{HtmlMarkup, Markup, OutputFormat, PlainMarkup};
pub use pipeline::ModeFormatter;
