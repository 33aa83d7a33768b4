//! Application state shared across all handlers.

use mf_compactor::ModeFormatter;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state. The formatter is immutable, so no locking.
#[derive(Clone)]
pub struct AppState {
    pub formatter: Arc<ModeFormatter>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(formatter: ModeFormatter) -> Self {
        Self {
            formatter: Arc::new(formatter),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ModeFormatter::default())
    }
}
