#![forbid(unsafe_code)]

use std::time::Instant;

/// Trailing-edge debounce for the search input.
pub const SEARCH_DEBOUNCE_MS: u64 = 250;

/// State of the search box. Keystrokes land in `query` immediately; the
/// store only sees the value once the input has been quiescent for
/// `debounce_ms`.
pub struct SearchBox {
    pub query: String,
    pub changed_at: Option<Instant>,
    pub debounce_ms: u64,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self {
            query: String::new(),
            changed_at: None,
            debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}
