//! # deck-loader
//!
//! Fetches `data.json`, validates its top-level shape and hands the chart
//! cards to the page state. Failures become a single page-level error; there
//! is no retry.

pub mod client;

pub use client::*;

/// Default location of the chart payload
pub const DEFAULT_DATA_URL: &str = "/data.json";

// ============================================================================
// LOADER CONFIGURATION
// ============================================================================

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub url: String,
    /// Bypass the HTTP cache so every load sees fresh data
    pub no_store: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            no_store: true,
        }
    }
}
