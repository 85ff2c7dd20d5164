//! # deck-state
//!
//! Reactive page state for the chart deck.
//! Holds the loaded chart cards and the page-level load error as Leptos
//! signals; chart components read their records from here.

use deck_core::{ChartConfig, LoadError};
use leptos::prelude::*;

// ============================================================================
// PAGE STATUS
// ============================================================================

/// What the page should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// A load is in flight, or nothing has arrived yet
    Loading,
    /// Load failed; charts are suppressed
    Failed(String),
    /// Charts are available
    Ready,
}

impl PageStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Loading => "page-loading",
            Self::Failed(_) => "page-failed",
            Self::Ready => "page-ready",
        }
    }
}

/// Derive the page status from the current charts, error and load flag
pub fn page_status(charts: &[ChartConfig], error: Option<&str>, loading: bool) -> PageStatus {
    match error {
        Some(msg) => PageStatus::Failed(msg.to_string()),
        None if loading || charts.is_empty() => PageStatus::Loading,
        None => PageStatus::Ready,
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded chart cards
    pub charts: RwSignal<Vec<ChartConfig>>,
    /// Current page-level error message
    pub error: RwSignal<Option<String>>,
    /// A load is in flight
    pub loading: RwSignal<bool>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            charts: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Start a load: clears the previous error
    pub fn begin_load(&self) {
        self.error.set(None);
        self.loading.set(true);
    }

    /// Replace the chart cards after a successful load
    pub fn set_charts(&self, charts: Vec<ChartConfig>) {
        self.charts.set(charts);
        self.error.set(None);
        self.loading.set(false);
    }

    /// Record a failed load; no charts are shown until the next success
    pub fn set_error(&self, error: &LoadError) {
        self.charts.set(Vec::new());
        self.error.set(Some(error.to_string()));
        self.loading.set(false);
    }

    /// Current page status (tracked)
    pub fn status(&self) -> PageStatus {
        let error = self.error.get();
        let loading = self.loading.get();
        self.charts
            .with(|charts| page_status(charts, error.as_deref(), loading))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state);
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
