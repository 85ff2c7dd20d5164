//! HTTP loader for the chart payload

use crate::LoaderConfig;
use deck_core::{ChartConfig, LoadError, parse_chart_configs};
use deck_state::AppState;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::RequestCache;

/// Fetch and validate the chart payload
pub async fn fetch_charts(config: &LoaderConfig) -> Result<Vec<ChartConfig>, LoadError> {
    let mut request = Request::get(&config.url);
    if config.no_store {
        request = request.cache(RequestCache::NoStore);
    }

    let response = request
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Http(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    parse_chart_configs(&body)
}

/// Loads chart cards into the page state
pub struct ChartLoader {
    config: LoaderConfig,
    state: AppState,
}

impl ChartLoader {
    pub fn new(state: AppState, config: LoaderConfig) -> Self {
        Self { config, state }
    }

    /// Run one load in the background
    pub fn load(self) {
        spawn_local(async move {
            self.run().await;
        });
    }

    async fn run(self) {
        self.state.begin_load();
        tracing::info!("Loading charts from {}", self.config.url);

        match fetch_charts(&self.config).await {
            Ok(charts) => {
                tracing::info!("Loaded {} charts", charts.len());
                self.state.set_charts(charts);
            }
            Err(e) => {
                tracing::error!("Failed to load charts: {}", e);
                self.state.set_error(&e);
            }
        }
    }
}

// ============================================================================
// LEPTOS INTEGRATION
// ============================================================================

/// Hook to load charts once into the given state
pub fn use_chart_loader(state: AppState, config: LoaderConfig) {
    ChartLoader::new(state, config).load();
}
