//! Main page layout component

use deck_state::{PageStatus, use_app_state};
use leptos::prelude::*;

use crate::ChartCard;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let charts = state.charts;
    let error = state.error;

    view! {
        <div class="deck">
            <header class="deck-header">
                <h1>"Charts"</h1>
            </header>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="err">
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">"Error: " {e}</span>
                        </div>
                    }
                })
            }}

            <main class="deck-cards">
                {move || {
                    charts
                        .get()
                        .into_iter()
                        .map(|config| view! { <ChartCard config=config /> })
                        .collect_view()
                }}
            </main>

            <footer class="deck-footer">
                <StatusLine />
            </footer>
        </div>
    }
}

#[component]
fn StatusLine() -> impl IntoView {
    let state = use_app_state();
    let charts = state.charts;

    view! {
        <div class=move || format!("status-line {}", state.status().css_class())>
            {move || match state.status() {
                PageStatus::Loading => "Loading data…".to_string(),
                PageStatus::Failed(_) => "No charts loaded".to_string(),
                PageStatus::Ready => format!("{} charts", charts.with(Vec::len)),
            }}
        </div>
    }
}
