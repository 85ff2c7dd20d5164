//! Chart deck frontend entry point

use deck_components::Dashboard;
use deck_loader::{LoaderConfig, use_chart_loader};
use deck_state::provide_app_state;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("chart deck starting");

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let state = provide_app_state();
    use_chart_loader(state, LoaderConfig::default());

    view! { <Dashboard /> }
}
