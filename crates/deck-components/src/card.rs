//! Chart card: a titled frame around one time-series chart

use deck_charts::{ChartOptions, TimeSeriesChart};
use deck_core::ChartConfig;
use leptos::prelude::*;

#[component]
pub fn ChartCard(
    config: ChartConfig,
    #[prop(optional)] options: Option<ChartOptions>,
) -> impl IntoView {
    let ChartConfig { title, data } = config;
    let data = Signal::derive(move || data.clone());

    view! {
        <div class="card">
            <h2>{title}</h2>
            <div class="chart-wrap">
                <TimeSeriesChart data=data options=options.unwrap_or_default() />
            </div>
        </div>
    }
}
