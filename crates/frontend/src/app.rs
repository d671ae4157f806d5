use crate::dashboards::CampaignReportDashboard;
use contracts::shared::client_config::ClientConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Resolved once at start-up, read by every API call
    provide_context(config);

    view! {
        <main class="app-layout">
            <CampaignReportDashboard />
        </main>
    }
}
