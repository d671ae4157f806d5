use super::live_data_list::LiveRecordTable;
use crate::dashboards::d410_campaign_report::view_model::CampaignReportViewModel;
use crate::shared::icons::icon;
use contracts::dashboards::d410_campaign_report::live::LiveDisplay;
use leptos::prelude::*;
use thaw::*;

const RATE_LIMIT_WARNING: &str =
    "Data updates are limited. Avoid frequent clicks to prevent API restrictions.";

#[component]
pub fn RealtimePanel(vm: CampaignReportViewModel) -> impl IntoView {
    let realtime = vm.realtime;

    let body = move || match realtime.with(|f| f.display()) {
        LiveDisplay::Loading => view! {
            <div class="d410-live__state"><Spinner /></div>
        }
        .into_any(),
        LiveDisplay::Error => view! {
            <div class="d410-live__state d410-live__state--error">
                "Error fetching live data. Please try again."
            </div>
        }
        .into_any(),
        LiveDisplay::Empty => view! {
            <div class="d410-live__state">"No live data available."</div>
        }
        .into_any(),
        LiveDisplay::HasData => match realtime.with(|f| f.record.clone()) {
            Some(record) => view! { <LiveRecordTable record=record /> }.into_any(),
            None => ().into_any(),
        },
    };

    view! {
        <section class="d410-realtime">
            <div class="d410-realtime__header">
                <h2 class="d410-realtime__title">"Real-Time Data"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.refresh_realtime()
                    disabled=move || !realtime.with(|f| f.can_refresh())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>
            <MessageBar intent=MessageBarIntent::Warning>
                <span>{RATE_LIMIT_WARNING}</span>
            </MessageBar>
            <div class="d410-realtime__body">{body}</div>
        </section>
    }
}
