use crate::dashboards::d410_campaign_report::view_model::CampaignReportViewModel;
use crate::shared::components::stat_card::StatCard;
use contracts::dashboards::d410_campaign_report::cards::report_cards;
use leptos::prelude::*;

/// Aggregate metric cards for the date range report
#[component]
pub fn ReportsList(vm: CampaignReportViewModel) -> impl IntoView {
    let cards = Memo::new(move |_| {
        let platform = vm.platform_name();
        vm.report
            .with(|r| report_cards(&r.totals, platform.as_deref()))
    });

    view! {
        <div class="d410-cards">
            <For
                each=move || cards.get()
                key=|card| card.metric
                children=move |card| {
                    let metric = card.metric;
                    let value = Signal::derive(move || {
                        cards.with(|all| {
                            all.iter()
                                .find(|c| c.metric == metric)
                                .map(|c| c.value.clone())
                                .unwrap_or_default()
                        })
                    });
                    view! {
                        <StatCard
                            label=card.label.to_string()
                            icon_name=card.icon.to_string()
                            value=value
                        />
                    }
                }
            />
        </div>
    }
}
