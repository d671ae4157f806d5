use super::filters::Filters;
use super::live_data_list::LiveDataList;
use super::realtime_panel::RealtimePanel;
use super::reports_list::ReportsList;
use crate::dashboards::d410_campaign_report::view_model::CampaignReportViewModel;
use crate::shared::config::use_client_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::dashboards::d410_campaign_report::state::{ResultArea, NO_DATA_MESSAGE};
use leptos::prelude::*;
use thaw::*;

/// Campaign report dashboard: filters, results and the real-time feed
#[component]
pub fn CampaignReportDashboard() -> impl IntoView {
    let vm = CampaignReportViewModel::new(use_client_config());

    // Reference data and the default report, once on mount
    Effect::new(move |_| {
        untrack(|| {
            vm.load_platforms();
            vm.load_campaigns();
            vm.submit();
        });
    });

    let results = move || match vm.result_area() {
        ResultArea::NoDataBanner => view! {
            <MessageBar intent=MessageBarIntent::Warning>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    {icon("warning")}
                    <span>{NO_DATA_MESSAGE}</span>
                </Flex>
            </MessageBar>
        }
        .into_any(),
        ResultArea::Aggregate => view! { <ReportsList vm=vm /> }.into_any(),
        ResultArea::Live => view! { <LiveDataList vm=vm /> }.into_any(),
    };

    view! {
        <PageFrame page_id="d410_campaign_report--dashboard" class="d410-dashboard">
            <style>{DASHBOARD_CSS}</style>
            <div class="page__header">
                <h1 class="page__title">"Campaign Report"</h1>
            </div>
            <Card>
                <Filters vm=vm />
            </Card>
            <div class="d410-results">{results}</div>
            <hr class="d410-divider" />
            <RealtimePanel vm=vm />
        </PageFrame>
    }
}

const DASHBOARD_CSS: &str = r#"
.d410-dashboard { display: flex; flex-direction: column; gap: 16px; padding: 16px; }
.d410-filters__grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.d410-filters__actions { display: flex; justify-content: flex-end; margin-top: 16px; }
.d410-campaigns__toggle { display: flex; align-items: center; justify-content: space-between; width: 100%; min-height: 32px; }
.d410-campaigns__chips { display: flex; flex-wrap: wrap; gap: 4px; }
.d410-campaigns__list { max-height: 240px; overflow-y: auto; border: 1px solid var(--color-border, #ddd); border-radius: 4px; padding: 4px 8px; }
.chip { background: var(--color-bg-secondary, #eef); border-radius: 12px; padding: 0 8px; font-size: 12px; }
.form__error { color: var(--color-error, #c00); font-size: 12px; }
.form__hint { color: var(--color-text-secondary, #666); font-size: 12px; }
.d410-cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
.stat-card { display: flex; gap: 12px; align-items: center; padding: 16px; border-radius: 8px; background: var(--color-bg-secondary, #f7f7fa); }
.stat-card__value { font-size: 24px; font-weight: 600; }
.stat-card__label { color: var(--color-text-secondary, #666); }
.d410-realtime__header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px; }
.d410-realtime__body { margin-top: 12px; }
.d410-live { display: flex; flex-direction: column; gap: 16px; }
.d410-live__table { width: 100%; border-collapse: collapse; }
.d410-live__table th, .d410-live__table td { text-align: left; padding: 4px 8px; border-bottom: 1px solid var(--color-border, #eee); vertical-align: top; }
.d410-live__key { font-weight: 600; }
.d410-live__list { margin: 0; padding-left: 16px; }
.d410-live__state { padding: 16px; text-align: center; }
.d410-live__state--error { color: var(--color-error, #c00); }
"#;
