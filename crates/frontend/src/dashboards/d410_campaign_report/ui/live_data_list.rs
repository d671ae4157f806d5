use crate::dashboards::d410_campaign_report::view_model::CampaignReportViewModel;
use contracts::dashboards::d410_campaign_report::live::{live_rows, LiveDisplay, LiveValue};
use contracts::dashboards::d410_campaign_report::LiveRecord;
use leptos::prelude::*;
use thaw::*;

/// Key/value table of one live record; array values become bulleted lists
#[component]
pub fn LiveRecordTable(record: LiveRecord) -> impl IntoView {
    let rows = live_rows(&record)
        .into_iter()
        .map(|row| {
            let value = match row.value {
                LiveValue::Scalar(text) => view! { <span>{text}</span> }.into_any(),
                LiveValue::List(items) => view! {
                    <ul class="d410-live__list">
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                }
                .into_any(),
            };
            view! {
                <tr>
                    <td class="d410-live__key">{row.key}</td>
                    <td>{value}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="d410-live__table">
            <thead>
                <tr>
                    <th>"Metric"</th>
                    <th>"Value"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

/// Records returned by the per-platform live pull
#[component]
pub fn LiveDataList(vm: CampaignReportViewModel) -> impl IntoView {
    let live = vm.live;

    move || {
        let display = live.with(|l| LiveDisplay::resolve(l.loading, false, l.has_data()));
        match display {
            LiveDisplay::Loading => view! {
                <div class="d410-live__state"><Spinner /></div>
            }
            .into_any(),
            LiveDisplay::HasData => {
                let records = live.with(|l| l.records.clone());
                view! {
                    <div class="d410-live">
                        {records
                            .into_iter()
                            .filter(|r| !r.is_empty())
                            .map(|record| view! { <LiveRecordTable record=record /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
            LiveDisplay::Error | LiveDisplay::Empty => view! {
                <div class="d410-live__state">"No live data available."</div>
            }
            .into_any(),
        }
    }
}
