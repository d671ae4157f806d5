use crate::dashboards::d410_campaign_report::view_model::CampaignReportViewModel;
use crate::shared::components::checkbox::Checkbox;
use crate::shared::components::select::Select;
use crate::shared::icons::icon;
use contracts::dashboards::d410_campaign_report::form::{FilterMode, FormField};
use contracts::dashboards::d410_campaign_report::payload::{
    format_display_date, format_query_date,
};
use contracts::dashboards::d410_campaign_report::selection::{chip_summary, is_selected, ChipSummary};
use leptos::prelude::*;
use thaw::*;

/// Filter form: platform, campaigns, mode, date range and the submit button
#[component]
pub fn Filters(vm: CampaignReportViewModel) -> impl IntoView {
    let form = vm.form;
    let campaigns_open = RwSignal::new(false);

    // Messages are shown only for fields the user (or loaded data) changed
    let errors = Memo::new(move |_| {
        form.with(|f| {
            let mut errors = f.validate();
            errors.retain(|field, _| f.is_field_dirty(*field));
            errors
        })
    });
    let field_error =
        move |field: FormField| Signal::derive(move || errors.with(|e| e.get(&field).cloned()));

    let platform_options = Signal::derive(move || {
        form.with(|f| {
            f.platform_options
                .iter()
                .map(|p| (p.id.as_string(), p.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let platform_value = Signal::derive(move || {
        form.with(|f| {
            f.selection
                .platform
                .as_ref()
                .map(|p| p.id.as_string())
                .unwrap_or_default()
        })
    });

    let mode_options = Signal::derive(|| {
        FilterMode::all()
            .iter()
            .map(|m| (m.as_str().to_string(), m.label().to_string()))
            .collect::<Vec<_>>()
    });
    let mode_value = Signal::derive(move || form.with(|f| f.selection.mode.as_str().to_string()));

    let start_value = Signal::derive(move || {
        form.with(|f| {
            f.selection
                .date_range
                .start
                .map(format_query_date)
                .unwrap_or_default()
        })
    });
    let end_value = Signal::derive(move || {
        form.with(|f| {
            f.selection
                .date_range
                .end
                .map(format_query_date)
                .unwrap_or_default()
        })
    });
    let range_label = move || {
        form.with(|f| match f.selection.date_range.bounds() {
            Some((start, end)) => format!(
                "{} to {}",
                format_display_date(start),
                format_display_date(end)
            ),
            None => String::new(),
        })
    };

    let campaigns_disabled = move || !form.with(|f| f.campaigns_enabled());

    let chips = move || {
        match form.with(|f| chip_summary(&f.selection.campaigns)) {
            ChipSummary::Each(names) => names
                .into_iter()
                .map(|name| view! { <span class="chip">{name}</span> })
                .collect_view()
                .into_any(),
            ChipSummary::Count { label, title } => {
                view! { <span class="chip" title=title>{label}</span> }.into_any()
            }
        }
    };

    let campaign_list = move || {
        form.with(|f| f.campaign_options.clone())
            .into_iter()
            .map(|campaign| {
                let id = format!("d410-campaign-{}", campaign.id);
                let label = campaign.name.clone();
                let for_check = campaign.clone();
                let checked = Signal::derive(move || {
                    form.with(|f| is_selected(&f.selection.campaigns, &for_check))
                });
                let on_change = Callback::new(move |_: bool| vm.toggle_campaign(campaign.clone()));
                view! { <Checkbox id=id label=label checked=checked on_change=on_change /> }
            })
            .collect_view()
    };

    view! {
        <div class="d410-filters">
            <div class="d410-filters__grid">
                <Select
                    id="d410-platform"
                    label="Platform"
                    value=platform_value
                    options=platform_options
                    on_change=Callback::new(move |id: String| vm.select_platform(id))
                    error=field_error(FormField::Platform)
                />

                <div class="form__group">
                    <label class="form__label">"Campaigns"</label>
                    <button
                        type="button"
                        class="d410-campaigns__toggle form__select"
                        disabled=campaigns_disabled
                        on:click=move |_| campaigns_open.update(|open| *open = !*open)
                    >
                        <span class="d410-campaigns__chips">{chips}</span>
                        {icon("chevron-down")}
                    </button>
                    <Show when=move || campaigns_open.get() && !campaigns_disabled()>
                        <div class="d410-campaigns__list">{campaign_list}</div>
                    </Show>
                    {move || field_error(FormField::Campaigns).get().map(|msg| view! {
                        <div class="form__error">{msg}</div>
                    })}
                </div>

                <Select
                    id="d410-mode"
                    label="Filter Type"
                    value=mode_value
                    options=mode_options
                    on_change=Callback::new(move |value: String| {
                        if let Some(mode) = FilterMode::parse(&value) {
                            vm.set_mode(mode);
                        }
                    })
                />

                <Show
                    when=move || form.with(|f| f.selection.mode == FilterMode::DateRange)
                    fallback=|| view! { <div></div> }
                >
                    <div class="form__group">
                        <label class="form__label">"Select Date Range"</label>
                        <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                            <input
                                type="date"
                                class="date-range-picker__input"
                                prop:value=move || start_value.get()
                                on:input=move |ev| {
                                    vm.set_date_range(&event_target_value(&ev), &end_value.get_untracked());
                                }
                            />
                            <div>"—"</div>
                            <input
                                type="date"
                                class="date-range-picker__input"
                                prop:value=move || end_value.get()
                                on:input=move |ev| {
                                    vm.set_date_range(&start_value.get_untracked(), &event_target_value(&ev));
                                }
                            />
                        </Flex>
                        <div class="form__hint">{range_label}</div>
                        {move || field_error(FormField::DateRange).get().map(|msg| view! {
                            <div class="form__error">{msg}</div>
                        })}
                    </div>
                </Show>
            </div>

            <div class="d410-filters__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit()
                    disabled=move || !vm.can_submit()
                >
                    {move || if vm.is_pending() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! { "Apply Filters" }.into_any()
                    }}
                </Button>
            </div>
        </div>
    }
}
