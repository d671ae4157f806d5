use super::api;
use chrono::{Local, NaiveDate};
use contracts::dashboards::d410_campaign_report::form::{DateRange, FilterForm, FilterMode};
use contracts::dashboards::d410_campaign_report::live::RealtimeFeed;
use contracts::dashboards::d410_campaign_report::state::{
    plan_submit, LiveResults, ReportState, ResultArea, SubmitPlan,
};
use contracts::dashboards::d410_campaign_report::Campaign;
use contracts::shared::client_config::ClientConfig;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// State and commands of the campaign report dashboard.
///
/// Every slice lives in its own signal; async results are written back
/// as they arrive (last write wins).
#[derive(Clone, Copy)]
pub struct CampaignReportViewModel {
    pub form: RwSignal<FilterForm>,
    pub report: RwSignal<ReportState>,
    pub live: RwSignal<LiveResults>,
    pub realtime: RwSignal<RealtimeFeed>,
    config: StoredValue<ClientConfig>,
}

impl CampaignReportViewModel {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            form: RwSignal::new(FilterForm::new(today())),
            report: RwSignal::new(ReportState::default()),
            live: RwSignal::new(LiveResults::default()),
            realtime: RwSignal::new(RealtimeFeed::default()),
            config: StoredValue::new(config),
        }
    }

    // ------------------------------------------------------------------
    // Reference data
    // ------------------------------------------------------------------

    pub fn load_platforms(&self) {
        let form = self.form;
        let config = self.config.get_value();
        spawn_local(async move {
            match api::fetch_platforms(&config).await {
                Ok(platforms) => {
                    log::debug!("Loaded {} platforms", platforms.len());
                    form.update(|f| f.set_platform_list(platforms));
                }
                Err(e) => log::error!("Failed to load platform list: {}", e),
            }
        });
    }

    /// Loads campaigns for the selected platform; "All" gets the combined list
    pub fn load_campaigns(&self) {
        let Some(platform_id) = self.form.with_untracked(|f| f.campaign_list_key()) else {
            return;
        };
        let form = self.form;
        let config = self.config.get_value();
        spawn_local(async move {
            match api::fetch_campaigns(&config, &platform_id).await {
                Ok(campaigns) => form.update(|f| {
                    // Answer for a platform that is no longer selected
                    if f.campaign_list_key().as_ref() == Some(&platform_id) {
                        f.set_campaign_list(campaigns);
                    }
                }),
                Err(e) => log::error!("Failed to load campaigns of {}: {}", platform_id, e),
            }
        });
    }

    // ------------------------------------------------------------------
    // Form edits
    // ------------------------------------------------------------------

    pub fn select_platform(&self, id: String) {
        let changed = self
            .form
            .try_update(|f| f.select_platform_by_id(&id))
            .unwrap_or(false);
        if changed {
            self.on_platform_changed();
        }
    }

    pub fn set_mode(&self, mode: FilterMode) {
        let changed = self
            .form
            .try_update(|f| f.set_mode(mode))
            .unwrap_or(false);
        if changed {
            self.on_platform_changed();
        }
    }

    pub fn toggle_campaign(&self, campaign: Campaign) {
        self.form.update(|f| f.toggle_campaign(&campaign));
    }

    /// Dates come from `<input type="date">` as `YYYY-MM-DD`; blank clears
    pub fn set_date_range(&self, start: &str, end: &str) {
        let range = DateRange {
            start: parse_input_date(start),
            end: parse_input_date(end),
        };
        self.form.update(|f| f.set_date_range(range));
    }

    fn on_platform_changed(&self) {
        self.live.update(|l| l.clear());
        self.load_campaigns();
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    pub fn submit(&self) {
        let selection = self.form.with_untracked(|f| f.selection.clone());
        log::info!(
            "Submit: mode={}, platform={:?}, campaigns={}",
            selection.mode.as_str(),
            selection.platform_name(),
            selection.campaigns.len()
        );

        match plan_submit(&selection) {
            Ok(SubmitPlan::Report(request)) => {
                let report = self.report;
                let config = self.config.get_value();
                report.update(|r| r.begin());
                spawn_local(async move {
                    let outcome = api::fetch_campaign_report(&config, &request).await;
                    if let Some(err) = report.try_update(|r| r.apply(outcome)).flatten() {
                        log::warn!("Campaign report: {}", err);
                    }
                });
            }
            Ok(SubmitPlan::Live(source, request)) => {
                let live = self.live;
                let config = self.config.get_value();
                live.update(|l| l.begin());
                spawn_local(async move {
                    let outcome = api::fetch_live_stats(&config, source, &request).await;
                    if let Some(err) = live.try_update(|l| l.finish(outcome)).flatten() {
                        log::error!("Error fetching {} data: {}", source.label(), err);
                    }
                });
            }
            Err(err) if err.is_validation() => log::warn!("Submit rejected: {}", err),
            Err(err) => log::info!("Nothing to fetch: {}", err),
        }
    }

    /// Fetches today's real-time feed unless a fetch is running or data is shown
    pub fn refresh_realtime(&self) {
        let started = self.realtime.try_update(|f| f.begin()).unwrap_or(false);
        if !started {
            return;
        }
        let realtime = self.realtime;
        let config = self.config.get_value();
        spawn_local(async move {
            let outcome = api::fetch_live_data(&config, today()).await;
            if let Err(e) = &outcome {
                log::error!("Failed to load real-time data: {}", e);
            }
            realtime.update(|f| f.finish(outcome));
        });
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    /// Request of the current mode is running
    pub fn is_pending(&self) -> bool {
        match self.form.with(|f| f.selection.mode) {
            FilterMode::DateRange => self.report.with(|r| r.pending),
            FilterMode::Live => self.live.with(|l| l.loading),
        }
    }

    pub fn can_submit(&self) -> bool {
        let pending = self.is_pending();
        self.form.with(|f| f.can_submit(pending))
    }

    pub fn result_area(&self) -> ResultArea {
        let mode = self.form.with(|f| f.selection.mode);
        ResultArea::resolve(mode, self.report.with(|r| r.error))
    }

    pub fn platform_name(&self) -> Option<String> {
        self.form
            .with(|f| f.selection.platform_name().map(str::to_string))
    }
}

fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
