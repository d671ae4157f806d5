//! Orchestrator state: what to request on submit and how responses land.

use super::dto::{CampaignReportRequest, LiveRecord, LiveStatsRequest, ReportResult, ReportTotals};
use super::form::{FilterMode, FilterSelection};
use super::live::LiveSource;
use super::payload::{build_live_stats_request, build_report_request};
use crate::shared::dashboard_error::{DashboardError, DashboardResult};

/// Banner shown in place of the results when the aggregate request failed
pub const NO_DATA_MESSAGE: &str = "No data found for the specified dates.";

/// Request chosen for a submitted selection
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    Report(CampaignReportRequest),
    Live(LiveSource, LiveStatsRequest),
}

/// Decides which request a submit issues.
///
/// Live mode for a platform without a live source yields
/// `UNSUPPORTED_PLATFORM`; nothing is requested in that case.
pub fn plan_submit(selection: &FilterSelection) -> DashboardResult<SubmitPlan> {
    match selection.mode {
        FilterMode::DateRange => build_report_request(selection).map(SubmitPlan::Report),
        FilterMode::Live => {
            let name = selection.platform_name().unwrap_or_default();
            let source = LiveSource::for_platform(name)
                .ok_or_else(|| DashboardError::unsupported_platform(name))?;
            Ok(SubmitPlan::Live(source, build_live_stats_request(selection)))
        }
    }
}

/// Aggregate report slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub totals: ReportTotals,
    pub error: bool,
    pub pending: bool,
}

impl ReportState {
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Applies the outcome of `POST campaign-report`.
    ///
    /// Totals are replaced only on a truthy status; any failure raises the
    /// error flag and keeps what was shown before.
    pub fn apply(&mut self, outcome: Result<ReportResult, String>) -> Option<DashboardError> {
        self.pending = false;
        match outcome {
            Ok(result) if result.status => {
                self.totals = result.totals.unwrap_or_default();
                self.error = false;
                None
            }
            Ok(_) => {
                self.error = true;
                Some(DashboardError::no_data())
            }
            Err(e) => {
                self.error = true;
                Some(DashboardError::transport("Report request failed").with_details(e))
            }
        }
    }
}

/// Per-platform live pull slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveResults {
    pub records: Vec<LiveRecord>,
    pub loading: bool,
}

impl LiveResults {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Stores the records; a failure leaves the collection empty and is
    /// handed back for logging
    pub fn finish(&mut self, outcome: Result<Vec<LiveRecord>, String>) -> Option<String> {
        self.loading = false;
        match outcome {
            Ok(records) => {
                self.records = records;
                None
            }
            Err(e) => {
                self.records.clear();
                Some(e)
            }
        }
    }

    /// Drops stale records after a platform switch
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn has_data(&self) -> bool {
        self.records.iter().any(|r| !r.is_empty())
    }
}

/// Content of the results area below the filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultArea {
    NoDataBanner,
    Aggregate,
    Live,
}

impl ResultArea {
    pub fn resolve(mode: FilterMode, report_error: bool) -> Self {
        if report_error {
            ResultArea::NoDataBanner
        } else if mode == FilterMode::DateRange {
            ResultArea::Aggregate
        } else {
            ResultArea::Live
        }
    }
}
