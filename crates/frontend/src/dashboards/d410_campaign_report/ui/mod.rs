pub mod dashboard;
pub mod filters;
pub mod live_data_list;
pub mod realtime_panel;
pub mod reports_list;

pub use dashboard::CampaignReportDashboard;
