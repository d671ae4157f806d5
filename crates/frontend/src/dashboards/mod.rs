pub mod d410_campaign_report;

pub use d410_campaign_report::ui::CampaignReportDashboard;
