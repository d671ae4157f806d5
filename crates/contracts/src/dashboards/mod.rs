pub mod d410_campaign_report;
