use crate::shared::api_utils::{get_json, post_json};
use chrono::NaiveDate;
use contracts::dashboards::d410_campaign_report::live::LiveSource;
use contracts::dashboards::d410_campaign_report::payload::format_live_feed_key;
use contracts::dashboards::d410_campaign_report::{
    Campaign, CampaignListResponse, CampaignReportRequest, CampaignReportResponse, EntityId,
    LiveDataResponse, LiveRecord, LiveStatsRequest, LiveStatsResponse, Platform,
    PlatformListResponse, ReportResult,
};
use contracts::shared::client_config::ClientConfig;

const PLATFORM_LIST: &str = "/api/platform-list";
const CAMPAIGN_LIST: &str = "/api/campaign-list";
const CAMPAIGN_REPORT: &str = "/api/campaign-report";
const LIVE_DATA: &str = "/api/live-data";
const LIVE_STATS: &str = "/api/live-stats";

/// Platforms available for filtering
pub async fn fetch_platforms(config: &ClientConfig) -> Result<Vec<Platform>, String> {
    let response: PlatformListResponse = get_json(&config.url(PLATFORM_LIST)).await?;
    Ok(response.result.into_data())
}

/// Campaigns of one platform
pub async fn fetch_campaigns(
    config: &ClientConfig,
    platform_id: &EntityId,
) -> Result<Vec<Campaign>, String> {
    let path = format!(
        "{}/{}",
        CAMPAIGN_LIST,
        urlencoding::encode(&platform_id.as_string())
    );
    let response: CampaignListResponse = get_json(&config.url(&path)).await?;
    Ok(response.result.into_data())
}

/// Aggregate totals for a period
pub async fn fetch_campaign_report(
    config: &ClientConfig,
    request: &CampaignReportRequest,
) -> Result<ReportResult, String> {
    let response: CampaignReportResponse =
        post_json(&config.url(CAMPAIGN_REPORT), request).await?;
    Ok(response.result)
}

/// Real-time feed for a calendar day
pub async fn fetch_live_data(config: &ClientConfig, day: NaiveDate) -> Result<LiveRecord, String> {
    let path = format!("{}/{}", LIVE_DATA, format_live_feed_key(day));
    let response: LiveDataResponse = get_json(&config.url(&path)).await?;
    Ok(response.result.into_data())
}

/// Per-platform live stats for the chosen campaigns
pub async fn fetch_live_stats(
    config: &ClientConfig,
    source: LiveSource,
    request: &LiveStatsRequest,
) -> Result<Vec<LiveRecord>, String> {
    let path = format!("{}/{}", LIVE_STATS, source.slug());
    let response: LiveStatsResponse = post_json(&config.url(&path), request).await?;
    Ok(response.result.into_data())
}
