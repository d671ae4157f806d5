//! Request shaping for the report endpoints.

use super::dto::{Campaign, CampaignReportRequest, EntityId, LiveStatsRequest, Selectable};
use super::form::FilterSelection;
use crate::shared::dashboard_error::{DashboardError, DashboardResult};
use chrono::{DateTime, NaiveDate, TimeZone};

/// `YYYY-MM-DD`, as the report endpoint expects
pub fn format_query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `DD-MM-YYYY`, path key of the real-time feed
pub fn format_live_feed_key(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// `M/D/YYYY`, shown in the date range field
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Calendar date of an instant in its own time zone (not UTC)
pub fn local_calendar_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Builds the `POST campaign-report` body from a date-range selection
pub fn build_report_request(selection: &FilterSelection) -> DashboardResult<CampaignReportRequest> {
    let (start, end) = selection
        .date_range
        .bounds()
        .ok_or_else(|| DashboardError::validation("Date range is required"))?;

    let platform_id = match &selection.platform {
        Some(platform) if !platform.is_all() => platform.id.clone(),
        _ => EntityId::empty(),
    };

    Ok(CampaignReportRequest {
        platform_id,
        campaign_ids: numeric_campaign_ids(&selection.campaigns),
        start_date: format_query_date(start),
        end_date: format_query_date(end),
    })
}

/// Numeric ids of the concrete campaigns; the sentinel and non-numeric ids
/// are left out
pub fn numeric_campaign_ids(campaigns: &[Campaign]) -> Vec<i64> {
    campaigns
        .iter()
        .filter(|c| !c.is_all())
        .filter_map(|c| c.id.as_number())
        .collect()
}

/// Body of the per-platform live pull
pub fn build_live_stats_request(selection: &FilterSelection) -> LiveStatsRequest {
    LiveStatsRequest {
        campaigns: selection.concrete_campaigns(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_campaign_report::dto::Platform;
    use crate::dashboards::d410_campaign_report::form::{DateRange, FilterMode};
    use chrono::{FixedOffset, Local, NaiveDateTime, Utc};
    use serde_json::json;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn selection(platform: Platform, campaigns: Vec<Campaign>) -> FilterSelection {
        FilterSelection {
            platform: Some(platform),
            campaigns,
            mode: FilterMode::DateRange,
            date_range: DateRange::new(march(1), march(7)),
        }
    }

    #[test]
    fn test_local_calendar_date_ignores_utc() {
        let naive =
            NaiveDateTime::parse_from_str("2024-03-05T23:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();

        for offset_hours in [-11, -5, 0, 3, 14] {
            let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
            let instant = tz.from_local_datetime(&naive).unwrap();
            assert_eq!(
                format_query_date(local_calendar_date(&instant)),
                "2024-03-05",
                "offset {offset_hours}"
            );
        }

        // Same instant seen through UTC falls on the next day
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = new_york.from_local_datetime(&naive).unwrap();
        assert_eq!(
            format_query_date(local_calendar_date(&instant.with_timezone(&Utc))),
            "2024-03-06"
        );

        let local = Local.from_local_datetime(&naive).earliest().unwrap();
        assert_eq!(format_query_date(local_calendar_date(&local)), "2024-03-05");
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_query_date(march(5)), "2024-03-05");
        assert_eq!(format_live_feed_key(march(5)), "05-03-2024");
        assert_eq!(format_display_date(march(5)), "3/5/2024");
    }

    #[test]
    fn test_payload_for_platform_with_sentinel_campaign() {
        let sel = selection(Platform::new(1, "Facebook"), vec![Campaign::sentinel()]);
        let req = build_report_request(&sel).unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "platformid": 1,
                "campaignid": [],
                "startDate": "2024-03-01",
                "endDate": "2024-03-07"
            })
        );
    }

    #[test]
    fn test_payload_for_sentinel_platform() {
        let sel = selection(Platform::sentinel(), vec![Campaign::sentinel()]);
        let req = build_report_request(&sel).unwrap();
        assert_eq!(req.platform_id, EntityId::empty());
        assert!(req.campaign_ids.is_empty());
    }

    #[test]
    fn test_payload_campaign_ids() {
        let campaigns = vec![
            Campaign::sentinel(),
            Campaign::new(4, "A"),
            Campaign::new("17", "B"),
            Campaign::new("legacy", "C"),
        ];
        let sel = selection(Platform::new(2, "GA4"), campaigns);
        let req = build_report_request(&sel).unwrap();
        assert_eq!(req.campaign_ids, vec![4, 17]);

        let none = selection(Platform::new(2, "GA4"), Vec::new());
        assert!(build_report_request(&none).unwrap().campaign_ids.is_empty());
    }

    #[test]
    fn test_payload_requires_range() {
        let mut sel = selection(Platform::new(1, "Facebook"), Vec::new());
        sel.date_range.end = None;
        let err = build_report_request(&sel).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_live_stats_request_drops_sentinel() {
        let sel = selection(
            Platform::new(1, "Facebook"),
            vec![Campaign::sentinel(), Campaign::new(9, "Nine")],
        );
        let req = build_live_stats_request(&sel);
        assert_eq!(req.campaigns, vec![Campaign::new(9, "Nine")]);
    }
}
