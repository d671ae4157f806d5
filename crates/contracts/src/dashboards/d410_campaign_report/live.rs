//! Live data: per-platform pulls and the real-time feed.

use super::dto::{LiveRecord, PLATFORM_FACEBOOK, PLATFORM_GA4};
use serde_json::Value;

/// Upstream service behind a live pull
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveSource {
    /// Facebook ad accounts and their stats
    Facebook,
    /// Google Analytics 4
    Ga4,
}

impl LiveSource {
    /// Live source for a platform display name; other platforms have none
    pub fn for_platform(name: &str) -> Option<Self> {
        match name {
            PLATFORM_FACEBOOK => Some(LiveSource::Facebook),
            PLATFORM_GA4 => Some(LiveSource::Ga4),
            _ => None,
        }
    }

    /// Path segment under `/api/live-stats/`
    pub fn slug(&self) -> &'static str {
        match self {
            LiveSource::Facebook => "facebook",
            LiveSource::Ga4 => "ga4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LiveSource::Facebook => PLATFORM_FACEBOOK,
            LiveSource::Ga4 => PLATFORM_GA4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveValue {
    Scalar(String),
    /// Rendered as a bulleted list
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRow {
    pub key: String,
    pub value: LiveValue,
}

/// Key/value rows of a record, in key order
pub fn live_rows(record: &LiveRecord) -> Vec<LiveRow> {
    record
        .0
        .iter()
        .map(|(key, value)| LiveRow {
            key: key.clone(),
            value: match value {
                Value::Array(items) => LiveValue::List(items.iter().map(scalar_text).collect()),
                other => LiveValue::Scalar(scalar_text(other)),
            },
        })
        .collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// What the live panels show; exactly one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveDisplay {
    Loading,
    Error,
    Empty,
    HasData,
}

impl LiveDisplay {
    /// Loading wins over error, error over data
    pub fn resolve(loading: bool, error: bool, has_data: bool) -> Self {
        if loading {
            LiveDisplay::Loading
        } else if error {
            LiveDisplay::Error
        } else if has_data {
            LiveDisplay::HasData
        } else {
            LiveDisplay::Empty
        }
    }
}

/// Real-time feed state. The upstream is rate limited, so a refresh is
/// refused while a fetch is running or data is already on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealtimeFeed {
    pub record: Option<LiveRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RealtimeFeed {
    pub fn has_data(&self) -> bool {
        self.record.as_ref().is_some_and(|r| !r.is_empty())
    }

    pub fn can_refresh(&self) -> bool {
        !self.loading && !self.has_data()
    }

    /// Marks the fetch as started; false when a refresh is not allowed
    pub fn begin(&mut self) -> bool {
        if !self.can_refresh() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Stores the outcome. A failure keeps the previous record.
    pub fn finish(&mut self, outcome: Result<LiveRecord, String>) {
        self.loading = false;
        match outcome {
            Ok(record) => {
                self.record = Some(record);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn display(&self) -> LiveDisplay {
        LiveDisplay::resolve(self.loading, self.error.is_some(), self.has_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> LiveRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_live_source_dispatch() {
        assert_eq!(LiveSource::for_platform("Facebook"), Some(LiveSource::Facebook));
        assert_eq!(LiveSource::for_platform("GA4"), Some(LiveSource::Ga4));
        assert_eq!(LiveSource::for_platform("TikTok"), None);
        assert_eq!(LiveSource::for_platform("facebook"), None);
        assert_eq!(LiveSource::Ga4.slug(), "ga4");
    }

    #[test]
    fn test_live_rows() {
        let rows = live_rows(&record(json!({
            "clicks": 42,
            "countries": ["US", "CA"],
            "note": "ok",
            "empty": null
        })));
        assert_eq!(
            rows,
            vec![
                LiveRow { key: "clicks".into(), value: LiveValue::Scalar("42".into()) },
                LiveRow {
                    key: "countries".into(),
                    value: LiveValue::List(vec!["US".into(), "CA".into()]),
                },
                LiveRow { key: "empty".into(), value: LiveValue::Scalar(String::new()) },
                LiveRow { key: "note".into(), value: LiveValue::Scalar("ok".into()) },
            ]
        );
    }

    #[test]
    fn test_display_states_are_exclusive() {
        assert_eq!(LiveDisplay::resolve(true, true, true), LiveDisplay::Loading);
        assert_eq!(LiveDisplay::resolve(false, true, true), LiveDisplay::Error);
        assert_eq!(LiveDisplay::resolve(false, false, true), LiveDisplay::HasData);
        assert_eq!(LiveDisplay::resolve(false, false, false), LiveDisplay::Empty);
    }

    #[test]
    fn test_realtime_feed_refresh_guard() {
        let mut feed = RealtimeFeed::default();
        assert_eq!(feed.display(), LiveDisplay::Empty);
        assert!(feed.begin());
        assert_eq!(feed.display(), LiveDisplay::Loading);
        assert!(!feed.can_refresh());
        assert!(!feed.begin());

        feed.finish(Ok(record(json!({ "active": 3 }))));
        assert_eq!(feed.display(), LiveDisplay::HasData);
        assert!(!feed.can_refresh());
    }

    #[test]
    fn test_realtime_feed_empty_result_allows_refresh() {
        let mut feed = RealtimeFeed::default();
        feed.begin();
        feed.finish(Ok(LiveRecord::default()));
        assert_eq!(feed.display(), LiveDisplay::Empty);
        assert!(feed.can_refresh());
    }

    #[test]
    fn test_realtime_feed_error() {
        let mut feed = RealtimeFeed::default();
        feed.begin();
        feed.finish(Err("HTTP 429".into()));
        assert_eq!(feed.display(), LiveDisplay::Error);
        assert!(feed.can_refresh());

        feed.begin();
        feed.finish(Ok(record(json!({ "active": 1 }))));
        assert_eq!(feed.error, None);
        assert_eq!(feed.display(), LiveDisplay::HasData);
    }
}
