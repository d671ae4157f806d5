use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Sentinel "All"
// ============================================================================

/// Id of the synthetic "All" entry in platform and campaign lists
pub const ALL_ID: &str = "all";

/// Display name of the synthetic "All" entry
pub const ALL_NAME: &str = "All";

/// Platform display names with special handling
pub const PLATFORM_FACEBOOK: &str = "Facebook";
pub const PLATFORM_GA4: &str = "GA4";
pub const PLATFORM_TIKTOK: &str = "TikTok";

// ============================================================================
// Ids
// ============================================================================

/// Identifier of a platform or campaign.
///
/// The reporting API returns numeric ids, the "All" sentinel uses the
/// string `"all"`; both travel untagged on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    pub fn all() -> Self {
        EntityId::Text(ALL_ID.to_string())
    }

    /// Empty string id, used by the report endpoint for "no platform filter"
    pub fn empty() -> Self {
        EntityId::Text(String::new())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, EntityId::Text(s) if s == ALL_ID)
    }

    /// Numeric value of the id, parsing string ids like `"42"`
    pub fn as_number(&self) -> Option<i64> {
        match self {
            EntityId::Number(n) => Some(*n),
            EntityId::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

// ============================================================================
// Reference data
// ============================================================================

/// Common surface of list entries that can be chosen in a picker
/// and may be the "All" sentinel.
pub trait Selectable: Clone {
    fn id(&self) -> &EntityId;
    fn name(&self) -> &str;
    fn sentinel() -> Self;

    fn is_all(&self) -> bool {
        self.id().is_all()
    }
}

/// Advertising platform (Facebook, GA4, TikTok, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
}

impl Platform {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Selectable for Platform {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn sentinel() -> Self {
        Self {
            id: EntityId::all(),
            name: ALL_NAME.to_string(),
        }
    }
}

/// Campaign of a single platform.
///
/// Fields beyond `id`/`name` (account ids, tokens for the live pull, ...)
/// are kept as-is so they reach the live-stats endpoints untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Campaign {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Selectable for Campaign {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn sentinel() -> Self {
        Self::new(ALL_ID, ALL_NAME)
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

/// `{ "result": ... }` wrapper used by every endpoint of the reporting API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub result: T,
}

/// `{ "data": ... }` payload; a missing or null `data` reads as empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResult<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T: Default> DataResult<T> {
    pub fn into_data(self) -> T {
        self.data.unwrap_or_default()
    }
}

pub type PlatformListResponse = ApiEnvelope<DataResult<Vec<Platform>>>;
pub type CampaignListResponse = ApiEnvelope<DataResult<Vec<Campaign>>>;
pub type CampaignReportResponse = ApiEnvelope<ReportResult>;
pub type LiveDataResponse = ApiEnvelope<DataResult<LiveRecord>>;
pub type LiveStatsResponse = ApiEnvelope<DataResult<Vec<LiveRecord>>>;

// ============================================================================
// Aggregate report
// ============================================================================

pub const METRIC_SPEND: &str = "spend";
pub const METRIC_IMPRESSIONS: &str = "impressions";
pub const METRIC_SESSIONS: &str = "sessions";
pub const METRIC_POFS: &str = "pofs";
pub const METRIC_CPPOF: &str = "cppof";

/// Body of `POST campaign-report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignReportRequest {
    /// Platform id, `""` when no platform filter applies
    #[serde(rename = "platformid")]
    pub platform_id: EntityId,
    #[serde(rename = "campaignid")]
    pub campaign_ids: Vec<i64>,
    /// YYYY-MM-DD
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// YYYY-MM-DD
    #[serde(rename = "endDate")]
    pub end_date: String,
}

/// `result` of `POST campaign-report`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportResult {
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub status: bool,
    #[serde(default)]
    pub totals: Option<ReportTotals>,
}

/// Single metric of the totals map; the backend mixes numbers and
/// numeric strings. Any other JSON shape is kept and reads as non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Null,
    Other(Value),
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Text(s) => s.trim().parse::<f64>().ok(),
            MetricValue::Null | MetricValue::Other(_) => None,
        }
        .filter(|v| v.is_finite())
    }
}

/// Pre-summed metrics for the requested period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportTotals(pub BTreeMap<String, MetricValue>);

impl ReportTotals {
    pub fn get(&self, metric: &str) -> Option<&MetricValue> {
        self.0.get(metric)
    }

    pub fn number(&self, metric: &str) -> Option<f64> {
        self.get(metric).and_then(MetricValue::as_f64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads a JSON value with JavaScript truthiness:
/// `false`, `0`, `""` and `null` are false, everything else is true.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

// ============================================================================
// Live data
// ============================================================================

/// Body of `POST live-stats/{platform}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStatsRequest {
    pub campaigns: Vec<Campaign>,
}

/// Free-form key/value record returned by the live endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiveRecord(pub BTreeMap<String, Value>);

impl LiveRecord {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id_untagged() {
        let ids: Vec<EntityId> = serde_json::from_value(json!([1, "all", "7"])).unwrap();
        assert_eq!(ids[0], EntityId::Number(1));
        assert!(ids[1].is_all());
        assert_eq!(ids[2].as_number(), Some(7));
        assert_eq!(EntityId::all().as_number(), None);
        assert_eq!(serde_json::to_value(EntityId::empty()).unwrap(), json!(""));
    }

    #[test]
    fn test_campaign_keeps_extra_fields() {
        let campaign: Campaign = serde_json::from_value(json!({
            "id": 12,
            "name": "Spring",
            "accountId": "act_99"
        }))
        .unwrap();
        assert_eq!(campaign.id, EntityId::Number(12));
        assert_eq!(campaign.extra.get("accountId"), Some(&json!("act_99")));
        assert_eq!(
            serde_json::to_value(&campaign).unwrap(),
            json!({"id": 12, "name": "Spring", "accountId": "act_99"})
        );
    }

    #[test]
    fn test_platform_list_envelope() {
        let resp: PlatformListResponse = serde_json::from_value(json!({
            "result": { "data": [{ "id": 1, "name": "Facebook" }] }
        }))
        .unwrap();
        let list = resp.result.into_data();
        assert_eq!(list, vec![Platform::new(1, "Facebook")]);

        let empty: PlatformListResponse =
            serde_json::from_value(json!({ "result": { "data": null } })).unwrap();
        assert!(empty.result.into_data().is_empty());
    }

    #[test]
    fn test_report_result_status_truthiness() {
        let ok: CampaignReportResponse = serde_json::from_value(json!({
            "result": { "status": true, "totals": { "spend": 500, "impressions": "10000" } }
        }))
        .unwrap();
        assert!(ok.result.status);
        let totals = ok.result.totals.unwrap();
        assert_eq!(totals.number(METRIC_SPEND), Some(500.0));
        assert_eq!(totals.number(METRIC_IMPRESSIONS), Some(10000.0));
        assert_eq!(totals.number(METRIC_POFS), None);

        let missing: CampaignReportResponse =
            serde_json::from_value(json!({ "result": {} })).unwrap();
        assert!(!missing.result.status);

        let numeric: CampaignReportResponse =
            serde_json::from_value(json!({ "result": { "status": 0 } })).unwrap();
        assert!(!numeric.result.status);

        let one: CampaignReportResponse =
            serde_json::from_value(json!({ "result": { "status": 1 } })).unwrap();
        assert!(one.result.status);
    }

    #[test]
    fn test_metric_value_null_and_garbage() {
        let totals: ReportTotals =
            serde_json::from_value(json!({ "cppof": null, "spend": "n/a" })).unwrap();
        assert_eq!(totals.get(METRIC_CPPOF), Some(&MetricValue::Null));
        assert_eq!(totals.number(METRIC_CPPOF), None);
        assert_eq!(totals.number(METRIC_SPEND), None);
    }

    #[test]
    fn test_unexpected_metric_shapes_keep_report_readable() {
        let ok: CampaignReportResponse = serde_json::from_value(json!({
            "result": {
                "status": true,
                "totals": { "spend": 12, "flagged": true, "breakdown": { "a": 1 } }
            }
        }))
        .unwrap();
        let totals = ok.result.totals.unwrap();
        assert_eq!(totals.number(METRIC_SPEND), Some(12.0));
        assert_eq!(totals.get("flagged"), Some(&MetricValue::Other(json!(true))));
        assert_eq!(totals.number("flagged"), None);
        assert_eq!(totals.number("breakdown"), None);
    }

    #[test]
    fn test_report_request_wire_names() {
        let req = CampaignReportRequest {
            platform_id: EntityId::Number(1),
            campaign_ids: vec![],
            start_date: "2024-03-01".into(),
            end_date: "2024-03-07".into(),
        };
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
}
