use super::dto::{
    ReportTotals, METRIC_CPPOF, METRIC_IMPRESSIONS, METRIC_POFS, METRIC_SESSIONS, METRIC_SPEND,
    PLATFORM_TIKTOK,
};
use super::format::{format_compact, format_currency_compact, format_currency_fixed};

/// One aggregate metric ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub metric: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
}

/// Cards for the aggregate totals, in display order.
///
/// TikTok reports carry no spend, so "Spend" and "Cost per POF" are left out.
pub fn report_cards(totals: &ReportTotals, platform_name: Option<&str>) -> Vec<ReportCard> {
    let with_spend = platform_name != Some(PLATFORM_TIKTOK);
    let mut cards = Vec::with_capacity(5);

    if with_spend {
        cards.push(ReportCard {
            metric: METRIC_SPEND,
            label: "Spend",
            icon: "spend",
            value: format_currency_compact(totals.number(METRIC_SPEND)),
        });
    }
    cards.push(ReportCard {
        metric: METRIC_IMPRESSIONS,
        label: "Impressions",
        icon: "globe",
        value: format_compact(totals.number(METRIC_IMPRESSIONS)),
    });
    cards.push(ReportCard {
        metric: METRIC_SESSIONS,
        label: "Views",
        icon: "phone",
        value: format_compact(totals.number(METRIC_SESSIONS)),
    });
    cards.push(ReportCard {
        metric: METRIC_POFS,
        label: "Professions of Faith",
        icon: "cross",
        value: format_compact(totals.number(METRIC_POFS)),
    });
    if with_spend {
        cards.push(ReportCard {
            metric: METRIC_CPPOF,
            label: "Cost per POF",
            icon: "pray",
            value: format_currency_fixed(totals.number(METRIC_CPPOF)),
        });
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn totals() -> ReportTotals {
        serde_json::from_value(json!({ "spend": 500, "impressions": 10000 })).unwrap()
    }

    fn value_of<'a>(cards: &'a [ReportCard], label: &str) -> Option<&'a str> {
        cards
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value.as_str())
    }

    #[test]
    fn test_cards_for_facebook() {
        let cards = report_cards(&totals(), Some("Facebook"));
        let labels: Vec<_> = cards.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["Spend", "Impressions", "Views", "Professions of Faith", "Cost per POF"]
        );
        assert_eq!(value_of(&cards, "Spend"), Some("$500"));
        assert_eq!(value_of(&cards, "Impressions"), Some("10K"));
        assert_eq!(value_of(&cards, "Views"), Some("0"));
        assert_eq!(value_of(&cards, "Cost per POF"), Some("$0.00"));
    }

    #[test]
    fn test_cards_for_tiktok_hide_spend() {
        let cards = report_cards(&totals(), Some(PLATFORM_TIKTOK));
        assert_eq!(cards.len(), 3);
        assert_eq!(value_of(&cards, "Spend"), None);
        assert_eq!(value_of(&cards, "Cost per POF"), None);
    }

    #[test]
    fn test_cards_without_platform() {
        let cards = report_cards(&ReportTotals::default(), None);
        assert_eq!(cards.len(), 5);
        assert_eq!(value_of(&cards, "Spend"), Some("$0"));
    }
}
