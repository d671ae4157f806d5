//! Number formatting for report cards

/// Abbreviates with K/M suffixes and one decimal place; a trailing `.0`
/// is dropped. Values under a thousand keep up to two decimals.
/// Missing or non-finite values read as zero.
///
/// ```
/// use contracts::dashboards::d410_campaign_report::format::format_compact;
/// assert_eq!(format_compact(Some(999.0)), "999");
/// assert_eq!(format_compact(Some(1000.0)), "1K");
/// assert_eq!(format_compact(Some(1_500_000.0)), "1.5M");
/// ```
pub fn format_compact(value: Option<f64>) -> String {
    let v = value.filter(|v| v.is_finite()).unwrap_or(0.0);

    if round_to_hundredth(v).abs() < 1_000.0 {
        return trim_fraction(&format!("{:.2}", v));
    }

    let thousands = round_to_tenth(v / 1_000.0);
    if thousands.abs() < 1_000.0 {
        return format!("{}K", trim_fraction(&format!("{:.1}", thousands)));
    }
    let millions = round_to_tenth(v / 1_000_000.0);
    format!("{}M", trim_fraction(&format!("{:.1}", millions)))
}

/// `$` + [`format_compact`]
pub fn format_currency_compact(value: Option<f64>) -> String {
    format!("${}", format_compact(value))
}

/// `$` + two fixed decimals
pub fn format_currency_fixed(value: Option<f64>) -> String {
    let v = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    format!("${:.2}", v)
}

fn round_to_hundredth(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn trim_fraction(s: &str) -> String {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_thresholds() {
        assert_eq!(format_compact(Some(999.0)), "999");
        assert_eq!(format_compact(Some(1000.0)), "1K");
        assert_eq!(format_compact(Some(1500.0)), "1.5K");
        assert_eq!(format_compact(Some(10_000.0)), "10K");
        assert_eq!(format_compact(Some(1_500_000.0)), "1.5M");
        assert_eq!(format_compact(Some(2_000_000.0)), "2M");
    }

    #[test]
    fn test_format_compact_rounding() {
        assert_eq!(format_compact(Some(1_049.0)), "1K");
        assert_eq!(format_compact(Some(1_050.0)), "1.1K");
        // Rounds up into the next unit instead of printing "1000K"
        assert_eq!(format_compact(Some(999_960.0)), "1M");
        assert_eq!(format_compact(Some(12.5)), "12.5");
        assert_eq!(format_compact(Some(12.346)), "12.35");
    }

    #[test]
    fn test_format_compact_rounds_before_choosing_unit() {
        assert_eq!(format_compact(Some(999.996)), "1K");
        assert_eq!(format_compact(Some(-999.996)), "-1K");
        assert_eq!(format_compact(Some(999.99)), "999.99");
    }

    #[test]
    fn test_format_compact_missing_and_negative() {
        assert_eq!(format_compact(None), "0");
        assert_eq!(format_compact(Some(f64::NAN)), "0");
        assert_eq!(format_compact(Some(-0.001)), "0");
        assert_eq!(format_compact(Some(-2500.0)), "-2.5K");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency_compact(Some(500.0)), "$500");
        assert_eq!(format_currency_compact(Some(12_300.0)), "$12.3K");
        assert_eq!(format_currency_fixed(Some(3.456)), "$3.46");
        assert_eq!(format_currency_fixed(None), "$0.00");
    }
}
