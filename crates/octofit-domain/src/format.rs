//! Display Formatting
//!
//! Number and date rendering shared by every view.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Thousands-separated, up to three fraction digits, trailing zeros dropped.
/// `1234567.5` -> `1,234,567.5`
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Two decimals, e.g. distances
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Plain number without a trailing `.0` for whole values
pub fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// `M/D/YYYY` for RFC 3339 timestamps, naive datetimes or plain dates
pub fn short_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%-m/%-d/%Y").to_string())
}

/// [`short_date`] with the `N/A` placeholder
pub fn date_or_na(raw: Option<&str>) -> String {
    raw.and_then(short_date).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(1234567.5), "1,234,567.5");
        assert_eq!(thousands(-12500.25), "-12,500.25");
        assert_eq!(thousands(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_fixed2_and_plain() {
        assert_eq!(fixed2(0.0), "0.00");
        assert_eq!(fixed2(12.346), "12.35");
        assert_eq!(plain(30.0), "30");
        assert_eq!(plain(2.5), "2.5");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-01-01").as_deref(), Some("1/1/2024"));
        assert_eq!(short_date("2024-03-15T10:30:00Z").as_deref(), Some("3/15/2024"));
        assert_eq!(short_date("2024-03-15T10:30:00.123456").as_deref(), Some("3/15/2024"));
        assert_eq!(short_date("yesterday"), None);
        assert_eq!(date_or_na(None), "N/A");
    }
}
