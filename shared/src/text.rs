use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Removes every `<...>` tag and keeps the text and spacing around it.
#[must_use]
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// Parses the API's timestamp shapes: RFC 3339, `YYYY-MM-DD HH:MM:SS`
/// and bare dates.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// "Friday, March 1, 2024". Unparseable input is shown as-is.
#[must_use]
pub fn format_long_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

/// "March 1, 2024". Unparseable input is shown as-is.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

/// Prices arrive as decimal text; blank fees are not shown at all.
#[must_use]
pub fn format_fee(fee: &str) -> Option<String> {
    let fee = fee.trim();
    (!fee.is_empty()).then(|| format!("R {fee}"))
}

/// Trims and drops blank values so the view never shows empty labels.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_html_keeps_spacing() {
        assert_eq!(strip_html("<p>Hello</p> world"), "Hello world");
        assert_eq!(
            strip_html("<h1 class=\"x\">Title</h1>\n<p>Body <b>bold</b></p>"),
            "Title\nBody bold"
        );
        assert_eq!(strip_html("no tags"), "no tags");
    }

    #[test]
    fn test_strip_html_unclosed_tag_is_kept() {
        assert_eq!(strip_html("a < b"), "a < b");
    }

    #[test]
    fn test_long_date_formats() {
        assert_eq!(
            format_long_date("2024-03-01T10:00:00.000000Z"),
            "Friday, March 1, 2024"
        );
        assert_eq!(format_long_date("2024-03-01 10:00:00"), "Friday, March 1, 2024");
        assert_eq!(format_long_date("2024-03-01"), "Friday, March 1, 2024");
    }

    #[test]
    fn test_short_date_format() {
        assert_eq!(format_date("2023-12-25T08:30:00+02:00"), "December 25, 2023");
    }

    #[test]
    fn test_unparseable_date_is_shown_raw() {
        assert_eq!(format_date(" yesterday "), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_fee() {
        assert_eq!(format_fee("150.00").as_deref(), Some("R 150.00"));
        assert_eq!(format_fee("  "), None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  x ")).as_deref(), Some("x"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    proptest! {
        #[test]
        fn prop_strip_html_leaves_no_tags(s in ".{0,120}") {
            let stripped = strip_html(&s);
            prop_assert!(!HTML_TAG.is_match(&stripped));
        }
    }
}
