//! Date formatting helpers shared by the list screens.

use chrono::NaiveDate;

/// Today's date as `YYYY-MM-DD`, from the browser clock.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Format an ISO date (`2024-05-01`, or a full timestamp) as `May 01, 2024`.
/// Unparseable input is shown as-is; the backend owns these strings.
pub fn format_display_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Trim an ISO timestamp down to its date part.
pub fn date_only(datetime_str: &str) -> String {
    datetime_str
        .split('T')
        .next()
        .unwrap_or(datetime_str)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-05-01"), "May 01, 2024");
        assert_eq!(
            format_display_date("2024-12-31T23:59:59.000Z"),
            "Dec 31, 2024"
        );
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(date_only("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_invalid_passthrough() {
        assert_eq!(format_display_date("soon"), "soon");
    }
}
