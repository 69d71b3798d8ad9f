use jiff::{Timestamp, tz::TimeZone};

/// Calendar date of `timestamp` in `tz`, e.g. "14 Oct 2026".
pub fn format_date_in(timestamp: Timestamp, tz: TimeZone) -> String {
    timestamp.to_zoned(tz).strftime("%-d %b %Y").to_string()
}

/// Calendar date of `timestamp` in the viewer's timezone.
pub fn format_local_date(timestamp: Timestamp) -> String {
    format_date_in(timestamp, TimeZone::system())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_month_year() -> anyhow::Result<()> {
        let ts: Timestamp = "2026-10-04T23:30:00Z".parse()?;
        assert_eq!(format_date_in(ts, TimeZone::UTC), "4 Oct 2026");

        let utc_plus_3 = TimeZone::fixed(jiff::tz::offset(3));
        assert_eq!(format_date_in(ts, utc_plus_3), "5 Oct 2026");
        Ok(())
    }
}
