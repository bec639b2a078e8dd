use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local timestamp, truncated to whole seconds (the precision the
/// stores persist).
pub fn now() -> NaiveDateTime {
    use chrono::Timelike;
    let ts = Local::now().naive_local();
    ts.with_nanosecond(0).unwrap_or(ts)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a date field leniently: empty or malformed input falls back to
/// `fallback` instead of erroring (the dashboard must keep rendering even
/// over hand-edited files).
pub fn parse_date_or(s: &str, fallback: NaiveDate) -> NaiveDate {
    parse_date(s.trim()).unwrap_or(fallback)
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    // Hosted tables hand timestamps back in ISO `T` form, sometimes with
    // fractional seconds; the CSV tables use the space form.
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn parse_timestamp_or(s: &str, fallback: NaiveDateTime) -> NaiveDateTime {
    parse_timestamp(s.trim()).unwrap_or(fallback)
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Signed day count from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
