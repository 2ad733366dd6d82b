use chrono::NaiveDate;

/// Local calendar date. Only the CLI layer samples the clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Render a date with the configured display format, falling back to ISO.
pub fn format_date(d: &NaiveDate, fmt: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", d.format(fmt)).is_err() {
        return d.format("%Y-%m-%d").to_string();
    }
    out
}
