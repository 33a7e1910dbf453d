use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// "Mon 02 Jun 2025" style heading for grouped history output.
pub fn day_heading(d: &NaiveDate) -> String {
    d.format("%a %d %b %Y").to_string()
}
