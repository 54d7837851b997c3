use chrono::NaiveDate;

/// Format accepted on input.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";
/// Format stored in the roster and shown to the user.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), INPUT_FORMAT).ok()
}

/// `YYYY-MM-DD` → `DD/MM/YYYY`, or `None` when the input does not parse.
pub fn normalize(s: &str) -> Option<String> {
    parse_date(s).map(|d| d.format(DISPLAY_FORMAT).to_string())
}
