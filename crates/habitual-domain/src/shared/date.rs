use chrono::{Local, NaiveDate};

/// Calendar date format used in storage keys and JSON blobs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the user's local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
