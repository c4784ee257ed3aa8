use chrono::NaiveDateTime;

/// Current UTC time, as stored in timestamp columns
pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
