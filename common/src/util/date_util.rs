use chrono::{DateTime, Duration, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// `[start, end)` of the UTC day containing `at`.
pub fn day_bounds(at: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = at.date_naive().and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    (start, start + Duration::days(1))
}

/// Whether `day` lies in `[start, end]`; an open end never expires.
pub fn date_in_range(day: NaiveDate, start: NaiveDate, end: Option<NaiveDate>) -> bool {
    day >= start && end.is_none_or(|end| day <= end)
}
