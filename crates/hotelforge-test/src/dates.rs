use chrono::NaiveDate;

/// A day in June 2026. Fixtures stay inside one month.
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, day).expect("fixture day must exist in June")
}
