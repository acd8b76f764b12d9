use chrono::{Datelike, NaiveDate, Weekday};

/// All occurrences of `weekday` within the given month, ascending.
///
/// These are the only dates eligible for duty scheduling. The walk relies on
/// chrono's calendar arithmetic, so month lengths and leap February come out
/// right without any day-count table. An out-of-range year/month pair yields
/// an empty sequence.
pub fn duty_dates(year: i32, month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| d.weekday() == weekday)
        .collect()
}
