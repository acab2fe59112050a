//! Day-granular date primitives over `chrono`.
//!
//! Week indices run 0 = Monday … 6 = Sunday (chrono's
//! `num_days_from_monday` convention). Anything that can leave the
//! representable date range returns `None` and is surfaced by the
//! caller as a [`CalendarError`](crate::error::CalendarError).

use chrono::{Datelike, Days, Duration, Months, NaiveDateTime, NaiveTime};

/// One day in milliseconds, the unit range spans are measured in.
pub const DAY_MS: i64 = 86_400_000;

/// Fixed English weekday abbreviations, Monday-first.
///
/// Disabled-date weekday tokens are matched against this table no
/// matter which locale the calendar renders with; hosts pass `"Mon"`
/// even on a German calendar. Possibly a latent locale bug, but
/// observable behavior hosts rely on, so it stays.
pub const WEEKDAY_TOKENS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn day_key(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn diff_ms(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (a - b).num_milliseconds()
}

pub fn weekday_token(date: NaiveDateTime) -> &'static str {
    WEEKDAY_TOKENS[date.weekday().num_days_from_monday() as usize]
}

pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.date().and_time(last)
}

pub fn start_of_month(date: NaiveDateTime) -> Option<NaiveDateTime> {
    Some(date.date().with_day(1)?.and_time(NaiveTime::MIN))
}

/// Midnight of the last day of the month.
pub fn end_of_month(date: NaiveDateTime) -> Option<NaiveDateTime> {
    let first = date.date().with_day(1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some(next.pred_opt()?.and_time(NaiveTime::MIN))
}

pub fn start_of_week(date: NaiveDateTime, week_start: u8) -> Option<NaiveDateTime> {
    let offset = (7 + date.weekday().num_days_from_monday() - u32::from(week_start % 7)) % 7;
    let day = date.date().checked_sub_days(Days::new(u64::from(offset)))?;
    Some(day.and_time(NaiveTime::MIN))
}

/// End-of-day timestamp of the last day of the week containing `date`.
pub fn end_of_week(date: NaiveDateTime, week_start: u8) -> Option<NaiveDateTime> {
    let first = start_of_week(date, week_start)?;
    let last = first.date().checked_add_days(Days::new(6))?;
    Some(end_of_day(last.and_time(NaiveTime::MIN)))
}

pub fn add_days(date: NaiveDateTime, delta: i64) -> Option<NaiveDateTime> {
    date.checked_add_signed(Duration::try_days(delta)?)
}

/// Month arithmetic for center navigation; the day of month clamps to
/// what the target month has (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDateTime, delta: i32) -> Option<NaiveDateTime> {
    let day = if delta >= 0 {
        date.date().checked_add_months(Months::new(delta as u32))?
    } else {
        date.date().checked_sub_months(Months::new(delta.unsigned_abs()))?
    };
    Some(day.and_time(date.time()))
}
