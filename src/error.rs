use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The center date cannot anchor a month grid. `chrono` makes
    /// NaN-style dates unrepresentable, so the remaining failure is
    /// arithmetic past the supported date range.
    #[error("the center of the calendar ({0}) is an invalid grid anchor")]
    InvalidCenter(NaiveDateTime),

    #[error("`{0}` is not a YYYY-MM-DD day id")]
    InvalidDayId(String),
}
