//! Interactivity constraints and the disabled-day policy.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::datemath;
use crate::selection::Selection;

/// One entry of the disabled-dates list: an exact calendar day or a
/// recurring weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisabledDate {
    Day(NaiveDate),
    Weekday(Weekday),
}

impl DisabledDate {
    /// Parses a weekday token. Tokens are the fixed English
    /// abbreviations from [`datemath::WEEKDAY_TOKENS`] regardless of
    /// the calendar locale: a German calendar still takes `"Mon"`.
    pub fn from_token(token: &str) -> Option<Self> {
        let index = datemath::WEEKDAY_TOKENS
            .iter()
            .position(|t| *t == token)?;
        Weekday::try_from(index as u8).ok().map(Self::Weekday)
    }

    pub fn matches(&self, date: NaiveDateTime) -> bool {
        match self {
            Self::Day(day) => *day == date.date(),
            Self::Weekday(weekday) => date.weekday() == *weekday,
        }
    }
}

/// Everything that can make a day non-interactive, plus the
/// range-policy options the host passes alongside them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub min_date: Option<NaiveDateTime>,
    pub max_date: Option<NaiveDateTime>,
    pub disabled_dates: Vec<DisabledDate>,
    /// Multiple mode only: once this many days are selected, every
    /// unselected day becomes non-interactive.
    pub max_selection_count: Option<usize>,
    /// Range mode only: spans outside these bounds are silent no-ops.
    pub min_range_span: Option<Duration>,
    pub max_range_span: Option<Duration>,
    /// Range mode only: adjust the nearer endpoint of a closed range
    /// instead of restarting.
    pub proximity_selection: bool,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_date(mut self, date: NaiveDateTime) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn with_max_date(mut self, date: NaiveDateTime) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn disable_day(mut self, day: NaiveDate) -> Self {
        self.disabled_dates.push(DisabledDate::Day(day));
        self
    }

    pub fn disable_weekday(mut self, weekday: Weekday) -> Self {
        self.disabled_dates.push(DisabledDate::Weekday(weekday));
        self
    }

    pub fn with_disabled_dates(mut self, dates: Vec<DisabledDate>) -> Self {
        self.disabled_dates = dates;
        self
    }

    pub fn with_max_selection_count(mut self, count: usize) -> Self {
        self.max_selection_count = Some(count);
        self
    }

    pub fn with_min_range_span(mut self, span: Duration) -> Self {
        self.min_range_span = Some(span);
        self
    }

    pub fn with_max_range_span(mut self, span: Duration) -> Self {
        self.max_range_span = Some(span);
        self
    }

    pub fn with_min_range_days(self, days: i64) -> Self {
        self.with_min_range_span(Duration::days(days))
    }

    pub fn with_max_range_days(self, days: i64) -> Self {
        self.with_max_range_span(Duration::days(days))
    }

    pub fn with_proximity_selection(mut self, enabled: bool) -> Self {
        self.proximity_selection = enabled;
        self
    }
}

/// Whether a day cell is interactive. Rules run in order and
/// short-circuit on the first hit:
///
/// 1. selection is switched off entirely,
/// 2. before start-of-day of `min_date`,
/// 3. after end-of-day of `max_date`,
/// 4. listed in `disabled_dates` (exact day or weekday),
/// 5. Multiple mode at its cap, unless the day is already selected
///    (toggle-off stays possible).
pub fn is_disabled(
    date: NaiveDateTime,
    constraints: &Constraints,
    selection: &Selection,
    select_enabled: bool,
) -> bool {
    if !select_enabled {
        return true;
    }

    if let Some(min) = constraints.min_date
        && date < datemath::start_of_day(min)
    {
        return true;
    }

    if let Some(max) = constraints.max_date
        && date > datemath::end_of_day(max)
    {
        return true;
    }

    if constraints.disabled_dates.iter().any(|d| d.matches(date)) {
        return true;
    }

    if matches!(selection, Selection::Multiple(_))
        && constraints
            .max_selection_count
            .is_some_and(|cap| selection.count() >= cap)
        && !selection.is_selected(date)
    {
        return true;
    }

    false
}
