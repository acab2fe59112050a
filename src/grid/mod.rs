//! Month grid construction.
//!
//! [`GridBuilder::build`] is the host's render input: it walks from
//! the start of the week containing the first of the month to the end
//! of the week containing its last day, annotates every day against
//! the current selection and constraints, and chunks the result into
//! weeks. It is a pure function; calling it twice with the same inputs
//! yields structurally identical output.

mod model;

pub use model::{DayCell, DayId, Week};

use chrono::{Datelike, Local, NaiveDateTime};
use tracing::trace;

use crate::constraints::{Constraints, is_disabled};
use crate::datemath;
use crate::error::CalendarError;
use crate::locale::{Locale, WeekdayFormat};
use crate::selection::Selection;

/// The date a grid centers on when the host passes none explicitly:
/// the selection anchor if there is one, otherwise today.
pub fn resolve_center(
    center: Option<NaiveDateTime>,
    selection: &Selection,
    today: NaiveDateTime,
) -> NaiveDateTime {
    center.or_else(|| selection.anchor()).unwrap_or(today)
}

#[derive(Debug, Clone)]
pub struct GridBuilder {
    center: NaiveDateTime,
    locale: Locale,
    start_of_week: Option<u8>,
    show_days_around: bool,
    select_enabled: bool,
    focused: Option<DayId>,
    today: Option<NaiveDateTime>,
}

impl GridBuilder {
    pub fn new(center: NaiveDateTime) -> Self {
        Self {
            center,
            locale: Locale::default(),
            start_of_week: None,
            show_days_around: true,
            select_enabled: true,
            focused: None,
            today: None,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Overrides the locale's first day of the week (0 = Monday … 6 =
    /// Sunday).
    pub fn with_start_of_week(mut self, week_start: u8) -> Self {
        self.start_of_week = Some(week_start % 7);
        self
    }

    /// When disabled, days belonging to the previous/next month are
    /// filtered out of their weeks and reported via `missing_days`.
    pub fn with_show_days_around(mut self, show: bool) -> Self {
        self.show_days_around = show;
        self
    }

    /// Hosts without a select handler build fully disabled grids.
    pub fn with_select_enabled(mut self, enabled: bool) -> Self {
        self.select_enabled = enabled;
        self
    }

    pub fn with_focused(mut self, focused: Option<DayId>) -> Self {
        self.focused = focused;
        self
    }

    /// Pins "today" instead of reading the local clock, keeping the
    /// build reproducible.
    pub fn with_today(mut self, today: NaiveDateTime) -> Self {
        self.today = Some(today);
        self
    }

    pub fn effective_start_of_week(&self) -> u8 {
        self.start_of_week.unwrap_or(self.locale.start_of_week) % 7
    }

    /// Header labels in grid order, rotated to the effective start of
    /// week.
    pub fn weekday_names(&self, format: WeekdayFormat) -> [&'static str; 7] {
        self.locale
            .rotated_weekday_names(format, self.effective_start_of_week())
    }

    pub fn build(
        &self,
        selection: &Selection,
        constraints: &Constraints,
    ) -> Result<Vec<Week>, CalendarError> {
        let week_start = self.effective_start_of_week();
        let first = datemath::start_of_month(self.center)
            .and_then(|d| datemath::start_of_week(d, week_start))
            .ok_or(CalendarError::InvalidCenter(self.center))?;
        let last = datemath::end_of_month(self.center)
            .and_then(|d| datemath::end_of_week(d, week_start))
            .ok_or(CalendarError::InvalidCenter(self.center))?;
        let today = self.today.unwrap_or_else(|| Local::now().naive_local());

        let mut days = Vec::new();
        let mut day = first;
        // Closed-open walk: the grid ends on the day before `last`'s
        // successor, keeping the day count a multiple of 7.
        while day < last {
            days.push(self.build_day(day, today, selection, constraints));
            day = datemath::add_days(day, 1).ok_or(CalendarError::InvalidCenter(self.center))?;
        }

        let mut weeks = Vec::with_capacity(days.len() / 7);
        for chunk in days.chunks(7) {
            let days_of_week: Vec<DayCell> = if self.show_days_around {
                chunk.to_vec()
            } else {
                chunk
                    .iter()
                    .filter(|d| d.is_current_month)
                    .cloned()
                    .collect()
            };
            // Id from the first day still shown; a week that filtering
            // empties entirely falls back to its first underlying day
            // instead of panicking.
            let first = days_of_week.first().unwrap_or(&chunk[0]);
            let id = format!("week-of-{}", first.id);
            let missing_days = (7 - days_of_week.len()) as u8;
            weeks.push(Week {
                id,
                days: days_of_week,
                missing_days,
            });
        }

        trace!(center = %self.center, weeks = weeks.len(), "built day grid");
        Ok(weeks)
    }

    fn build_day(
        &self,
        date: NaiveDateTime,
        today: NaiveDateTime,
        selection: &Selection,
        constraints: &Constraints,
    ) -> DayCell {
        let id = DayId::from_date(date.date());
        DayCell {
            day_number: date.day(),
            // Month index is enough: one grid never spans the same
            // month of two different years.
            is_current_month: date.month() == self.center.month(),
            is_today: datemath::same_day(date, today),
            is_selected: selection.is_selected(date),
            is_disabled: is_disabled(date, constraints, selection, self.select_enabled),
            is_focused: self.focused.as_ref() == Some(&id),
            date,
            id,
        }
    }
}
