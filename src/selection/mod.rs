//! Selection policies for the three calendar modes.
//!
//! A [`Selection`] is a plain value owned by the host; clicking a day
//! never mutates it. [`Selection::compute_next`] returns either the
//! replacement value or [`SelectionOutcome::Unchanged`] when the click
//! must be ignored (range span out of bounds).

mod range;

pub use range::DateRange;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::constraints::Constraints;
use crate::datemath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// At most one selected day.
    Single(Option<NaiveDateTime>),
    /// Selected days in click order; membership is by calendar day.
    Multiple(IndexSet<NaiveDate>),
    Range(DateRange),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Updated(Selection),
    /// The click was rejected; the host keeps its current state and
    /// fires no callback.
    Unchanged,
}

impl SelectionOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn into_selection(self) -> Option<Selection> {
        match self {
            Self::Updated(selection) => Some(selection),
            Self::Unchanged => None,
        }
    }
}

impl Selection {
    pub fn single() -> Self {
        Self::Single(None)
    }

    pub fn multiple() -> Self {
        Self::Multiple(IndexSet::new())
    }

    pub fn range() -> Self {
        Self::Range(DateRange::empty())
    }

    pub fn is_selected(&self, date: NaiveDateTime) -> bool {
        match self {
            Self::Single(None) => false,
            Self::Single(Some(selected)) => datemath::same_day(date, *selected),
            Self::Multiple(days) => days.contains(&date.date()),
            Self::Range(range) => range.covers(date),
        }
    }

    /// Number of selected days (endpoints only, for ranges).
    pub fn count(&self) -> usize {
        match self {
            Self::Single(selected) => usize::from(selected.is_some()),
            Self::Multiple(days) => days.len(),
            Self::Range(range) => {
                usize::from(range.start().is_some()) + usize::from(range.end().is_some())
            }
        }
    }

    /// Pure transition: (current state, clicked day) → next state.
    pub fn compute_next(
        &self,
        clicked: NaiveDateTime,
        constraints: &Constraints,
    ) -> SelectionOutcome {
        match self {
            Self::Single(_) => SelectionOutcome::Updated(Self::Single(Some(clicked))),
            Self::Multiple(days) => {
                // Toggle: a selected day clicks off, anything else
                // appends. The selection cap is enforced upstream by
                // the disabled policy, not here.
                let mut next = days.clone();
                let day = clicked.date();
                if !next.shift_remove(&day) {
                    next.insert(day);
                }
                SelectionOutcome::Updated(Self::Multiple(next))
            }
            Self::Range(current) => range::next_range(current, clicked, constraints),
        }
    }

    /// The date the grid centers on when the host gives none: the
    /// single selection, the first selected day, or the range start.
    pub(crate) fn anchor(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Single(selected) => *selected,
            Self::Multiple(days) => days.first().map(|day| day.and_time(NaiveTime::MIN)),
            Self::Range(range) => range.start(),
        }
    }
}
