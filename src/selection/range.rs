use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Selection, SelectionOutcome};
use crate::constraints::Constraints;
use crate::datemath;

/// A day range under construction or complete.
///
/// Well-formedness is guaranteed by construction: `end` is only ever
/// present together with `start`, and a closed range is ordered. There
/// is no post-hoc validation anywhere else in the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRange")]
pub struct DateRange {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn open(start: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Panics if `end < start`; callers order the endpoints first.
    pub fn closed(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(start <= end, "range start must not be after its end");
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Elapsed time between the endpoints once both are present.
    pub fn span(&self) -> Option<Duration> {
        Some(self.end? - self.start?)
    }

    /// Same-day containment in `[start, end]`. An open range covers
    /// exactly its start day.
    pub(crate) fn covers(&self, date: NaiveDateTime) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                let day = date.date();
                start.date() <= day && day <= end.date()
            }
            (Some(start), None) => datemath::same_day(date, start),
            (None, _) => false,
        }
    }
}

#[derive(Deserialize)]
struct UncheckedRange {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl TryFrom<UncheckedRange> for DateRange {
    type Error = String;

    fn try_from(raw: UncheckedRange) -> Result<Self, Self::Error> {
        match (raw.start, raw.end) {
            (None, Some(_)) => Err("range has an end but no start".to_string()),
            (Some(start), Some(end)) if end < start => {
                Err(format!("range start {start} is after its end {end}"))
            }
            (start, end) => Ok(Self { start, end }),
        }
    }
}

/// Range transition for a day click, plus span validation. A rejected
/// span leaves the state untouched and fires nothing.
pub(super) fn next_range(
    current: &DateRange,
    clicked: NaiveDateTime,
    constraints: &Constraints,
) -> SelectionOutcome {
    let candidate = if constraints.proximity_selection {
        by_proximity(current, clicked)
    } else {
        default_transition(current, clicked)
    };

    if let (Some(start), Some(end)) = (candidate.start, candidate.end) {
        let span = datemath::diff_ms(end, start).abs();
        let below_min = constraints
            .min_range_span
            .is_some_and(|min| span < min.num_milliseconds());
        let above_max = constraints
            .max_range_span
            .is_some_and(|max| span > max.num_milliseconds());
        if below_min || above_max {
            debug!(span_ms = span, "range span outside allowed bounds, click ignored");
            return SelectionOutcome::Unchanged;
        }
    }

    SelectionOutcome::Updated(Selection::Range(candidate))
}

fn default_transition(current: &DateRange, clicked: NaiveDateTime) -> DateRange {
    match (current.start, current.end) {
        (Some(start), None) => {
            if clicked < start {
                DateRange::closed(clicked, start)
            } else {
                DateRange::closed(start, clicked)
            }
        }
        // No range yet, or the previous range is already closed:
        // the click starts over instead of extending.
        _ => DateRange::open(clicked),
    }
}

fn by_proximity(current: &DateRange, clicked: NaiveDateTime) -> DateRange {
    match (current.start, current.end) {
        (Some(start), Some(end)) => {
            // Strict comparison: on an exact tie `start` stays fixed
            // and the click replaces `end`. Observable behavior, keep
            // it even though it looks arbitrary.
            let move_start = datemath::diff_ms(clicked, end).abs()
                > datemath::diff_ms(clicked, start).abs();
            if move_start {
                DateRange::closed(clicked, end)
            } else {
                DateRange::closed(start, clicked)
            }
        }
        (Some(start), None) if clicked < start => DateRange::open(clicked),
        _ => default_transition(current, clicked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .expect("valid date")
            .and_time(NaiveTime::MIN)
    }

    fn updated_range(outcome: SelectionOutcome) -> DateRange {
        match outcome {
            SelectionOutcome::Updated(Selection::Range(range)) => range,
            other => panic!("expected an updated range, got {other:?}"),
        }
    }

    #[test]
    fn default_mode_click_sequence() {
        let constraints = Constraints::default();

        let first = updated_range(next_range(&DateRange::empty(), day(10), &constraints));
        assert_eq!(first, DateRange::open(day(10)));

        let second = updated_range(next_range(&first, day(15), &constraints));
        assert_eq!(second, DateRange::closed(day(10), day(15)));

        // A closed range restarts on the next click.
        let third = updated_range(next_range(&second, day(5), &constraints));
        assert_eq!(third, DateRange::open(day(5)));
    }

    #[test]
    fn default_mode_swaps_earlier_click() {
        let constraints = Constraints::default();
        let open = DateRange::open(day(10));
        let range = updated_range(next_range(&open, day(4), &constraints));
        assert_eq!(range, DateRange::closed(day(4), day(10)));
    }

    #[test]
    fn min_span_rejects_short_range() {
        let constraints = Constraints::default().with_min_range_days(2);
        let open = DateRange::open(day(10));
        let outcome = next_range(&open, day(11), &constraints);
        assert_eq!(outcome, SelectionOutcome::Unchanged);

        // Two full days pass.
        let ok = next_range(&open, day(12), &constraints);
        assert_eq!(
            updated_range(ok),
            DateRange::closed(day(10), day(12))
        );
    }

    #[test]
    fn max_span_rejects_long_range() {
        let constraints = Constraints::default().with_max_range_days(3);
        let open = DateRange::open(day(10));
        assert_eq!(
            next_range(&open, day(20), &constraints),
            SelectionOutcome::Unchanged
        );
    }

    #[test]
    fn span_check_does_not_apply_to_open_ranges() {
        let constraints = Constraints::default().with_min_range_days(5);
        let outcome = next_range(&DateRange::empty(), day(10), &constraints);
        assert_eq!(updated_range(outcome), DateRange::open(day(10)));
    }

    #[test]
    fn proximity_moves_nearer_endpoint() {
        let constraints = Constraints::default().with_proximity_selection(true);
        let closed = DateRange::closed(day(10), day(20));

        // Click near the end: end follows the click.
        let near_end = updated_range(next_range(&closed, day(18), &constraints));
        assert_eq!(near_end, DateRange::closed(day(10), day(18)));

        // Click near the start: start follows the click.
        let near_start = updated_range(next_range(&closed, day(12), &constraints));
        assert_eq!(near_start, DateRange::closed(day(12), day(20)));

        // Click outside, past the end: still nearer the end, so the
        // range extends.
        let past_end = updated_range(next_range(&closed, day(25), &constraints));
        assert_eq!(past_end, DateRange::closed(day(10), day(25)));
    }

    #[test]
    fn proximity_tie_replaces_end() {
        let constraints = Constraints::default().with_proximity_selection(true);
        let closed = DateRange::closed(day(10), day(14));
        // 2024-03-12 is equidistant from both endpoints.
        let range = updated_range(next_range(&closed, day(12), &constraints));
        assert_eq!(range, DateRange::closed(day(10), day(12)));
    }

    #[test]
    fn proximity_click_before_open_start_restarts() {
        let constraints = Constraints::default().with_proximity_selection(true);
        let open = DateRange::open(day(10));
        let range = updated_range(next_range(&open, day(4), &constraints));
        assert_eq!(range, DateRange::open(day(4)));
    }

    #[test]
    fn proximity_falls_back_to_default_for_later_click() {
        let constraints = Constraints::default().with_proximity_selection(true);
        let open = DateRange::open(day(10));
        let range = updated_range(next_range(&open, day(15), &constraints));
        assert_eq!(range, DateRange::closed(day(10), day(15)));
    }

    #[test]
    fn covers_is_inclusive_by_day() {
        let range = DateRange::closed(day(10), day(12));
        assert!(range.covers(day(10)));
        assert!(range.covers(day(11)));
        assert!(range.covers(day(12)));
        assert!(!range.covers(day(13)));

        let open = DateRange::open(day(10));
        assert!(open.covers(day(10)));
        assert!(!open.covers(day(11)));
    }

    #[test]
    #[should_panic(expected = "range start must not be after its end")]
    fn closed_range_rejects_inverted_endpoints() {
        let _ = DateRange::closed(day(12), day(10));
    }

    #[test]
    fn deserialization_rejects_end_without_start() {
        let raw = r#"{"start":null,"end":"2024-03-10T00:00:00"}"#;
        assert!(serde_json::from_str::<DateRange>(raw).is_err());
    }
}
