//! Arrow-key traversal of the flat day sequence.
//!
//! The engine holds no focus state: the host passes the currently
//! focused day id and stores whatever comes back. A focus id that is
//! no longer in the sequence is not an error; grids get rebuilt
//! between keystrokes and the focus simply stays put.

use tracing::trace;

use crate::grid::{DayCell, DayId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

#[cfg(feature = "crossterm")]
impl NavDirection {
    pub fn from_key(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Computes the day that should receive focus after an arrow key.
///
/// Up/Down jump a whole week with clamping; a disabled landing cell
/// recovers by scanning back toward the origin for the first enabled
/// day. Left/Right move one day with clamping and give up outright on
/// a disabled neighbor. The asymmetry is deliberate: horizontal
/// movement past a disabled day would skip into a different week.
pub fn next_focus(
    days: &[DayCell],
    focused: Option<&DayId>,
    direction: NavDirection,
) -> Option<DayId> {
    let focused = focused?;
    let Some(index) = days.iter().position(|d| &d.id == focused) else {
        trace!(id = %focused, "focused day not in current grid, focus unchanged");
        return Some(focused.clone());
    };

    let target = match direction {
        NavDirection::Up => {
            let landing = index.saturating_sub(7);
            let mut day = &days[landing];
            if day.is_disabled {
                // Walk forward toward the origin; the origin itself is
                // enabled since it was focusable.
                for candidate in &days[landing + 1..=index] {
                    day = candidate;
                    if !day.is_disabled {
                        break;
                    }
                }
            }
            day
        }
        NavDirection::Down => {
            let landing = (index + 7).min(days.len().saturating_sub(1));
            let mut day = &days[landing];
            if day.is_disabled {
                for candidate in days[index..landing].iter().rev() {
                    day = candidate;
                    if !day.is_disabled {
                        break;
                    }
                }
            }
            day
        }
        NavDirection::Left => {
            let day = &days[index.saturating_sub(1)];
            if day.is_disabled {
                return Some(focused.clone());
            }
            day
        }
        NavDirection::Right => {
            let day = &days[(index + 1).min(days.len().saturating_sub(1))];
            if day.is_disabled {
                return Some(focused.clone());
            }
            day
        }
    };

    Some(target.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, NaiveTime};

    fn make_days(len: usize, disabled: &[usize]) -> Vec<DayCell> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        (0..len)
            .map(|i| {
                let date = base + chrono::Duration::days(i as i64);
                DayCell {
                    id: DayId::from_date(date),
                    date: date.and_time(NaiveTime::MIN),
                    day_number: date.day(),
                    is_current_month: true,
                    is_today: false,
                    is_selected: false,
                    is_disabled: disabled.contains(&i),
                    is_focused: false,
                }
            })
            .collect()
    }

    fn id_at(days: &[DayCell], index: usize) -> DayId {
        days[index].id.clone()
    }

    fn index_of(days: &[DayCell], id: &DayId) -> usize {
        days.iter().position(|d| &d.id == id).expect("id in grid")
    }

    #[test]
    fn up_moves_one_week_back() {
        let days = make_days(42, &[]);
        let focus = id_at(&days, 10);
        let next = next_focus(&days, Some(&focus), NavDirection::Up).expect("focus");
        assert_eq!(index_of(&days, &next), 3);
    }

    #[test]
    fn up_recovers_forward_from_disabled_landing() {
        let days = make_days(42, &[3, 4, 5, 6]);
        let focus = id_at(&days, 10);
        let next = next_focus(&days, Some(&focus), NavDirection::Up).expect("focus");
        assert_eq!(index_of(&days, &next), 7);
    }

    #[test]
    fn up_clamps_at_the_top() {
        let days = make_days(42, &[]);
        let focus = id_at(&days, 3);
        let next = next_focus(&days, Some(&focus), NavDirection::Up).expect("focus");
        assert_eq!(index_of(&days, &next), 0);
    }

    #[test]
    fn up_stays_on_origin_when_whole_column_is_disabled() {
        let days = make_days(42, &[3, 4, 5, 6, 7, 8, 9]);
        let focus = id_at(&days, 10);
        let next = next_focus(&days, Some(&focus), NavDirection::Up).expect("focus");
        assert_eq!(index_of(&days, &next), 10);
    }

    #[test]
    fn down_moves_one_week_forward_and_recovers_backward() {
        let days = make_days(42, &[17]);
        let focus = id_at(&days, 10);
        let next = next_focus(&days, Some(&focus), NavDirection::Down).expect("focus");
        assert_eq!(index_of(&days, &next), 16);
    }

    #[test]
    fn down_clamps_at_the_bottom() {
        let days = make_days(42, &[]);
        let focus = id_at(&days, 40);
        let next = next_focus(&days, Some(&focus), NavDirection::Down).expect("focus");
        assert_eq!(index_of(&days, &next), 41);
    }

    #[test]
    fn left_and_right_move_one_day() {
        let days = make_days(42, &[]);
        let focus = id_at(&days, 10);
        let left = next_focus(&days, Some(&focus), NavDirection::Left).expect("focus");
        assert_eq!(index_of(&days, &left), 9);
        let right = next_focus(&days, Some(&focus), NavDirection::Right).expect("focus");
        assert_eq!(index_of(&days, &right), 11);
    }

    #[test]
    fn horizontal_movement_gives_up_on_disabled_neighbor() {
        // No scan-and-recover sideways, unlike Up/Down.
        let days = make_days(42, &[9, 11]);
        let focus = id_at(&days, 10);
        let left = next_focus(&days, Some(&focus), NavDirection::Left).expect("focus");
        assert_eq!(left, focus);
        let right = next_focus(&days, Some(&focus), NavDirection::Right).expect("focus");
        assert_eq!(right, focus);
    }

    #[test]
    fn horizontal_movement_clamps_at_the_edges() {
        let days = make_days(42, &[]);
        let first = id_at(&days, 0);
        let next = next_focus(&days, Some(&first), NavDirection::Left).expect("focus");
        assert_eq!(next, first);
        let last = id_at(&days, 41);
        let next = next_focus(&days, Some(&last), NavDirection::Right).expect("focus");
        assert_eq!(next, last);
    }

    #[test]
    fn missing_focus_or_unknown_id_change_nothing() {
        let days = make_days(42, &[]);
        assert_eq!(next_focus(&days, None, NavDirection::Up), None);

        let stale = DayId::from_date(NaiveDate::from_ymd_opt(1999, 1, 1).expect("valid date"));
        let next = next_focus(&days, Some(&stale), NavDirection::Down).expect("focus");
        assert_eq!(next, stale);
    }
}
