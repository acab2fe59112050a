use std::borrow::Borrow;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Stable identity of a day cell: its `YYYY-MM-DD` key. Focus
/// tracking and click lookup go through this id, never through cell
/// positions, so a rebuilt grid keeps referring to the same days.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayId(String);

impl DayId {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn parse(value: &str) -> Result<Self, CalendarError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| CalendarError::InvalidDayId(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for DayId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for DayId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<NaiveDate> for DayId {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// One fully annotated day of the grid. Cells are rebuilt wholesale on
/// every grid computation and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub id: DayId,
    pub date: NaiveDateTime,
    pub day_number: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// `week-of-<first displayed day id>`. A week that day filtering
    /// empties entirely falls back to the id of its first underlying
    /// day.
    pub id: String,
    pub days: Vec<DayCell>,
    /// Padding slots a renderer must fill when days were filtered out.
    pub missing_days: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_id_round_trips_through_parse() {
        let id = DayId::parse("2024-03-05").expect("valid id");
        assert_eq!(id.as_str(), "2024-03-05");
        assert_eq!(
            id.date(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }

    #[test]
    fn day_id_rejects_garbage() {
        assert_eq!(
            DayId::parse("not-a-day"),
            Err(CalendarError::InvalidDayId("not-a-day".to_string()))
        );
        assert!(DayId::parse("2024-13-40").is_err());
    }

    #[test]
    fn day_id_serializes_as_plain_string() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let json = serde_json::to_string(&DayId::from(date)).expect("serialize");
        assert_eq!(json, "\"2024-03-05\"");
    }
}
