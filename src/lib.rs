//! Headless calendar engine: month day-grids, single/multiple/range
//! selection policies, disabled-day rules and arrow-key navigation.
//!
//! The host owns rendering, focus side effects and all state; every
//! entry point here is a pure function over the values it receives.

pub mod constraints;
pub mod datemath;
pub mod error;
pub mod grid;
pub mod locale;
pub mod nav;
pub mod selection;

pub use constraints::{Constraints, DisabledDate, is_disabled};
pub use error::CalendarError;
pub use grid::{DayCell, DayId, GridBuilder, Week, resolve_center};
pub use locale::{Locale, WeekdayFormat};
pub use nav::{NavDirection, next_focus};
pub use selection::{DateRange, Selection, SelectionOutcome};
