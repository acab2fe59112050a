//! Locale data consumed by the grid builder: default start-of-week and
//! weekday name tables. Tables are Monday-first; rotation to the
//! effective start of week happens at lookup time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayFormat {
    /// Two-letter names ("Mo").
    Min,
    /// Abbreviated names ("Mon").
    #[default]
    Short,
    /// Full names ("Monday").
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    /// Default first day of the week, 0 = Monday … 6 = Sunday.
    pub start_of_week: u8,
    pub weekdays_min: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    pub weekdays_long: [&'static str; 7],
}

impl Locale {
    pub const fn en_us() -> Self {
        Self {
            tag: "en-US",
            start_of_week: 6,
            weekdays_min: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            weekdays_long: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
        }
    }

    pub const fn en_gb() -> Self {
        let mut locale = Self::en_us();
        locale.tag = "en-GB";
        locale.start_of_week = 0;
        locale
    }

    pub const fn de() -> Self {
        Self {
            tag: "de",
            start_of_week: 0,
            weekdays_min: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
            weekdays_short: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
            weekdays_long: [
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
                "Sonntag",
            ],
        }
    }

    /// Monday-first table for the requested format.
    pub fn weekday_names(&self, format: WeekdayFormat) -> [&'static str; 7] {
        match format {
            WeekdayFormat::Min => self.weekdays_min,
            WeekdayFormat::Short => self.weekdays_short,
            WeekdayFormat::Long => self.weekdays_long,
        }
    }

    /// Weekday names rotated so that index 0 is the given start of
    /// week, the order a grid header renders in.
    pub fn rotated_weekday_names(
        &self,
        format: WeekdayFormat,
        week_start: u8,
    ) -> [&'static str; 7] {
        let names = self.weekday_names(format);
        let start = usize::from(week_start % 7);
        let mut rotated = [""; 7];
        for (i, slot) in rotated.iter_mut().enumerate() {
            *slot = names[(start + i) % 7];
        }
        rotated
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}
