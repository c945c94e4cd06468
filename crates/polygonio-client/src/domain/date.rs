use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Calendar date rendered as `YYYY-MM-DD`.
///
/// Month and day are zero padded to two characters. No calendar checks are
/// made: `CalendarDate::new(2021, 13, 40)` renders as `2021-13-40`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    pub fn rendered(self) -> String {
        self.to_string()
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<time::Date> for CalendarDate {
    fn from(value: time::Date) -> Self {
        Self::new(
            value.year(),
            u32::from(u8::from(value.month())),
            u32::from(value.day()),
        )
    }
}
