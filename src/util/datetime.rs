use std::fmt::{self, Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// A calendar date and UTC time with second precision.
///
/// Used for the `dcterms:modified` package entry and zip entry timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct UtcDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl UtcDateTime {
    /// Returns the current date and UTC time.
    pub(crate) fn now() -> Self {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs() as i64,
            Err(error) => -(error.duration().as_secs() as i64),
        };
        Self::from_unix(secs)
    }

    /// Converts seconds relative to `1970-01-01T00:00:00Z`.
    pub(crate) fn from_unix(secs: i64) -> Self {
        const SECS_PER_DAY: i64 = 86_400;

        let (year, month, day) = civil_from_days(secs.div_euclid(SECS_PER_DAY));
        let time = secs.rem_euclid(SECS_PER_DAY) as u32;

        Self {
            year,
            month,
            day,
            hour: (time / 3600) as u8,
            minute: (time / 60 % 60) as u8,
            second: (time % 60) as u8,
        }
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> u8 {
        self.month
    }

    pub(crate) fn day(&self) -> u8 {
        self.day
    }

    pub(crate) fn hour(&self) -> u8 {
        self.hour
    }

    pub(crate) fn minute(&self) -> u8 {
        self.minute
    }

    pub(crate) fn second(&self) -> u8 {
        self.second
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0>4}-{:0>2}-{:0>2}T{:0>2}:{:0>2}:{:0>2}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Proleptic Gregorian `(year, month, day)` for a count of days since 1970-01-01.
///
/// Years are counted from March so the leap day falls at the end of each
/// 400-year cycle.
fn civil_from_days(days: i64) -> (i32, u8, u8) {
    const DAYS_PER_CYCLE: i64 = 146_097;
    // Days from 0000-03-01 to 1970-01-01
    const EPOCH_OFFSET: i64 = 719_468;

    let shifted = days + EPOCH_OFFSET;
    let cycle = shifted.div_euclid(DAYS_PER_CYCLE);
    let day_of_cycle = shifted.rem_euclid(DAYS_PER_CYCLE);
    let year_of_cycle =
        (day_of_cycle - day_of_cycle / 1460 + day_of_cycle / 36_524 - day_of_cycle / 146_096) / 365;
    let day_of_year = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
    let march_month = (5 * day_of_year + 2) / 153;

    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 { march_month + 3 } else { march_month - 9 };
    let year = year_of_cycle + cycle * 400 + i64::from(month <= 2);

    (year as i32, month as u8, day as u8)
}
