//! Dependency-free conversion of seconds since the Unix epoch into calendar dates.

const SECONDS_IN_DAY: u64 = 86_400;

/// 9999-12-31T23:59:59Z, the last instant with a four digit year.
pub const MAX_UNIX_SECONDS: u64 = 253_402_300_799;

const DAYS_IN_MONTH: [u64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    /// The year, `1970..=9999`.
    pub year: u32,
    /// The month, `1..=12`.
    pub month: u8,
    /// The day of the month, `1..=31`.
    pub day: u8,
}

/// Returns whether `year` has a 29th of February.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: u32) -> u64 {
    if is_leap_year(year) { 366 } else { 365 }
}

impl Date {
    /// Returns the date `seconds` after 1970-01-01T00:00:00Z.
    ///
    /// The time of day is ignored.
    /// Instants after [`MAX_UNIX_SECONDS`] are clamped to 9999-12-31.
    ///
    /// ```rust
    /// use veecle_log_output::calendar::Date;
    ///
    /// let date = Date::from_unix_seconds(951_782_400);
    /// assert_eq!(date, Date { year: 2000, month: 2, day: 29 });
    /// ```
    pub fn from_unix_seconds(seconds: u64) -> Self {
        let mut seconds = seconds.min(MAX_UNIX_SECONDS);
        let mut year = 1970;
        loop {
            let year_length = days_in_year(year) * SECONDS_IN_DAY;
            if year_length > seconds {
                break;
            }
            seconds -= year_length;
            year += 1;
        }

        let mut month = 1;
        for (index, days) in DAYS_IN_MONTH.into_iter().enumerate() {
            let days = if index == 1 && is_leap_year(year) {
                days + 1
            } else {
                days
            };
            let month_length = days * SECONDS_IN_DAY;
            if month_length > seconds {
                break;
            }
            seconds -= month_length;
            month += 1;
        }

        Self {
            year,
            month,
            day: 1 + (seconds / SECONDS_IN_DAY) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Date, MAX_UNIX_SECONDS, is_leap_year};
    use test_case::test_case;

    const DAY: u64 = 86_400;

    #[test_case(1970, false)]
    #[test_case(1972, true)]
    #[test_case(1900, false)]
    #[test_case(2000, true)]
    #[test_case(2023, false)]
    #[test_case(2024, true)]
    #[test_case(2100, false)]
    #[test_case(2400, true)]
    fn leap_years(year: u32, leap: bool) {
        assert_eq!(is_leap_year(year), leap);
    }

    #[test_case(0, 1970, 1, 1; "epoch")]
    #[test_case(DAY - 1, 1970, 1, 1; "end of first day")]
    #[test_case(31 * DAY, 1970, 2, 1; "first of february")]
    #[test_case(365 * DAY - 1, 1970, 12, 31; "new years eve")]
    #[test_case(365 * DAY, 1971, 1, 1; "second year")]
    #[test_case(951_782_399, 2000, 2, 28; "before century leap day")]
    #[test_case(951_782_400, 2000, 2, 29; "century leap day")]
    #[test_case(951_868_800, 2000, 3, 1; "after century leap day")]
    #[test_case(978_220_800, 2000, 12, 31; "last day of leap year")]
    #[test_case(1_709_164_800, 2024, 2, 29; "leap day 2024")]
    #[test_case(4_107_456_000, 2100, 2, 28; "non leap century")]
    #[test_case(4_107_542_400, 2100, 3, 1; "march of non leap century")]
    fn dates(seconds: u64, year: u32, month: u8, day: u8) {
        assert_eq!(
            Date::from_unix_seconds(seconds),
            Date { year, month, day }
        );
    }

    #[test]
    fn consecutive_days() {
        // Walks day by day through two leap cycles including the 2000 and 2100 centuries.
        let mut previous = Date::from_unix_seconds(0);
        for day in 1..(160 * 366) {
            let date = Date::from_unix_seconds(day * DAY);
            assert!(date > previous, "{date:?} follows {previous:?}");
            if date.day != previous.day + 1 {
                assert_eq!(date.day, 1, "{date:?} follows {previous:?}");
            }
            previous = date;
        }
    }

    #[test_case(MAX_UNIX_SECONDS - DAY + 1; "start of last day")]
    #[test_case(MAX_UNIX_SECONDS; "last second")]
    #[test_case(MAX_UNIX_SECONDS + 1; "year ten thousand")]
    #[test_case(400_000_000_000; "five digit year")]
    #[test_case(u64::MAX; "u64 max")]
    fn far_future_is_clamped(seconds: u64) {
        assert_eq!(
            Date::from_unix_seconds(seconds),
            Date {
                year: 9999,
                month: 12,
                day: 31
            }
        );
    }
}
