//! # Recurrence Rule Kinds
//!
//! RFC 5545 Section 3.3.10: the `FREQ` and weekday vocabularies.
//!
//! | Kind | Values | Extra data |
//! |------|--------|------------|
//! | `Frequency` | SECONDLY … YEARLY | nominal period in seconds |
//! | `Weekday` | MO … SU | ISO-8601 day number, English name |

use crate::closed_enumeration;
use crate::enumeration::ClosedEnumeration;

// =============================================================================
// FREQUENCY
// =============================================================================

/// Nominal seconds in an average Gregorian month (30.436875 days).
pub const SECONDS_PER_MONTH: u32 = 2_629_746;

/// Nominal seconds in an average Gregorian year (365.2425 days).
pub const SECONDS_PER_YEAR: u32 = 31_556_952;

closed_enumeration! {
    /// Recurrence frequency (`FREQ=`).
    #[derive(Copy)]
    pub struct Frequency {
        /// Nominal length of one period, in seconds.
        pub period_seconds: u32,
    }
    values {
        SECONDLY = "SECONDLY" { period_seconds: 1 },
        MINUTELY = "MINUTELY" { period_seconds: 60 },
        HOURLY = "HOURLY" { period_seconds: 3_600 },
        DAILY = "DAILY" { period_seconds: 86_400 },
        WEEKLY = "WEEKLY" { period_seconds: 604_800 },
        MONTHLY = "MONTHLY" { period_seconds: SECONDS_PER_MONTH },
        YEARLY = "YEARLY" { period_seconds: SECONDS_PER_YEAR },
    }
}

impl Frequency {
    /// Check if one period is shorter than a day.
    #[must_use]
    pub fn is_sub_daily(&self) -> bool {
        self.period_seconds < Self::DAILY.period_seconds
    }

    /// Get the next coarser frequency, if any.
    #[must_use]
    pub fn coarser(&self) -> Option<Frequency> {
        let position = self.position()?;
        Self::declared().get(position + 1).copied()
    }

    /// Get the next finer frequency, if any.
    #[must_use]
    pub fn finer(&self) -> Option<Frequency> {
        let position = self.position()?;
        position
            .checked_sub(1)
            .and_then(|index| Self::declared().get(index).copied())
    }
}

// =============================================================================
// WEEKDAY
// =============================================================================

closed_enumeration! {
    /// Day of the week as written in `BYDAY=` and `WKST=`.
    #[derive(Copy)]
    pub struct Weekday {
        /// ISO-8601 day number, Monday = 1.
        pub iso_number: u8,
        /// English name of the day.
        pub full_name: &'static str,
    }
    values {
        MONDAY = "MO" { iso_number: 1, full_name: "Monday" },
        TUESDAY = "TU" { iso_number: 2, full_name: "Tuesday" },
        WEDNESDAY = "WE" { iso_number: 3, full_name: "Wednesday" },
        THURSDAY = "TH" { iso_number: 4, full_name: "Thursday" },
        FRIDAY = "FR" { iso_number: 5, full_name: "Friday" },
        SATURDAY = "SA" { iso_number: 6, full_name: "Saturday" },
        SUNDAY = "SU" { iso_number: 7, full_name: "Sunday" },
    }
}

impl Weekday {
    /// Look up a weekday by ISO-8601 number (1 = Monday … 7 = Sunday).
    #[must_use]
    pub fn from_iso(number: u8) -> Option<Weekday> {
        Self::all().find(|day| day.iso_number == number)
    }

    /// Get the following day, wrapping Sunday to Monday.
    #[must_use]
    pub fn succ(&self) -> Weekday {
        let next = self.iso_number % 7 + 1;
        Self::from_iso(next).unwrap_or(Self::MONDAY)
    }

    /// Check if the day falls on a weekend.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        self.iso_number >= 6
    }
}

// =============================================================================
// TESTS
// =============================================================================
