//! Time and date validation
//!
//! Out-of-range fields are clamped to the nearest valid value rather than
//! rejected. Clamping always saturates to the maximum; it never wraps.

use core::fmt;

use rtcterm_hal::{Date, HourFormat, Time};
use rtcterm_protocol::{DateFields, TimeFields};

/// Result of validating a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Checked<T> {
    /// Value was already valid
    Valid(T),
    /// One or more fields were clamped
    Clamped(T),
}

impl<T: Copy> Checked<T> {
    /// The value to write, clamped or not
    pub fn value(&self) -> T {
        match self {
            Checked::Valid(v) | Checked::Clamped(v) => *v,
        }
    }

    pub fn was_clamped(&self) -> bool {
        matches!(self, Checked::Clamped(_))
    }
}

/// Leap year test for a two-digit year
///
/// Divisibility by 4 only. Within 2000-2099 this matches the Gregorian rule.
pub const fn is_leap_year(year: u8) -> bool {
    year % 4 == 0
}

/// Number of days in `month` (1-12) of `year` (0-99)
pub const fn days_in_month(month: u8, year: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Build a time from scanned fields
pub fn time_from_fields(fields: TimeFields) -> Time {
    Time::new(fields.hours, fields.minutes, fields.seconds)
}

/// Build a date from scanned fields, keeping the year within the century
pub fn date_from_fields(fields: DateFields) -> Date {
    Date::new(fields.day, fields.month, (fields.year % 100) as u8)
}

/// Clamp a time to what the peripheral accepts in `format`
pub fn check_time(time: Time, format: HourFormat) -> Checked<Time> {
    let mut fixed = time;

    let max_hour = format.max_hour();
    if fixed.hours > max_hour {
        fixed.hours = max_hour;
    }
    if fixed.minutes > 59 {
        fixed.minutes = 59;
    }
    if fixed.seconds > 59 {
        fixed.seconds = 59;
    }

    if fixed == time {
        Checked::Valid(fixed)
    } else {
        Checked::Clamped(fixed)
    }
}

/// Clamp a date to a real calendar day
///
/// The month is fixed first so the day is checked against the length of
/// the month that will actually be written.
pub fn check_date(date: Date) -> Checked<Date> {
    let mut fixed = date;

    if fixed.month == 0 {
        fixed.month = 1;
    } else if fixed.month > 12 {
        fixed.month = 12;
    }

    if fixed.day == 0 {
        fixed.day = 1;
    } else if fixed.day > 28 {
        let last = days_in_month(fixed.month, fixed.year);
        if fixed.day > last {
            fixed.day = last;
        }
    }

    if fixed == date {
        Checked::Valid(fixed)
    } else {
        Checked::Clamped(fixed)
    }
}

/// Date and time as reported by `GET`: `DD/MM/YYYY HH:MM:SS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub date: Date,
    pub time: Time,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
            self.date.day,
            self.date.month,
            self.date.full_year(),
            self.time.hours,
            self.time.minutes,
            self.time.seconds
        )
    }
}
