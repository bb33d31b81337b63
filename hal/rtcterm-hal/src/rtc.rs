//! Real-time clock abstractions
//!
//! Values are plain binary (not BCD). Conversion to whatever the
//! peripheral stores is the driver's job.

/// Hour representation configured in the RTC peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HourFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl HourFormat {
    /// Largest hour value the peripheral accepts in this format
    pub const fn max_hour(&self) -> u8 {
        match self {
            HourFormat::TwentyFourHour => 23,
            HourFormat::TwelveHour => 12,
        }
    }
}

/// Time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Time {
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

/// Calendar date with a two-digit year (years 2000-2099)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    /// Day of month, 1-based
    pub day: u8,
    /// Month, 1-based
    pub month: u8,
    /// Year within the century (0-99)
    pub year: u8,
}

impl Date {
    pub const fn new(day: u8, month: u8, year: u8) -> Self {
        Self { day, month, year }
    }

    /// Full four-digit year
    pub const fn full_year(&self) -> u16 {
        2000 + self.year as u16
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// Calendar clock peripheral
///
/// Reads and writes the committed time and date registers.
pub trait RtcClock {
    /// Error type for register access
    type Error;

    /// Hour format the peripheral was initialized with
    fn hour_format(&self) -> HourFormat;

    /// Read the current time
    fn time(&mut self) -> Result<Time, Self::Error>;

    /// Read the current date
    fn date(&mut self) -> Result<Date, Self::Error>;

    /// Write a new time
    ///
    /// Callers pass values already validated for [`Self::hour_format`].
    fn set_time(&mut self, time: Time) -> Result<(), Self::Error>;

    /// Write a new date
    fn set_date(&mut self, date: Date) -> Result<(), Self::Error>;
}
