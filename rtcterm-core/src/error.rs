//! Console error kinds
//!
//! Every error is reported exactly once as a status line on the serial link.
//! The `Display` output is that line without its terminator.

use core::fmt;

use rtcterm_hal::{Date, Time};

/// Which register set an RTC access touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    Time,
    Date,
}

impl Register {
    fn name(&self) -> &'static str {
        match self {
            Register::Time => "time",
            Register::Date => "date",
        }
    }
}

/// Errors surfaced to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError {
    /// Line exceeded the reception buffer
    RxOverflow,
    /// Line started but never finished
    RxTimeout,
    /// Line is not a known command
    MalformedCommand,
    /// `SET_T` argument is not `HH:MM:SS`
    MalformedTime,
    /// `SET_D` argument is not `DD/MM/YYYY`
    MalformedDate,
    /// Time was clamped; carries the value actually written
    TimeCorrected(Time),
    /// Date was clamped; carries the value actually written
    DateCorrected(Date),
    /// RTC read failed
    ReadFailed(Register),
    /// RTC write failed
    WriteFailed(Register),
    /// Driver refused to arm the next receive
    RxArmFailed,
}

impl ConsoleError {
    /// True for errors the console recovered from by adjusting input
    pub fn is_correction(&self) -> bool {
        matches!(
            self,
            ConsoleError::TimeCorrected(_) | ConsoleError::DateCorrected(_)
        )
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::RxOverflow => f.write_str("Error: Msg size exceeded!"),
            ConsoleError::RxTimeout => f.write_str("Error: Timeout command!"),
            ConsoleError::MalformedCommand => f.write_str("Error: Wrong command!"),
            ConsoleError::MalformedTime => f.write_str("Error: Wrong time format!"),
            ConsoleError::MalformedDate => f.write_str("Error: Wrong date format!"),
            ConsoleError::TimeCorrected(t) => write!(
                f,
                "Error: Wrong time! Set to {:02}:{:02}:{:02}",
                t.hours, t.minutes, t.seconds
            ),
            ConsoleError::DateCorrected(d) => write!(
                f,
                "Error: Wrong date! Set to {:02}/{:02}/{:04}",
                d.day,
                d.month,
                d.full_year()
            ),
            ConsoleError::ReadFailed(reg) => write!(f, "Error: Failed to read {}!", reg.name()),
            ConsoleError::WriteFailed(reg) => write!(f, "Error: Failed to set {}!", reg.name()),
            ConsoleError::RxArmFailed => f.write_str("Error: Failed to start reception!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    fn render(e: ConsoleError) -> String<64> {
        let mut s = String::new();
        fmt::write(&mut s, format_args!("{}", e)).unwrap();
        s
    }

    #[test]
    fn test_time_correction_echoes_value() {
        let s = render(ConsoleError::TimeCorrected(Time::new(23, 59, 59)));
        assert_eq!(s.as_str(), "Error: Wrong time! Set to 23:59:59");
    }

    #[test]
    fn test_date_correction_echoes_full_year() {
        let s = render(ConsoleError::DateCorrected(Date::new(30, 4, 25)));
        assert_eq!(s.as_str(), "Error: Wrong date! Set to 30/04/2025");
    }

    #[test]
    fn test_register_names() {
        assert_eq!(
            render(ConsoleError::ReadFailed(Register::Date)).as_str(),
            "Error: Failed to read date!"
        );
        assert_eq!(
            render(ConsoleError::WriteFailed(Register::Time)).as_str(),
            "Error: Failed to set time!"
        );
    }

    #[test]
    fn test_corrections_are_flagged() {
        assert!(ConsoleError::TimeCorrected(Time::default()).is_correction());
        assert!(!ConsoleError::RxTimeout.is_correction());
    }
}
