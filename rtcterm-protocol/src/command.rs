//! Command types and line parsing
//!
//! A completed line is matched against fixed, case-sensitive prefixes. The
//! prefixes are mutually exclusive, so the first match wins.

use heapless::Vec;

use crate::line::{LINE_TERMINATOR, RX_BUFFER_SIZE};

/// Prefix of the set-time command
pub const CMD_SET_TIME: &str = "SET_T ";
/// Prefix of the set-date command
pub const CMD_SET_DATE: &str = "SET_D ";
/// The read command (no arguments allowed)
pub const CMD_GET: &str = "GET";

/// A parsed console command
///
/// Arguments borrow from the line they were parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Set the time, argument is `HH:MM:SS`
    SetTime(&'a str),
    /// Set the date, argument is `DD/MM/YYYY`
    SetDate(&'a str),
    /// Report the current date and time
    Get,
    /// Nothing to do
    None,
}

/// Reasons a line is not a valid command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line does not start with a known command
    Unknown,
    /// `GET` followed by extra characters
    UnexpectedArgument,
    /// Argument bytes are not valid text
    InvalidText,
    /// Encoded command does not fit in a line
    TooLong,
}

/// Parse a completed line into a command
///
/// An empty line parses to [`Command::None`].
pub fn parse_command(line: &[u8]) -> Result<Command<'_>, CommandError> {
    if line.is_empty() {
        return Ok(Command::None);
    }

    if let Some(arg) = line.strip_prefix(CMD_SET_TIME.as_bytes()) {
        return argument(arg).map(Command::SetTime);
    }

    if let Some(arg) = line.strip_prefix(CMD_SET_DATE.as_bytes()) {
        return argument(arg).map(Command::SetDate);
    }

    if let Some(rest) = line.strip_prefix(CMD_GET.as_bytes()) {
        return if rest.is_empty() {
            Ok(Command::Get)
        } else {
            Err(CommandError::UnexpectedArgument)
        };
    }

    Err(CommandError::Unknown)
}

fn argument(bytes: &[u8]) -> Result<&str, CommandError> {
    core::str::from_utf8(bytes).map_err(|_| CommandError::InvalidText)
}

impl Command<'_> {
    /// Encode this command as wire bytes, terminator included
    /// (for testing or simulation)
    pub fn to_wire(&self) -> Result<Vec<u8, RX_BUFFER_SIZE>, CommandError> {
        let mut out = Vec::new();
        let (prefix, arg) = match self {
            Command::SetTime(arg) => (CMD_SET_TIME, *arg),
            Command::SetDate(arg) => (CMD_SET_DATE, *arg),
            Command::Get => (CMD_GET, ""),
            Command::None => ("", ""),
        };
        out.extend_from_slice(prefix.as_bytes()).map_err(|_| CommandError::TooLong)?;
        out.extend_from_slice(arg.as_bytes()).map_err(|_| CommandError::TooLong)?;
        out.push(LINE_TERMINATOR).map_err(|_| CommandError::TooLong)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineAccumulator;

    #[test]
    fn test_parse_set_time() {
        assert_eq!(
            parse_command(b"SET_T 13:45:00"),
            Ok(Command::SetTime("13:45:00"))
        );
    }

    #[test]
    fn test_parse_set_date_uses_prefix_length() {
        assert_eq!(
            parse_command(b"SET_D 01/03/2025"),
            Ok(Command::SetDate("01/03/2025"))
        );
    }

    #[test]
    fn test_parse_get() {
        assert_eq!(parse_command(b"GET"), Ok(Command::Get));
    }

    #[test]
    fn test_get_with_trailing_characters() {
        assert_eq!(
            parse_command(b"GETX"),
            Err(CommandError::UnexpectedArgument)
        );
        assert_eq!(
            parse_command(b"GET "),
            Err(CommandError::UnexpectedArgument)
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(parse_command(b"get"), Err(CommandError::Unknown));
        assert_eq!(
            parse_command(b"set_t 10:00:00"),
            Err(CommandError::Unknown)
        );
    }

    #[test]
    fn test_prefix_requires_space() {
        assert_eq!(
            parse_command(b"SET_T10:00:00"),
            Err(CommandError::Unknown)
        );
    }

    #[test]
    fn test_empty_argument_is_still_a_command() {
        assert_eq!(parse_command(b"SET_T "), Ok(Command::SetTime("")));
    }

    #[test]
    fn test_empty_line_is_none() {
        assert_eq!(parse_command(b""), Ok(Command::None));
    }

    #[test]
    fn test_invalid_text() {
        assert_eq!(
            parse_command(b"SET_T \xff\xfe"),
            Err(CommandError::InvalidText)
        );
    }

    #[test]
    fn test_wire_encoding_feeds_back_through_accumulator() {
        let wire = Command::SetDate("29/02/2024").to_wire().unwrap();
        assert_eq!(wire.as_slice(), b"SET_D 29/02/2024\r");

        let mut acc = LineAccumulator::new();
        let line = acc.feed_bytes(&wire).unwrap().unwrap();
        assert_eq!(parse_command(&line), Ok(Command::SetDate("29/02/2024")));
    }

    #[test]
    fn test_wire_encoding_too_long() {
        assert_eq!(
            Command::SetDate("01/03/2025 extra").to_wire(),
            Err(CommandError::TooLong)
        );
    }
}
