//! Argument scanning for the set commands
//!
//! Fields are unsigned decimal numbers of bounded width separated by a
//! fixed character. Blanks before a number are skipped, separators must
//! match exactly, and anything after the last field is ignored. The values
//! are not range-checked here; that is the calendar validator's job.

/// Raw fields of an `HH:MM:SS` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeFields {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Raw fields of a `DD/MM/YYYY` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateFields {
    pub day: u8,
    pub month: u8,
    /// Year as written (up to four digits)
    pub year: u16,
}

/// Why an argument could not be scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// A numeric field was missing; carries how many fields were read
    MissingField(u8),
}

const TIME_SEPARATOR: u8 = b':';
const DATE_SEPARATOR: u8 = b'/';

/// Scan an `HH:MM:SS` argument (1-2 digits per field)
pub fn scan_time(text: &str) -> Result<TimeFields, ScanError> {
    let mut s = Scanner::new(text);

    let hours = s.field(2, None, 0)?;
    let minutes = s.field(2, Some(TIME_SEPARATOR), 1)?;
    let seconds = s.field(2, Some(TIME_SEPARATOR), 2)?;

    Ok(TimeFields {
        hours: hours as u8,
        minutes: minutes as u8,
        seconds: seconds as u8,
    })
}

/// Scan a `DD/MM/YYYY` argument (1-2 digit day and month, 1-4 digit year)
pub fn scan_date(text: &str) -> Result<DateFields, ScanError> {
    let mut s = Scanner::new(text);

    let day = s.field(2, None, 0)?;
    let month = s.field(2, Some(DATE_SEPARATOR), 1)?;
    let year = s.field(4, Some(DATE_SEPARATOR), 2)?;

    Ok(DateFields {
        day: day as u8,
        month: month as u8,
        year,
    })
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// Read an optional separator followed by a number
    ///
    /// `index` is the number of fields read so far, for the error.
    fn field(
        &mut self,
        max_digits: usize,
        separator: Option<u8>,
        index: u8,
    ) -> Result<u16, ScanError> {
        if let Some(sep) = separator {
            if !self.literal(sep) {
                return Err(ScanError::MissingField(index));
            }
        }
        self.number(max_digits).ok_or(ScanError::MissingField(index))
    }

    fn literal(&mut self, expected: u8) -> bool {
        if self.bytes.get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn number(&mut self, max_digits: usize) -> Option<u16> {
        while matches!(self.bytes.get(self.pos), Some(b' ' | b'\t')) {
            self.pos += 1;
        }

        let mut value: u16 = 0;
        let mut digits = 0;
        while digits < max_digits {
            match self.bytes.get(self.pos) {
                Some(&b) if b.is_ascii_digit() => {
                    value = value * 10 + u16::from(b - b'0');
                    digits += 1;
                    self.pos += 1;
                }
                _ => break,
            }
        }

        (digits > 0).then_some(value)
    }
}
