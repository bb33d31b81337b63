//! Byte-at-a-time line assembly.
//!
//! The receive driver hands over one byte per completion. The accumulator
//! appends bytes until the line terminator arrives, at which point the
//! collected bytes are handed back as a [`Line`].
//!
//! Reception states:
//! - `Idle`: buffer empty
//! - `Filling`: at least one byte buffered, no terminator yet
//! - `Overflow`: capacity reached without a terminator, reported as
//!   [`LineError::Overflow`]; the accumulator is already back in `Idle`
//! - `LineReady`: terminator seen, reported as `Ok(Some(line))`; the
//!   accumulator is already back in `Idle`

use heapless::Vec;

/// Byte that ends every command line
pub const LINE_TERMINATOR: u8 = b'\r';

/// Longest line the protocol defines
pub const LONGEST_COMMAND: &str = "SET_D DD/MM/YYYY";

/// Reception buffer capacity (longest command plus one)
pub const RX_BUFFER_SIZE: usize = LONGEST_COMMAND.len() + 1;

/// A completed command line, without its terminator
pub type Line = Vec<u8, RX_BUFFER_SIZE>;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Buffer filled up before a terminator arrived
    Overflow,
}

/// Observable reception state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxState {
    /// Waiting for the first byte of a line
    Idle,
    /// Part of a line has been received
    Filling {
        /// Bytes buffered so far
        len: usize,
    },
}

/// State machine for assembling incoming lines
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator {
    buffer: Line,
}

impl LineAccumulator {
    /// Create a new accumulator in the idle state
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Discard any partial line and return to idle
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes buffered for the line in progress
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when no line is in progress
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current reception state
    pub fn state(&self) -> RxState {
        match self.buffer.len() {
            0 => RxState::Idle,
            len => RxState::Filling { len },
        }
    }

    /// Feed a single byte to the accumulator
    ///
    /// Returns `Ok(Some(line))` when the terminator completes a line,
    /// `Ok(None)` when more bytes are needed, or `Err` when the buffer
    /// overflowed. Both `Some` and `Err` leave the accumulator idle.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        if byte == LINE_TERMINATOR {
            return Ok(Some(core::mem::take(&mut self.buffer)));
        }

        if self.buffer.push(byte).is_err() || self.buffer.is_full() {
            self.reset();
            return Err(LineError::Overflow);
        }

        Ok(None)
    }

    /// Feed multiple bytes to the accumulator
    ///
    /// Returns the first complete line found, if any.
    /// Remaining bytes after a complete line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Line>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
