//! Buffered text output over a blocking UART transmitter
//!
//! Text is collected in a small fixed buffer and sent in one blocking
//! write when the buffer fills up or when a line terminator is written.
//! Every status line the console produces ends with the terminator, so
//! the buffer is empty between lines.

use core::fmt;

use heapless::Vec;
use rtcterm_hal::UartTx;
use rtcterm_protocol::LINE_TERMINATOR;

use crate::config::TX_BUFFER_SIZE;

/// Transmit buffer with flush-on-full and flush-on-terminator policy
#[derive(Debug, Clone)]
pub struct TxStream {
    buffer: Vec<u8, TX_BUFFER_SIZE>,
    timeout_ms: u32,
}

impl TxStream {
    /// Create an empty stream
    ///
    /// # Arguments
    /// - `timeout_ms`: upper bound for each blocking write
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            buffer: Vec::new(),
            timeout_ms,
        }
    }

    /// Bind the stream to a transmitter for formatted output
    pub fn writer<'a, T: UartTx>(&'a mut self, tx: &'a mut T) -> StreamWriter<'a, T> {
        StreamWriter { stream: self, tx }
    }

    /// Bytes waiting to be sent
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Append one byte, flushing as the policy requires
    pub fn put<T: UartTx>(&mut self, tx: &mut T, byte: u8) -> Result<(), T::Error> {
        // Never full on entry: a full buffer is flushed before returning
        let _ = self.buffer.push(byte);

        if byte == LINE_TERMINATOR || self.buffer.is_full() {
            self.flush(tx)?;
        }
        Ok(())
    }

    /// Send everything buffered
    ///
    /// The buffer is emptied whether or not the write succeeds.
    pub fn flush<T: UartTx>(&mut self, tx: &mut T) -> Result<(), T::Error> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let result = tx.write_blocking(&self.buffer, self.timeout_ms);
        self.buffer.clear();
        result
    }
}

/// A [`TxStream`] bound to a transmitter, usable with `write!`
pub struct StreamWriter<'a, T> {
    stream: &'a mut TxStream,
    tx: &'a mut T,
}

impl<T: UartTx> fmt::Write for StreamWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if self.stream.put(self.tx, byte).is_err() {
                error!("UART transmit failed, output dropped");
                return Err(fmt::Error);
            }
        }
        Ok(())
    }
}
