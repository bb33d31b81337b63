//! UART serial communication abstractions
//!
//! The receive side is interrupt-style: the console arms a single-byte
//! receive and the driver reports completion by calling back into the
//! console with the byte. The transmit side is a plain blocking write.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written, `timeout_ms` has elapsed,
    /// or an error occurs.
    fn write_blocking(&mut self, data: &[u8], timeout_ms: u32) -> Result<(), Self::Error>;
}

/// Notification-driven UART receiver
///
/// Implementations start an asynchronous reception of exactly one byte.
/// When it completes, the integrator forwards the byte to the consumer
/// (for example `RtcConsole::on_byte_received`). Only one request is ever
/// outstanding.
pub trait UartRxNotify {
    /// Error type for receive operations
    type Error;

    /// Arm reception of the next single byte
    fn request_byte(&mut self) -> Result<(), Self::Error>;

    /// Cancel a pending single-byte reception
    ///
    /// Must succeed (or be a no-op) when nothing is pending.
    fn abort_receive(&mut self) -> Result<(), Self::Error>;
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Uart: UartTx + UartRxNotify {}

// Blanket implementation
impl<T: UartTx + UartRxNotify> Uart for T {}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// Bits on the wire for one character: start + data + parity + stop
    pub const fn bits_per_frame(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
            DataBits::Nine => 9,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }

    /// Milliseconds needed to shift `bytes` characters at this baud rate
    ///
    /// Integer division, so short bursts on fast links round down to zero.
    /// Returns `None` for a zero baud rate or when the bit count overflows.
    pub fn transfer_time_ms(&self, bytes: u32) -> Option<u32> {
        if self.baudrate == 0 {
            return None;
        }
        let bits = self.bits_per_frame().checked_mul(bytes)?;
        Some(bits.checked_mul(1000)? / self.baudrate)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_8n1() {
        assert_eq!(UartConfig::default().bits_per_frame(), 10);
    }

    #[test]
    fn test_frame_bits_with_parity_and_two_stops() {
        let config = UartConfig {
            parity: Parity::Even,
            stop_bits: StopBits::Two,
            ..UartConfig::default()
        };
        assert_eq!(config.bits_per_frame(), 12);
    }

    #[test]
    fn test_transfer_time() {
        let config = UartConfig {
            baudrate: 9600,
            ..UartConfig::default()
        };
        // 17 bytes * 10 bits * 1000 / 9600 = 17.7 ms
        assert_eq!(config.transfer_time_ms(17), Some(17));
    }

    #[test]
    fn test_transfer_time_zero_baud() {
        let config = UartConfig {
            baudrate: 0,
            ..UartConfig::default()
        };
        assert_eq!(config.transfer_time_ms(17), None);
    }

    #[test]
    fn test_transfer_time_overflow() {
        let config = UartConfig::default();
        assert_eq!(config.transfer_time_ms(u32::MAX / 8), None);
        assert_eq!(config.transfer_time_ms(u32::MAX / 1000), None);
    }
}
