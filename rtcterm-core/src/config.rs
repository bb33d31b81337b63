//! Console configuration
//!
//! Everything time-related is derived from the link settings: the time it
//! takes to shift a full buffer over the wire, plus a margin, times a
//! safety factor.

use rtcterm_hal::UartConfig;
use rtcterm_protocol::RX_BUFFER_SIZE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recommended tick period for [`crate::RtcConsole::on_tick`]
pub const DEFAULT_TICK_PERIOD_MS: u32 = 1;

/// Slack added to every computed transfer time
pub const DEFAULT_TIMEOUT_MARGIN_MS: u32 = 2;

/// Largest accepted timeout margin
pub const MAX_TIMEOUT_MARGIN_MS: u32 = 60_000;

/// Multiplier applied to the nominal transfer time
pub const TIMEOUT_FACTOR: u32 = 3;

/// Transmit buffer capacity in bytes
pub const TX_BUFFER_SIZE: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate of zero
    InvalidBaudrate,
    /// Tick period of zero
    InvalidTickPeriod,
    /// Timeout margin above [`MAX_TIMEOUT_MARGIN_MS`]
    InvalidMargin,
}

/// Console configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsoleConfig {
    /// Serial link settings (must match the UART driver's configuration)
    pub link: UartConfig,
    /// Period at which `on_tick` is called
    pub tick_period_ms: u32,
    /// Margin added to the nominal transfer time of a buffer
    pub timeout_margin_ms: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            link: UartConfig::default(),
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            timeout_margin_ms: DEFAULT_TIMEOUT_MARGIN_MS,
        }
    }
}

impl ConsoleConfig {
    /// Create a configuration for a link at `baudrate`, 8N1, 1 ms tick
    pub fn with_baudrate(baudrate: u32) -> Self {
        Self {
            link: UartConfig {
                baudrate,
                ..UartConfig::default()
            },
            ..Self::default()
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.link.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        if self.timeout_margin_ms > MAX_TIMEOUT_MARGIN_MS {
            return Err(ConfigError::InvalidMargin);
        }
        Ok(())
    }

    /// Longest time a line may take to arrive, in milliseconds
    pub fn reception_timeout_ms(&self) -> Result<u32, ConfigError> {
        self.budget_ms(RX_BUFFER_SIZE as u32)
    }

    /// Reception timeout expressed in ticks (rounded up, at least one)
    pub fn reception_timeout_ticks(&self) -> Result<u32, ConfigError> {
        let ms = self.reception_timeout_ms()?;
        Ok(ms.div_ceil(self.tick_period_ms).max(1))
    }

    /// Upper bound for one blocking transmit of a full TX buffer
    pub fn transmit_timeout_ms(&self) -> Result<u32, ConfigError> {
        self.budget_ms(TX_BUFFER_SIZE as u32)
    }

    fn budget_ms(&self, bytes: u32) -> Result<u32, ConfigError> {
        self.validate()?;
        let transfer = self
            .link
            .transfer_time_ms(bytes)
            .ok_or(ConfigError::InvalidBaudrate)?;
        transfer
            .checked_add(self.timeout_margin_ms)
            .and_then(|ms| ms.checked_mul(TIMEOUT_FACTOR))
            .ok_or(ConfigError::InvalidMargin)
    }
}
