//! Board-agnostic serial console for a real-time clock
//!
//! This crate contains all console logic that does not depend on a
//! specific UART or RTC implementation:
//!
//! - The [`RtcConsole`] context with its tick and byte-received entry points
//! - Reception watchdog for stalled lines
//! - Time/date validation and clamping
//! - Buffered status-line output
//! - Event queue for handing interrupt notifications to the console
//! - Configuration type definitions
//!
//! # Example
//!
//! ```ignore
//! let mut console = RtcConsole::new(uart, rtc, ConsoleConfig::with_baudrate(115_200))?;
//!
//! // UART rx-complete callback
//! console.on_byte_received(byte);
//! // 1 ms tick
//! console.on_tick();
//! // main loop
//! console.process_pending();
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod calendar;
pub mod config;
pub mod console;
pub mod error;
pub mod events;
pub mod stream;
pub mod watchdog;

pub use calendar::{check_date, check_time, days_in_month, is_leap_year, Checked, Timestamp};
pub use config::{ConfigError, ConsoleConfig};
pub use console::RtcConsole;
pub use error::{ConsoleError, Register};
pub use events::{ConsoleEvent, EventQueue, QueueFull};
pub use stream::{StreamWriter, TxStream};
pub use watchdog::{ReceptionWatchdog, WatchdogStatus};
