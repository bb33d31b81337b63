//! rtcterm Hardware Abstraction Layer
//!
//! This crate defines the traits a board support package implements so the
//! console logic can run against any UART and any real-time clock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  rtcterm-core (console, watchdog, ...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rtcterm-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  UART driver  │       │  RTC driver   │
//! │  (board BSP)  │       │  (board BSP)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRxNotify`] - Serial communication
//! - [`rtc::RtcClock`] - Calendar clock registers

#![no_std]
#![deny(unsafe_code)]

pub mod rtc;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use rtc::{Date, HourFormat, RtcClock, Time};
pub use uart::{Uart, UartConfig, UartRxNotify, UartTx};
