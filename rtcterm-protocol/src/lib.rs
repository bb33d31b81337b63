//! rtcterm Serial Command Protocol
//!
//! This crate defines the ASCII protocol an operator uses to read and set a
//! real-time clock over a UART. It has no knowledge of the hardware; it
//! only turns bytes into lines and lines into commands.
//!
//! # Protocol Overview
//!
//! Every command is one line terminated by a carriage return:
//! ```text
//! SET_T HH:MM:SS\r     set the time
//! SET_D DD/MM/YYYY\r   set the date
//! GET\r                reply with "DD/MM/YYYY HH:MM:SS\r"
//! ```
//!
//! Commands are case-sensitive. Lines longer than the longest template are
//! rejected by the [`LineAccumulator`] before they reach the parser.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod args;
pub mod command;
pub mod line;

pub use args::{scan_date, scan_time, DateFields, ScanError, TimeFields};
pub use command::{parse_command, Command, CommandError, CMD_GET, CMD_SET_DATE, CMD_SET_TIME};
pub use line::{Line, LineAccumulator, LineError, RxState, LINE_TERMINATOR, RX_BUFFER_SIZE};
