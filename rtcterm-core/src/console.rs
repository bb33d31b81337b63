//! The serial clock console
//!
//! [`RtcConsole`] owns everything the protocol needs for one serial link:
//! the UART, the RTC, the reception buffers and the watchdog. There is no
//! global state; the integrator forwards two kinds of notifications into
//! it and calls [`RtcConsole::process_pending`] from its main loop:
//!
//! ```text
//!  UART rx-complete ──► on_byte_received ──► LineAccumulator ──► pending line
//!  1 ms tick ─────────► on_tick ──────────► ReceptionWatchdog
//!  main loop ─────────► process_pending ──► parse ──► execute ──► RTC / UART
//! ```
//!
//! Every path that finishes with a byte (line complete, overflow, timeout)
//! re-arms the single-byte receive before returning.

use core::fmt::Write;

use rtcterm_hal::{HourFormat, RtcClock, Uart};
use rtcterm_protocol::{
    parse_command, scan_date, scan_time, Command, Line, LineAccumulator, LineError, RxState,
};

use crate::calendar::{check_date, check_time, date_from_fields, time_from_fields, Timestamp};
use crate::config::{ConfigError, ConsoleConfig};
use crate::error::{ConsoleError, Register};
use crate::stream::TxStream;
use crate::watchdog::{ReceptionWatchdog, WatchdogStatus};

/// Serial console for one UART / RTC pair
pub struct RtcConsole<U, R> {
    uart: U,
    rtc: R,
    config: ConsoleConfig,
    rx: LineAccumulator,
    /// Completed line waiting to be parsed; empty when none
    pending: Line,
    watchdog: ReceptionWatchdog,
    stream: TxStream,
}

impl<U: Uart, R: RtcClock> RtcConsole<U, R> {
    /// Initialize the console and arm the first receive
    ///
    /// The reception timeout is sized from `config.link`, which must match
    /// the UART driver's actual settings.
    pub fn new(uart: U, rtc: R, config: ConsoleConfig) -> Result<Self, ConfigError> {
        let timeout_ticks = config.reception_timeout_ticks()?;
        let tx_timeout_ms = config.transmit_timeout_ms()?;

        let mut console = Self {
            uart,
            rtc,
            config,
            rx: LineAccumulator::new(),
            pending: Line::new(),
            watchdog: ReceptionWatchdog::new(timeout_ticks),
            stream: TxStream::new(tx_timeout_ms),
        };

        info!(
            "RTC console: {} baud, rx timeout {} ticks",
            config.link.baudrate,
            timeout_ticks
        );
        console.arm_receive();
        Ok(console)
    }

    /// Byte-received notification
    ///
    /// Call once per completed single-byte receive, never reentrantly.
    pub fn on_byte_received(&mut self, byte: u8) {
        match self.rx.feed(byte) {
            Ok(None) => {}
            Ok(Some(line)) => {
                if !self.pending.is_empty() {
                    debug!("Previous line still unparsed, dispatching it first");
                    self.process_pending();
                }
                trace!("Line complete: {} bytes", line.len());
                self.pending = line;
                self.watchdog.reset();
            }
            Err(LineError::Overflow) => {
                self.report(ConsoleError::RxOverflow);
                self.restart_reception();
                return;
            }
        }

        self.arm_receive();
    }

    /// Periodic tick, at `config.tick_period_ms`
    pub fn on_tick(&mut self) {
        if self.watchdog.tick(self.rx.len()) == WatchdogStatus::Expired {
            warn!("Reception stalled with {} bytes buffered", self.rx.len());
            self.report(ConsoleError::RxTimeout);
            self.restart_reception();
        }
    }

    /// Parse and execute the pending line, if any
    ///
    /// The line is consumed whether or not it parses.
    pub fn process_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let line = core::mem::take(&mut self.pending);
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejected line: {}", e);
                self.report(ConsoleError::MalformedCommand);
                Command::None
            }
        };
        self.execute(command);
    }

    /// Run a parsed command against the RTC
    pub fn execute(&mut self, command: Command<'_>) {
        debug!("Execute {}", command);
        match command {
            Command::SetTime(arg) => self.set_time(arg),
            Command::SetDate(arg) => self.set_date(arg),
            Command::Get => self.print_time(),
            Command::None => {}
        }
    }

    fn set_time(&mut self, arg: &str) {
        let fields = match scan_time(arg) {
            Ok(fields) => fields,
            Err(_) => {
                self.report(ConsoleError::MalformedTime);
                return;
            }
        };

        let checked = check_time(time_from_fields(fields), self.rtc.hour_format());
        let time = checked.value();
        if checked.was_clamped() {
            self.report(ConsoleError::TimeCorrected(time));
        }

        if self.rtc.set_time(time).is_err() {
            self.report(ConsoleError::WriteFailed(Register::Time));
        }
    }

    fn set_date(&mut self, arg: &str) {
        let fields = match scan_date(arg) {
            Ok(fields) => fields,
            Err(_) => {
                self.report(ConsoleError::MalformedDate);
                return;
            }
        };

        let checked = check_date(date_from_fields(fields));
        let date = checked.value();
        if checked.was_clamped() {
            self.report(ConsoleError::DateCorrected(date));
        }

        if self.rtc.set_date(date).is_err() {
            self.report(ConsoleError::WriteFailed(Register::Date));
        }
    }

    fn print_time(&mut self) {
        let time = match self.rtc.time() {
            Ok(time) => time,
            Err(_) => {
                self.report(ConsoleError::ReadFailed(Register::Time));
                return;
            }
        };
        let date = match self.rtc.date() {
            Ok(date) => date,
            Err(_) => {
                self.report(ConsoleError::ReadFailed(Register::Date));
                return;
            }
        };

        let mut out = self.stream.writer(&mut self.uart);
        // Transmit failures are logged by the writer
        let _ = write!(out, "{}\r", Timestamp { date, time });
    }

    /// Send one status line and log it
    fn report(&mut self, err: ConsoleError) {
        if err.is_correction() {
            warn!("{}", err);
        } else {
            error!("{}", err);
        }

        let mut out = self.stream.writer(&mut self.uart);
        let _ = write!(out, "{}\r", err);
    }

    fn arm_receive(&mut self) {
        if self.uart.request_byte().is_err() {
            self.report(ConsoleError::RxArmFailed);
        }
    }

    /// Abandon the line in progress and wait for a fresh one
    fn restart_reception(&mut self) {
        if self.uart.abort_receive().is_err() {
            warn!("UART receive abort failed");
        }
        self.rx.reset();
        self.watchdog.reset();
        self.arm_receive();
    }

    /// Current state of the line accumulator
    pub fn rx_state(&self) -> RxState {
        self.rx.state()
    }

    /// The completed line waiting for [`Self::process_pending`]
    pub fn pending_line(&self) -> Option<&[u8]> {
        (!self.pending.is_empty()).then_some(self.pending.as_slice())
    }

    /// Hour format of the attached RTC
    pub fn hour_format(&self) -> HourFormat {
        self.rtc.hour_format()
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Give back the peripherals
    pub fn release(self) -> (U, R) {
        (self.uart, self.rtc)
    }
}
