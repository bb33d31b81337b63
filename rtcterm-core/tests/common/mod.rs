//! Mock UART and RTC drivers shared by the console scenario tests
//!
//! Both mocks keep their state behind `Rc<RefCell<..>>` so a test can hand
//! the driver to the console and still inspect or poke it afterwards.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use rtcterm_core::{ConsoleConfig, RtcConsole};
use rtcterm_hal::{Date, HourFormat, RtcClock, Time, UartRxNotify, UartTx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Default)]
pub struct UartState {
    /// Everything transmitted, in order
    pub sent: Vec<u8>,
    /// A single-byte receive is outstanding
    pub armed: bool,
    pub arm_count: usize,
    pub abort_count: usize,
    /// `request_byte` was called while a receive was already outstanding
    pub double_arm: bool,
    pub fail_tx: bool,
    pub fail_arm: bool,
}

#[derive(Clone, Default)]
pub struct MockUart(pub Rc<RefCell<UartState>>);

impl UartTx for MockUart {
    type Error = MockError;

    fn write_blocking(&mut self, data: &[u8], _timeout_ms: u32) -> Result<(), MockError> {
        let mut s = self.0.borrow_mut();
        if s.fail_tx {
            return Err(MockError);
        }
        s.sent.extend_from_slice(data);
        Ok(())
    }
}

impl UartRxNotify for MockUart {
    type Error = MockError;

    fn request_byte(&mut self) -> Result<(), MockError> {
        let mut s = self.0.borrow_mut();
        if s.fail_arm {
            return Err(MockError);
        }
        if s.armed {
            s.double_arm = true;
        }
        s.armed = true;
        s.arm_count += 1;
        Ok(())
    }

    fn abort_receive(&mut self) -> Result<(), MockError> {
        let mut s = self.0.borrow_mut();
        s.armed = false;
        s.abort_count += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcOp {
    ReadTime,
    ReadDate,
    WriteTime(Time),
    WriteDate(Date),
}

#[derive(Debug)]
pub struct RtcState {
    pub format: HourFormat,
    pub time: Time,
    pub date: Date,
    pub ops: Vec<RtcOp>,
    pub fail_read_time: bool,
    pub fail_read_date: bool,
    pub fail_write: bool,
}

impl Default for RtcState {
    fn default() -> Self {
        Self {
            format: HourFormat::TwentyFourHour,
            time: Time::new(13, 45, 0),
            date: Date::new(1, 3, 25),
            ops: Vec::new(),
            fail_read_time: false,
            fail_read_date: false,
            fail_write: false,
        }
    }
}

impl RtcState {
    pub fn reads(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RtcOp::ReadTime | RtcOp::ReadDate))
            .count()
    }

    pub fn writes(&self) -> usize {
        self.ops.len() - self.reads()
    }
}

#[derive(Clone, Default)]
pub struct MockRtc(pub Rc<RefCell<RtcState>>);

impl RtcClock for MockRtc {
    type Error = MockError;

    fn hour_format(&self) -> HourFormat {
        self.0.borrow().format
    }

    fn time(&mut self) -> Result<Time, MockError> {
        let mut s = self.0.borrow_mut();
        s.ops.push(RtcOp::ReadTime);
        if s.fail_read_time {
            return Err(MockError);
        }
        Ok(s.time)
    }

    fn date(&mut self) -> Result<Date, MockError> {
        let mut s = self.0.borrow_mut();
        s.ops.push(RtcOp::ReadDate);
        if s.fail_read_date {
            return Err(MockError);
        }
        Ok(s.date)
    }

    fn set_time(&mut self, time: Time) -> Result<(), MockError> {
        let mut s = self.0.borrow_mut();
        s.ops.push(RtcOp::WriteTime(time));
        if s.fail_write {
            return Err(MockError);
        }
        s.time = time;
        Ok(())
    }

    fn set_date(&mut self, date: Date) -> Result<(), MockError> {
        let mut s = self.0.borrow_mut();
        s.ops.push(RtcOp::WriteDate(date));
        if s.fail_write {
            return Err(MockError);
        }
        s.date = date;
        Ok(())
    }
}

/// A console wired to mocks, plus handles onto the mocks
pub struct Harness {
    pub console: RtcConsole<MockUart, MockRtc>,
    pub uart: Rc<RefCell<UartState>>,
    pub rtc: Rc<RefCell<RtcState>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_rtc(RtcState::default())
    }

    pub fn with_rtc(rtc_state: RtcState) -> Self {
        let uart = MockUart::default();
        let rtc = MockRtc(Rc::new(RefCell::new(rtc_state)));
        let uart_handle = uart.0.clone();
        let rtc_handle = rtc.0.clone();
        let console = RtcConsole::new(uart, rtc, ConsoleConfig::default())
            .expect("default config is valid");
        Self {
            console,
            uart: uart_handle,
            rtc: rtc_handle,
        }
    }

    /// Deliver bytes the way an interrupt-driven driver would
    ///
    /// Each byte completes the outstanding receive; the console must have
    /// re-armed before the next one arrives.
    pub fn receive(&mut self, bytes: &[u8]) {
        for &b in bytes {
            {
                let mut s = self.uart.borrow_mut();
                assert!(s.armed, "byte delivered with no receive armed");
                s.armed = false;
            }
            self.console.on_byte_received(b);
            assert!(self.uart.borrow().armed, "console did not re-arm receive");
        }
    }

    /// Deliver a full line and run the main-loop hook
    pub fn command(&mut self, line: &[u8]) {
        self.receive(line);
        self.console.process_pending();
    }

    pub fn ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.console.on_tick();
        }
    }

    /// Transmitted output split into `\r`-terminated lines
    pub fn output(&self) -> Vec<String> {
        let sent = self.uart.borrow().sent.clone();
        String::from_utf8(sent)
            .expect("console output is ASCII")
            .split_inclusive('\r')
            .map(str::to_owned)
            .collect()
    }

    pub fn clear_output(&mut self) {
        self.uart.borrow_mut().sent.clear();
    }
}
