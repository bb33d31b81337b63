//! Interrupt-to-console event queue
//!
//! Interrupt handlers should not run protocol logic. Instead they post a
//! [`ConsoleEvent`] and a single consumer drains the queue into the
//! console, which keeps byte order and rules out reentrancy.
//!
//! ```ignore
//! static EVENTS: EventQueue<CriticalSectionRawMutex, 32> = EventQueue::new();
//!
//! // UART rx-complete interrupt
//! EVENTS.post_byte(byte).ok();
//! // SysTick, 1 ms
//! EVENTS.post_tick().ok();
//! // main loop
//! console.drain(&EVENTS);
//! ```

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use rtcterm_hal::{RtcClock, Uart};

use crate::console::RtcConsole;

/// Notification from interrupt context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleEvent {
    /// One byte arrived on the UART
    ByteReceived(u8),
    /// The periodic tick fired
    Tick,
}

/// The queue had no room; the event was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull;

/// Bounded single-consumer event queue
pub struct EventQueue<M: RawMutex, const N: usize> {
    channel: Channel<M, ConsoleEvent, N>,
}

impl<M: RawMutex, const N: usize> EventQueue<M, N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Post an event without blocking
    pub fn post(&self, event: ConsoleEvent) -> Result<(), QueueFull> {
        self.channel.try_send(event).map_err(|_| QueueFull)
    }

    pub fn post_byte(&self, byte: u8) -> Result<(), QueueFull> {
        self.post(ConsoleEvent::ByteReceived(byte))
    }

    pub fn post_tick(&self) -> Result<(), QueueFull> {
        self.post(ConsoleEvent::Tick)
    }

    /// Take the oldest event, if any
    pub fn try_next(&self) -> Option<ConsoleEvent> {
        self.channel.try_receive().ok()
    }

    /// Events waiting to be consumed
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl<M: RawMutex, const N: usize> Default for EventQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Uart, R: RtcClock> RtcConsole<U, R> {
    /// Feed one event into the matching entry point
    pub fn handle(&mut self, event: ConsoleEvent) {
        match event {
            ConsoleEvent::ByteReceived(byte) => self.on_byte_received(byte),
            ConsoleEvent::Tick => self.on_tick(),
        }
    }

    /// Consume every queued event in order
    ///
    /// A completed line is executed before the next event is looked at.
    /// Returns the number of events handled.
    pub fn drain<M: RawMutex, const N: usize>(&mut self, queue: &EventQueue<M, N>) -> usize {
        let mut handled = 0;
        while let Some(event) = queue.try_next() {
            self.handle(event);
            self.process_pending();
            handled += 1;
        }
        handled
    }
}
