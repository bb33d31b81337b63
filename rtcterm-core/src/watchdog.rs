//! Reception watchdog
//!
//! Detects a line that started but never got its terminator (dropped
//! byte, unplugged cable, partner crashed mid-command). It only looks at
//! how many bytes are buffered; recovery is left to the caller.

/// Outcome of one watchdog tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogStatus {
    /// No line in progress
    Idle,
    /// Line in progress, still within its time budget
    Waiting,
    /// Line in progress for too long; reception must be restarted
    Expired,
}

/// Tick-driven reception timeout
#[derive(Debug, Clone)]
pub struct ReceptionWatchdog {
    /// Ticks elapsed since the current line started
    elapsed: u32,
    /// Ticks after which a partial line is abandoned
    limit: u32,
}

impl ReceptionWatchdog {
    /// Create a watchdog that expires after `limit_ticks` ticks
    ///
    /// A limit of zero is treated as one.
    pub fn new(limit_ticks: u32) -> Self {
        Self {
            elapsed: 0,
            limit: limit_ticks.max(1),
        }
    }

    /// Advance by one tick
    ///
    /// # Arguments
    /// - `buffered`: bytes currently held by the line accumulator
    pub fn tick(&mut self, buffered: usize) -> WatchdogStatus {
        if buffered == 0 {
            self.elapsed = 0;
            return WatchdogStatus::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed >= self.limit {
            self.elapsed = 0;
            WatchdogStatus::Expired
        } else {
            WatchdogStatus::Waiting
        }
    }

    /// Forget any elapsed time
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    /// Ticks elapsed on the current line
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Configured limit in ticks
    pub fn limit(&self) -> u32 {
        self.limit
    }
}
