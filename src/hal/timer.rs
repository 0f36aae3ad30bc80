//! CTIMER channel driver
//!
//! Drives the animation scheduler tick. The prescaler is derived from the
//! CPU clock at construction for the tick rate the board configuration
//! requests.

use crate::config::{TimerChannel, TimerConfig, CPU_CLOCK_HZ};

/// One timer channel
#[derive(Debug)]
pub struct Timer {
    channel: TimerChannel,
    prescaler: u32,
    running: bool,
}

impl Timer {
    /// Bind a channel to its tick rate.
    ///
    /// Board tick rates divide the CPU clock evenly; an uneven rate rounds
    /// the tick down to the nearest achievable frequency.
    #[must_use]
    pub fn new(channel: TimerChannel, config: TimerConfig) -> Self {
        let divider = (CPU_CLOCK_HZ / config.tick_hz.max(1)).max(1);
        Self {
            channel,
            prescaler: divider - 1,
            running: false,
        }
    }

    /// Channel identifier
    #[must_use]
    pub const fn channel(&self) -> TimerChannel {
        self.channel
    }

    /// Prescaler value (counter advances every `prescaler + 1` CPU cycles)
    #[must_use]
    pub const fn prescaler(&self) -> u32 {
        self.prescaler
    }

    /// Achieved counter tick rate
    #[must_use]
    pub const fn tick_hz(&self) -> u32 {
        CPU_CLOCK_HZ / (self.prescaler + 1)
    }

    /// Counter ticks corresponding to a duration in microseconds
    #[must_use]
    pub const fn ticks_for_us(&self, us: u32) -> u64 {
        us as u64 * self.tick_hz() as u64 / 1_000_000
    }

    /// Start the counter
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the counter
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the counter is running
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}
