//! Board collaborator contracts
//!
//! [`Board`] is the construction contract the MCU registry consumes: one
//! method per board-wide configurator and one per peripheral class, each
//! returning a fully constructed object. [`LumiBoard`] is the production
//! implementation, wiring the tables in [`crate::config`] into the `hal`
//! constructors.
//!
//! The trait is also the seam for bring-up tests: a recording double can
//! observe the order the registry constructs things in without touching
//! hardware.

use crate::config::{self, PinId, SpiPort, TimerChannel, CPU_CLOCK_HZ};
use crate::hal::{ClockError, Clocking, GpioPin, PinMux, PinMuxError, SpiError, SpiMaster, Timer};

/// Construction contract for everything the registry owns.
///
/// The registry calls these in a fixed order: [`clocking`](Board::clocking)
/// first, [`pinmux`](Board::pinmux) second, then the peripheral drivers.
pub trait Board {
    /// Construct and apply the clock-tree configurator.
    fn clocking(&mut self) -> Result<Clocking, ClockError>;

    /// Construct and apply the pin-function router.
    fn pinmux(&mut self) -> Result<PinMux, PinMuxError>;

    /// Construct the driver for one wired GPIO pin.
    fn gpio_pin(&mut self, pin: PinId) -> GpioPin;

    /// Construct the driver for one wired SPI master port.
    fn spi_master(&mut self, port: SpiPort) -> Result<SpiMaster, SpiError>;

    /// Construct the driver for one wired timer channel.
    fn timer(&mut self, channel: TimerChannel) -> Timer;
}

/// The production dress controller board.
#[derive(Debug, Default)]
pub struct LumiBoard;

impl Board for LumiBoard {
    fn clocking(&mut self) -> Result<Clocking, ClockError> {
        Clocking::new(CPU_CLOCK_HZ)
    }

    fn pinmux(&mut self) -> Result<PinMux, PinMuxError> {
        PinMux::new()
    }

    fn gpio_pin(&mut self, pin: PinId) -> GpioPin {
        GpioPin::new(pin, config::gpio_config(pin))
    }

    fn spi_master(&mut self, port: SpiPort) -> Result<SpiMaster, SpiError> {
        SpiMaster::new(port, config::spi_config(port))
    }

    fn timer(&mut self, channel: TimerChannel) -> Timer {
        Timer::new(channel, config::timer_config(channel))
    }
}
