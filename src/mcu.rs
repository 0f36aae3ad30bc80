//! MCU peripheral registry
//!
//! [`Mcu`] owns one driver instance for every peripheral the board wires up
//! and hands out references keyed by the identifier enumerations in
//! [`crate::config`]. Instantiating it brings the whole chip into a valid
//! state in one step: clock tree first, pin routing second, then every
//! peripheral driver. There is no partial-initialization window — once
//! construction returns, every identifier resolves.
//!
//! The registry owns its instances in fixed-size arrays indexed by the
//! enum discriminants, so lookup is a constant-time array read, total over
//! the closed identifier sets, with no heap and no "not found" state.
//!
//! An MCU can only be created once per process; the hardware it configures
//! does not tolerate a second bring-up.

use core::cell::Cell;

use critical_section::Mutex;

use crate::board::{Board, LumiBoard};
use crate::config::{PinId, SpiPort, TimerChannel};
use crate::hal::{ClockError, Clocking, GpioPin, PinMux, PinMuxError, SpiError, SpiMaster, Timer};

/// Set once the production board has been brought up; never cleared.
static MCU_CLAIMED: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

/// Bring-up failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum McuError {
    /// An MCU has already been constructed in this process
    AlreadyInitialized,
    /// Clock-tree configuration failed
    Clock(ClockError),
    /// Pin routing failed
    PinMux(PinMuxError),
    /// SPI master configuration failed
    Spi(SpiError),
}

impl From<ClockError> for McuError {
    fn from(err: ClockError) -> Self {
        Self::Clock(err)
    }
}

impl From<PinMuxError> for McuError {
    fn from(err: PinMuxError) -> Self {
        Self::PinMux(err)
    }
}

impl From<SpiError> for McuError {
    fn from(err: SpiError) -> Self {
        Self::Spi(err)
    }
}

/// Owner of every peripheral instance on the board.
#[derive(Debug)]
pub struct Mcu {
    clocking: Clocking,
    pinmux: PinMux,
    gpio: [GpioPin; PinId::COUNT],
    spi: [SpiMaster; SpiPort::COUNT],
    timers: [Timer; TimerChannel::COUNT],
}

impl Mcu {
    /// Bring up the production board.
    ///
    /// Claims the process-wide once-flag, then runs the ordered bring-up
    /// sequence against [`LumiBoard`]. A second call returns
    /// [`McuError::AlreadyInitialized`] and leaves the first instance
    /// untouched. A bring-up failure also leaves the flag claimed: the
    /// sequence is one-shot, a failure is a configuration defect and not
    /// something to retry against half-configured hardware.
    pub fn try_new() -> Result<Self, McuError> {
        let claimed = critical_section::with(|cs| MCU_CLAIMED.borrow(cs).replace(true));
        if claimed {
            return Err(McuError::AlreadyInitialized);
        }
        Self::with_board(&mut LumiBoard)
    }

    /// Bring up the production board, treating any failure as fatal.
    ///
    /// # Panics
    ///
    /// Panics on a second construction attempt or any bring-up failure.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(mcu) => mcu,
            Err(err) => panic!("mcu bring-up failed: {err:?}"),
        }
    }

    /// Run the bring-up sequence against an arbitrary board.
    ///
    /// Construction order is load-bearing: the clock tree is configured
    /// before the pin mux, and both before any peripheral driver. The
    /// once-flag is not consulted here — it guards the production
    /// hardware, and a registry over a test double owns none.
    pub fn with_board(board: &mut impl Board) -> Result<Self, McuError> {
        let clocking = board.clocking()?;
        let pinmux = board.pinmux()?;

        let gpio = PinId::ALL.map(|pin| board.gpio_pin(pin));
        // Array order follows the enum discriminants.
        let spi = [
            board.spi_master(SpiPort::Spi0)?,
            board.spi_master(SpiPort::Spi1)?,
        ];
        let timers = [board.timer(TimerChannel::Ctimer0)];

        #[cfg(feature = "defmt")]
        defmt::info!(
            "mcu: online ({} pins, {} spi, {} timers)",
            PinId::COUNT,
            SpiPort::COUNT,
            TimerChannel::COUNT
        );

        Ok(Self {
            clocking,
            pinmux,
            gpio,
            spi,
            timers,
        })
    }

    /// The GPIO pin driver for a wired pin.
    ///
    /// Total over [`PinId`]; the same identifier always resolves to the
    /// same instance. Identifiers are per-class, so an SPI port cannot
    /// name a GPIO pin:
    ///
    /// ```compile_fail
    /// use lumidress_firmware::prelude::*;
    ///
    /// let mut board = LumiBoard;
    /// let mcu = Mcu::with_board(&mut board).unwrap();
    /// let _ = mcu.gpio_pin(SpiPort::Spi0);
    /// ```
    #[must_use]
    pub fn gpio_pin(&self, pin: PinId) -> &GpioPin {
        &self.gpio[pin.index()]
    }

    /// Exclusive access to a GPIO pin driver.
    #[must_use]
    pub fn gpio_pin_mut(&mut self, pin: PinId) -> &mut GpioPin {
        &mut self.gpio[pin.index()]
    }

    /// The SPI master driver for a wired port.
    #[must_use]
    pub fn spi_master(&self, port: SpiPort) -> &SpiMaster {
        &self.spi[port.index()]
    }

    /// Exclusive access to an SPI master driver.
    #[must_use]
    pub fn spi_master_mut(&mut self, port: SpiPort) -> &mut SpiMaster {
        &mut self.spi[port.index()]
    }

    /// The timer driver for a wired channel.
    #[must_use]
    pub fn timer(&self, channel: TimerChannel) -> &Timer {
        &self.timers[channel.index()]
    }

    /// Exclusive access to a timer driver.
    #[must_use]
    pub fn timer_mut(&mut self, channel: TimerChannel) -> &mut Timer {
        &mut self.timers[channel.index()]
    }

    /// The configured clock tree.
    #[must_use]
    pub fn clocking(&self) -> &Clocking {
        &self.clocking
    }

    /// The applied pin routing.
    #[must_use]
    pub fn pinmux(&self) -> &PinMux {
        &self.pinmux
    }
}
