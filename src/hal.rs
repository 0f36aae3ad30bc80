//! Hardware Abstraction Layer
//!
//! Board-wide configurators and per-peripheral drivers. Each type takes its
//! identifying configuration at construction and performs all setup there;
//! none of them have a separate initialize call.

pub mod clocking;
pub mod gpio;
pub mod pinmux;
pub mod spi;
pub mod timer;

pub use clocking::{ClockError, Clocking, PllSettings};
pub use gpio::{GpioError, GpioPin, Level};
pub use pinmux::{PinMux, PinMuxError};
pub use spi::{SpiError, SpiMaster};
pub use timer::Timer;
