//! Lumidress Board Layer
//!
//! Board/MCU layer of the firmware for an LPC5411x-based wearable LED
//! dress controller. This crate brings the chip's peripheral surface into
//! a valid state in one step and hands out type-safe references to the
//! drivers it owns; animation, power, and UI logic live in the layers
//! above.
//!
//! # Architecture
//!
//! ```text
//! application code
//!       │  enum-keyed accessors (&GpioPin, &SpiMaster, &Timer)
//!       ▼
//!     Mcu ──── owns every peripheral instance, constructed once
//!       │  ordered bring-up: clocks → pin mux → drivers
//!       ▼
//!     Board ── construction contract (production board or test double)
//!       ▼
//!     hal  ─── clock tree, pin router, per-peripheral drivers
//! ```
//!
//! # Design Principles
//!
//! - **Static ownership**: the peripheral set is fixed by the board
//!   description in [`config`]; instances live in enum-indexed arrays, no
//!   heap, no dynamic registration
//! - **Construct-once**: the hardware does not tolerate a second bring-up;
//!   a process-wide guard makes the second attempt fail fast
//! - **Type-driven design**: one closed identifier enum per peripheral
//!   class, so a cross-class lookup is a compile error
//! - **Explicit error handling**: all fallible operations return `Result`
//!
//! # Example
//!
//! ```
//! use lumidress_firmware::prelude::*;
//!
//! let mut mcu = Mcu::try_new().expect("first bring-up in this process");
//! let green_led = mcu.gpio_pin_mut(PinId::Pio0_14);
//! green_led.set_high().unwrap();
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Board description: constants, identifier enumerations, pin tables
pub mod config;

/// Board-wide configurators and peripheral drivers
pub mod hal;

/// Collaborator construction contract and the production board
pub mod board;

/// The peripheral registry
pub mod mcu;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::board::{Board, LumiBoard};
    pub use crate::config::{AdcChannel, PinDirection, PinId, Pull, SpiPort, TimerChannel};
    pub use crate::hal::{GpioPin, Level, SpiMaster, Timer};
    pub use crate::mcu::{Mcu, McuError};

    // Common traits
    pub use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
}
