//! GPIO pin driver
//!
//! One driver instance per wired pin. The pin is bound to its port/pin
//! location, direction, and pull at construction; afterwards it exposes the
//! usual electrical-state operations, plus the `embedded-hal` digital
//! traits so device drivers stacked on top stay portable.

use embedded_hal::digital::{self, ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::config::{GpioConfig, PinDirection, PinId, Pull};

/// Electrical level of a pin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic low
    #[default]
    Low,
    /// Logic high
    High,
}

impl Level {
    /// The opposite level
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Direction misuse of a pin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Attempted to drive a pin configured as an input
    NotAnOutput {
        /// Offending pin
        pin: PinId,
    },
    /// Attempted to sample a pin configured as an output as an input
    NotAnInput {
        /// Offending pin
        pin: PinId,
    },
}

impl digital::Error for GpioError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// One GPIO pin
#[derive(Debug)]
pub struct GpioPin {
    id: PinId,
    direction: PinDirection,
    pull: Pull,
    level: Level,
}

impl GpioPin {
    /// Bind a pin to its location, direction, and pull.
    ///
    /// Outputs start low. Inputs start at the level their pull resistor
    /// rests them at until something external drives them.
    #[must_use]
    pub fn new(id: PinId, config: GpioConfig) -> Self {
        let level = match (config.direction, config.pull) {
            (PinDirection::Input, Pull::Up) => Level::High,
            _ => Level::Low,
        };
        Self {
            id,
            direction: config.direction,
            pull: config.pull,
            level,
        }
    }

    /// Pin identifier
    #[must_use]
    pub const fn id(&self) -> PinId {
        self.id
    }

    /// Physical (port, pin) location
    #[must_use]
    pub const fn location(&self) -> (u8, u8) {
        (self.id.port(), self.id.pin())
    }

    /// Configured direction
    #[must_use]
    pub const fn direction(&self) -> PinDirection {
        self.direction
    }

    /// Configured pull resistor
    #[must_use]
    pub const fn pull(&self) -> Pull {
        self.pull
    }

    /// Current electrical level
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Drive the pin to a level
    pub fn set_level(&mut self, level: Level) -> Result<(), GpioError> {
        if self.direction != PinDirection::Output {
            return Err(GpioError::NotAnOutput { pin: self.id });
        }
        self.level = level;
        Ok(())
    }

    /// Drive the pin high
    pub fn set_high(&mut self) -> Result<(), GpioError> {
        self.set_level(Level::High)
    }

    /// Drive the pin low
    pub fn set_low(&mut self) -> Result<(), GpioError> {
        self.set_level(Level::Low)
    }

    /// Invert the driven level
    pub fn toggle(&mut self) -> Result<(), GpioError> {
        self.set_level(self.level.inverse())
    }

    /// Sample an input pin
    pub fn read(&self) -> Result<Level, GpioError> {
        if self.direction != PinDirection::Input {
            return Err(GpioError::NotAnInput { pin: self.id });
        }
        Ok(self.level)
    }
}

impl ErrorType for GpioPin {
    type Error = GpioError;
}

impl OutputPin for GpioPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        GpioPin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        GpioPin::set_high(self)
    }
}

impl StatefulOutputPin for GpioPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        if self.direction != PinDirection::Output {
            return Err(GpioError::NotAnOutput { pin: self.id });
        }
        Ok(self.level == Level::High)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|high| !high)
    }
}

impl InputPin for GpioPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.read().map(|level| level == Level::High)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.read().map(|level| level == Level::Low)
    }
}
