//! SPI master driver
//!
//! One driver instance per wired port. The serial clock divider is derived
//! from the CPU clock at construction; the LED chain protocols on this
//! board tolerate the resulting rounding toward a slower clock.

use crate::config::{SpiConfig, SpiMode, SpiPort, CPU_CLOCK_HZ};

/// Smallest legal serial clock divider
const MIN_DIVIDER: u32 = 2;

/// Largest legal serial clock divider (16-bit divider register)
const MAX_DIVIDER: u32 = 0xFFFF;

/// SPI configuration failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError {
    /// Requested bitrate cannot be derived from the CPU clock
    BitrateOutOfRange {
        /// Bitrate that was requested
        requested_hz: u32,
    },
}

/// One SPI master port
#[derive(Debug)]
pub struct SpiMaster {
    port: SpiPort,
    requested_hz: u32,
    divider: u32,
    mode: SpiMode,
}

impl SpiMaster {
    /// Bind a port to its bitrate and clock mode.
    pub fn new(port: SpiPort, config: SpiConfig) -> Result<Self, SpiError> {
        if config.bitrate_hz == 0 {
            return Err(SpiError::BitrateOutOfRange {
                requested_hz: config.bitrate_hz,
            });
        }
        let divider = CPU_CLOCK_HZ.div_ceil(config.bitrate_hz);
        if !(MIN_DIVIDER..=MAX_DIVIDER).contains(&divider) {
            return Err(SpiError::BitrateOutOfRange {
                requested_hz: config.bitrate_hz,
            });
        }
        Ok(Self {
            port,
            requested_hz: config.bitrate_hz,
            divider,
            mode: config.mode,
        })
    }

    /// Port identifier
    #[must_use]
    pub const fn port(&self) -> SpiPort {
        self.port
    }

    /// Clock polarity/phase
    #[must_use]
    pub const fn mode(&self) -> SpiMode {
        self.mode
    }

    /// Serial clock divider applied to the CPU clock
    #[must_use]
    pub const fn divider(&self) -> u32 {
        self.divider
    }

    /// Bitrate the board configuration asked for
    #[must_use]
    pub const fn requested_bitrate_hz(&self) -> u32 {
        self.requested_hz
    }

    /// Bitrate actually achieved after divider rounding
    #[must_use]
    pub const fn actual_bitrate_hz(&self) -> u32 {
        CPU_CLOCK_HZ / self.divider
    }
}
