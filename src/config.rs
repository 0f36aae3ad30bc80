//! Board configuration and hardware constants
//!
//! This module is the single source of truth for what the dress controller
//! board wires up: clock frequencies, the closed sets of peripheral
//! identifiers, the pin-function assignment table, and the per-peripheral
//! configuration consumed by the drivers at construction time.
//!
//! Adding or removing a board peripheral means editing the identifier
//! enumeration and the matching table in this file together; the exhaustive
//! matches below and the `ALL`-driven construction in [`crate::mcu`] keep
//! the two in lockstep at compile time.

/// Crystal oscillator frequency feeding the system PLL (12 MHz)
pub const XTAL_HZ: u32 = 12_000_000;

/// Target CPU clock frequency (LPC5411x @ 100 MHz)
pub const CPU_CLOCK_HZ: u32 = 100_000_000;

/// Maximum CPU clock the part supports
pub const MAX_CPU_CLOCK_HZ: u32 = 100_000_000;

/// CLKOUT observation clock divider (CLKOUT = CPU clock / divider)
pub const CLKOUT_DIVIDER: u32 = 10;

/// SPI0 bitrate — skirt LED chain (APA102, short run)
pub const SPI0_BITRATE_HZ: u32 = 4_000_000;

/// SPI1 bitrate — bodice LED chain (longer run, derated)
pub const SPI1_BITRATE_HZ: u32 = 2_000_000;

/// CTIMER0 tick rate for the animation scheduler (1 µs resolution)
pub const ANIMATION_TICK_HZ: u32 = 1_000_000;

//
// Peripheral identifier enumerations
//

/// GPIO pins wired on this board
///
/// Closed and exhaustive: every variant names a physically wired pin, and
/// every wired pin has a variant. The discriminants are contiguous from
/// zero so the value doubles as the lookup index into the registry's
/// owned-instance array.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinId {
    /// Mode select button (active low)
    Pio0_2 = 0,
    /// Skirt LED rail enable
    Pio0_11,
    /// Bodice LED rail enable
    Pio0_12,
    /// Collar accent string enable
    Pio0_13,
    /// Status LED, green
    Pio0_14,
    /// Status LED, red
    Pio0_15,
    /// Charger status input (open drain, active low)
    Pio0_18,
    /// Haptic motor enable
    Pio0_19,
    /// Motion sensor input
    Pio0_23,
    /// 5 V boost converter enable
    Pio0_24,
    /// LED level shifter output enable
    Pio0_25,
    /// Battery gauge alert input
    Pio1_17,
}

impl PinId {
    /// Every wired pin, in discriminant order
    pub const ALL: [Self; 12] = [
        Self::Pio0_2,
        Self::Pio0_11,
        Self::Pio0_12,
        Self::Pio0_13,
        Self::Pio0_14,
        Self::Pio0_15,
        Self::Pio0_18,
        Self::Pio0_19,
        Self::Pio0_23,
        Self::Pio0_24,
        Self::Pio0_25,
        Self::Pio1_17,
    ];

    /// Number of wired pins
    pub const COUNT: usize = Self::ALL.len();

    /// Lookup index of this pin (contiguous from zero)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// GPIO port number
    #[must_use]
    pub const fn port(self) -> u8 {
        match self {
            Self::Pio1_17 => 1,
            _ => 0,
        }
    }

    /// Pin number within the port
    #[must_use]
    pub const fn pin(self) -> u8 {
        match self {
            Self::Pio0_2 => 2,
            Self::Pio0_11 => 11,
            Self::Pio0_12 => 12,
            Self::Pio0_13 => 13,
            Self::Pio0_14 => 14,
            Self::Pio0_15 => 15,
            Self::Pio0_18 => 18,
            Self::Pio0_19 => 19,
            Self::Pio0_23 => 23,
            Self::Pio0_24 => 24,
            Self::Pio0_25 => 25,
            Self::Pio1_17 => 17,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PIO{}_{}", self.port(), self.pin());
    }
}

/// SPI master peripherals wired on this board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpiPort {
    /// Skirt LED chain
    Spi0 = 0,
    /// Bodice LED chain
    Spi1,
}

impl SpiPort {
    /// Every wired SPI port, in discriminant order
    pub const ALL: [Self; 2] = [Self::Spi0, Self::Spi1];

    /// Number of wired SPI ports
    pub const COUNT: usize = Self::ALL.len();

    /// Lookup index of this port (contiguous from zero)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SpiPort {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Spi0 => defmt::write!(f, "SPI0"),
            Self::Spi1 => defmt::write!(f, "SPI1"),
        }
    }
}

/// Timer channels wired on this board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerChannel {
    /// Animation scheduler tick
    Ctimer0 = 0,
}

impl TimerChannel {
    /// Every wired timer channel, in discriminant order
    pub const ALL: [Self; 1] = [Self::Ctimer0];

    /// Number of wired timer channels
    pub const COUNT: usize = Self::ALL.len();

    /// Lookup index of this channel (contiguous from zero)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimerChannel {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Ctimer0 => defmt::write!(f, "CTIMER0"),
        }
    }
}

/// ADC channels wired on this board
///
/// This board revision bonds no ADC inputs, so the enumeration is
/// uninhabited. A future revision that wires AD6/AD7 only adds variants
/// here (and the matching instances in the registry); keeping the empty
/// enum means the identifier set and the ownership list cannot drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdcChannel {}

//
// Pin multiplexing
//

/// Logical function a physical pin is routed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinFunction {
    /// General-purpose digital I/O
    Gpio,
    /// SPI0 serial clock
    Spi0Sck,
    /// SPI0 master-out
    Spi0Mosi,
    /// SPI0 master-in
    Spi0Miso,
    /// SPI1 serial clock
    Spi1Sck,
    /// SPI1 master-out
    Spi1Mosi,
    /// SPI1 master-in
    Spi1Miso,
    /// Clock observation output
    ClkOut,
    /// CTIMER0 match output (global brightness PWM)
    Ct0Mat0,
}

/// One entry of the pin-function assignment table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinAssignment {
    /// GPIO port number
    pub port: u8,
    /// Pin number within the port
    pub pin: u8,
    /// Function the pin is routed to
    pub function: PinFunction,
}

const fn gpio_route(id: PinId) -> PinAssignment {
    PinAssignment {
        port: id.port(),
        pin: id.pin(),
        function: PinFunction::Gpio,
    }
}

const fn func_route(port: u8, pin: u8, function: PinFunction) -> PinAssignment {
    PinAssignment { port, pin, function }
}

/// Every pin-function route this board needs, applied in order by the
/// pin-mux configurator during bring-up. Physical pins must be unique.
pub const PIN_ASSIGNMENTS: [PinAssignment; 20] = [
    gpio_route(PinId::Pio0_2),
    gpio_route(PinId::Pio0_11),
    gpio_route(PinId::Pio0_12),
    gpio_route(PinId::Pio0_13),
    gpio_route(PinId::Pio0_14),
    gpio_route(PinId::Pio0_15),
    gpio_route(PinId::Pio0_18),
    gpio_route(PinId::Pio0_19),
    gpio_route(PinId::Pio0_23),
    gpio_route(PinId::Pio0_24),
    gpio_route(PinId::Pio0_25),
    gpio_route(PinId::Pio1_17),
    func_route(0, 6, PinFunction::Spi0Sck),
    func_route(0, 9, PinFunction::Spi0Mosi),
    func_route(0, 8, PinFunction::Spi0Miso),
    func_route(1, 15, PinFunction::Spi1Sck),
    func_route(0, 21, PinFunction::Spi1Mosi),
    func_route(0, 22, PinFunction::Spi1Miso),
    func_route(1, 6, PinFunction::ClkOut),
    func_route(1, 5, PinFunction::Ct0Mat0),
];

//
// Per-peripheral configuration
//

/// Electrical direction of a GPIO pin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// Driven by the MCU
    Output,
    /// Driven externally
    Input,
}

/// Internal pull resistor selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull resistor
    None,
    /// Pull-up
    Up,
    /// Pull-down
    Down,
}

/// Construction-time configuration for one GPIO pin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GpioConfig {
    /// Electrical direction
    pub direction: PinDirection,
    /// Internal pull resistor
    pub pull: Pull,
}

/// GPIO configuration for a wired pin
#[must_use]
pub const fn gpio_config(pin: PinId) -> GpioConfig {
    let (direction, pull) = match pin {
        PinId::Pio0_2 => (PinDirection::Input, Pull::Up),
        PinId::Pio0_18 => (PinDirection::Input, Pull::Up),
        PinId::Pio0_23 => (PinDirection::Input, Pull::Down),
        PinId::Pio1_17 => (PinDirection::Input, Pull::Up),
        PinId::Pio0_11
        | PinId::Pio0_12
        | PinId::Pio0_13
        | PinId::Pio0_14
        | PinId::Pio0_15
        | PinId::Pio0_19
        | PinId::Pio0_24
        | PinId::Pio0_25 => (PinDirection::Output, Pull::None),
    };
    GpioConfig { direction, pull }
}

/// SPI clock polarity/phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// CPOL = 0, CPHA = 0
    Mode0,
    /// CPOL = 0, CPHA = 1
    Mode1,
    /// CPOL = 1, CPHA = 0
    Mode2,
    /// CPOL = 1, CPHA = 1
    Mode3,
}

impl SpiMode {
    /// Clock polarity bit
    #[must_use]
    pub const fn cpol(self) -> bool {
        matches!(self, Self::Mode2 | Self::Mode3)
    }

    /// Clock phase bit
    #[must_use]
    pub const fn cpha(self) -> bool {
        matches!(self, Self::Mode1 | Self::Mode3)
    }
}

/// Construction-time configuration for one SPI master
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpiConfig {
    /// Requested serial clock rate
    pub bitrate_hz: u32,
    /// Clock polarity/phase
    pub mode: SpiMode,
}

/// SPI configuration for a wired port
#[must_use]
pub const fn spi_config(port: SpiPort) -> SpiConfig {
    match port {
        SpiPort::Spi0 => SpiConfig {
            bitrate_hz: SPI0_BITRATE_HZ,
            mode: SpiMode::Mode0,
        },
        SpiPort::Spi1 => SpiConfig {
            bitrate_hz: SPI1_BITRATE_HZ,
            mode: SpiMode::Mode0,
        },
    }
}

/// Construction-time configuration for one timer channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerConfig {
    /// Requested counter tick rate
    pub tick_hz: u32,
}

/// Timer configuration for a wired channel
#[must_use]
pub const fn timer_config(channel: TimerChannel) -> TimerConfig {
    match channel {
        TimerChannel::Ctimer0 => TimerConfig {
            tick_hz: ANIMATION_TICK_HZ,
        },
    }
}
