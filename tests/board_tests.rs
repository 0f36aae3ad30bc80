//! Bring-up Order Tests
//!
//! A recording `Board` double verifies the load-bearing construction
//! order: clock tree first, pin routing second, every peripheral driver
//! after both.
//! Run with: cargo test --test board_tests

use lumidress_firmware::hal::{ClockError, Clocking, GpioPin, PinMux, PinMuxError, SpiError, SpiMaster, Timer};
use lumidress_firmware::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BringUpEvent {
    Clocks,
    PinMux,
    Gpio(PinId),
    Spi(SpiPort),
    Timer(TimerChannel),
}

/// Delegates to the production board while logging every construction.
#[derive(Default)]
struct RecordingBoard {
    inner: LumiBoard,
    events: Vec<BringUpEvent>,
}

impl Board for RecordingBoard {
    fn clocking(&mut self) -> Result<Clocking, ClockError> {
        self.events.push(BringUpEvent::Clocks);
        self.inner.clocking()
    }

    fn pinmux(&mut self) -> Result<PinMux, PinMuxError> {
        self.events.push(BringUpEvent::PinMux);
        self.inner.pinmux()
    }

    fn gpio_pin(&mut self, pin: PinId) -> GpioPin {
        self.events.push(BringUpEvent::Gpio(pin));
        self.inner.gpio_pin(pin)
    }

    fn spi_master(&mut self, port: SpiPort) -> Result<SpiMaster, SpiError> {
        self.events.push(BringUpEvent::Spi(port));
        self.inner.spi_master(port)
    }

    fn timer(&mut self, channel: TimerChannel) -> Timer {
        self.events.push(BringUpEvent::Timer(channel));
        self.inner.timer(channel)
    }
}

#[test]
fn clocks_before_pinmux_before_drivers() {
    let mut board = RecordingBoard::default();
    let _mcu = Mcu::with_board(&mut board).unwrap();

    assert_eq!(board.events[0], BringUpEvent::Clocks);
    assert_eq!(board.events[1], BringUpEvent::PinMux);
    for event in &board.events[2..] {
        assert!(
            matches!(
                event,
                BringUpEvent::Gpio(_) | BringUpEvent::Spi(_) | BringUpEvent::Timer(_)
            ),
            "configurators must not be reconstructed after drivers: {event:?}"
        );
    }
}

#[test]
fn every_peripheral_is_constructed_exactly_once() {
    let mut board = RecordingBoard::default();
    let _mcu = Mcu::with_board(&mut board).unwrap();

    for pin in PinId::ALL {
        let count = board
            .events
            .iter()
            .filter(|e| **e == BringUpEvent::Gpio(pin))
            .count();
        assert_eq!(count, 1, "{pin:?} constructed {count} times");
    }
    for port in SpiPort::ALL {
        let count = board
            .events
            .iter()
            .filter(|e| **e == BringUpEvent::Spi(port))
            .count();
        assert_eq!(count, 1);
    }
    for channel in TimerChannel::ALL {
        let count = board
            .events
            .iter()
            .filter(|e| **e == BringUpEvent::Timer(channel))
            .count();
        assert_eq!(count, 1);
    }

    let expected = 2 + PinId::COUNT + SpiPort::COUNT + TimerChannel::COUNT;
    assert_eq!(board.events.len(), expected);
}

#[test]
fn registry_over_a_double_matches_production_configuration() {
    let mut board = RecordingBoard::default();
    let mcu = Mcu::with_board(&mut board).unwrap();

    assert_eq!(mcu.spi_master(SpiPort::Spi0).requested_bitrate_hz(), 4_000_000);
    assert_eq!(mcu.spi_master(SpiPort::Spi1).requested_bitrate_hz(), 2_000_000);
    assert_eq!(mcu.timer(TimerChannel::Ctimer0).tick_hz(), 1_000_000);
}
