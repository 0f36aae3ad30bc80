//! Board Configuration Tests
//!
//! Consistency checks for the board description: the identifier
//! enumerations, the pin-assignment table, and the clock constants must
//! agree with each other.
//! Run with: cargo test --test config_tests

use lumidress_firmware::config::*;

// =============================================================================
// Clock constants
// =============================================================================

#[test]
fn cpu_clock_within_part_limit() {
    assert!(CPU_CLOCK_HZ <= MAX_CPU_CLOCK_HZ);
    assert_eq!(CPU_CLOCK_HZ, 100_000_000);
}

#[test]
fn crystal_is_a_standard_part() {
    assert!(XTAL_HZ == 12_000_000 || XTAL_HZ == 25_000_000);
}

#[test]
fn clkout_divides_evenly() {
    assert_eq!(CPU_CLOCK_HZ % CLKOUT_DIVIDER, 0);
}

#[test]
fn animation_tick_divides_cpu_clock() {
    assert_eq!(CPU_CLOCK_HZ % ANIMATION_TICK_HZ, 0);
}

// =============================================================================
// Identifier enumerations
// =============================================================================

#[test]
fn pin_indices_are_contiguous_and_unique() {
    assert_eq!(PinId::ALL.len(), PinId::COUNT);
    for (expected, pin) in PinId::ALL.iter().enumerate() {
        assert_eq!(pin.index(), expected, "{pin:?} out of order in ALL");
    }
}

#[test]
fn spi_indices_are_contiguous_and_unique() {
    assert_eq!(SpiPort::ALL.len(), SpiPort::COUNT);
    for (expected, port) in SpiPort::ALL.iter().enumerate() {
        assert_eq!(port.index(), expected);
    }
}

#[test]
fn timer_indices_are_contiguous_and_unique() {
    assert_eq!(TimerChannel::ALL.len(), TimerChannel::COUNT);
    for (expected, channel) in TimerChannel::ALL.iter().enumerate() {
        assert_eq!(channel.index(), expected);
    }
}

#[test]
fn pin_locations_are_unique_and_plausible() {
    for pin in PinId::ALL {
        assert!(pin.port() <= 1, "{pin:?} names a nonexistent port");
        assert!(pin.pin() < 32, "{pin:?} names a nonexistent pin");
    }
    for a in PinId::ALL {
        for b in PinId::ALL {
            if a != b {
                assert!(
                    (a.port(), a.pin()) != (b.port(), b.pin()),
                    "{a:?} and {b:?} share a physical pin"
                );
            }
        }
    }
}

// =============================================================================
// Pin-assignment table
// =============================================================================

#[test]
fn assignments_route_unique_physical_pins() {
    for i in 0..PIN_ASSIGNMENTS.len() {
        for j in (i + 1)..PIN_ASSIGNMENTS.len() {
            let a = PIN_ASSIGNMENTS[i];
            let b = PIN_ASSIGNMENTS[j];
            assert!(
                (a.port, a.pin) != (b.port, b.pin),
                "physical pin ({}, {}) assigned twice",
                a.port,
                a.pin
            );
        }
    }
}

#[test]
fn every_wired_pin_has_a_gpio_route() {
    for pin in PinId::ALL {
        let routed = PIN_ASSIGNMENTS.iter().any(|a| {
            a.port == pin.port() && a.pin == pin.pin() && a.function == PinFunction::Gpio
        });
        assert!(routed, "{pin:?} missing from the assignment table");
    }
}

#[test]
fn both_spi_ports_have_full_pin_sets() {
    let has = |f: PinFunction| PIN_ASSIGNMENTS.iter().any(|a| a.function == f);

    assert!(has(PinFunction::Spi0Sck));
    assert!(has(PinFunction::Spi0Mosi));
    assert!(has(PinFunction::Spi0Miso));
    assert!(has(PinFunction::Spi1Sck));
    assert!(has(PinFunction::Spi1Mosi));
    assert!(has(PinFunction::Spi1Miso));
}

// =============================================================================
// Per-peripheral configuration
// =============================================================================

#[test]
fn spi_bitrates_are_derivable() {
    for port in SpiPort::ALL {
        let cfg = spi_config(port);
        assert!(cfg.bitrate_hz > 0);
        let divider = CPU_CLOCK_HZ.div_ceil(cfg.bitrate_hz);
        assert!((2..=0xFFFF).contains(&divider), "{port:?} divider {divider}");
    }
}

#[test]
fn led_chains_use_mode0() {
    // APA102-style chains clock data on the rising edge, idle low.
    for port in SpiPort::ALL {
        let mode = spi_config(port).mode;
        assert!(!mode.cpol());
        assert!(!mode.cpha());
    }
}

#[test]
fn every_input_pin_has_a_defined_rest_level() {
    for pin in PinId::ALL {
        let cfg = gpio_config(pin);
        if cfg.direction == PinDirection::Input {
            assert_ne!(
                cfg.pull,
                Pull::None,
                "{pin:?} is an input without a pull resistor"
            );
        }
    }
}

#[test]
fn timer_config_matches_animation_tick() {
    for channel in TimerChannel::ALL {
        assert_eq!(timer_config(channel).tick_hz, ANIMATION_TICK_HZ);
    }
}
