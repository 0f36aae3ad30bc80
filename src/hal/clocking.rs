//! Clock-tree configurator
//!
//! Establishes the CPU and peripheral clock tree from the fixed target
//! frequency in [`crate::config`]. Constructed exactly once, before the
//! pin mux and before any peripheral driver.

use crate::config::{CLKOUT_DIVIDER, MAX_CPU_CLOCK_HZ, XTAL_HZ};

/// Largest usable PLL input pre-divider
const MAX_PRE_DIV: u32 = 4;

/// Largest usable PLL feedback multiplier
const MAX_MULT: u32 = 64;

/// Solved system PLL settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllSettings {
    /// Input pre-divider (crystal / pre_div feeds the phase detector)
    pub pre_div: u32,
    /// Feedback multiplier
    pub mult: u32,
}

/// Clock configuration failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Requested frequency exceeds the part maximum
    AboveMaximum {
        /// Frequency that was requested
        requested_hz: u32,
    },
    /// No pre-divider/multiplier pair hits the requested frequency exactly
    Unreachable {
        /// Frequency that was requested
        requested_hz: u32,
    },
}

/// Clock-tree state after bring-up
#[derive(Clone, Copy, Debug)]
pub struct Clocking {
    cpu_hz: u32,
    pll: PllSettings,
    clkout_div: u32,
}

impl Clocking {
    /// Solve and apply the system PLL for the target CPU frequency.
    ///
    /// The CLKOUT observation divider is fixed by the board configuration.
    pub fn new(target_hz: u32) -> Result<Self, ClockError> {
        if target_hz > MAX_CPU_CLOCK_HZ {
            return Err(ClockError::AboveMaximum {
                requested_hz: target_hz,
            });
        }

        let pll = solve_pll(target_hz).ok_or(ClockError::Unreachable {
            requested_hz: target_hz,
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "clocking: pll pre_div={} mult={} cpu={} Hz",
            pll.pre_div,
            pll.mult,
            target_hz
        );

        Ok(Self {
            cpu_hz: target_hz,
            pll,
            clkout_div: CLKOUT_DIVIDER,
        })
    }

    /// Configured CPU clock frequency
    #[must_use]
    pub const fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    /// Solved PLL settings
    #[must_use]
    pub const fn pll(&self) -> PllSettings {
        self.pll
    }

    /// Frequency observable on the CLKOUT pin
    #[must_use]
    pub const fn clkout_hz(&self) -> u32 {
        self.cpu_hz / self.clkout_div
    }
}

/// Find the smallest pre-divider whose multiplier lands exactly on target.
fn solve_pll(target_hz: u32) -> Option<PllSettings> {
    for pre_div in 1..=MAX_PRE_DIV {
        let numerator = u64::from(target_hz) * u64::from(pre_div);
        if numerator % u64::from(XTAL_HZ) != 0 {
            continue;
        }
        let mult = numerator / u64::from(XTAL_HZ);
        if (1..=u64::from(MAX_MULT)).contains(&mult) {
            return Some(PllSettings {
                pre_div,
                mult: mult as u32,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CPU_CLOCK_HZ;

    #[test]
    fn solves_board_target() {
        // 12 MHz / 3 * 25 = 100 MHz
        let pll = solve_pll(CPU_CLOCK_HZ).unwrap();
        assert_eq!(pll, PllSettings { pre_div: 3, mult: 25 });
    }

    #[test]
    fn prefers_smallest_pre_divider() {
        // 96 MHz reachable without pre-division
        let pll = solve_pll(96_000_000).unwrap();
        assert_eq!(pll, PllSettings { pre_div: 1, mult: 8 });
    }

    #[test]
    fn rejects_unreachable_target() {
        assert!(solve_pll(1).is_none());
        assert!(solve_pll(99_999_999).is_none());
    }

    #[test]
    fn new_checks_part_maximum() {
        let err = Clocking::new(MAX_CPU_CLOCK_HZ + 1).unwrap_err();
        assert_eq!(
            err,
            ClockError::AboveMaximum {
                requested_hz: MAX_CPU_CLOCK_HZ + 1
            }
        );
    }

    #[test]
    fn clkout_follows_divider() {
        let clocking = Clocking::new(CPU_CLOCK_HZ).unwrap();
        assert_eq!(clkout_div_product(&clocking), CPU_CLOCK_HZ);
    }

    fn clkout_div_product(clocking: &Clocking) -> u32 {
        clocking.clkout_hz() * CLKOUT_DIVIDER
    }
}
