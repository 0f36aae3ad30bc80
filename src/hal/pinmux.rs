//! Pin-function router
//!
//! Routes every physical pin the board uses to its logical function.
//! Constructed exactly once during bring-up, after the clock tree and
//! before any peripheral driver that assumes its pins are already routed.

use heapless::Vec;

use crate::config::{PinAssignment, PinFunction, PinId, PIN_ASSIGNMENTS};

/// Capacity of the routed-pin table, fixed by the board assignment list
const MAX_ROUTES: usize = PIN_ASSIGNMENTS.len();

/// Pin routing failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMuxError {
    /// The assignment table routes the same physical pin twice
    DuplicateAssignment {
        /// GPIO port number
        port: u8,
        /// Pin number within the port
        pin: u8,
    },
    /// The assignment table exceeds the routed-pin capacity
    TableFull,
}

/// Pin-mux state after bring-up
#[derive(Debug)]
pub struct PinMux {
    routes: Vec<PinAssignment, MAX_ROUTES>,
}

impl PinMux {
    /// Apply the board pin-assignment table.
    ///
    /// A duplicate physical pin in the table is a board configuration
    /// defect and fails the whole bring-up.
    pub fn new() -> Result<Self, PinMuxError> {
        let mut routes: Vec<PinAssignment, MAX_ROUTES> = Vec::new();

        for assignment in PIN_ASSIGNMENTS {
            if routes
                .iter()
                .any(|r| r.port == assignment.port && r.pin == assignment.pin)
            {
                return Err(PinMuxError::DuplicateAssignment {
                    port: assignment.port,
                    pin: assignment.pin,
                });
            }
            routes
                .push(assignment)
                .map_err(|_| PinMuxError::TableFull)?;
        }

        Ok(Self { routes })
    }

    /// Function a physical pin is routed to, if any
    #[must_use]
    pub fn function_of(&self, port: u8, pin: u8) -> Option<PinFunction> {
        self.routes
            .iter()
            .find(|r| r.port == port && r.pin == pin)
            .map(|r| r.function)
    }

    /// Whether a wired GPIO pin is routed to its GPIO function
    #[must_use]
    pub fn is_gpio_routed(&self, id: PinId) -> bool {
        self.function_of(id.port(), id.pin()) == Some(PinFunction::Gpio)
    }

    /// Number of routed pins
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}
