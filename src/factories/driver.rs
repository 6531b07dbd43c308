// src/factories/driver.rs

use crate::{Automobile, AutomobileKind, Car, PatternError, Tank};
use std::io::Write;
use tracing::debug;

/// Creator that hands a driver the vehicle matching their role.
///
/// Unlike [`AutomobileFactory`](crate::factories::AutomobileFactory), the
/// shared operation keeps nothing: the vehicle is driven and dropped.
pub trait Driver: Send + Sync {
    /// Creates the automobile for this driver. Total, with no side effects.
    fn create_automobile(&self) -> Box<dyn Automobile>;

    /// Creates an automobile and drives it once.
    ///
    /// # Returns
    /// * `Err(PatternError::Output)` - Writing to `out` failed
    fn get_them_vehicle(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        let automobile = self.create_automobile();
        automobile.drive(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefenseDriver;

impl Driver for DefenseDriver {
    fn create_automobile(&self) -> Box<dyn Automobile> {
        debug!(driver = "defense", kind = %AutomobileKind::Tank, "creating automobile");
        Box::new(Tank)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalDriver;

impl Driver for NormalDriver {
    fn create_automobile(&self) -> Box<dyn Automobile> {
        debug!(driver = "normal", kind = %AutomobileKind::Car, "creating automobile");
        Box::new(Car)
    }
}
