// src/factories/automobile_factory.rs

use crate::{Automobile, AutomobileKind, Car, PatternError, Tank};
use std::io::Write;
use tracing::debug;

/// Factory-method creator for automobiles.
///
/// Implementors only decide which automobile to produce.
/// `manufacture_automobile` is shared by every factory and should not be
/// overridden.
pub trait AutomobileFactory: Send + Sync {
    /// Produces a new automobile. Total, with no side effects.
    fn produce_automobile(&self) -> Box<dyn Automobile>;

    /// Produces an automobile, drives it once, and hands it back.
    ///
    /// # Returns
    /// * `Ok(Box<dyn Automobile>)` - The automobile that was driven
    /// * `Err(PatternError::Output)` - Writing to `out` failed
    fn manufacture_automobile(
        &self,
        out: &mut dyn Write,
    ) -> Result<Box<dyn Automobile>, PatternError> {
        let automobile = self.produce_automobile();
        automobile.drive(out)?;
        Ok(automobile)
    }
}

/// Produces tanks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefenseAutomobileFactory;

impl AutomobileFactory for DefenseAutomobileFactory {
    fn produce_automobile(&self) -> Box<dyn Automobile> {
        debug!(factory = "defense", kind = %AutomobileKind::Tank, "producing automobile");
        Box::new(Tank)
    }
}

/// Produces cars.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalAutomobileFactory;

impl AutomobileFactory for NormalAutomobileFactory {
    fn produce_automobile(&self) -> Box<dyn Automobile> {
        debug!(factory = "normal", kind = %AutomobileKind::Car, "producing automobile");
        Box::new(Car)
    }
}
