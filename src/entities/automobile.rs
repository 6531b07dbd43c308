use crate::{AutomobileKind, PatternError};
use std::any::Any;
use std::fmt;
use std::io::Write;

/// Product of the factory-method creators.
///
/// Implementations are stateless. `drive` emits the same line every time it
/// is called.
pub trait Automobile: fmt::Debug + Send + Sync {
    /// Returns the variant tag of this automobile.
    fn kind(&self) -> AutomobileKind;

    /// Writes this automobile's single line to `out`.
    fn drive(&self, out: &mut dyn Write) -> Result<(), PatternError>;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tank;

impl Automobile for Tank {
    fn kind(&self) -> AutomobileKind {
        AutomobileKind::Tank
    }

    fn drive(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        writeln!(out, "Army drives a tank!")?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

impl Automobile for Car {
    fn kind(&self) -> AutomobileKind {
        AutomobileKind::Car
    }

    fn drive(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        writeln!(out, "Car drives by normal citizens.")?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
