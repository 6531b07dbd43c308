use crate::{Brand, PatternError};
use std::any::Any;
use std::fmt;
use std::io::Write;

pub trait Monitor: fmt::Debug + Send + Sync {
    fn brand(&self) -> Brand;

    fn assemble(&self, out: &mut dyn Write) -> Result<(), PatternError>;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsiMonitor;

impl Monitor for MsiMonitor {
    fn brand(&self) -> Brand {
        Brand::Msi
    }

    fn assemble(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        writeln!(out, "MSI monitor assembled")?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsusMonitor;

impl Monitor for AsusMonitor {
    fn brand(&self) -> Brand {
        Brand::Asus
    }

    fn assemble(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        writeln!(out, "Asus monitor assembled")?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
