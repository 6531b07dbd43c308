use crate::{Brand, PatternError};
use std::any::Any;
use std::fmt;
use std::io::Write;

pub trait Gpu: fmt::Debug + Send + Sync {
    fn brand(&self) -> Brand;

    fn assemble(&self, out: &mut dyn Write) -> Result<(), PatternError>;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsiGpu;

impl Gpu for MsiGpu {
    fn brand(&self) -> Brand {
        Brand::Msi
    }

    fn assemble(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        writeln!(out, "Assembling MSI gpu")?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsusGpu;

impl Gpu for AsusGpu {
    fn brand(&self) -> Brand {
        Brand::Asus
    }

    fn assemble(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        writeln!(out, "Assembling Asus gpu")?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
