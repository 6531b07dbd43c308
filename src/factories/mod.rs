// src/factories/mod.rs

mod automobile_factory;
mod company;
mod driver;

pub use automobile_factory::{AutomobileFactory, DefenseAutomobileFactory, NormalAutomobileFactory};
pub use company::{AsusManufacturer, Company, MsiManufacturer};
pub use driver::{DefenseDriver, Driver, NormalDriver};

use crate::{AutomobileKind, Brand};

/// Collection holding one instance of every concrete creator.
///
/// Lookups are static: the tag alone decides which creator is returned.
#[derive(Debug, Clone, Default)]
pub struct Factories {
    defense: DefenseAutomobileFactory,
    normal: NormalAutomobileFactory,
    defense_driver: DefenseDriver,
    normal_driver: NormalDriver,
    msi: MsiManufacturer,
    asus: AsusManufacturer,
}

impl Factories {
    /// Creates a new collection of factories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the automobile factory for `kind`.
    pub fn automobile(&self, kind: AutomobileKind) -> &dyn AutomobileFactory {
        match kind {
            AutomobileKind::Tank => &self.defense,
            AutomobileKind::Car => &self.normal,
        }
    }

    /// Returns the driver for `kind`.
    pub fn driver(&self, kind: AutomobileKind) -> &dyn Driver {
        match kind {
            AutomobileKind::Tank => &self.defense_driver,
            AutomobileKind::Car => &self.normal_driver,
        }
    }

    /// Returns the company for `brand`.
    pub fn company(&self, brand: Brand) -> &dyn Company {
        match brand {
            Brand::Msi => &self.msi,
            Brand::Asus => &self.asus,
        }
    }
}
