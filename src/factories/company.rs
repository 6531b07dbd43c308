// src/factories/company.rs

use crate::{AsusGpu, AsusMonitor, Brand, Gpu, Monitor, MsiGpu, MsiMonitor, PatternError};
use std::io::Write;
use tracing::debug;

/// Abstract factory for a hardware product family.
///
/// A company creates GPUs and monitors of its own brand only, so every
/// product obtained from one company belongs to the same family.
pub trait Company: Send + Sync {
    /// Returns the brand shared by every product this company creates.
    fn brand(&self) -> Brand;

    /// Creates a GPU of this company's brand. Total, with no side effects.
    fn create_gpu(&self) -> Box<dyn Gpu>;

    /// Creates a monitor of this company's brand. Total, with no side effects.
    fn create_monitor(&self) -> Box<dyn Monitor>;

    /// Creates one GPU, assembles it, and returns that same GPU.
    fn assemble_gpu(&self, out: &mut dyn Write) -> Result<Box<dyn Gpu>, PatternError> {
        let gpu = self.create_gpu();
        gpu.assemble(out)?;
        Ok(gpu)
    }

    /// Creates one monitor, assembles it, and returns that same monitor.
    fn assemble_monitor(&self, out: &mut dyn Write) -> Result<Box<dyn Monitor>, PatternError> {
        let monitor = self.create_monitor();
        monitor.assemble(out)?;
        Ok(monitor)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MsiManufacturer;

impl Company for MsiManufacturer {
    fn brand(&self) -> Brand {
        Brand::Msi
    }

    fn create_gpu(&self) -> Box<dyn Gpu> {
        debug!(brand = %Brand::Msi, "creating gpu");
        Box::new(MsiGpu)
    }

    fn create_monitor(&self) -> Box<dyn Monitor> {
        debug!(brand = %Brand::Msi, "creating monitor");
        Box::new(MsiMonitor)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AsusManufacturer;

impl Company for AsusManufacturer {
    fn brand(&self) -> Brand {
        Brand::Asus
    }

    fn create_gpu(&self) -> Box<dyn Gpu> {
        debug!(brand = %Brand::Asus, "creating gpu");
        Box::new(AsusGpu)
    }

    fn create_monitor(&self) -> Box<dyn Monitor> {
        debug!(brand = %Brand::Asus, "creating monitor");
        Box::new(AsusMonitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msi_assembles_gpu() {
        let mut out = Vec::new();
        let gpu = MsiManufacturer.assemble_gpu(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Assembling MSI gpu\n");
        assert!(gpu.as_any().downcast_ref::<MsiGpu>().is_some());
    }

    #[test]
    fn test_asus_assembles_monitor() {
        let mut out = Vec::new();
        let monitor = AsusManufacturer.assemble_monitor(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Asus monitor assembled\n");
        assert!(monitor.as_any().downcast_ref::<AsusMonitor>().is_some());
    }

    #[test]
    fn test_factory_operations_return_family_variants() {
        assert!(MsiManufacturer.create_monitor().as_any().is::<MsiMonitor>());
        assert!(AsusManufacturer.create_gpu().as_any().is::<AsusGpu>());
        assert!(!AsusManufacturer.create_gpu().as_any().is::<MsiGpu>());
    }

    #[test]
    fn test_products_share_company_brand() {
        let companies: [&dyn Company; 2] = [&MsiManufacturer, &AsusManufacturer];
        for company in companies {
            assert_eq!(company.create_gpu().brand(), company.brand());
            assert_eq!(company.create_monitor().brand(), company.brand());
        }
    }
}
