use crate::factories::Factories;
use crate::{AutomobileKind, Brand, Demo, Part, PatternError, ShowcaseConfig};
use std::io::Write;
use tracing::{info, info_span};

/// Runs each factory-method creator once: normal first, then defense.
pub fn factory_method_demo(out: &mut dyn Write) -> Result<(), PatternError> {
    let _span = info_span!("demo", demo = %Demo::FactoryMethod).entered();
    let factories = Factories::new();

    let car = factories
        .automobile(AutomobileKind::Car)
        .manufacture_automobile(out)?;
    let tank = factories
        .automobile(AutomobileKind::Tank)
        .manufacture_automobile(out)?;

    info!(first = %car.kind(), second = %tank.kind(), "automobiles manufactured");
    Ok(())
}

/// Hands each driver their vehicle: defense first, then normal.
pub fn driver_demo(out: &mut dyn Write) -> Result<(), PatternError> {
    let _span = info_span!("demo", demo = %Demo::Driver).entered();
    let factories = Factories::new();

    factories.driver(AutomobileKind::Tank).get_them_vehicle(out)?;
    factories.driver(AutomobileKind::Car).get_them_vehicle(out)?;
    Ok(())
}

/// Assembles a GPU and a monitor from MSI, then from Asus.
pub fn abstract_factory_demo(out: &mut dyn Write) -> Result<(), PatternError> {
    let _span = info_span!("demo", demo = %Demo::AbstractFactory).entered();
    let factories = Factories::new();

    for brand in Brand::ALL {
        let company = factories.company(brand);
        company.assemble_gpu(out)?;
        company.assemble_monitor(out)?;
        info!(%brand, "product family assembled");
    }
    Ok(())
}

pub fn run_demo(demo: Demo, out: &mut dyn Write) -> Result<(), PatternError> {
    match demo {
        Demo::FactoryMethod => factory_method_demo(out),
        Demo::Driver => driver_demo(out),
        Demo::AbstractFactory => abstract_factory_demo(out),
    }
}

/// Runs every demo listed in `config`, in order.
pub fn run_showcase(config: &ShowcaseConfig, out: &mut dyn Write) -> Result<(), PatternError> {
    config.validate()?;
    for demo in &config.demos {
        run_demo(*demo, out)?;
    }
    Ok(())
}

/// Manufactures a single automobile of `kind`.
pub fn manufacture(kind: AutomobileKind, out: &mut dyn Write) -> Result<(), PatternError> {
    kind.factory().manufacture_automobile(out)?;
    Ok(())
}

/// Lets the driver for `kind` take their vehicle.
pub fn drive(kind: AutomobileKind, out: &mut dyn Write) -> Result<(), PatternError> {
    kind.driver().get_them_vehicle(out)
}

/// Assembles `parts` from `brand`, in the given order.
pub fn assemble(brand: Brand, parts: &[Part], out: &mut dyn Write) -> Result<(), PatternError> {
    let company = brand.company();
    for part in parts {
        match part {
            Part::Gpu => {
                company.assemble_gpu(out)?;
            }
            Part::Monitor => {
                company.assemble_monitor(out)?;
            }
        }
    }
    Ok(())
}

/// Assembles from the selected brands and parts. `None` selects every
/// brand or every part, so `(None, None)` matches `abstract_factory_demo`.
pub fn assemble_filtered(
    brand: Option<Brand>,
    part: Option<Part>,
    out: &mut dyn Write,
) -> Result<(), PatternError> {
    let brands = brand.map_or(Brand::ALL.to_vec(), |b| vec![b]);
    let parts = part.map_or(Part::ALL.to_vec(), |p| vec![p]);
    for brand in brands {
        assemble(brand, &parts, out)?;
    }
    Ok(())
}
