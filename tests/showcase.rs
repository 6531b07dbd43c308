use creational_patterns::factories::{
    AsusManufacturer, AutomobileFactory, Company, DefenseAutomobileFactory, Factories,
    MsiManufacturer, NormalAutomobileFactory,
};
use creational_patterns::services::showcase;
use creational_patterns::{
    AsusMonitor, AutomobileKind, Brand, Car, Demo, MsiGpu, Part, ShowcaseConfig, Tank,
};
use std::io::Write;

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn tank_factory_prints_exact_line() {
    let mut out = Vec::new();
    DefenseAutomobileFactory
        .manufacture_automobile(&mut out)
        .unwrap();
    assert_eq!(lines(out), vec!["Army drives a tank!"]);
}

#[test]
fn car_factory_prints_exact_line() {
    let mut out = Vec::new();
    NormalAutomobileFactory
        .manufacture_automobile(&mut out)
        .unwrap();
    assert_eq!(lines(out), vec!["Car drives by normal citizens."]);
}

#[test]
fn msi_assembles_gpu_line() {
    let mut out = Vec::new();
    MsiManufacturer.assemble_gpu(&mut out).unwrap();
    assert_eq!(lines(out), vec!["Assembling MSI gpu"]);
}

#[test]
fn asus_assembles_monitor_line() {
    let mut out = Vec::new();
    AsusManufacturer.assemble_monitor(&mut out).unwrap();
    assert_eq!(lines(out), vec!["Asus monitor assembled"]);
}

#[test]
fn creators_return_their_associated_variants() {
    let factories = Factories::new();

    let tank = factories.automobile(AutomobileKind::Tank).produce_automobile();
    let car = factories.automobile(AutomobileKind::Car).produce_automobile();
    assert!(tank.as_any().is::<Tank>());
    assert!(car.as_any().is::<Car>());

    let gpu = factories.company(Brand::Msi).create_gpu();
    let monitor = factories.company(Brand::Asus).create_monitor();
    assert!(gpu.as_any().is::<MsiGpu>());
    assert!(monitor.as_any().is::<AsusMonitor>());
}

#[test]
fn product_behavior_is_idempotent() {
    let company: Box<dyn Company> = Brand::Asus.company();
    let gpu = company.create_gpu();

    let mut first = Vec::new();
    let mut second = Vec::new();
    gpu.assemble(&mut first).unwrap();
    gpu.assemble(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn full_showcase_replays_every_entry_point() {
    let mut out = Vec::new();
    showcase::run_showcase(&ShowcaseConfig::default(), &mut out).unwrap();

    assert_eq!(
        lines(out),
        vec![
            "Car drives by normal citizens.",
            "Army drives a tank!",
            "Army drives a tank!",
            "Car drives by normal citizens.",
            "Assembling MSI gpu",
            "MSI monitor assembled",
            "Assembling Asus gpu",
            "Asus monitor assembled",
        ]
    );
}

#[test]
fn showcase_from_config_file_respects_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"demos = ["driver", "factory-method"]"#).unwrap();
    let config = ShowcaseConfig::load(file.path()).unwrap();
    assert_eq!(config.demos, vec![Demo::Driver, Demo::FactoryMethod]);

    let mut out = Vec::new();
    showcase::run_showcase(&config, &mut out).unwrap();
    assert_eq!(
        lines(out),
        vec![
            "Army drives a tank!",
            "Car drives by normal citizens.",
            "Car drives by normal citizens.",
            "Army drives a tank!",
        ]
    );
}

#[test]
fn assemble_every_part_of_one_brand() {
    let mut out = Vec::new();
    showcase::assemble(Brand::Msi, &Part::ALL, &mut out).unwrap();
    assert_eq!(lines(out), vec!["Assembling MSI gpu", "MSI monitor assembled"]);
}
