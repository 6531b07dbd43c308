use clap::{ArgAction, Parser, Subcommand};
use creational_patterns::{AutomobileKind, Brand, Demo, Part};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "creational-patterns")]
#[command(about = "Factory Method and Abstract Factory, one line at a time.")]
pub struct CommandLine {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manufacture automobiles through the factory method
    #[command(alias = "fm")]
    FactoryMethod {
        /// Only manufacture this kind (tank, car)
        #[arg(long)]
        kind: Option<AutomobileKind>,
    },
    /// Hand drivers their vehicles
    #[command(alias = "d")]
    Driver {
        /// Only serve this kind of driver (tank, car)
        #[arg(long)]
        kind: Option<AutomobileKind>,
    },
    /// Assemble hardware through the abstract factory
    #[command(alias = "af")]
    AbstractFactory {
        /// Only assemble this brand (msi, asus)
        #[arg(long)]
        brand: Option<Brand>,
        /// Only assemble this part (gpu, monitor)
        #[arg(long)]
        part: Option<Part>,
    },
    /// Run several demos in sequence
    #[command(alias = "a")]
    All {
        /// TOML file listing the demos to run
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Demo to run; may be repeated. Cannot be combined with --config
        #[arg(long = "demo", conflicts_with = "config")]
        demos: Vec<Demo>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
