mod cmd;
mod logging;

use cmd::{CommandLine, Commands};
use creational_patterns::services::showcase;
use creational_patterns::ShowcaseConfig;
use std::io::Write;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match commands.command {
        Commands::FactoryMethod { kind: Some(kind) } => showcase::manufacture(kind, &mut out)?,
        Commands::FactoryMethod { kind: None } => showcase::factory_method_demo(&mut out)?,
        Commands::Driver { kind: Some(kind) } => showcase::drive(kind, &mut out)?,
        Commands::Driver { kind: None } => showcase::driver_demo(&mut out)?,
        Commands::AbstractFactory { brand: None, part: None } => {
            showcase::abstract_factory_demo(&mut out)?
        }
        Commands::AbstractFactory { brand, part } => {
            showcase::assemble_filtered(brand, part, &mut out)?
        }
        Commands::All { config, demos } => {
            let config = match (config, demos) {
                (_, demos) if !demos.is_empty() => ShowcaseConfig::new(demos)?,
                (Some(path), _) => ShowcaseConfig::load(path)?,
                (None, _) => ShowcaseConfig::default(),
            };
            debug!(demos = ?config.demos, "running showcase");
            showcase::run_showcase(&config, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
