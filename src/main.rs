use clap::Parser;
use complex_calc::utils::logger;
use complex_calc::{logging_calculator, CalcEngine, CliConfig, ConfigProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting complex-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let engine = CalcEngine::new(logging_calculator());
    let summary = engine.run(config.lhs(), config.rhs());

    if config.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("Addition: {}", summary.addition);
        println!("Multiplication: {}", summary.multiplication);
        println!("Division: {}", summary.division);
    }

    Ok(())
}
