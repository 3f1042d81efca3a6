use std::io::{
    self,
    Write
};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quadcomp::cli::Cli;
use quadcomp::comparison::comparisondriver::ComparisonDriver;
use quadcomp::comparison::comparisonrow::ComparisonRow;
use quadcomp::configuration::ComparisonSettings;
use quadcomp::console::input::read_interval;
use quadcomp::console::report::{
    write_banner,
    write_json,
    write_table
};
use quadcomp::math::integrand::Gaussian;
use quadcomp::math::interval::Interval;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let base = match &cli.config {
        Some(path) => ComparisonSettings::from_reader(path)
            .with_context(|| format!("failed to load settings from {}", path))?,
        None => ComparisonSettings::default()
    };
    let settings = base.with_levels(cli.reference_level, cli.max_level)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let integrand = Gaussian;

    if !cli.json {
        write_banner(&mut output, integrand.description())?;
    }

    let interval = match (cli.lower, cli.upper) {
        (Some(lower), Some(upper)) => Interval::new(lower, upper)?,
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            read_interval(&mut input, &mut output)?
        }
    };

    if !cli.json {
        writeln!(output, "\nComputing the high-accuracy reference value, please wait...")?;
    }
    let driver = ComparisonDriver::new(integrand, interval, settings)?;

    if cli.json {
        let rows: Vec<ComparisonRow> = if cli.incremental {
            driver.rows_incremental().collect()
        } else {
            driver.rows().collect()
        };
        let interval = driver.interval();
        write_json(&mut output, interval.lower(), interval.upper(), driver.reference(), &rows)?;
    } else if cli.incremental {
        write_table(&mut output, driver.rows_incremental(), driver.reference(), driver.settings().decimals())?;
    } else {
        write_table(&mut output, driver.rows(), driver.reference(), driver.settings().decimals())?;
    }
    Ok(())
}
