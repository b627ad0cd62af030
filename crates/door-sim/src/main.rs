use anyhow::Context;
use clap::Parser;

use door_core::AppInfo;
use door_sim::config::{LoggingConfig, OutputFormat, RunConfig};
use door_sim::logging::init_logging;
use door_sim::report::write_report;
use door_sim::simulation::{Scenario, Simulation};

/// Bayes filter over a door that is either open or closed.
#[derive(Debug, Parser)]
#[command(
    name = "door-sim",
    author,
    version,
    about = "Runs the five-step door belief simulation"
)]
struct Cli {
    /// Output format for the per-iteration beliefs.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable structured logging on stderr at this level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Emit log lines as JSON.
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = RunConfig {
        format: cli.format,
        logging: LoggingConfig::from_flags(cli.log_level, cli.log_json),
    };
    config.validate()?;

    let _logging_guard = init_logging(&config.logging)?;
    tracing::info!(
        app = AppInfo::name(),
        version = AppInfo::version(),
        "starting simulation"
    );

    let scenario = Scenario::lecture();
    let records = Simulation::run(&scenario).context("running door belief simulation")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &records, config.format).context("writing belief report")?;
    Ok(())
}
