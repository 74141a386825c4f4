mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fffchk")]
#[command(version, about = "Flat file format check", long_about = None)]
struct Cli {
    /// The input file to check
    #[arg(short = 'i', long = "ifile")]
    ifile: Option<PathBuf>,

    /// The report output file
    #[arg(short = 'r', long = "rfile")]
    rfile: Option<PathBuf>,

    /// The configuration file to use
    #[arg(short = 'c', long = "cfile", default_value = "fileconf.ini")]
    cfile: PathBuf,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Exit with a failure status when any record is flagged
    #[arg(long)]
    strict: bool,

    /// Print the resolved configuration and exit without validating
    #[arg(long)]
    show_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    let options = commands::RunOptions {
        input: cli.ifile,
        report: cli.rfile,
        config_file: cli.cfile,
        format: cli.format,
        strict: cli.strict,
    };

    if cli.show_config {
        commands::show::execute(&options)
    } else {
        commands::validate::execute(&options)
    }
}
