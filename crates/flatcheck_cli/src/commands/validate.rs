use anyhow::{Context, Result};
use chrono::Utc;
use flatcheck_validator::RecordValidator;
use tracing::{info, warn};

use super::RunOptions;
use crate::output;

pub fn execute(options: &RunOptions) -> Result<()> {
    let json = options.is_json();
    let started_at = Utc::now();

    if !json {
        println!("Starting...\n");
    }

    info!("Using config file: {}", options.config_file.display());
    let resolved = options.resolve();

    for warning in &resolved.warnings {
        warn!("{}", warning);
        if !json {
            output::print_warning(&warning.to_string());
        }
    }

    let config = resolved.config;
    if !json {
        println!("processing input file {}", config.input_path.display());
    }

    let validator = RecordValidator::new(config);
    let summary = validator.validate_file().with_context(|| {
        format!(
            "Failed to validate {}",
            validator.config().input_path.display()
        )
    })?;

    output::print_summary(
        &summary,
        validator.config(),
        &resolved.warnings,
        started_at,
        &options.format,
    )?;

    if !json {
        println!("Done.\n");
    }

    if options.strict && summary.has_flagged() {
        std::process::exit(1);
    }

    Ok(())
}
