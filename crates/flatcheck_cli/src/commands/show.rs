use anyhow::Result;
use tracing::info;

use super::RunOptions;
use crate::output;

/// Prints the resolved configuration without reading the input file.
pub fn execute(options: &RunOptions) -> Result<()> {
    info!("Resolving config file: {}", options.config_file.display());
    let resolved = options.resolve();

    output::print_config(&resolved.config, &resolved.warnings, &options.format)
}
