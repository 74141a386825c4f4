pub mod show;
pub mod validate;

use flatcheck_config::{Overrides, Resolved, Resolver};
use std::path::PathBuf;

/// Options shared by every command.
pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub config_file: PathBuf,
    pub format: String,
    pub strict: bool,
}

impl RunOptions {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    /// Resolves defaults, the configuration file and the path overrides.
    pub fn resolve(&self) -> Resolved {
        Resolver::new()
            .config_file(&self.config_file)
            .overrides(Overrides {
                input: self.input.clone(),
                report: self.report.clone(),
            })
            .resolve()
    }
}
