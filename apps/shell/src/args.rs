//! # CLI Argument Definitions

use clap::Parser;
use enrol_domain::config::ShellConfig;
use std::path::PathBuf;

/// Command-line flags. Anything set here overrides the configuration file.
#[derive(Debug, Parser)]
#[command(name = "enrol")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Menu-driven student enrolment system")]
pub struct Cli {
    /// Configuration file; the format is inferred from the extension.
    /// Defaults to `enrol.*` in the working directory (optional).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Default log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write rolling log files into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Start with an empty registry instead of the demo records
    #[arg(long)]
    pub no_seed: bool,

    /// Withdraw enrolled students when a unit is removed
    #[arg(long)]
    pub cascade_unit_removal: bool,
}

impl Cli {
    /// Folds the command-line overrides into `config`.
    pub fn apply(&self, config: &mut ShellConfig) {
        if let Some(level) = &self.log_level {
            config.log.level.clone_from(level);
        }
        if let Some(dir) = &self.log_dir {
            config.log.directory = Some(dir.clone());
        }
        if self.no_seed {
            config.seed.enabled = false;
        }
        if self.cascade_unit_removal {
            config.registry.cascade_unit_removal = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "enrol",
            "--log-level",
            "debug",
            "--log-dir",
            "/tmp/logs",
            "--no-seed",
            "--cascade-unit-removal",
        ]);
        let mut config = ShellConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.directory, Some(PathBuf::from("/tmp/logs")));
        assert!(!config.seed.enabled);
        assert!(config.registry.cascade_unit_removal);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["enrol"]);
        let mut config = ShellConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.log.level, "warn");
        assert!(config.seed.enabled);
    }
}
