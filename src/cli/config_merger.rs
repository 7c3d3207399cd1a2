//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file and environment values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger from parsed CLI arguments
    ///
    /// Honors `--config` and `--env`; otherwise falls back to the default
    /// layered loader.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config.as_deref() {
            Some(path) => ConfigLoader::with_file(path),
            None => ConfigLoader::new()?,
        };

        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied and validated
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if let Some(level) = cli.log_level {
            config.logger.level = level.into();
        } else if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Demo {
                message: Some(message),
            } => {
                config.demo.message = message.clone();
            }
            Commands::Demo { message: None } | Commands::Interactive => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use crate::config::loader::tests::{EnvGuard, TEST_MUTEX};
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn merger() -> ConfigurationMerger {
        ConfigurationMerger::new(Settings::default())
    }

    #[test]
    fn test_configuration_merger_new() {
        let settings = Settings::default();
        let merger = ConfigurationMerger::new(settings.clone());
        assert_eq!(merger.base_config, settings);
    }

    #[test]
    fn test_no_flags_keeps_base_config() {
        let cli = Cli::try_parse_from(["notify-sim"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();
        assert_eq!(merged, Settings::default());
    }

    #[test]
    fn test_merge_verbose_flag() {
        let cli = Cli::try_parse_from(["notify-sim", "--verbose"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();
        assert_eq!(merged.logger.level, "debug");
    }

    #[test]
    fn test_merge_quiet_flag() {
        let cli = Cli::try_parse_from(["notify-sim", "--quiet"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();
        assert_eq!(merged.logger.level, "error");
    }

    #[test]
    fn test_merge_log_level() {
        let cli = Cli::try_parse_from(["notify-sim", "--log-level", "trace"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();
        assert_eq!(merged.logger.level, "trace");
    }

    #[test]
    fn test_merge_demo_message() {
        let cli = Cli::try_parse_from(["notify-sim", "demo", "-m", "Ping"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();
        assert_eq!(merged.demo.message, "Ping");
    }

    #[test]
    fn test_demo_without_message_keeps_configured_one() {
        let mut base = Settings::default();
        base.demo.message = "From file".to_string();
        let cli = Cli::try_parse_from(["notify-sim", "demo"]).unwrap();
        let merged = ConfigurationMerger::new(base).merge_cli_args(&cli).unwrap();
        assert_eq!(merged.demo.message, "From file");
    }

    #[test]
    fn test_merge_rejects_invalid_base() {
        let mut base = Settings::default();
        base.notifications.sms_prefix = "abc".to_string();
        let cli = Cli::try_parse_from(["notify-sim"]).unwrap();
        let err = ConfigurationMerger::new(base).merge_cli_args(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_from_cli_with_config_file() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _guard = EnvGuard::clean();

        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[notifications]\nsms_prefix = \"07\"").unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["notify-sim", "--config", path]).unwrap();
        let merged = ConfigurationMerger::from_cli(&cli)
            .unwrap()
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged.notifications.sms_prefix, "07");
    }
}
