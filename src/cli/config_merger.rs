//! Merges CLI argument overrides into file-based configuration.
//!
//! Precedence (lowest first): configuration files, `CATALOG_*` environment
//! variables, global flags (`--verbose`/`--quiet`), command flags.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration the CLI points at.
    ///
    /// `--config` selects single-file mode and `--env` overrides
    /// `CATALOG_APP_ENV`. Validation is deferred to [`merge_cli_args`](Self::merge_cli_args).
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = &cli.config {
            loader = loader.with_file(path);
        }
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        Ok(Self::new(loader.load_unvalidated()?))
    }

    /// Applies CLI overrides to a copy of the base configuration and
    /// validates the result.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;
    use clap::Parser;

    fn merger() -> ConfigurationMerger {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/catalog_test".to_string();
        ConfigurationMerger::new(config)
    }

    fn merge(args: &[&str]) -> Result<Settings, ConfigError> {
        let cli = Cli::try_parse_from(args).unwrap();
        merger().merge_cli_args(&cli)
    }

    #[test]
    fn test_global_log_flags() {
        assert_eq!(merge(&["product-catalog", "--verbose"]).unwrap().logger.level, "debug");
        assert_eq!(merge(&["product-catalog", "--quiet"]).unwrap().logger.level, "error");
    }

    #[test]
    fn test_serve_overrides() {
        let merged = merge(&[
            "product-catalog",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(merged.server.host, "0.0.0.0");
        assert_eq!(merged.server.port, 8080);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merged = merge(&["product-catalog", "--verbose", "serve", "--log-level", "warn"]).unwrap();
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_base_config_is_untouched() {
        let merger = merger();
        let cli = Cli::try_parse_from(["product-catalog", "serve", "--port", "9000"]).unwrap();

        merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merger.config().server.port, Settings::default().server.port);
    }

    #[test]
    fn test_merged_config_is_validated() {
        let mut config = Settings::default();
        config.database.backend = StorageBackend::Postgres;
        config.database.url = String::new();
        let cli = Cli::try_parse_from(["product-catalog"]).unwrap();

        let result = ConfigurationMerger::new(config).merge_cli_args(&cli);

        assert!(matches!(result, Err(ConfigError::ValidationError { field, .. }) if field == "database.url"));
    }
}
