//! Migrate command handler

use crate::config::{Settings, StorageBackend};
use crate::db::run_pending_migrations;
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Applies pending migrations, or lists them when `dry_run` is set.
    ///
    /// Does nothing for the memory backend, which has no schema.
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        self.config.database.validate()?;

        if self.config.database.backend == StorageBackend::Memory {
            println!("Memory storage backend configured - no migrations to run");
            return Ok(());
        }

        if dry_run {
            println!("Checking for pending migrations...");
        } else {
            println!("Running database migrations...");
        }

        let migrations = run_pending_migrations(&self.config.database.url, dry_run).await?;

        match (migrations.is_empty(), dry_run) {
            (true, _) => println!("✓ No pending migrations - database is up to date"),
            (false, true) => {
                println!("Found {} pending migration(s):", migrations.len());
                for migration in &migrations {
                    println!("  - {}", migration);
                }
                println!("\nRun without --dry-run to apply these migrations");
            }
            (false, false) => {
                println!("✓ Applied {} migration(s):", migrations.len());
                for migration in &migrations {
                    println!("  - {}", migration);
                }
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_memory_backend_is_noop() {
        let mut config = Settings::default();
        config.database.backend = StorageBackend::Memory;

        let handler = MigrateCommandHandler::new(config);

        assert!(handler.execute(false).await.is_ok());
        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_url_is_rejected_before_connecting() {
        let handler = MigrateCommandHandler::new(Settings::default());

        let result = handler.execute(true).await;

        assert!(matches!(result, Err(AppError::Configuration { ref key, .. }) if key == "database.url"));
    }

    #[test]
    fn test_config_accessor() {
        let handler = MigrateCommandHandler::new(Settings::default());
        assert_eq!(handler.config(), &Settings::default());
    }
}
