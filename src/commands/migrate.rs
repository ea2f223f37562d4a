//! Migrate command - manages the contact schema by hand.
//!
//! `serve` applies pending migrations on its own; this command is for
//! inspecting the schema, rolling back, or rebuilding a development database.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let action = args.action;
    let outcome = match action {
        MigrateAction::Up => db.run_migrations().await,
        MigrateAction::Down => db.rollback_migration().await,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every contact table before re-running migrations");
            db.fresh_migrations().await
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(|e| AppError::internal(format!("Cannot read migration table: {}", e)))?;
            print!("{}", format_status(&status));
            return Ok(());
        }
    };

    outcome.map_err(|e| AppError::internal(format!("Migration {:?} failed: {}", action, e)))?;
    tracing::info!(?action, "Contact schema migrated");
    Ok(())
}

fn format_status(status: &[(String, bool)]) -> String {
    let pending = status.iter().filter(|(_, applied)| !applied).count();
    let mut out = String::new();
    for (name, applied) in status {
        out.push_str(&format!("[{}] {}\n", if *applied { "x" } else { " " }, name));
    }
    out.push_str(&format!("{} of {} migrations pending\n", pending, status.len()));
    out
}
