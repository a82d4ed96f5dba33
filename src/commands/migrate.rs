//! Migrate command - Manual control over the sellers/books schema.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

fn migration_failed(action: &str) -> impl FnOnce(DbErr) -> AppError + '_ {
    move |e| AppError::internal(format!("Migration {} failed: {}", action, e))
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Serving migrates on connect; here the schema is left alone until asked
    let db = Database::connect_without_migrations(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await.map_err(migration_failed("up"))?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration()
                .await
                .map_err(migration_failed("down"))?;
            tracing::info!("Rolled back the most recent migration");
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(migration_failed("status"))?;

            let pending = status.iter().filter(|(_, applied)| !applied).count();
            for (name, applied) in &status {
                println!(
                    "{:<8} {}",
                    if *applied { "applied" } else { "pending" },
                    name
                );
            }
            tracing::info!(total = status.len(), pending, "Migration status listed");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping sellers and books before re-running every migration");
            db.fresh_migrations()
                .await
                .map_err(migration_failed("fresh"))?;
            tracing::info!("Fresh schema created");
        }
    }

    Ok(())
}
