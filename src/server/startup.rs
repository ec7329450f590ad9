use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Opens the roster store and brings its schema up to date.
///
/// Both SQLite and PostgreSQL URLs are accepted. Every pending migration is applied
/// before the pool is handed to the router, so handlers never see a partial schema.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with the current schema
/// - `Err(AppError::Unavailable)` - The store is unreachable or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    tracing::info!(backend = ?db.get_database_backend(), "Roster store ready");

    Ok(db)
}
