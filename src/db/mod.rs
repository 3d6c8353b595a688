use log::info;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;

use crate::errors::DbError;

/// Opens the shared database connection from `DATABASE_URL`.
///
/// The pool is capped at a single connection; every DAO handed a clone of it
/// shares that connection for the lifetime of the process.
pub async fn create_pool() -> Result<MySqlPool, DbError> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| DbError::Config("DATABASE_URL must be set".to_string()))?;
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;
    info!("Database connection established");
    Ok(pool)
}

/// Applies the bundled schema migrations.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|err| DbError::Database(err.to_string()))?;
    Ok(())
}
