use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};

use crate::config::Config;

mod repository;

pub use repository::CustomerRepository;

// ============================================================================
// Storage Bootstrap
// ============================================================================

/// Build the connection pool from configuration.
///
/// Statement logging follows ECHO_SQL; the default is quiet.
pub async fn connect(config: &Config) -> anyhow::Result<SqlitePool> {
    let mut options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    if !config.echo_sql {
        options = options.disable_statement_logging();
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Ensure the customer table exists. The UNIQUE constraint on email is the
/// single arbiter of uniqueness; nothing in the application pre-checks it.
pub async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS clientes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
