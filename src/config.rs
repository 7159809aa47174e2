use std::env;

// ============================================================================
// Environment Configuration
// ============================================================================
//
// All knobs come from the process environment with local-friendly defaults:
// - DATABASE_URL: storage connection string (defaults to a local SQLite file)
// - ECHO_SQL:     "true" enables statement logging on the storage driver
// - HOST / PORT:  HTTP bind address
//
// ============================================================================

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub echo_sql: bool,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://clientes.db".to_string()),
            echo_sql: env::var("ECHO_SQL")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }
}
