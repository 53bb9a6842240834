use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_reservation_repo::PostgresReservationRepo,
    postgres_settings_repo::PostgresSettingsRepo,
    sqlite_reservation_repo::SqliteReservationRepo,
    sqlite_settings_repo::SqliteSettingsRepo,
};

/// Connects to the store named by the connection string, runs the embedded
/// migrations and wires up the repositories. Any failure here is fatal: the
/// process has no business serving requests without its store.
pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            reservation_repo: Arc::new(PostgresReservationRepo::new(pool.clone())),
            settings_repo: Arc::new(PostgresSettingsRepo::new(pool)),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            reservation_repo: Arc::new(SqliteReservationRepo::new(pool.clone())),
            settings_repo: Arc::new(SqliteSettingsRepo::new(pool)),
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
