use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::Config;

/// Builds the connection pool without touching the network: the first
/// checkout is what actually dials PostgreSQL, so an unreachable database
/// surfaces per request instead of killing startup.
pub fn connect(config: &Config) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .database(&config.db_name)
        .username(&config.db_user)
        .password(&config.db_pass);

    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(options)
}
