//! Database connection pool management

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;
use tracing::info;

use sg_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Database configuration settings
///
/// # Returns
/// * `Ok(MySqlPool)` - Connection pool ready for use
/// * `Err(sqlx::Error)` - Connection or configuration failure
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    info!(
        "Creating database connection pool with max_connections: {}",
        config.max_connections
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await
}
