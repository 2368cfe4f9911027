use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

/// Initialize the basket database pool and apply migrations when a path is given
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(
    database_url: &str,
    max_connections: Option<u32>,
    migrations_path: Option<&str>,
) -> anyhow::Result<PgPool> {
    let mut db_config = DatabaseConfig::new(database_url.to_string());
    if let Some(max_connections) = max_connections {
        db_config = db_config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&db_config).await?;

    if let Some(path) = migrations_path {
        run_migrations(&pool, path).await?;
        tracing::info!("Basket migrations applied from {path}");
    }

    Ok(pool)
}
