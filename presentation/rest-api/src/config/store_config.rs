use anyhow::{Context, bail};
use std::env;

/// Which backing store holds the baskets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketStoreConfig {
    Postgres {
        database_url: String,
        max_connections: Option<u32>,
        migrations_path: Option<String>,
    },
    InMemory,
}

impl BasketStoreConfig {
    /// Load store selection from environment variables
    ///
    /// Environment variables:
    /// - BASKET_STORE: "postgres" or "memory" (default: "postgres")
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - DATABASE_MAX_CONNECTIONS: pool size (optional)
    /// - DATABASE_MIGRATIONS_PATH: migrations run at startup when set (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let kind = env::var("BASKET_STORE").unwrap_or_else(|_| "postgres".to_string());

        Self::from_parts(
            &kind,
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
        )
    }

    fn from_parts(
        kind: &str,
        database_url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> anyhow::Result<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::InMemory),
            "postgres" => {
                let database_url =
                    database_url.context("DATABASE_URL must be set when BASKET_STORE=postgres")?;
                let max_connections = max_connections
                    .map(|raw| {
                        raw.parse::<u32>()
                            .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {raw}"))
                    })
                    .transpose()?;

                Ok(Self::Postgres {
                    database_url,
                    max_connections,
                    migrations_path,
                })
            }
            other => bail!("unknown BASKET_STORE: {other}"),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::InMemory => "memory",
        }
    }
}
