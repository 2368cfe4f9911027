use std::sync::Arc;

use logger::TracingLogger;
use persistence::basket::in_memory::InMemoryBasketRepository;
use persistence::basket::repository::BasketRepositoryPostgres;

use business::application::basket::delete::DeleteBasketUseCaseImpl;
use business::application::basket::get::GetBasketUseCaseImpl;
use business::application::basket::update::UpdateBasketUseCaseImpl;
use business::domain::basket::repository::BasketRepository;

use crate::api::identity::JwtIdentityExtractor;
use crate::config::app_config::AppConfig;
use crate::config::database_config;
use crate::config::store_config::BasketStoreConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub basket_api: crate::api::basket::routes::BasketApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(config.store.backend_name());

        // Infrastructure adapters
        let repository: Arc<dyn BasketRepository> = match &config.store {
            BasketStoreConfig::Postgres {
                database_url,
                max_connections,
                migrations_path,
            } => {
                let pool = database_config::init_database(
                    database_url,
                    *max_connections,
                    migrations_path.as_deref(),
                )
                .await?;
                Arc::new(BasketRepositoryPostgres::new(pool))
            }
            BasketStoreConfig::InMemory => {
                tracing::warn!("Using in-memory basket store; baskets are lost on restart");
                Arc::new(InMemoryBasketRepository::new())
            }
        };
        let identity = Arc::new(JwtIdentityExtractor::new(&config.auth));

        // Basket use cases
        let get_use_case = Arc::new(GetBasketUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateBasketUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteBasketUseCaseImpl { repository, logger });

        let basket_api = crate::api::basket::routes::BasketApi::new(
            identity,
            get_use_case,
            update_use_case,
            delete_use_case,
        );

        Ok(Self {
            health_api,
            basket_api,
        })
    }
}
