use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::basket::use_cases::delete::{DeleteBasketParams, DeleteBasketUseCase};
use business::domain::basket::use_cases::get::{GetBasketParams, GetBasketUseCase};
use business::domain::basket::use_cases::update::{UpdateBasketParams, UpdateBasketUseCase};

use crate::api::basket::dto::{CustomerBasketResponse, UpdateBasketRequest};
use crate::api::basket::mapper::{to_domain_items, to_response};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::identity::{BasketAuth, IdentityExtractor};
use crate::api::tags::ApiTags;

pub struct BasketApi {
    identity: Arc<dyn IdentityExtractor>,
    get_use_case: Arc<dyn GetBasketUseCase>,
    update_use_case: Arc<dyn UpdateBasketUseCase>,
    delete_use_case: Arc<dyn DeleteBasketUseCase>,
}

impl BasketApi {
    pub fn new(
        identity: Arc<dyn IdentityExtractor>,
        get_use_case: Arc<dyn GetBasketUseCase>,
        update_use_case: Arc<dyn UpdateBasketUseCase>,
        delete_use_case: Arc<dyn DeleteBasketUseCase>,
    ) -> Self {
        Self {
            identity,
            get_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Basket API
///
/// Per-user basket kept under the caller's identity.
#[OpenApi]
impl BasketApi {
    /// Get the caller's basket
    ///
    /// Anonymous callers and callers without a stored basket get an empty basket.
    #[oai(path = "/basket", method = "get", tag = "ApiTags::Basket")]
    async fn get_basket(&self, auth: BasketAuth) -> GetBasketResponse {
        let params = GetBasketParams {
            user_id: self.identity.user_identity(&auth),
        };

        match self.get_use_case.execute(params).await {
            Ok(Some(basket)) => GetBasketResponse::Ok(Json(to_response(&basket))),
            Ok(None) => GetBasketResponse::Ok(Json(CustomerBasketResponse::default())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetBasketResponse::Unavailable(json),
                    _ => GetBasketResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace the caller's basket
    ///
    /// Overwrites every stored line and returns the basket as persisted.
    #[oai(path = "/basket", method = "put", tag = "ApiTags::Basket")]
    async fn update_basket(
        &self,
        auth: BasketAuth,
        body: Json<UpdateBasketRequest>,
    ) -> UpdateBasketResponse {
        let params = UpdateBasketParams {
            user_id: self.identity.user_identity(&auth),
            items: to_domain_items(body.0),
        };

        match self.update_use_case.execute(params).await {
            Ok(basket) => UpdateBasketResponse::Ok(Json(to_response(&basket))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => UpdateBasketResponse::Unauthenticated(json),
                    404 => UpdateBasketResponse::NotFound(json),
                    503 => UpdateBasketResponse::Unavailable(json),
                    _ => UpdateBasketResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete the caller's basket
    ///
    /// Succeeds whether or not a basket was stored.
    #[oai(path = "/basket", method = "delete", tag = "ApiTags::Basket")]
    async fn delete_basket(&self, auth: BasketAuth) -> DeleteBasketResponse {
        let params = DeleteBasketParams {
            user_id: self.identity.user_identity(&auth),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteBasketResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteBasketResponse::Unauthenticated(json),
                    503 => DeleteBasketResponse::Unavailable(json),
                    _ => DeleteBasketResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBasketResponse {
    #[oai(status = 200)]
    Ok(Json<CustomerBasketResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateBasketResponse {
    #[oai(status = 200)]
    Ok(Json<CustomerBasketResponse>),
    #[oai(status = 401)]
    Unauthenticated(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteBasketResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthenticated(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::basket::delete::DeleteBasketUseCaseImpl;
    use business::application::basket::get::GetBasketUseCaseImpl;
    use business::application::basket::update::UpdateBasketUseCaseImpl;
    use business::domain::basket::model::CustomerBasket;
    use business::domain::basket::repository::BasketRepository;
    use business::domain::errors::RepositoryError;
    use business::domain::shared::value_objects::UserId;
    use logger::TracingLogger;
    use persistence::basket::in_memory::InMemoryBasketRepository;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::api::basket::dto::BasketItemDto;
    use crate::api::identity::JwtIdentityExtractor;
    use crate::api::identity::tests::{anonymous, auth_with_token, test_config, token_for};

    /// Store that refuses every write and cannot be reached for reads or deletes.
    struct RefusingRepository;

    #[async_trait]
    impl BasketRepository for RefusingRepository {
        async fn get_basket(
            &self,
            _buyer_id: &UserId,
        ) -> Result<Option<CustomerBasket>, RepositoryError> {
            Err(RepositoryError::Unavailable)
        }

        async fn update_basket(
            &self,
            _basket: &CustomerBasket,
        ) -> Result<CustomerBasket, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete_basket(&self, _buyer_id: &UserId) -> Result<(), RepositoryError> {
            Err(RepositoryError::Unavailable)
        }
    }

    fn basket_api(repository: Arc<dyn BasketRepository>) -> BasketApi {
        let logger = Arc::new(TracingLogger);

        BasketApi::new(
            Arc::new(JwtIdentityExtractor::new(&test_config())),
            Arc::new(GetBasketUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateBasketUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteBasketUseCaseImpl { repository, logger }),
        )
    }

    fn item(product_id: &str, quantity: u32) -> BasketItemDto {
        BasketItemDto {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    async fn signed_in(user: &str) -> BasketAuth {
        auth_with_token(&token_for(user)).await
    }

    async fn fetch_items(api: &BasketApi, auth: BasketAuth) -> Vec<BasketItemDto> {
        match api.get_basket(auth).await {
            GetBasketResponse::Ok(Json(body)) => body.items,
            _ => panic!("expected 200 from GET /basket"),
        }
    }

    #[tokio::test]
    async fn should_replace_fetch_and_delete_for_alice() {
        let api = basket_api(Arc::new(InMemoryBasketRepository::new()));
        let items = vec![item("sku-1", 2), item("sku-2", 1)];

        let updated = api
            .update_basket(
                signed_in("alice").await,
                Json(UpdateBasketRequest {
                    items: items.clone(),
                }),
            )
            .await;
        match updated {
            UpdateBasketResponse::Ok(Json(body)) => assert_eq!(body.items, items),
            _ => panic!("expected 200 from PUT /basket"),
        }

        assert_eq!(fetch_items(&api, signed_in("alice").await).await, items);

        assert!(matches!(
            api.delete_basket(signed_in("alice").await).await,
            DeleteBasketResponse::NoContent
        ));
        let after_delete = fetch_items(&api, signed_in("alice").await).await;
        assert!(after_delete.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_basket_for_anonymous_fetch() {
        let store = Arc::new(InMemoryBasketRepository::new());
        let api = basket_api(store.clone());

        assert!(fetch_items(&api, anonymous().await).await.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn should_reject_anonymous_update_and_delete() {
        let store = Arc::new(InMemoryBasketRepository::new());
        let api = basket_api(store.clone());

        let updated = api
            .update_basket(
                anonymous().await,
                Json(UpdateBasketRequest {
                    items: vec![item("sku-1", 1)],
                }),
            )
            .await;
        let deleted = api.delete_basket(anonymous().await).await;

        assert!(matches!(updated, UpdateBasketResponse::Unauthenticated(_)));
        assert!(matches!(deleted, DeleteBasketResponse::Unauthenticated(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn should_treat_invalid_token_as_anonymous() {
        let api = basket_api(Arc::new(InMemoryBasketRepository::new()));

        let updated = api
            .update_basket(
                auth_with_token("forged.token.value").await,
                Json(UpdateBasketRequest { items: vec![] }),
            )
            .await;

        assert!(matches!(updated, UpdateBasketResponse::Unauthenticated(_)));
        let forged = auth_with_token("forged.token.value").await;
        assert!(fetch_items(&api, forged).await.is_empty());
    }

    #[tokio::test]
    async fn should_keep_baskets_separate_per_identity() {
        let api = basket_api(Arc::new(InMemoryBasketRepository::new()));

        let _ = api
            .update_basket(
                signed_in("alice").await,
                Json(UpdateBasketRequest {
                    items: vec![item("sku-1", 2)],
                }),
            )
            .await;

        assert!(fetch_items(&api, signed_in("bob").await).await.is_empty());
        assert_eq!(
            fetch_items(&api, signed_in("alice").await).await,
            vec![item("sku-1", 2)]
        );
    }

    #[tokio::test]
    async fn should_return_not_found_naming_bob_when_store_refuses_write() {
        let api = basket_api(Arc::new(RefusingRepository));

        let updated = api
            .update_basket(
                signed_in("bob").await,
                Json(UpdateBasketRequest {
                    items: vec![item("sku-1", 1)],
                }),
            )
            .await;

        match updated {
            UpdateBasketResponse::NotFound(Json(error)) => {
                assert!(error.message.contains("bob"));
            }
            _ => panic!("expected 404 from PUT /basket"),
        }
    }

    #[tokio::test]
    async fn should_surface_transient_store_failure_as_unavailable() {
        let api = basket_api(Arc::new(RefusingRepository));

        let deleted = api.delete_basket(signed_in("alice").await).await;

        assert!(matches!(deleted, DeleteBasketResponse::Unavailable(_)));
    }

    #[tokio::test]
    async fn should_surface_store_failure_on_fetch_as_unavailable() {
        let api = basket_api(Arc::new(RefusingRepository));

        match api.get_basket(signed_in("alice").await).await {
            GetBasketResponse::Unavailable(Json(error)) => {
                assert_eq!(error.name, "Unavailable");
                assert_eq!(error.message, "repository.unavailable");
            }
            _ => panic!("expected 503 from GET /basket"),
        }
    }

    #[tokio::test]
    async fn should_not_reach_store_for_anonymous_fetch() {
        let api = basket_api(Arc::new(RefusingRepository));

        assert!(fetch_items(&api, anonymous().await).await.is_empty());
    }

    #[tokio::test]
    async fn should_delete_missing_basket_successfully() {
        let api = basket_api(Arc::new(InMemoryBasketRepository::new()));

        assert!(matches!(
            api.delete_basket(signed_in("alice").await).await,
            DeleteBasketResponse::NoContent
        ));
    }

    #[test]
    fn should_advertise_optional_bearer_scheme_in_openapi_document() {
        let api = basket_api(Arc::new(InMemoryBasketRepository::new()));

        let spec = OpenApiService::new(api, "Basket API", "test").spec();
        let doc: serde_json::Value = serde_json::from_str(&spec).unwrap();

        let scheme = &doc["components"]["securitySchemes"]["BasketBearer"];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");
        assert_eq!(scheme["bearerFormat"], "JWT");

        let security = doc["paths"]["/basket"]["get"]["security"]
            .as_array()
            .unwrap();
        assert!(security.contains(&json!({ "BasketBearer": [] })));
        assert!(security.contains(&json!({})));
    }
}
