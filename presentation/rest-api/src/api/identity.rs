use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::auth_config::AuthConfig;

/// JWT bearer token carried in the `Authorization` header
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT")]
pub struct BasketBearer(pub Bearer);

/// Caller credentials for the basket routes.
///
/// Requests without a bearer token are let through as `Anonymous`.
#[derive(SecurityScheme)]
pub enum BasketAuth {
    Token(BasketBearer),
    #[oai(fallback)]
    Anonymous,
}

impl BasketAuth {
    pub fn token(&self) -> Option<&str> {
        match self {
            BasketAuth::Token(BasketBearer(bearer)) => Some(bearer.token.as_str()),
            BasketAuth::Anonymous => None,
        }
    }
}

/// Resolves the caller's identity from the request credentials.
///
/// `None` is the normal answer for anonymous callers and for tokens that do
/// not validate; implementations never fail.
pub trait IdentityExtractor: Send + Sync {
    fn user_identity(&self, auth: &BasketAuth) -> Option<UserId>;
}

#[derive(Debug, Deserialize)]
struct IdentityClaims {
    #[serde(default)]
    sub: Option<String>,
}

/// Validates the bearer JWT and returns its `sub` claim.
pub struct JwtIdentityExtractor {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityExtractor {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    fn subject_from_token(&self, token: &str) -> Result<String, String> {
        let token_data = decode::<IdentityClaims>(token, &self.key, &self.validation)
            .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

        token_data
            .claims
            .sub
            .ok_or_else(|| "auth.missing_sub".to_string())
    }
}

impl IdentityExtractor for JwtIdentityExtractor {
    fn user_identity(&self, auth: &BasketAuth) -> Option<UserId> {
        let Some(token) = auth.token() else {
            tracing::debug!("No bearer token on request");
            return None;
        };

        match self.subject_from_token(token) {
            Ok(subject) => UserId::parse(subject),
            Err(e) => {
                tracing::warn!("Bearer auth failed: {e}");
                None
            }
        }
    }
}
