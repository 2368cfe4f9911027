use anyhow::Context;
use std::env;

/// Settings for validating caller bearer tokens
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Load token validation settings from environment variables
    ///
    /// Environment variables:
    /// - AUTH_JWT_SECRET: HS256 shared secret (required)
    /// - AUTH_JWT_ISSUER: expected `iss` claim (optional)
    /// - AUTH_JWT_AUDIENCE: expected `aud` claim (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("AUTH_JWT_SECRET").context("AUTH_JWT_SECRET must be set")?;

        Ok(Self {
            jwt_secret,
            issuer: optional_var("AUTH_JWT_ISSUER"),
            audience: optional_var("AUTH_JWT_AUDIENCE"),
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
