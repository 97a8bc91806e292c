use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Identity token verification configuration.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub secret: String,
    /// Lifetime of tokens minted by [`issue_token`]. Verification trusts
    /// the `exp` claim inside the token instead.
    pub token_expiry_mins: i64,
}

impl IdentityConfig {
    /// Load identity configuration from environment variables.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `AUTH_JWT_SECRET` | (required) | HS256 secret shared with the identity provider |
    /// | `AUTH_TOKEN_EXPIRY_MINS` | `1440` | Lifetime of locally minted tokens |
    ///
    /// Panics if `AUTH_JWT_SECRET` is missing.
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_JWT_SECRET").expect("AUTH_JWT_SECRET must be set");
        let token_expiry_mins = std::env::var("AUTH_TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| "1440".to_string())
            .parse()
            .expect("AUTH_TOKEN_EXPIRY_MINS must be a number");

        Self {
            secret,
            token_expiry_mins,
        }
    }
}

/// Claims carried by an identity token.
///
/// Only `sub` is guaranteed; the profile claims depend on what the
/// provider knows about the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Provider-assigned subject, used as the user id.
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Mint an identity token. Production tokens come from the provider;
/// this exists for development and tests, which share the secret.
pub fn issue_token(
    sub: &str,
    email: Option<&str>,
    name: Option<&str>,
    config: &IdentityConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = IdentityClaims {
        sub: sub.to_string(),
        email: email.map(|s| s.to_string()),
        name: name.map(|s| s.to_string()),
        picture: None,
        exp: (now + Duration::minutes(config.token_expiry_mins)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a token's signature and expiry, returning its claims.
pub fn verify_token(
    token: &str,
    config: &IdentityConfig,
) -> Result<IdentityClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
