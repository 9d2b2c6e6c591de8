#![allow(dead_code)]

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
    /// Issued-at as a unix timestamp.
    pub iat: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Signs a short-lived access token for `username`. The TTL comes from
/// `ACCESS_TOKEN_EXPIRE_MINUTES`.
pub fn issue_token(username: &str, config: &Config) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        exp: now + config.access_token_expire_minutes * 60,
        iat: now,
    };
    encode(
        &Header::new(config.jwt_algorithm),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

/// Decodes a token and checks its signature and expiry.
/// An expired-but-otherwise-valid token is reported distinctly from a
/// tampered or garbage one.
pub fn validate_token(token: &str, config: &Config) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::new(config.jwt_algorithm),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/unused".to_string(),
            jwt_secret: "test-secret-key".to_string(),
            jwt_algorithm: Algorithm::HS256,
            access_token_expire_minutes: 30,
            google_api_key: "unused".to_string(),
            genai_model: "unused".to_string(),
            genai_timeout_secs: 5,
            port: 8000,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let config = test_config();
        let token = issue_token("alice", &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();
        // Hand-craft a token whose expiry is well past the default leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "alice".to_string(),
            exp: now - 300,
            iat: now - 600,
        };
        let token = encode(
            &Header::new(config.jwt_algorithm),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(validate_token(&token, &config), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_token_fails() {
        let config = test_config();
        let token = issue_token("alice", &config).unwrap();
        let tampered = format!("{token}x");
        assert_eq!(validate_token(&tampered, &config), Err(TokenError::Invalid));
        assert_eq!(
            validate_token("definitely.not.a.jwt", &config),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_wrong_secret_fails() {
        let config = test_config();
        let token = issue_token("alice", &config).unwrap();

        let mut other = test_config();
        other.jwt_secret = "a-completely-different-secret".to_string();
        assert_eq!(validate_token(&token, &other), Err(TokenError::Invalid));
    }
}
