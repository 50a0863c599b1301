/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user
 * sessions, plus the cookie strings that carry the token. Tokens are
 * stateless: validity is determined entirely by signature and expiry,
 * so a token cannot be revoked before it expires.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Token validity window: 1 day
const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i32,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get JWT secret from environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "jwt-secret-key".to_string())
}

/// Create a JWT token for a user, valid for 1 day.
pub fn create_token(user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        id: user_id,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token.
///
/// Fails when the signature does not match or the token has expired.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// `Set-Cookie` value attaching a freshly minted token.
pub fn session_cookie(token: &str) -> String {
    format!("{TOKEN_COOKIE}={token}; Path=/; SameSite=Lax")
}

/// `Set-Cookie` value instructing the client to discard the token.
pub fn clear_session_cookie() -> String {
    format!("{TOKEN_COOKIE}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

/// Extract the session token from a `Cookie` request header.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .map(|(_, value)| value)
}
