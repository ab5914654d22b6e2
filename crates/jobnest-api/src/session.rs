//! Session cookie issuing and verification.
//!
//! A session is an HS256-signed token carrying the authenticated email and a
//! one-hour expiry, transported in an HTTP-only cookie. There is no refresh,
//! revocation, or rotation; a token is valid until it expires.

use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "accessToken";

/// Signed token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies session tokens and builds their carrier cookies.
#[derive(Clone)]
pub struct SessionAuth {
    secret: String,
    ttl: Duration,
    production: bool,
}

impl SessionAuth {
    pub fn new(secret: impl Into<String>, ttl: Duration, production: bool) -> Self {
        Self {
            secret: secret.into(),
            ttl,
            production,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            config.session_secret.clone(),
            config.session_ttl,
            config.is_production(),
        )
    }

    /// Sign a token embedding the email and the configured expiry.
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::internal(format!("Failed to sign session token: {}", e)))
    }

    /// Verify signature and expiry; any failure is an unauthorized request.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, ApiError> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| ApiError::Unauthorized)
    }

    /// Build the carrier cookie. Cross-site delivery (SameSite=None +
    /// Secure) in production, strict same-site over plain HTTP in
    /// development, matching the deployed front ends.
    pub fn cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, token);
        cookie.set_http_only(true);
        cookie.set_path("/");
        if self.production {
            cookie.set_same_site(SameSite::None);
            cookie.set_secure(true);
        } else {
            cookie.set_same_site(SameSite::Strict);
            cookie.set_secure(false);
        }
        cookie
    }

    /// Cookie used to remove the session from the client.
    pub fn clear_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, "");
        cookie.set_path("/");
        cookie
    }
}

/// Authenticated session extracted from the request cookie.
///
/// Rejects with 401 before the handler body runs, so guarded endpoints never
/// touch the store on an unauthenticated request.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).ok_or(ApiError::Unauthorized)?;
        let claims = state.sessions.verify(token.value())?;
        Ok(SessionUser {
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(production: bool) -> SessionAuth {
        SessionAuth::new("test-secret", Duration::from_secs(3600), production)
    }

    #[test]
    fn issue_then_verify_round_trips_email() {
        let auth = auth(false);
        let token = auth.issue("jane@example.com").unwrap();
        let claims = auth.verify(&token).unwrap();
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let auth = auth(false);
        let mut token = auth.issue("jane@example.com").unwrap();
        token.push('x');
        assert!(matches!(auth.verify(&token), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = SessionAuth::new("other-secret", Duration::from_secs(3600), false);
        let token = other.issue("jane@example.com").unwrap();
        assert!(matches!(auth(false).verify(&token), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = auth(false);
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            email: "jane@example.com".into(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();
        assert!(matches!(auth.verify(&token), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn production_cookie_is_cross_site_and_secure() {
        let cookie = auth(true).cookie("tok".into());
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn development_cookie_is_strict_and_plain() {
        let cookie = auth(false).cookie("tok".into());
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
