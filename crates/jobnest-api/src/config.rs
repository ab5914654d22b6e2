//! API configuration.

use std::time::Duration;

use anyhow::Context;

/// Front-end origins allowed by default when `CORS_ORIGINS` is unset.
const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "https://job-nest-5890c.web.app",
    "https://job-nest-5890c.firebaseapp.com",
];

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins (credentials are always allowed for these)
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// HMAC secret for session tokens
    pub session_secret: String,
    /// Session token lifetime
    pub session_ttl: Duration,
}

impl ApiConfig {
    /// Create config from environment variables.
    ///
    /// `SESSION_SECRET` is the only required variable; everything else has a
    /// development default.
    pub fn from_env() -> anyhow::Result<Self> {
        let session_secret = std::env::var("SESSION_SECRET")
            .context("SESSION_SECRET must be set to sign session tokens")?;
        if session_secret.is_empty() {
            anyhow::bail!("SESSION_SECRET cannot be empty");
        }

        Ok(Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or_else(|_| default_origins()),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            session_secret,
            session_ttl: Duration::from_secs(
                std::env::var("SESSION_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3600),
            ),
        })
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

fn default_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_splits_and_trims() {
        let origins = parse_origins("http://a.example, http://b.example ,");
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn default_origins_are_the_three_front_ends() {
        assert_eq!(default_origins().len(), 3);
        assert!(default_origins().contains(&"http://localhost:5173".to_string()));
    }
}
