//! Process-wide security configuration.
//!
//! Loaded once at startup and passed explicitly into constructors; the
//! services never read environment state themselves.

use chrono::Duration;
use thiserror::Error;

use crate::token::TokenService;

const JWT_SECRET: &str = "VIGIL_JWT_SECRET";
const TOKEN_TTL_SECS: &str = "VIGIL_TOKEN_TTL_SECS";
const CODE_LENGTH: &str = "VIGIL_2FA_CODE_LENGTH";
const PASSWORD_LENGTH: &str = "VIGIL_TEMP_PASSWORD_LENGTH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Security-relevant knobs, with the deployment defaults.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared signing secret for session tokens.
    pub jwt_secret: String,
    /// Session token lifetime, seconds.
    pub token_ttl_secs: i64,
    /// Length of generated 2FA codes.
    pub two_factor_code_length: usize,
    /// Length of provisioned temporary passwords.
    pub temporary_password_length: usize,
}

impl Default for SecurityConfig {
    /// Development defaults. The secret is intentionally worthless; real
    /// deployments load it from the environment.
    fn default() -> Self {
        Self {
            jwt_secret: "dev-secret".to_string(),
            token_ttl_secs: 3600,
            two_factor_code_length: 5,
            temporary_password_length: 10,
        }
    }
}

impl SecurityConfig {
    /// Load from the environment. The signing secret is required; the rest
    /// fall back to the defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var(JWT_SECRET).map_err(|_| ConfigError::Missing(JWT_SECRET))?;

        let defaults = Self::default();
        Ok(Self {
            jwt_secret,
            token_ttl_secs: parse_var(TOKEN_TTL_SECS, defaults.token_ttl_secs)?,
            two_factor_code_length: parse_var(CODE_LENGTH, defaults.two_factor_code_length)?,
            temporary_password_length: parse_var(
                PASSWORD_LENGTH,
                defaults.temporary_password_length,
            )?,
        })
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_secs)
    }

    /// Token service bound to this configuration's secret and TTL.
    pub fn token_service(&self) -> TokenService {
        TokenService::new(self.jwt_secret.as_bytes(), self.token_ttl())
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
