//! Session token issuance and verification (HS256, shared secret).

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::RoleId;

use crate::SessionClaims;

/// Token failure.
///
/// Verification failures collapse into a single [`TokenError::Invalid`]
/// variant: which check rejected the token (signature, structure, algorithm,
/// expiry) is never exposed to callers.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing/serialization failed at issuance. Indicates a programming or
    /// key-material error, not bad caller input.
    #[error("failed to sign token")]
    Sign(#[source] jsonwebtoken::errors::Error),

    /// The token did not verify.
    #[error("invalid token")]
    Invalid,
}

/// Signed payload as it travels on the wire.
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    name: String,
    role: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies session tokens with a single shared secret.
///
/// The secret is process-wide configuration loaded once at startup
/// ([`SecurityConfig`](crate::SecurityConfig)) and passed in explicitly;
/// nothing here reads ambient global state. Issuance and verification are
/// pure computations with no shared mutable state.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            ttl,
        }
    }

    /// Issue a signed token embedding `claims`, valid for the configured TTL.
    pub fn issue(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        let now = Utc::now();
        let wire = WireClaims {
            name: claims.name.clone(),
            role: claims.role.as_str().to_string(),
            email: claims.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &wire, &self.encoding)
            .map_err(TokenError::Sign)
    }

    /// Verify a token and return its role claim.
    pub fn verify(&self, token: &str) -> Result<RoleId, TokenError> {
        self.decode(token).map(|claims| claims.role)
    }

    /// Verify a token and return the full embedded claims.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<WireClaims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        Ok(SessionClaims {
            name: data.claims.name,
            role: RoleId::new(data.claims.role),
            email: data.claims.email,
        })
    }
}
