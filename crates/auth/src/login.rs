//! The credential → 2FA code → session token state machine.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vigil_core::{IdentityId, LoginAttemptId};

use crate::adapters::{CredentialStore, LoginAttemptStore};
use crate::errors::AuthError;
use crate::identity::{Credentials, Identity, VerifiedLogin};
use crate::token::TokenService;
use crate::{password, secret};

/// One instance of the 2FA handshake, bound to an identity.
///
/// # Lifecycle
/// - Created with a fresh code, `code_consumed = false`, no token.
/// - Consumed at most once: the transition to `code_consumed = true` stores
///   the issued token and happens through a single conditional write
///   ([`LoginAttemptStore::consume`]).
/// - Terminal once consumed; it never transitions back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub id: LoginAttemptId,
    pub identity_id: IdentityId,
    /// The one-time code, delivered to the user out-of-band.
    pub code: String,
    pub code_consumed: bool,
    pub token: Option<String>,
    pub token_active: bool,
    pub created_at: DateTime<Utc>,
}

impl LoginAttempt {
    pub fn new(identity_id: IdentityId, code: String) -> Self {
        Self {
            id: LoginAttemptId::new(),
            identity_id,
            code,
            code_consumed: false,
            token: None,
            token_active: false,
            created_at: Utc::now(),
        }
    }
}

/// Orchestrates the login handshake: credential check, 2FA code issuance,
/// code verification, token issuance.
///
/// Stateless between invocations; every state transition is persisted
/// through the login attempt store. Safe to share across concurrent
/// requests.
pub struct LoginService {
    identities: Arc<dyn CredentialStore>,
    attempts: Arc<dyn LoginAttemptStore>,
    tokens: TokenService,
    code_length: usize,
}

impl LoginService {
    pub fn new(
        identities: Arc<dyn CredentialStore>,
        attempts: Arc<dyn LoginAttemptStore>,
        tokens: TokenService,
        code_length: usize,
    ) -> Self {
        Self {
            identities,
            attempts,
            tokens,
            code_length,
        }
    }

    /// First factor: check credentials and open a 2FA attempt.
    ///
    /// The submitted password is digested exactly as it was at storage time,
    /// then matched as an `(email, digest)` pair. On a match a fresh code is
    /// generated and persisted; delivering it to the user (email/SMS) is an
    /// external collaborator's concern and never blocks this path. The code
    /// is NOT part of the return value.
    ///
    /// No attempt is created when the credentials do not match.
    pub async fn initiate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let hash = password::digest(&credentials.password);
        let identity = self
            .identities
            .find_by_credentials(&credentials.email, &hash)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let code = secret::generate(self.code_length);
        self.attempts
            .create(LoginAttempt::new(identity.id, code))
            .await?;

        Ok(identity.without_password())
    }

    /// Second factor: trade a one-time code for a session token.
    ///
    /// Looks up the pending attempt for `(identity, code)`, issues a token
    /// from the identity's claims, then consumes the attempt with a
    /// conditional write. Losing the consume race to a concurrent call is
    /// [`AuthError::InvalidCode`] — exactly one caller wins per code. A
    /// *persistence failure* during the consume, by contrast, is logged and
    /// swallowed: the token is already issued and valid, and availability
    /// wins over bookkeeping here.
    pub async fn verify(
        &self,
        identity_id: IdentityId,
        submitted_code: &str,
    ) -> Result<VerifiedLogin, AuthError> {
        let attempt = self
            .attempts
            .find_pending(identity_id, submitted_code)
            .await?
            .ok_or(AuthError::InvalidCode)?;

        let identity = self
            .identities
            .find_by_id(identity_id)
            .await?
            .ok_or(AuthError::InvalidCode)?;

        let token = self.tokens.issue(&identity.claims())?;

        match self.attempts.consume(attempt.id, &token).await {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidCode),
            Err(err) => {
                tracing::warn!(
                    attempt = %attempt.id,
                    error = %err,
                    "failed to persist consumed login attempt; honoring issued token"
                );
            }
        }

        Ok(VerifiedLogin {
            identity: identity.without_password(),
            token,
        })
    }
}
