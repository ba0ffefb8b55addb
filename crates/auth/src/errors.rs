//! Authentication/authorization failure taxonomy.

use thiserror::Error;

use vigil_core::{OperationId, StoreError};

use crate::token::TokenError;

/// Failure of a login or authorization operation.
///
/// Display strings stay generic on purpose: which field mismatched, which
/// check rejected a token, or which store failed is never surfaced to the
/// caller (the collaborator decides how to present a rejection, typically as
/// a bare 401/403).
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login initiation: no identity matches the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 2FA verification: code mismatch, already consumed, or lost the
    /// consume race.
    #[error("invalid two-factor code")]
    InvalidCode,

    /// The gate: missing/malformed bearer token, or a token that failed
    /// verification.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Authenticated, but the permission matrix denies access (including
    /// the absence of any permission record for the pair).
    #[error("forbidden")]
    Forbidden,

    /// No authorization metadata is declared for the operation. Fatal and
    /// not user-facing: the deployment is misconfigured.
    #[error("no authorization metadata for operation '{0}'")]
    Configuration(OperationId),

    /// Token issuance failed (programming or key-material error).
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A store adapter failed on the lookup path.
    #[error(transparent)]
    Store(#[from] StoreError),
}
