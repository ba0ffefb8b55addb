//! Store adapter contracts.
//!
//! Persistence lives outside the core: implementations are passed into the
//! services as `Arc<dyn Trait>` at construction time. Adapters report
//! infrastructure failure via [`StoreError`]; "no matching record" is
//! `Ok(None)`, never an error.

use async_trait::async_trait;

use vigil_core::{IdentityId, LoginAttemptId, MenuId, RoleId, StoreResult};

use crate::identity::Identity;
use crate::login::LoginAttempt;
use crate::permission::PermissionRecord;

/// Read access to identity records.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look an identity up by exact `(email, password digest)` equality.
    ///
    /// The digest must have been produced by
    /// [`password::digest`](crate::password::digest); the store compares it
    /// verbatim.
    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> StoreResult<Option<Identity>>;

    async fn find_by_id(&self, id: IdentityId) -> StoreResult<Option<Identity>>;
}

/// Read access to the permission matrix.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// The record for a (role, menu) pair; at most one exists.
    async fn find(&self, role: &RoleId, menu: &MenuId) -> StoreResult<Option<PermissionRecord>>;
}

/// Persistence for 2FA login attempts, the only shared mutable resource.
#[async_trait]
pub trait LoginAttemptStore: Send + Sync {
    async fn create(&self, attempt: LoginAttempt) -> StoreResult<()>;

    /// The unconsumed attempt matching `(identity, code)`.
    ///
    /// When several unconsumed attempts carry the same code, the most
    /// recently created one wins.
    async fn find_pending(
        &self,
        identity: IdentityId,
        code: &str,
    ) -> StoreResult<Option<LoginAttempt>>;

    /// Conditionally consume an attempt: store `token`, activate it, and set
    /// the consumed flag, guarded on the flag still being unset at write
    /// time (a single compare-and-set — never read-then-write).
    ///
    /// Returns `true` iff this call performed the transition; `false` means
    /// the attempt was already consumed (or gone).
    async fn consume(&self, id: LoginAttemptId, token: &str) -> StoreResult<bool>;
}
