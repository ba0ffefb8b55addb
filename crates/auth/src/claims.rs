use serde::{Deserialize, Serialize};

use vigil_core::RoleId;

/// Claims embedded in a signed session token (transport-agnostic).
///
/// Derived from an [`Identity`](crate::Identity) at issuance time; immutable
/// once signed. Timestamps (`iat`/`exp`) are added on the wire by the
/// [`TokenService`](crate::TokenService), not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Display name of the authenticated identity.
    pub name: String,

    /// Role granted within the permission matrix.
    pub role: RoleId,

    /// Email the identity authenticated with.
    pub email: String,
}
