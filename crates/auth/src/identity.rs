//! Identity records and the transient credential input.

use serde::{Deserialize, Serialize};

use vigil_core::{IdentityId, RoleId};

use crate::SessionClaims;

/// An account record as read from the credential store.
///
/// The core never creates or mutates identities; it reads them for
/// authentication and blanks the password hash before handing them back to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub role: RoleId,
    pub email: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,
    /// One-way digest of the password; empty once blanked.
    pub password_hash: String,
}

impl Identity {
    /// Display name: all present name parts, space-joined.
    pub fn full_name(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.first_name];
        if let Some(middle) = &self.middle_name {
            parts.push(middle);
        }
        parts.push(&self.last_name);
        if let Some(second) = &self.second_last_name {
            parts.push(second);
        }
        parts.join(" ")
    }

    /// Blank the password hash before the record leaves the core.
    pub fn without_password(mut self) -> Self {
        self.password_hash.clear();
        self
    }

    /// Claims for a session token bound to this identity.
    pub fn claims(&self) -> SessionClaims {
        SessionClaims {
            name: self.full_name(),
            role: self.role.clone(),
            email: self.email.clone(),
        }
    }
}

/// Transient login input. Never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful completion of the 2FA handshake.
#[derive(Debug, Clone, Serialize)]
pub struct VerifiedLogin {
    /// The authenticated identity, password hash blanked.
    pub identity: Identity,
    /// Signed session token.
    pub token: String,
}
