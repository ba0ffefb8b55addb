//! The request-time authorization gate.

use std::collections::HashMap;
use std::sync::Arc;

use vigil_core::{MenuId, OperationId, RoleId};

use crate::adapters::PermissionStore;
use crate::errors::AuthError;
use crate::permission::{Action, UnknownAction};
use crate::token::TokenService;

/// The (menu, action) pair one protected operation requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    pub menu: MenuId,
    pub action: Action,
}

/// Static table mapping protected operations to their access rules.
///
/// This replaces per-route annotation metadata: the binding is declared once
/// at startup, next to the route table, and consulted by the strategy before
/// evaluation. An action name outside the closed set is rejected here, at
/// construction — a misconfigured operation never reaches request time.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: HashMap<OperationId, AccessRule>,
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the rule for one operation.
    pub fn require(
        mut self,
        operation: impl Into<OperationId>,
        menu: impl Into<MenuId>,
        action: Action,
    ) -> Self {
        self.rules.insert(
            operation.into(),
            AccessRule {
                menu: menu.into(),
                action,
            },
        );
        self
    }

    /// Declare a rule with the action given by name, as configuration files
    /// supply it. Unknown names fail instead of ever granting anything.
    pub fn require_named(
        self,
        operation: impl Into<OperationId>,
        menu: impl Into<MenuId>,
        action: &str,
    ) -> Result<Self, UnknownAction> {
        let action = action.parse::<Action>()?;
        Ok(self.require(operation, menu, action))
    }

    pub fn rule_for(&self, operation: &OperationId) -> Option<&AccessRule> {
        self.rules.get(operation)
    }
}

/// Marker profile for a caller that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedProfile {
    /// The role the decision was made for.
    pub role: RoleId,
}

/// Outcome of an authorization check. Never partial.
///
/// `Denied` is a value, not an error: the caller is authenticated but not
/// permitted, and the surrounding collaborator decides how to surface that
/// (typically a bare 403).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted(AuthorizedProfile),
    Denied,
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted(_))
    }
}

/// Per-request allow/deny gate.
///
/// Stateless across requests: all state is the incoming token plus two
/// lookups (token → role, (role, menu) → permission record).
pub struct AuthorizationStrategy {
    tokens: TokenService,
    permissions: Arc<dyn PermissionStore>,
    policy: AccessPolicy,
}

impl AuthorizationStrategy {
    pub fn new(
        tokens: TokenService,
        permissions: Arc<dyn PermissionStore>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            tokens,
            permissions,
            policy,
        }
    }

    /// Gate one request.
    ///
    /// `authorization` is the raw `Authorization` header value, if any;
    /// `operation` names the protected operation being invoked. A missing or
    /// unverifiable token is [`AuthError::Unauthenticated`] (verification
    /// detail never leaks); an operation without a declared rule is
    /// [`AuthError::Configuration`].
    pub async fn authorize(
        &self,
        authorization: Option<&str>,
        operation: &OperationId,
    ) -> Result<AccessDecision, AuthError> {
        let token = bearer_token(authorization).ok_or(AuthError::Unauthenticated)?;
        let role = self
            .tokens
            .verify(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        let rule = self
            .policy
            .rule_for(operation)
            .ok_or_else(|| AuthError::Configuration(operation.clone()))?;

        self.check(&role, &rule.menu, rule.action).await
    }

    /// Evaluate a role against the permission matrix.
    ///
    /// The absence of a permission record for the pair is explicit denial
    /// ([`AuthError::Forbidden`]), never "no restriction configured". A
    /// present record with the flag unset is [`AccessDecision::Denied`].
    pub async fn check(
        &self,
        role: &RoleId,
        menu: &MenuId,
        action: Action,
    ) -> Result<AccessDecision, AuthError> {
        let record = self
            .permissions
            .find(role, menu)
            .await?
            .ok_or(AuthError::Forbidden)?;

        if record.allows(action) {
            Ok(AccessDecision::Granted(AuthorizedProfile {
                role: role.clone(),
            }))
        } else {
            Ok(AccessDecision::Denied)
        }
    }

    /// Standalone permission probe: evaluate a raw token against an explicit
    /// (menu, action) pair, outside any declared operation. Used by
    /// collaborators that gate business logic rather than routes.
    pub async fn check_token(
        &self,
        token: &str,
        menu: &MenuId,
        action: Action,
    ) -> Result<AccessDecision, AuthError> {
        let role = self
            .tokens
            .verify(token)
            .map_err(|_| AuthError::Unauthenticated)?;
        self.check(&role, menu, action).await
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_requires_prefix_and_content() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(Some("Bearer  padded ")), Some("padded"));
        assert_eq!(bearer_token(Some("Bearer ")), None);
        assert_eq!(bearer_token(Some("Basic abc")), None);
        assert_eq!(bearer_token(Some("abc.def.ghi")), None);
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn policy_rejects_unknown_action_names() {
        let err = AccessPolicy::new()
            .require_named("users.find", "menu-users", "download")
            .unwrap_err();
        assert_eq!(err.0, "download");
    }

    #[test]
    fn policy_resolves_declared_operations() {
        let policy = AccessPolicy::new()
            .require("users.find", "menu-users", Action::List)
            .require_named("users.delete", "menu-users", "delete")
            .unwrap();

        let rule = policy.rule_for(&OperationId::new("users.find")).unwrap();
        assert_eq!(rule.menu, MenuId::new("menu-users"));
        assert_eq!(rule.action, Action::List);
        assert!(policy.rule_for(&OperationId::new("users.create")).is_none());
    }
}
