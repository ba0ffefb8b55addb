//! The per-role, per-menu permission matrix.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::{MenuId, RoleId};

/// One of the five actions a permission record can grant.
///
/// The set is closed: evaluating a record against an action is a total match,
/// so nothing outside this enum can ever be granted. Parsing from
/// configuration happens through [`FromStr`], which rejects unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Edit,
    List,
    Delete,
    Export,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Edit,
        Action::List,
        Action::Delete,
        Action::Export,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Edit => "edit",
            Action::List => "list",
            Action::Delete => "delete",
            Action::Export => "export",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action name outside the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "edit" => Ok(Action::Edit),
            "list" => Ok(Action::List),
            "delete" => Ok(Action::Delete),
            "export" => Ok(Action::Export),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Per-action grant flags of one permission record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    pub create: bool,
    pub edit: bool,
    pub list: bool,
    pub delete: bool,
    pub export: bool,
}

/// The access-control entry for one (role, menu) pair.
///
/// Keyed by the unique pair; at most one record exists per pair. Read-only
/// from the core's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    pub role: RoleId,
    pub menu: MenuId,
    pub flags: PermissionFlags,
}

impl PermissionRecord {
    /// Whether this record grants `action`.
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Create => self.flags.create,
            Action::Edit => self.flags.edit,
            Action::List => self.flags.list,
            Action::Delete => self.flags.delete,
            Action::Export => self.flags.export,
        }
    }
}
