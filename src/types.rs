//! Shared types for the access-control engine: roles, CRUD actions and the
//! per-role display/hierarchy record.

use crate::error::PolicyError;

/// The closed set of roles known to the engine.
///
/// Tags are serialized in snake_case (`"super_admin"`, `"committee_member"`),
/// matching the role strings handed out by the identity provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Supervisor,
    Worker,
    Auditor,
    CommitteeMember,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Manager,
        Role::Supervisor,
        Role::Worker,
        Role::Auditor,
        Role::CommitteeMember,
    ];

    /// The wire tag for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Supervisor => "supervisor",
            Role::Worker => "worker",
            Role::Auditor => "auditor",
            Role::CommitteeMember => "committee_member",
        }
    }

    /// Parses a wire tag. Unknown tags yield `None`; callers treat that as
    /// "no permissions".
    pub fn from_tag(tag: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == tag)
    }

    /// `admin` or `super_admin`.
    pub const fn is_admin(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = PolicyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Role::from_tag(value).ok_or_else(|| PolicyError::UnknownRole(value.to_string()))
    }
}

impl std::str::FromStr for Role {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::try_from(s)
    }
}

/// CRUD verbs used as the right-hand side of a `resource:action` permission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.as_str() == tag)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display and hierarchy data for one role.
///
/// `level` is the only field with authorization meaning: it decides which
/// users an admin may edit. `label` and `color` are presentation hints.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoleInfo {
    pub label: String,
    pub level: u8,
    pub color: String,
}

impl RoleInfo {
    pub fn new(label: impl Into<String>, level: u8, color: impl Into<String>) -> Self {
        RoleInfo { label: label.into(), level, color: color.into() }
    }
}
