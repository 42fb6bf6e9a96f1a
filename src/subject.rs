//! Defines the identity seam between the engine and whatever supplies users.
//!
//! The engine never validates or refreshes identities; it only reads an id
//! and a role tag. Application user types implement `Subject` directly so
//! they can be passed to the engine without conversion.

use crate::types::Role;

/// Anything that carries an identity and a role tag.
pub trait Subject {
    /// Stable identifier of the user (e.g. the auth provider's user id).
    fn subject_id(&self) -> &str;

    /// Raw role tag as stored by the identity provider. May be unknown.
    fn role_tag(&self) -> &str;

    /// The parsed role, or `None` for an unrecognized tag.
    fn role(&self) -> Option<Role> {
        Role::from_tag(self.role_tag())
    }
}

impl<S: Subject + ?Sized> Subject for &S {
    fn subject_id(&self) -> &str {
        (**self).subject_id()
    }

    fn role_tag(&self) -> &str {
        (**self).role_tag()
    }
}

/// A minimal `{id, role}` user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Principal {
    pub id: String,
    pub role: String,
}

impl Principal {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Principal { id: id.into(), role: role.into() }
    }

    /// A principal holding a known role.
    pub fn with_role(id: impl Into<String>, role: Role) -> Self {
        Principal::new(id, role.as_str())
    }
}

impl Subject for Principal {
    fn subject_id(&self) -> &str {
        &self.id
    }

    fn role_tag(&self) -> &str {
        &self.role
    }
}

/// Two subjects are the same identity when their ids match and are non-empty.
pub(crate) fn same_identity<A: Subject + ?Sized, B: Subject + ?Sized>(a: &A, b: &B) -> bool {
    let id = a.subject_id();
    !id.is_empty() && id == b.subject_id()
}
