//!
//! Core query logic: the engine that owns a policy, and the user-scoped view
//! that answers "can THIS user do X".
//!
//! Every query fails closed. A missing user, an unknown role tag, an unknown
//! module or an unknown permission string all answer `false` (or an empty set),
//! and nothing here panics.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::error::AccessError;
use crate::permission::{self, resources};
use crate::policy::AccessPolicy;
use crate::subject::{same_identity, Principal, Subject};
use crate::types::{Role, RoleInfo};

/// Owns an immutable `AccessPolicy` and hands out user-scoped query views.
///
/// Cloning is cheap (the policy is behind an `Arc`), and the engine is
/// `Send + Sync`, so one instance can serve every request context.
#[derive(Debug, Clone)]
pub struct AccessControlEngine {
    policy: Arc<AccessPolicy>,
}

impl AccessControlEngine {
    pub fn new(policy: AccessPolicy) -> Self {
        AccessControlEngine { policy: Arc::new(policy) }
    }

    /// Builds an engine over a policy that is already shared elsewhere.
    pub fn from_shared(policy: Arc<AccessPolicy>) -> Self {
        AccessControlEngine { policy }
    }

    /// The process-wide engine over the compiled-in tables, built on first use.
    pub fn builtin() -> &'static AccessControlEngine {
        static BUILTIN: OnceLock<AccessControlEngine> = OnceLock::new();
        BUILTIN.get_or_init(|| AccessControlEngine::new(AccessPolicy::builtin()))
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Binds the query set to `user`. `None` yields a view that denies everything.
    pub fn for_user<'a, U: Subject + ?Sized>(&'a self, user: Option<&'a U>) -> AccessControl<'a, U> {
        AccessControl { policy: &*self.policy, user }
    }

    /// A view with no user attached.
    pub fn anonymous(&self) -> AccessControl<'_, Principal> {
        self.for_user(None)
    }
}

impl Default for AccessControlEngine {
    fn default() -> Self {
        AccessControlEngine::builtin().clone()
    }
}

/// `for_user` on the built-in engine.
pub fn create_access_control<U: Subject + ?Sized>(user: Option<&U>) -> AccessControl<'_, U> {
    AccessControlEngine::builtin().for_user(user)
}

/// Queries scoped to one user. Holds two borrows and nothing else.
pub struct AccessControl<'a, U: ?Sized> {
    policy: &'a AccessPolicy,
    user: Option<&'a U>,
}

impl<U: ?Sized> Clone for AccessControl<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: ?Sized> Copy for AccessControl<'_, U> {}

impl<U: Subject + ?Sized> std::fmt::Debug for AccessControl<'_, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("AccessControl");
        match self.user {
            Some(user) => s.field("user_id", &user.subject_id()).field("role", &user.role_tag()),
            None => s.field("user", &Option::<()>::None),
        };
        s.finish()
    }
}

impl<'a, U: Subject + ?Sized> AccessControl<'a, U> {
    pub fn user(&self) -> Option<&'a U> {
        self.user
    }

    /// The user's parsed role, or `None` for no user / an unrecognized tag.
    fn known_role(&self) -> Option<Role> {
        let user = self.user?;
        let role = user.role();
        if role.is_none() {
            tracing::warn!(
                user = user.subject_id(),
                role = user.role_tag(),
                "unrecognized role, denying access"
            );
        }
        role
    }

    /// True iff the user's role holds `permission` exactly.
    pub fn has_permission(&self, permission: &str) -> bool {
        let Some(role) = self.known_role() else {
            return false;
        };
        let granted = self.policy.grants(role, permission);
        if !granted {
            tracing::debug!(%role, permission, "permission denied");
        }
        granted
    }

    /// True iff the user's role is listed for `module`.
    pub fn can_access_module(&self, module: &str) -> bool {
        let Some(role) = self.known_role() else {
            return false;
        };
        let allowed = self.policy.allows_module(role, module);
        if !allowed {
            tracing::debug!(%role, module, "module access denied");
        }
        allowed
    }

    /// `has_permission("{resource}:{action}")`.
    pub fn can_perform_action(&self, action: &str, resource: &str) -> bool {
        self.has_permission(&permission::compose(resource, action))
    }

    /// Every module the user may open.
    pub fn accessible_modules(&self) -> BTreeSet<&'a str> {
        let policy = self.policy;
        match self.known_role() {
            Some(role) => policy.modules_for(role).collect(),
            None => BTreeSet::new(),
        }
    }

    /// Keeps only the modules the user may open, in the caller's order.
    /// Use this to build navigation lists so denied entries never appear.
    pub fn visible_modules<'m, I>(&self, candidates: I) -> Vec<&'m str>
    where
        I: IntoIterator<Item = &'m str>,
    {
        let Some(role) = self.known_role() else {
            return Vec::new();
        };
        candidates.into_iter().filter(|m| self.policy.allows_module(role, m)).collect()
    }

    /// The user's effective permission set.
    pub fn permissions(&self) -> BTreeSet<&'a str> {
        let policy = self.policy;
        match self.known_role() {
            Some(role) => policy.permissions_of(role).collect(),
            None => BTreeSet::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.known_role().is_some_and(Role::is_admin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.known_role() == Some(Role::SuperAdmin)
    }

    pub fn can_manage_users(&self) -> bool {
        self.has_permission("users:create")
            || self.has_permission("users:update")
            || self.has_permission("users:delete")
    }

    pub fn can_create_caps(&self) -> bool {
        self.can_perform_action("create", resources::CAPS)
    }

    pub fn can_handle_grievances(&self) -> bool {
        self.has_permission("grievances:update") || self.has_permission("grievances:delete")
    }

    pub fn can_manage_training(&self) -> bool {
        self.has_permission("training:create") || self.has_permission("training:update")
    }

    pub fn can_manage_committees(&self) -> bool {
        self.has_permission("committees:create") || self.has_permission("committees:update")
    }

    pub fn can_view_reports(&self) -> bool {
        self.has_permission("reports:read")
    }

    pub fn can_create_reports(&self) -> bool {
        self.has_permission("reports:create")
    }

    pub fn can_manage_settings(&self) -> bool {
        self.has_permission("settings:update")
    }

    pub fn can_manage_organization(&self) -> bool {
        self.has_permission("organizations:update")
    }

    /// Display/hierarchy record for the user's role; the `worker` record when
    /// there is no user or the role is not in the table.
    pub fn role_info(&self) -> &'a RoleInfo {
        let policy = self.policy;
        self.user
            .and_then(|u| u.role())
            .and_then(|role| policy.role_info(role))
            .unwrap_or_else(|| policy.fallback_role_info())
    }

    /// Whether the user may edit `target`.
    ///
    /// - super admins may edit anyone except a *different* super admin;
    /// - admins may edit roles with a strictly lower hierarchy level;
    /// - everyone else may only edit themselves.
    ///
    /// Levels come from the policy's role info table, so re-levelling a role
    /// changes who may edit it. Unknown roles on either side are denied,
    /// except that a super admin's decision only looks at whether the target
    /// is a super admin.
    pub fn can_edit_user<T: Subject + ?Sized>(&self, target: Option<&T>) -> bool {
        let (Some(actor), Some(target)) = (self.user, target) else {
            return false;
        };
        let Some(actor_role) = self.known_role() else {
            return false;
        };

        let allowed = match actor_role {
            Role::SuperAdmin => target.role() != Some(Role::SuperAdmin) || same_identity(actor, target),
            Role::Admin => {
                let own = self.policy.level_of(actor_role);
                let theirs = target.role().and_then(|r| self.policy.level_of(r));
                matches!((own, theirs), (Some(own), Some(theirs)) if theirs < own)
            }
            _ => same_identity(actor, target),
        };

        if !allowed {
            tracing::debug!(
                actor = actor.subject_id(),
                %actor_role,
                target = target.subject_id(),
                target_role = target.role_tag(),
                "user edit denied"
            );
        }
        allowed
    }

    /// `has_permission` as a `Result`, for call sites that propagate with `?`.
    pub fn require_permission(&self, permission: &str) -> Result<(), AccessError> {
        let user = self.user.ok_or(AccessError::Unauthenticated)?;
        if self.has_permission(permission) {
            Ok(())
        } else {
            Err(AccessError::PermissionDenied {
                role: user.role_tag().to_string(),
                permission: permission.to_string(),
            })
        }
    }

    /// `can_access_module` as a `Result`.
    pub fn require_module(&self, module: &str) -> Result<(), AccessError> {
        let user = self.user.ok_or(AccessError::Unauthenticated)?;
        if self.can_access_module(module) {
            Ok(())
        } else {
            Err(AccessError::ModuleDenied {
                role: user.role_tag().to_string(),
                module: module.to_string(),
            })
        }
    }

    /// `can_edit_user` as a `Result`.
    pub fn require_edit_user<T: Subject + ?Sized>(&self, target: &T) -> Result<(), AccessError> {
        let user = self.user.ok_or(AccessError::Unauthenticated)?;
        if self.can_edit_user(Some(target)) {
            Ok(())
        } else {
            Err(AccessError::EditDenied {
                actor: user.subject_id().to_string(),
                target: target.subject_id().to_string(),
            })
        }
    }
}
