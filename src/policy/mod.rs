//!
//! The immutable configuration behind the engine: which permissions each role
//! holds, which roles may open each module, and each role's display/hierarchy
//! record.
//!
//! An `AccessPolicy` is built once, either from the compiled-in tables in
//! [`builtin`] or from a JSON [`PolicyDocument`], and is never mutated
//! afterwards. It exposes no setters.

pub mod builtin;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;

use crate::error::PolicyError;
use crate::permission;
use crate::types::{Role, RoleInfo};

/// Serialized form of a policy, keyed by raw tags.
///
/// ```json
/// {
///   "role_permissions": { "manager": ["permits:read", "caps:create"] },
///   "module_access":    { "permits": ["manager", "admin"] },
///   "role_info":        { "worker": { "label": "Worker", "level": 2, "color": "gray" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyDocument {
    #[serde(default)]
    pub role_permissions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub module_access: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub role_info: BTreeMap<String, RoleInfo>,
}

/// Validated, read-only access tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    role_permissions: HashMap<Role, HashSet<String>>,
    module_access: BTreeMap<String, HashSet<Role>>,
    role_info: HashMap<Role, RoleInfo>,
    /// The `worker` record, returned for unknown roles.
    fallback: RoleInfo,
}

impl AccessPolicy {
    /// Assembles the compiled-in tables from [`builtin`].
    pub fn builtin() -> Self {
        let role_permissions = builtin::ROLE_PERMISSIONS
            .iter()
            .map(|(role, perms)| (*role, perms.iter().map(|p| p.to_string()).collect()))
            .collect();
        let module_access = builtin::MODULE_ACCESS
            .iter()
            .map(|(module, roles)| (module.to_string(), roles.iter().copied().collect()))
            .collect();
        let role_info = builtin::ROLE_INFO
            .iter()
            .map(|(role, label, level, color)| (*role, RoleInfo::new(*label, *level, *color)))
            .collect();
        let (_, label, level, color) = builtin::FALLBACK_ROLE_INFO;

        AccessPolicy {
            role_permissions,
            module_access,
            role_info,
            fallback: RoleInfo::new(label, level, color),
        }
    }

    /// Builds a policy from typed tables, checking permission shape and the
    /// presence of the `worker` fallback record.
    pub fn from_parts(
        role_permissions: HashMap<Role, HashSet<String>>,
        module_access: BTreeMap<String, HashSet<Role>>,
        role_info: HashMap<Role, RoleInfo>,
    ) -> Result<Self, PolicyError> {
        for perm in role_permissions.values().flatten() {
            if !permission::is_well_formed(perm) {
                return Err(PolicyError::MalformedPermission(perm.clone()));
            }
        }
        let fallback = role_info.get(&Role::Worker).cloned().ok_or(PolicyError::MissingFallbackRole)?;

        Ok(AccessPolicy { role_permissions, module_access, role_info, fallback })
    }

    /// Validates a raw document and converts it into a policy.
    pub fn from_document(doc: PolicyDocument) -> Result<Self, PolicyError> {
        let mut role_permissions = HashMap::new();
        for (tag, perms) in doc.role_permissions {
            let role = Role::try_from(tag.as_str())?;
            role_permissions.insert(role, perms.into_iter().collect::<HashSet<_>>());
        }

        let mut module_access = BTreeMap::new();
        for (module, tags) in doc.module_access {
            let roles = tags
                .iter()
                .map(|t| Role::try_from(t.as_str()))
                .collect::<Result<HashSet<_>, _>>()?;
            module_access.insert(module, roles);
        }

        let mut role_info = HashMap::new();
        for (tag, info) in doc.role_info {
            role_info.insert(Role::try_from(tag.as_str())?, info);
        }

        let policy = Self::from_parts(role_permissions, module_access, role_info)?;
        tracing::info!(
            roles = policy.role_permissions.len(),
            modules = policy.module_access.len(),
            "loaded access policy"
        );
        Ok(policy)
    }

    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, PolicyError> {
        Self::from_document(serde_json::from_slice(bytes)?)
    }

    /// Reads and validates a JSON policy file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading access policy file");
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Re-checks the invariants `from_parts` enforces.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if let Some(bad) = self.role_permissions.values().flatten().find(|p| !permission::is_well_formed(p)) {
            return Err(PolicyError::MalformedPermission(bad.clone()));
        }
        match self.role_info.get(&Role::Worker) {
            Some(worker) if *worker == self.fallback => Ok(()),
            _ => Err(PolicyError::MissingFallbackRole),
        }
    }

    /// Exports the tables in document form, sorted for stable diffs and audits.
    pub fn document(&self) -> PolicyDocument {
        let role_permissions = self
            .role_permissions
            .iter()
            .map(|(role, perms)| {
                let mut perms: Vec<String> = perms.iter().cloned().collect();
                perms.sort_unstable();
                (role.as_str().to_string(), perms)
            })
            .collect();
        let module_access = self
            .module_access
            .iter()
            .map(|(module, roles)| {
                let roles: BTreeSet<Role> = roles.iter().copied().collect();
                (module.clone(), roles.into_iter().map(|r| r.as_str().to_string()).collect())
            })
            .collect();
        let role_info = self
            .role_info
            .iter()
            .map(|(role, info)| (role.as_str().to_string(), info.clone()))
            .collect();

        PolicyDocument { role_permissions, module_access, role_info }
    }

    /// Whether `role` holds `permission`. Plain set membership.
    #[inline]
    pub fn grants(&self, role: Role, permission: &str) -> bool {
        self.role_permissions.get(&role).is_some_and(|perms| perms.contains(permission))
    }

    /// Whether `role` may open `module`. Unknown modules deny.
    #[inline]
    pub fn allows_module(&self, role: Role, module: &str) -> bool {
        self.module_access.get(module).is_some_and(|roles| roles.contains(&role))
    }

    pub fn permissions_of(&self, role: Role) -> impl Iterator<Item = &str> {
        self.role_permissions.get(&role).into_iter().flatten().map(String::as_str)
    }

    /// Module names in the table, in sorted order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.module_access.keys().map(String::as_str)
    }

    /// Modules `role` may open, in sorted order.
    pub fn modules_for(&self, role: Role) -> impl Iterator<Item = &str> {
        self.module_access
            .iter()
            .filter(move |(_, roles)| roles.contains(&role))
            .map(|(module, _)| module.as_str())
    }

    /// Every role that holds `permission`.
    pub fn roles_with_permission(&self, permission: &str) -> BTreeSet<Role> {
        Role::ALL.into_iter().filter(|r| self.grants(*r, permission)).collect()
    }

    /// The record for `role`, if the table has one.
    pub fn role_info(&self, role: Role) -> Option<&RoleInfo> {
        self.role_info.get(&role)
    }

    /// The `worker` record used for unknown roles.
    pub fn fallback_role_info(&self) -> &RoleInfo {
        &self.fallback
    }

    /// Hierarchy level of `role`, if the table has a record for it.
    pub fn level_of(&self, role: Role) -> Option<u8> {
        self.role_info.get(&role).map(|info| info.level)
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::{modules, resources};
    use crate::types::Action;

    #[test]
    fn test_builtin_policy_validates() {
        let policy = AccessPolicy::builtin();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.fallback_role_info(), policy.role_info(Role::Worker).unwrap());
    }

    #[test]
    fn test_builtin_covers_every_role_and_module() {
        let policy = AccessPolicy::builtin();
        for role in Role::ALL {
            assert!(policy.role_info(role).is_some(), "missing role info for {role}");
            assert!(policy.permissions_of(role).next().is_some(), "no permissions for {role}");
        }
        let listed: Vec<&str> = policy.modules().collect();
        let mut expected = modules::ALL.to_vec();
        expected.sort_unstable();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_builtin_levels_and_tie() {
        let policy = AccessPolicy::builtin();
        let level = |r| policy.level_of(r).unwrap();
        assert_eq!(level(Role::SuperAdmin), 7);
        assert_eq!(level(Role::Admin), 6);
        assert_eq!(level(Role::Manager), 5);
        assert_eq!(level(Role::Supervisor), 4);
        assert_eq!(level(Role::Auditor), 4);
        assert_eq!(level(Role::CommitteeMember), 3);
        assert_eq!(level(Role::Worker), 2);
        for role in Role::ALL {
            assert!((2..=7).contains(&level(role)));
        }
    }

    #[test]
    fn test_builtin_permissions_use_known_vocabulary() {
        let policy = AccessPolicy::builtin();
        for role in Role::ALL {
            for perm in policy.permissions_of(role) {
                let (resource, action) = permission::split(perm).unwrap();
                assert!(resources::ALL.contains(&resource), "{role}: unknown resource in {perm}");
                assert!(Action::from_tag(action).is_some(), "{role}: unknown action in {perm}");
            }
        }
    }

    #[test]
    fn test_super_admin_holds_every_permission() {
        let policy = AccessPolicy::builtin();
        for resource in resources::ALL {
            for action in Action::ALL {
                assert!(policy.grants(Role::SuperAdmin, &permission::of(resource, action)));
            }
        }
    }

    #[test]
    fn test_module_grant_implies_read_permission() {
        let policy = AccessPolicy::builtin();
        for module in policy.modules().filter(|m| *m != modules::DASHBOARD) {
            for role in Role::ALL.into_iter().filter(|r| policy.allows_module(*r, module)) {
                assert!(
                    policy.grants(role, &permission::compose(module, "read")),
                    "{role} can open {module} but lacks {module}:read"
                );
            }
        }
    }

    #[test]
    fn test_roles_with_permission() {
        let policy = AccessPolicy::builtin();
        let settings: Vec<Role> = policy.roles_with_permission("settings:update").into_iter().collect();
        assert_eq!(settings, vec![Role::SuperAdmin, Role::Admin]);
        assert!(policy.roles_with_permission("nope:read").is_empty());
    }

    #[test]
    fn test_from_json_str_minimal_document() {
        let policy = AccessPolicy::from_json_str(
            r#"{
                "role_permissions": { "manager": ["permits:read"] },
                "module_access": { "permits": ["manager"] },
                "role_info": { "worker": { "label": "Worker", "level": 2, "color": "gray" } }
            }"#,
        )
        .unwrap();
        assert!(policy.grants(Role::Manager, "permits:read"));
        assert!(!policy.grants(Role::Admin, "permits:read"));
        assert!(policy.allows_module(Role::Manager, "permits"));
        assert_eq!(policy.role_info(Role::Manager), None);
        assert_eq!(policy.fallback_role_info().label, "Worker");
    }

    #[test]
    fn test_from_json_rejects_unknown_role() {
        let err = AccessPolicy::from_json_str(
            r#"{ "module_access": { "permits": ["janitor"] },
                 "role_info": { "worker": { "label": "Worker", "level": 2, "color": "gray" } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PolicyError::UnknownRole(ref r) if r == "janitor"));
    }

    #[test]
    fn test_from_json_rejects_malformed_permission() {
        let err = AccessPolicy::from_json_str(
            r#"{ "role_permissions": { "admin": ["permits"] },
                 "role_info": { "worker": { "label": "Worker", "level": 2, "color": "gray" } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PolicyError::MalformedPermission(ref p) if p == "permits"));
    }

    #[test]
    fn test_from_json_requires_worker_fallback() {
        let err = AccessPolicy::from_json_str(r#"{ "role_permissions": {} }"#).unwrap_err();
        assert!(matches!(err, PolicyError::MissingFallbackRole));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(AccessPolicy::from_json_str("not json"), Err(PolicyError::Json(_))));
        assert!(matches!(
            AccessPolicy::from_json_str(r#"{ "extra_table": {} }"#),
            Err(PolicyError::Json(_))
        ));
    }

    #[test]
    fn test_document_reloads_to_same_policy() {
        let policy = AccessPolicy::builtin();
        let json = serde_json::to_string(&policy.document()).unwrap();
        assert_eq!(AccessPolicy::from_json_str(&json).unwrap(), policy);
    }
}
