//!
//! Permission vocabulary: resource names, module names and the
//! `resource:action` string format the role tables are keyed by.

use crate::types::Action;

/// Resource names that appear on the left of a permission.
/// The set is open-ended; these are the ones the built-in tables grant.
pub mod resources {
    pub const USERS: &str = "users";
    pub const ORGANIZATIONS: &str = "organizations";
    pub const PERMITS: &str = "permits";
    pub const AUDITS: &str = "audits";
    pub const CAPS: &str = "caps";
    pub const GRIEVANCES: &str = "grievances";
    pub const TRAINING: &str = "training";
    pub const COMMITTEES: &str = "committees";
    pub const MEETINGS: &str = "meetings";
    pub const DOCUMENTS: &str = "documents";
    pub const REPORTS: &str = "reports";
    pub const SETTINGS: &str = "settings";

    pub const ALL: [&str; 12] = [
        USERS,
        ORGANIZATIONS,
        PERMITS,
        AUDITS,
        CAPS,
        GRIEVANCES,
        TRAINING,
        COMMITTEES,
        MEETINGS,
        DOCUMENTS,
        REPORTS,
        SETTINGS,
    ];
}

/// Navigable functional areas. Every resource is also a module, plus `dashboard`.
pub mod modules {
    pub use super::resources::{
        AUDITS, CAPS, COMMITTEES, DOCUMENTS, GRIEVANCES, MEETINGS, ORGANIZATIONS, PERMITS, REPORTS,
        SETTINGS, TRAINING, USERS,
    };

    pub const DASHBOARD: &str = "dashboard";

    pub const ALL: [&str; 13] = [
        DASHBOARD,
        USERS,
        ORGANIZATIONS,
        PERMITS,
        AUDITS,
        CAPS,
        GRIEVANCES,
        TRAINING,
        COMMITTEES,
        MEETINGS,
        DOCUMENTS,
        REPORTS,
        SETTINGS,
    ];
}

/// Builds the permission string for `resource` and `action`.
///
/// Only the `:` join is applied; no validation happens here, so lookups with
/// an unknown resource or verb simply miss.
#[inline]
pub fn compose(resource: &str, action: &str) -> String {
    format!("{resource}:{action}")
}

/// `compose` for a typed action.
#[inline]
pub fn of(resource: &str, action: Action) -> String {
    compose(resource, action.as_str())
}

/// Splits `resource:action` into its halves.
///
/// Returns `None` unless there is exactly one `:` and both halves are non-empty.
pub fn split(permission: &str) -> Option<(&str, &str)> {
    let (resource, action) = permission.split_once(':')?;
    if resource.is_empty() || action.is_empty() || action.contains(':') {
        return None;
    }
    Some((resource, action))
}

/// Whether `permission` is shaped like `resource:action`.
#[inline]
pub fn is_well_formed(permission: &str) -> bool {
    split(permission).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_joins_with_colon() {
        assert_eq!(compose(resources::PERMITS, "create"), "permits:create");
        assert_eq!(of(resources::CAPS, Action::Delete), "caps:delete");
        // No validation: odd inputs are joined verbatim.
        assert_eq!(compose("", ""), ":");
    }

    #[test]
    fn test_split_rejects_malformed() {
        assert_eq!(split("reports:read"), Some(("reports", "read")));
        assert_eq!(split("reports"), None);
        assert_eq!(split(":read"), None);
        assert_eq!(split("reports:"), None);
        assert_eq!(split("a:b:c"), None);
    }

    #[test]
    fn test_modules_are_resources_plus_dashboard() {
        assert_eq!(modules::ALL[0], modules::DASHBOARD);
        assert_eq!(&modules::ALL[1..], &resources::ALL[..]);
    }
}
