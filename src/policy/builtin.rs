//!
//! Compiled-in access tables.
//!
//! Adding a role or module means touching exactly one entry in each table
//! below. `AccessPolicy::builtin()` assembles these into the shared policy.

use crate::types::Role;

/// The record handed back for roles the tables do not know.
pub const FALLBACK_ROLE_INFO: (Role, &str, u8, &str) = (Role::Worker, "Worker", 2, "gray");

/// `(role, label, level, color)`.
///
/// Supervisor and auditor share level 4; the tie is deliberate until product
/// requirements say otherwise.
pub const ROLE_INFO: &[(Role, &str, u8, &str)] = &[
    (Role::SuperAdmin, "Super Admin", 7, "red"),
    (Role::Admin, "Admin", 6, "purple"),
    (Role::Manager, "Manager", 5, "blue"),
    (Role::Supervisor, "Supervisor", 4, "green"),
    (Role::Auditor, "Auditor", 4, "orange"),
    (Role::CommitteeMember, "Committee Member", 3, "teal"),
    FALLBACK_ROLE_INFO,
];

/// Permissions granted to each role.
pub const ROLE_PERMISSIONS: &[(Role, &[&str])] = &[
    (
        Role::SuperAdmin,
        &[
            "users:create", "users:read", "users:update", "users:delete",
            "organizations:create", "organizations:read", "organizations:update", "organizations:delete",
            "permits:create", "permits:read", "permits:update", "permits:delete",
            "audits:create", "audits:read", "audits:update", "audits:delete",
            "caps:create", "caps:read", "caps:update", "caps:delete",
            "grievances:create", "grievances:read", "grievances:update", "grievances:delete",
            "training:create", "training:read", "training:update", "training:delete",
            "committees:create", "committees:read", "committees:update", "committees:delete",
            "meetings:create", "meetings:read", "meetings:update", "meetings:delete",
            "documents:create", "documents:read", "documents:update", "documents:delete",
            "reports:create", "reports:read", "reports:update", "reports:delete",
            "settings:create", "settings:read", "settings:update", "settings:delete",
        ],
    ),
    (
        Role::Admin,
        &[
            "users:create", "users:read", "users:update", "users:delete",
            "organizations:read", "organizations:update",
            "permits:create", "permits:read", "permits:update", "permits:delete",
            "audits:create", "audits:read", "audits:update", "audits:delete",
            "caps:create", "caps:read", "caps:update", "caps:delete",
            "grievances:create", "grievances:read", "grievances:update", "grievances:delete",
            "training:create", "training:read", "training:update", "training:delete",
            "committees:create", "committees:read", "committees:update", "committees:delete",
            "meetings:create", "meetings:read", "meetings:update", "meetings:delete",
            "documents:create", "documents:read", "documents:update", "documents:delete",
            "reports:create", "reports:read", "reports:update", "reports:delete",
            "settings:read", "settings:update",
        ],
    ),
    (
        Role::Manager,
        &[
            "users:read",
            "organizations:read",
            "permits:create", "permits:read", "permits:update",
            "audits:create", "audits:read", "audits:update",
            "caps:create", "caps:read", "caps:update",
            "grievances:read", "grievances:update",
            "training:create", "training:read", "training:update",
            "committees:read", "committees:update",
            "meetings:create", "meetings:read", "meetings:update",
            "documents:create", "documents:read", "documents:update",
            "reports:create", "reports:read",
        ],
    ),
    (
        Role::Supervisor,
        &[
            "users:read",
            "permits:read",
            "audits:read",
            "caps:read", "caps:update",
            "grievances:create", "grievances:read",
            "training:read", "training:update",
            "committees:read",
            "meetings:read",
            "documents:create", "documents:read",
            "reports:read",
        ],
    ),
    (
        Role::Auditor,
        &[
            "organizations:read",
            "permits:read",
            "audits:create", "audits:read", "audits:update",
            "caps:create", "caps:read",
            "grievances:read",
            "training:read",
            "committees:read",
            "meetings:read",
            "documents:read",
            "reports:create", "reports:read",
        ],
    ),
    (
        Role::CommitteeMember,
        &[
            "grievances:create", "grievances:read", "grievances:update",
            "training:read",
            "committees:read",
            "meetings:create", "meetings:read", "meetings:update",
            "documents:read",
            "reports:read",
        ],
    ),
    (
        Role::Worker,
        &[
            "grievances:create", "grievances:read",
            "training:read",
            "meetings:read",
            "documents:read",
        ],
    ),
];

const EVERYONE: &[Role] = &Role::ALL;

/// Roles allowed to open each module.
pub const MODULE_ACCESS: &[(&str, &[Role])] = &[
    ("dashboard", EVERYONE),
    ("users", &[Role::SuperAdmin, Role::Admin, Role::Manager]),
    ("organizations", &[Role::SuperAdmin, Role::Admin]),
    ("permits", &[Role::SuperAdmin, Role::Admin, Role::Manager, Role::Supervisor, Role::Auditor]),
    ("audits", &[Role::SuperAdmin, Role::Admin, Role::Manager, Role::Supervisor, Role::Auditor]),
    ("caps", &[Role::SuperAdmin, Role::Admin, Role::Manager, Role::Supervisor, Role::Auditor]),
    ("grievances", EVERYONE),
    ("training", EVERYONE),
    (
        "committees",
        &[Role::SuperAdmin, Role::Admin, Role::Manager, Role::Supervisor, Role::Auditor, Role::CommitteeMember],
    ),
    (
        "meetings",
        &[Role::SuperAdmin, Role::Admin, Role::Manager, Role::Supervisor, Role::CommitteeMember, Role::Worker],
    ),
    ("documents", EVERYONE),
    (
        "reports",
        &[Role::SuperAdmin, Role::Admin, Role::Manager, Role::Supervisor, Role::Auditor, Role::CommitteeMember],
    ),
    ("settings", &[Role::SuperAdmin, Role::Admin]),
];
