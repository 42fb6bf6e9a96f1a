//!
//! Defines error types for the access-control engine.
//!
//! Queries themselves never fail: they answer `false` instead. Errors only
//! arise when loading an externally supplied policy, or when a caller opts
//! into the `require_*` checks to propagate a denial with `?`.

/// Errors raised while building or loading an `AccessPolicy`.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The policy document is not valid JSON or does not match the expected shape.
    #[error("invalid policy document: {0}")]
    Json(#[from] serde_json::Error),
    /// The policy file could not be read.
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    /// A table references a role tag outside the known role set.
    #[error("unknown role `{0}`")]
    UnknownRole(String),
    /// A permission entry is not of the form `resource:action`.
    #[error("malformed permission `{0}`, expected `resource:action`")]
    MalformedPermission(String),
    /// The `worker` role info record is missing; it is the fallback for unknown roles.
    #[error("role info table must contain the `worker` fallback record")]
    MissingFallbackRole,
}

/// A denial surfaced by the `require_*` checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// No user is attached to the query.
    #[error("no authenticated user")]
    Unauthenticated,
    /// The user's role does not hold the permission.
    #[error("permission `{permission}` denied for role `{role}`")]
    PermissionDenied { role: String, permission: String },
    /// The user's role may not open the module.
    #[error("module `{module}` denied for role `{role}`")]
    ModuleDenied { role: String, module: String },
    /// The user may not edit the target user.
    #[error("user `{actor}` may not edit user `{target}`")]
    EditDenied { actor: String, target: String },
}
