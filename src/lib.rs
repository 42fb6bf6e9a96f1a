#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Compliance-Access is the role-based authorization engine behind the
//! compliance dashboard (permits, CAPs, grievances, training, audits, documents).
//!
//! It answers three questions for a `{id, role}` user: does the role hold a
//! `resource:action` permission, may it open a functional module, and may it
//! edit another user given the role hierarchy. Every answer is computed from
//! immutable tables and fails closed on anything it does not recognize.
//!
//! ```
//! use compliance_access::{create_access_control, Principal, Role};
//!
//! let manager = Principal::with_role("u-17", Role::Manager);
//! let access = create_access_control(Some(&manager));
//! assert!(access.can_access_module("permits"));
//! assert!(!access.can_manage_settings());
//! ```

// Module for shared data types (Role, Action, RoleInfo).
pub mod types;

// Resource/module vocabulary and the `resource:action` format.
pub mod permission;

// Identity seam between the engine and the user records it is handed.
pub mod subject;

// Module for the immutable access tables and their JSON form.
pub mod policy;

// Module for error types.
pub mod error;

// Module for the query engine.
pub mod engine;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use engine::{create_access_control, AccessControl, AccessControlEngine};
pub use error::{AccessError, PolicyError};
pub use policy::{AccessPolicy, PolicyDocument};
pub use subject::{Principal, Subject};
pub use types::{Action, Role, RoleInfo};
