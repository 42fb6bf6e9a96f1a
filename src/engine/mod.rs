pub mod core;


// Re-export the primary types so `crate::engine::*` paths stay short.
pub use self::core::{create_access_control, AccessControl, AccessControlEngine};
