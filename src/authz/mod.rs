//! Wildcard permission matching for `application:resource:operation` grants.

pub mod engine;
pub mod types;

pub use engine::{satisfies, satisfies_all, satisfies_any, satisfies_parsed};
pub use types::{PermissionString, Principal, WILDCARD};
