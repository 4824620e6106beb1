//! Lodestar - permission-aware navigation for RBAC management consoles
//!
//! Decides which declared routes a principal can reach, resolves request paths
//! to access decisions, and drives breadcrumb navigation over a workspace
//! hierarchy rebuilt from flat listing snapshots. Everything here is a pure,
//! synchronous evaluation over inputs the caller has already fetched.

pub mod authz;
pub mod errors;
pub mod hierarchy;
pub mod logging;
pub mod routes;
pub mod settings;

pub use authz::{satisfies, PermissionString, Principal};
pub use errors::NavError;
pub use hierarchy::{BreadcrumbNavigator, HierarchyNode, NodeKind, TreeIndex};
pub use routes::resolver::{reachable_routes, resolve, AccessDecision, Outcome};
pub use routes::{RouteAccess, RouteNode, RouteTree};
