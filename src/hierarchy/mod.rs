//! Workspace hierarchy navigation: indexing a flat parent-pointer snapshot,
//! breadcrumb drill-in/drill-out, and per-level search with pagination.

pub mod breadcrumbs;
pub mod index;
pub mod slicer;

use serde::{Deserialize, Serialize};

pub use breadcrumbs::{Breadcrumb, BreadcrumbNavigator, ReconcileOutcome};
pub use index::TreeIndex;
pub use slicer::{slice, ListQuery, Named, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// The single top of the hierarchy
    Root,
    /// Listed ahead of its siblings
    Default,
    Standard,
    UngroupedHosts,
    /// Any kind this crate does not know; listed like `Standard`
    #[serde(other)]
    Other,
}

/// One workspace as it appears in a listing snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl HierarchyNode {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<&str>,
        kind: NodeKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
            kind,
        }
    }
}
