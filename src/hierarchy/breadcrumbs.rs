use crate::hierarchy::{HierarchyNode, TreeIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: String,
    pub name: String,
}

impl From<&HierarchyNode> for Breadcrumb {
    fn from(node: &HierarchyNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
        }
    }
}

/// Result of re-validating the trail against a fresh snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Unchanged,
    /// Names or intermediate steps changed; the current workspace is the same.
    Refreshed,
    /// The current workspace (or one above it) vanished.
    ResetToRoot,
}

/// Stack of visited workspaces.
///
/// The current parent is always the last breadcrumb, or the root when the stack
/// is empty. `None` from [`effective_parent_id`](Self::effective_parent_id)
/// means there is no root to fall back to. Page and selection indexes belong to
/// the caller, which should reset them whenever the position changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreadcrumbNavigator {
    stack: Vec<Breadcrumb>,
    root_id: Option<String>,
}

impl BreadcrumbNavigator {
    pub fn new(root_id: Option<String>) -> Self {
        Self {
            stack: Vec::new(),
            root_id,
        }
    }

    pub fn for_index(index: &TreeIndex) -> Self {
        Self::new(index.root().map(|r| r.id.clone()))
    }

    pub fn effective_parent_id(&self) -> Option<&str> {
        self.stack
            .last()
            .map(|b| b.id.as_str())
            .or(self.root_id.as_deref())
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn drill_into(&mut self, node: &HierarchyNode) {
        self.stack.push(Breadcrumb::from(node));
    }

    /// Pop one level. No-op at the root.
    pub fn go_back(&mut self) -> Option<Breadcrumb> {
        self.stack.pop()
    }

    pub fn go_to_root(&mut self) {
        self.stack.clear();
    }

    /// Children of the current position, in display order.
    pub fn children<'i>(&self, index: &'i TreeIndex) -> Vec<&'i HierarchyNode> {
        match self.effective_parent_id() {
            Some(parent) => index.children_of(parent),
            None => Vec::new(),
        }
    }

    /// Replace the trail with the path from the root to `id` (deep links).
    ///
    /// Returns `false` and leaves the state alone when `id` is not reachable from the root.
    pub fn jump_to(&mut self, index: &TreeIndex, id: &str) -> bool {
        let Some(chain) = index.ancestors(id) else {
            return false;
        };
        self.root_id = index.root().map(|r| r.id.clone());
        self.stack = chain.into_iter().map(Breadcrumb::from).collect();
        true
    }

    /// Re-check the trail after the snapshot behind `index` was refreshed.
    pub fn reconcile(&mut self, index: &TreeIndex) -> ReconcileOutcome {
        self.root_id = index.root().map(|r| r.id.clone());

        let Some(current) = self.stack.last() else {
            return ReconcileOutcome::Unchanged;
        };

        match index.ancestors(&current.id) {
            None => {
                tracing::debug!(id = %current.id, "current workspace vanished, returning to root");
                self.go_to_root();
                ReconcileOutcome::ResetToRoot
            }
            Some(chain) => {
                let fresh: Vec<Breadcrumb> = chain.into_iter().map(Breadcrumb::from).collect();
                if fresh == self.stack {
                    ReconcileOutcome::Unchanged
                } else {
                    self.stack = fresh;
                    ReconcileOutcome::Refreshed
                }
            }
        }
    }
}
