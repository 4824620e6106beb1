use lodestar::{HierarchyNode, NodeKind, Principal, TreeIndex};

/// Builder for flat workspace listing snapshots
pub struct SnapshotBuilder {
    nodes: Vec<HierarchyNode>,
}

impl SnapshotBuilder {
    pub fn with_root(id: &str) -> Self {
        Self {
            nodes: vec![HierarchyNode::new(id, "Root Workspace", None, NodeKind::Root)],
        }
    }

    pub fn workspace(mut self, id: &str, name: &str, parent: &str) -> Self {
        self.nodes
            .push(HierarchyNode::new(id, name, Some(parent), NodeKind::Standard));
        self
    }

    pub fn default_workspace(mut self, id: &str, name: &str, parent: &str) -> Self {
        self.nodes
            .push(HierarchyNode::new(id, name, Some(parent), NodeKind::Default));
        self
    }

    /// Add `count` standard workspaces named "{prefix} 00", "{prefix} 01", ...
    pub fn many(mut self, prefix: &str, count: usize, parent: &str) -> Self {
        for i in 0..count {
            let id = format!("{}-{i}", prefix.to_lowercase());
            let name = format!("{prefix} {i:02}");
            self = self.workspace(&id, &name, parent);
        }
        self
    }

    pub fn without(mut self, id: &str) -> Self {
        self.nodes.retain(|n| n.id != id);
        self
    }

    pub fn build(self) -> Vec<HierarchyNode> {
        self.nodes
    }

    pub fn index(self) -> TreeIndex {
        TreeIndex::build(self.nodes)
    }
}

/// Builder for principals
pub struct PrincipalBuilder {
    principal: Principal,
}

impl PrincipalBuilder {
    pub fn new() -> Self {
        Self {
            principal: Principal::default(),
        }
    }

    pub fn grant(mut self, permission: &str) -> Self {
        self.principal.grants.push(permission.to_string());
        self
    }

    pub fn org_admin(mut self) -> Self {
        self.principal.is_org_admin = true;
        self
    }

    pub fn build(self) -> Principal {
        self.principal
    }
}
