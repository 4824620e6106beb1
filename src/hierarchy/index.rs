use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::errors::NavError;
use crate::hierarchy::{HierarchyNode, NodeKind};

/// Parent/child index over one hierarchy snapshot.
///
/// Built once per snapshot and never mutated; rebuild it when the snapshot
/// changes. Nodes live in an arena and the maps hold arena positions. Child
/// lists are kept in display order: default-kind first, then case-insensitive
/// name, ties in snapshot order.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    nodes: Vec<HierarchyNode>,
    by_id: HashMap<String, usize>,
    children_by_parent: HashMap<String, Vec<usize>>,
    root: Option<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Bare(Vec<HierarchyNode>),
    Wrapped { data: Vec<HierarchyNode> },
}

impl TreeIndex {
    /// Index a flat snapshot.
    ///
    /// A snapshot without a root-kind node yields an empty index. The first
    /// root and the first occurrence of each id win; later ones are logged.
    pub fn build(snapshot: impl IntoIterator<Item = HierarchyNode>) -> Self {
        let mut index = Self::default();

        for node in snapshot {
            if index.by_id.contains_key(&node.id) {
                tracing::warn!(id = %node.id, "skipping duplicate workspace id in snapshot");
                continue;
            }
            let pos = index.nodes.len();

            if node.kind == NodeKind::Root {
                if index.root.is_none() {
                    index.root = Some(pos);
                } else {
                    tracing::warn!(id = %node.id, "snapshot has more than one root workspace, keeping the first");
                }
            }
            if let Some(parent) = &node.parent_id {
                if index.root != Some(pos) {
                    index
                        .children_by_parent
                        .entry(parent.clone())
                        .or_default()
                        .push(pos);
                }
            }

            index.by_id.insert(node.id.clone(), pos);
            index.nodes.push(node);
        }

        if index.root.is_none() {
            if !index.nodes.is_empty() {
                tracing::warn!(
                    nodes = index.nodes.len(),
                    "snapshot has no root workspace, treating hierarchy as empty"
                );
            }
            return Self::default();
        }

        let nodes = &index.nodes;
        for children in index.children_by_parent.values_mut() {
            children.sort_by_cached_key(|&pos| {
                let node = &nodes[pos];
                (node.kind != NodeKind::Default, node.name.to_lowercase())
            });
        }

        index
    }

    /// Index a raw JSON listing: either a bare array or `{"data": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let nodes = match snapshot {
            Snapshot::Bare(nodes) => nodes,
            Snapshot::Wrapped { data } => data,
        };
        Ok(Self::build(nodes))
    }

    pub fn root(&self) -> Option<&HierarchyNode> {
        self.root.map(|pos| &self.nodes[pos])
    }

    pub fn get(&self, id: &str) -> Option<&HierarchyNode> {
        self.by_id.get(id).map(|&pos| &self.nodes[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of `id` in display order; empty for unknown ids.
    pub fn children_of(&self, id: &str) -> Vec<&HierarchyNode> {
        self.children_by_parent
            .get(id)
            .map(|children| children.iter().map(|&pos| &self.nodes[pos]).collect())
            .unwrap_or_default()
    }

    pub fn child_count(&self, id: &str) -> usize {
        self.children_by_parent.get(id).map_or(0, Vec::len)
    }

    /// Path from just below the root down to `id`, inclusive.
    ///
    /// `Some(vec![])` for the root itself. `None` when `id` is unknown or its
    /// parent chain does not reach the root (orphaned or cyclic). A cycle is
    /// detected by revisiting a node, so depth itself is unbounded.
    pub fn ancestors(&self, id: &str) -> Option<Vec<&HierarchyNode>> {
        let root = self.root()?;
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.get(id)?;

        while current.id != root.id {
            if !visited.insert(current.id.as_str()) {
                return None;
            }
            chain.push(current);
            current = self.get(current.parent_id.as_deref()?)?;
        }

        chain.reverse();
        Some(chain)
    }
}
