pub mod declaration;
pub mod loader;
pub mod pattern;
pub mod resolver;

use std::collections::HashSet;

use crate::authz::PermissionString;
use crate::errors::NavError;
use pattern::PathPattern;

/// What a route declares about its own access requirement.
///
/// `Inherit` and `Public` are kept apart on purpose: an inheriting child of a
/// permissioned parent is permissioned, an explicitly public one is not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteAccess {
    #[default]
    Inherit,
    Public,
    Require(PermissionString),
}

impl RouteAccess {
    pub fn require(permission: &str) -> Result<Self, NavError> {
        Ok(Self::Require(PermissionString::parse(permission)?))
    }
}

/// One declared, navigable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub id: String,
    pub pattern: PathPattern,
    pub access: RouteAccess,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(id: impl Into<String>, pattern: &str) -> Result<Self, NavError> {
        Ok(Self {
            id: id.into(),
            pattern: PathPattern::parse(pattern)?,
            access: RouteAccess::Inherit,
            children: Vec::new(),
        })
    }

    pub fn with_access(mut self, access: RouteAccess) -> Self {
        self.access = access;
        self
    }

    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Immutable, validated set of top-level routes. Declaration order is the match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTree {
    routes: Vec<RouteNode>,
}

impl RouteTree {
    /// Validate and wrap route declarations.
    ///
    /// Rejects duplicate ids anywhere in the tree, a param name bound twice
    /// along one root-to-leaf chain, and children under a `*` route (they
    /// could never match).
    pub fn new(routes: Vec<RouteNode>) -> Result<Self, NavError> {
        let mut ids = HashSet::new();
        let mut params = Vec::new();
        for route in &routes {
            validate_node(route, &mut ids, &mut params)?;
        }
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    pub fn route_count(&self) -> usize {
        fn count(nodes: &[RouteNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.routes)
    }

    /// Look a route up by id, depth-first.
    pub fn find(&self, id: &str) -> Option<&RouteNode> {
        fn walk<'t>(nodes: &'t [RouteNode], id: &str) -> Option<&'t RouteNode> {
            nodes
                .iter()
                .find_map(|n| if n.id == id { Some(n) } else { walk(&n.children, id) })
        }
        walk(&self.routes, id)
    }
}

fn validate_node<'t>(
    node: &'t RouteNode,
    ids: &mut HashSet<&'t str>,
    params: &mut Vec<&'t str>,
) -> Result<(), NavError> {
    if !ids.insert(node.id.as_str()) {
        return Err(NavError::DuplicateRouteId(node.id.clone()));
    }
    if node.pattern.has_rest() && !node.children.is_empty() {
        return Err(NavError::InvalidRoute(format!(
            "route `{}` ends in `*` and cannot have children",
            node.id
        )));
    }

    let depth = params.len();
    for name in node.pattern.param_names() {
        if params.contains(&name) {
            return Err(NavError::InvalidPattern(format!(
                "parameter `{name}` in route `{}` is already bound by an ancestor",
                node.id
            )));
        }
        params.push(name);
    }
    for child in &node.children {
        validate_node(child, ids, params)?;
    }
    params.truncate(depth);
    Ok(())
}

/// Join the patterns of a root-to-node chain into one absolute pattern.
pub fn full_pattern(chain: &[&RouteNode]) -> String {
    let joined = chain
        .iter()
        .map(|n| n.pattern.as_str().trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}
