use std::collections::BTreeMap;

use crate::authz::{satisfies_parsed, PermissionString, Principal};
use crate::routes::pattern::split_path;
use crate::routes::{full_pattern, RouteAccess, RouteNode, RouteTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allow,
    Unauthorized,
    NotFound,
}

/// The route chain a path resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Id of the deepest matched route.
    pub route_id: String,
    /// Ids from the top-level route down to `route_id`.
    pub chain: Vec<String>,
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    pub outcome: Outcome,
    pub matched: Option<RouteMatch>,
    /// `None` for public routes and for unmatched paths.
    pub effective_permission: Option<PermissionString>,
}

impl AccessDecision {
    fn not_found() -> Self {
        Self {
            outcome: Outcome::NotFound,
            matched: None,
            effective_permission: None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.outcome == Outcome::Allow
    }
}

/// A declared route the principal may navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachableRoute {
    pub id: String,
    /// Absolute pattern, e.g. `/iam/user-access/users/:username`
    pub path: String,
    pub effective_permission: Option<PermissionString>,
}

/// Resolve `path` against `tree` for `principal`.
///
/// Unmatched paths are `NotFound` for everyone, org admins included. Matched
/// routes are allowed for org admins, for public routes, and when a grant
/// covers the effective permission.
pub fn resolve(tree: &RouteTree, path: &str, principal: &Principal) -> AccessDecision {
    let segments = split_path(path);
    let mut chain = Vec::new();
    let mut params = BTreeMap::new();

    if !find_match(tree.routes(), &segments, &mut chain, &mut params) {
        tracing::debug!(path, "no route matches path");
        return AccessDecision::not_found();
    }

    let effective = effective_permission(&chain).cloned();
    let outcome = decide(effective.as_ref(), principal);
    let chain_ids: Vec<String> = chain.iter().map(|n| n.id.clone()).collect();

    AccessDecision {
        outcome,
        matched: Some(RouteMatch {
            route_id: chain_ids.last().cloned().unwrap_or_default(),
            chain: chain_ids,
            params,
        }),
        effective_permission: effective,
    }
}

/// Nearest declared requirement walking up from the last node of `chain`.
///
/// `Public` stops the walk, `Inherit` defers to the parent, and a chain with no
/// declaration at all is public.
pub fn effective_permission<'t>(chain: &[&'t RouteNode]) -> Option<&'t PermissionString> {
    for node in chain.iter().rev() {
        match &node.access {
            RouteAccess::Require(permission) => return Some(permission),
            RouteAccess::Public => return None,
            RouteAccess::Inherit => {}
        }
    }
    None
}

/// Every declared route whose resolution would be `Allow`, in declaration order.
pub fn reachable_routes(tree: &RouteTree, principal: &Principal) -> Vec<ReachableRoute> {
    let mut reachable = Vec::new();
    let mut chain = Vec::new();
    collect_reachable(tree.routes(), principal, &mut chain, &mut reachable);
    reachable
}

fn collect_reachable<'t>(
    nodes: &'t [RouteNode],
    principal: &Principal,
    chain: &mut Vec<&'t RouteNode>,
    out: &mut Vec<ReachableRoute>,
) {
    for node in nodes {
        chain.push(node);
        let effective = effective_permission(chain);
        if decide(effective, principal) == Outcome::Allow {
            out.push(ReachableRoute {
                id: node.id.clone(),
                path: full_pattern(chain),
                effective_permission: effective.cloned(),
            });
        }
        collect_reachable(&node.children, principal, chain, out);
        chain.pop();
    }
}

fn decide(effective: Option<&PermissionString>, principal: &Principal) -> Outcome {
    if principal.is_org_admin {
        return Outcome::Allow;
    }
    match effective {
        None => Outcome::Allow,
        Some(permission) if satisfies_parsed(permission, &principal.grants) => Outcome::Allow,
        Some(_) => Outcome::Unauthorized,
    }
}

/// Depth-first search in declaration order; the first full match wins.
fn find_match<'t>(
    nodes: &'t [RouteNode],
    segments: &[&str],
    chain: &mut Vec<&'t RouteNode>,
    params: &mut BTreeMap<String, String>,
) -> bool {
    for node in nodes {
        let mut bound = BTreeMap::new();
        let Some(consumed) = node.pattern.match_prefix(segments, &mut bound) else {
            continue;
        };

        chain.push(node);
        let rest = &segments[consumed..];
        if rest.is_empty() || find_match(&node.children, rest, chain, params) {
            params.extend(bound);
            return true;
        }
        chain.pop();
    }
    false
}
