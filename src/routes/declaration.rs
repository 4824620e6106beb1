use crate::errors::NavError;
use crate::routes::{RouteAccess, RouteNode};
use kdl::{KdlDocument, KdlNode};

/// Parse a KDL document of `route` declarations into route nodes, in declaration order.
///
/// ```kdl
/// route "user-access" path="/iam/user-access" permission="rbac:principal:read" {
///     route "users" path="users" {
///         route "user-detail" path=":username"
///     }
///     route "overview" path="overview" access="public"
/// }
/// ```
pub fn parse_kdl_document(source: &str) -> Result<Vec<RouteNode>, NavError> {
    let doc: KdlDocument = source
        .parse()
        .map_err(|e: kdl::KdlError| NavError::KdlParse(e.to_string()))?;

    let mut routes = Vec::new();
    for node in doc.nodes() {
        match node.name().value() {
            "route" => routes.push(parse_route(node)?),
            other => {
                tracing::warn!("ignoring unknown top-level KDL node `{other}`");
            }
        }
    }
    Ok(routes)
}

fn parse_route(node: &KdlNode) -> Result<RouteNode, NavError> {
    let id = first_string_arg(node).ok_or_else(|| {
        NavError::InvalidRoute(
            "route node requires an id argument (e.g. route \"users\" path=\"users\")".into(),
        )
    })?;

    let path = string_prop(node, "path").ok_or_else(|| {
        NavError::InvalidRoute(format!(
            "route `{id}` missing `path` property (e.g. path=\"users/:username\")"
        ))
    })?;

    let access = match (string_prop(node, "permission"), string_prop(node, "access")) {
        (Some(_), Some("public")) => {
            return Err(NavError::InvalidRoute(format!(
                "route `{id}` declares both `permission` and access=\"public\""
            )));
        }
        (Some(permission), None | Some("inherit")) => RouteAccess::require(permission)?,
        (None, Some("public")) => RouteAccess::Public,
        (None, None | Some("inherit")) => RouteAccess::Inherit,
        (_, Some(other)) => {
            return Err(NavError::InvalidRoute(format!(
                "route `{id}` has unknown access `{other}` (expected \"public\" or \"inherit\")"
            )));
        }
    };

    let mut route = RouteNode::new(id.clone(), path)?.with_access(access);

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "route" => route.children.push(parse_route(child)?),
                other => {
                    return Err(NavError::InvalidRoute(format!(
                        "unexpected child `{other}` in route `{id}` (expected `route`)"
                    )));
                }
            }
        }
    }

    Ok(route)
}

/// Extract the first string argument from a KDL node.
fn first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn string_prop<'n>(node: &'n KdlNode, key: &str) -> Option<&'n str> {
    node.get(key).and_then(|v| v.as_string())
}
