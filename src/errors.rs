use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while loading route declarations or workspace snapshots.
///
/// Evaluation (matching, resolving, indexing, slicing) never fails; these only
/// surface at the edges where external input is parsed.
#[derive(Debug, Error, Diagnostic)]
pub enum NavError {
    #[error("Failed to load route declarations `{path}`")]
    #[diagnostic(
        code(lodestar::routes::load),
        help("Check that the file exists and contains valid KDL syntax")
    )]
    RouteLoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid route: {0}")]
    #[diagnostic(
        code(lodestar::routes::invalid_route),
        help("Route syntax: route \"<id>\" path=\"<pattern>\" [permission=\"app:resource:op\" | access=\"public\"] {{ ...children }}")
    )]
    InvalidRoute(String),

    #[error("Invalid path pattern: {0}")]
    #[diagnostic(
        code(lodestar::routes::invalid_pattern),
        help("Patterns are `/`-separated literals or `:param` placeholders; `*` is only allowed as the last segment")
    )]
    InvalidPattern(String),

    #[error("Invalid permission `{0}`")]
    #[diagnostic(
        code(lodestar::authz::invalid_permission),
        help("Permissions have exactly three non-empty segments, e.g. `rbac:groups:write` or `rbac:*:*`")
    )]
    InvalidPermission(String),

    #[error("Duplicate route id `{0}`")]
    #[diagnostic(
        code(lodestar::routes::duplicate_id),
        help("Route ids must be unique across every declaration file")
    )]
    DuplicateRouteId(String),

    #[error("KDL parse error: {0}")]
    #[diagnostic(
        code(lodestar::routes::kdl_parse),
        help("Check your KDL file syntax; see https://kdl.dev for the specification")
    )]
    KdlParse(String),

    #[error("Invalid workspace snapshot: {0}")]
    #[diagnostic(
        code(lodestar::hierarchy::snapshot),
        help("Expected a JSON array of {{\"id\", \"name\", \"parent_id\", \"type\"}} objects, optionally wrapped in {{\"data\": [...]}}")
    )]
    Snapshot(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(lodestar::io))]
    Io(#[from] std::io::Error),
}
