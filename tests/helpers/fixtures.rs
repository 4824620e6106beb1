use std::path::{Path, PathBuf};

/// Route declarations shaped like the console's user-access and workspaces sections.
pub const CONSOLE_ROUTES: &str = r#"
route "user-access" path="/iam/user-access" permission="rbac:principal:read" {
    route "overview" path="overview" access="public"
    route "users" path="users" {
        route "user-detail" path=":username"
        route "add-user-to-group" path=":username/add-to-group" permission="rbac:group:write"
    }
    route "groups" path="groups" permission="rbac:group:read" {
        route "group-detail" path=":groupId" {
            route "group-members" path="members"
            route "edit-group" path="edit" permission="rbac:group:write"
        }
    }
    route "roles" path="roles" permission="rbac:role:read"
}
"#;

pub const WORKSPACE_ROUTES: &str = r#"
route "workspaces" path="/iam/access-management/workspaces" permission="inventory:groups:read" {
    route "workspace-detail" path=":workspaceId"
}
route "help" path="/help/*" access="public"
"#;

/// A listing response from the workspaces endpoint.
pub const WORKSPACE_LISTING: &str = r#"{
    "meta": {"count": 7},
    "data": [
        {"id": "root", "name": "Root Workspace", "parent_id": null, "type": "root"},
        {"id": "eng", "name": "engineering", "parent_id": "root", "type": "standard"},
        {"id": "default", "name": "Default Workspace", "parent_id": "root", "type": "default"},
        {"id": "ungrouped", "name": "Ungrouped Hosts", "parent_id": "default", "type": "ungrouped-hosts"},
        {"id": "fin", "name": "Finance", "parent_id": "root", "type": "standard"},
        {"id": "eng-web", "name": "Web", "parent_id": "eng", "type": "standard"},
        {"id": "eng-db", "name": "Databases", "parent_id": "eng", "type": "standard"}
    ]
}"#;

/// Write the console route declarations as two files under `dir/routes`.
pub fn write_console_routes(dir: &Path) -> PathBuf {
    let routes = dir.join("routes");
    std::fs::create_dir_all(&routes).expect("Failed to create routes dir");
    std::fs::write(routes.join("10_user_access.kdl"), CONSOLE_ROUTES)
        .expect("Failed to write route file");
    std::fs::write(routes.join("20_workspaces.kdl"), WORKSPACE_ROUTES)
        .expect("Failed to write route file");
    routes
}
