pub mod builders;
pub mod fixtures;

pub use builders::{PrincipalBuilder, SnapshotBuilder};
pub use fixtures::{write_console_routes, WORKSPACE_LISTING};
