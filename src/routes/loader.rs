use std::path::{Path, PathBuf};

use crate::errors::NavError;
use crate::routes::declaration::parse_kdl_document;
use crate::routes::{RouteNode, RouteTree};
use crate::settings::Settings;

/// Load the route tree from the location configured in `routes.declarations`.
pub fn load_from_settings(settings: &Settings) -> Result<RouteTree, NavError> {
    load_routes(&settings.routes.declarations)
}

/// Load route declarations from a single `.kdl` file or from every `.kdl` file
/// in a directory, merged in file-name order.
pub fn load_routes(path: &Path) -> Result<RouteTree, NavError> {
    let files = if path.is_dir() {
        kdl_files_in(path)?
    } else if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        return Err(NavError::RouteLoadError {
            path: path.display().to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    };

    let mut parsed = Vec::with_capacity(files.len());
    for file in &files {
        let contents =
            std::fs::read_to_string(file).map_err(|source| NavError::RouteLoadError {
                path: file.display().to_string(),
                source,
            })?;
        parsed.push(parse_kdl_document(&contents)?);
    }

    let tree = compile_routes(parsed)?;

    tracing::info!(
        files = files.len(),
        top_level = tree.routes().len(),
        routes = tree.route_count(),
        "Loaded route declarations"
    );

    Ok(tree)
}

/// Concatenate per-file route lists in order and validate the result as one tree.
pub fn compile_routes(parsed: Vec<Vec<RouteNode>>) -> Result<RouteTree, NavError> {
    RouteTree::new(parsed.into_iter().flatten().collect())
}

fn kdl_files_in(dir: &Path) -> Result<Vec<PathBuf>, NavError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().map(|ext| ext == "kdl").unwrap_or(false))
        .collect();
    files.sort();
    Ok(files)
}
