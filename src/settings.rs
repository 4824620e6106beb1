use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    pub routes: Routes,
    pub pagination: Pagination,
    pub logging: Logging,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routes {
    /// A `.kdl` file or a directory of them. Default: routes
    pub declarations: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Rows per page in workspace list views
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            declarations: PathBuf::from("routes"),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default(
                "routes.declarations",
                Routes::default().declarations.to_string_lossy().to_string(),
            )
            .into_diagnostic()?
            .set_default("pagination.page_size", Pagination::default().page_size as u64)
            .into_diagnostic()?
            .set_default("logging.filter", Logging::default().filter)
            .into_diagnostic()?;

        // Optional file
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment overrides: LODESTAR__PAGINATION__PAGE_SIZE=25, etc.
        builder = builder.add_source(config::Environment::with_prefix("LODESTAR").separator("__"));

        let cfg = builder.build().into_diagnostic()?;
        let mut s: Settings = cfg.try_deserialize().into_diagnostic()?;

        if s.pagination.page_size == 0 {
            return Err(miette::miette!("pagination.page_size must be at least 1"));
        }

        // Normalize declarations path to be relative to current dir
        if s.routes.declarations.is_relative() {
            s.routes.declarations = std::env::current_dir()
                .into_diagnostic()?
                .join(&s.routes.declarations);
        }

        Ok(s)
    }
}
