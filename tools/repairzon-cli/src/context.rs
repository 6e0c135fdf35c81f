//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use repairzon_commerce::catalog::Catalog;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// The catalog every command reads from.
    pub catalog: Catalog,
    /// Where the catalog was loaded from, for diagnostics.
    pub catalog_source: String,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path.to_string_lossy())?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let (catalog, catalog_source) = match config.catalog.path {
            Some(ref path) => {
                let resolved = resolve_path(&cwd, path);
                let catalog = Catalog::load(&resolved)
                    .with_context(|| format!("Failed to load catalog: {}", resolved.display()))?;
                (catalog, resolved.display().to_string())
            }
            None => (Catalog::demo(), "built-in demo".to_string()),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog,
            catalog_source,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if PathBuf::from(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
