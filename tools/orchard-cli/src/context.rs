//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use orchard_commerce::Storefront;
use tracing::debug;

use crate::config::{OrchardConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: OrchardConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (OrchardConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (OrchardConfig::default(), None),
            }
        };

        match &config_path {
            Some(path) => debug!(path = %path.display(), "Loaded config"),
            None => debug!("No config file found, using built-in defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    ///
    /// The first file found wins; if it does not load, that is an error.
    fn find_config(start: &Path) -> Result<Option<(OrchardConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = OrchardConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Start a fresh shopping session.
    pub fn storefront(&self) -> Result<Storefront> {
        self.config.storefront()
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("orchard.toml"),
            "[site]\nemail = \"orders@mine.vn\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap().unwrap();

        assert_eq!(config.site.email, "orders@mine.vn");
        assert_eq!(path, dir.path().join("orchard.toml"));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("orchard.toml"),
            "[site]\nemail = \"orders@mine.vn\"\nname = \n",
        )
        .unwrap();

        let err = Context::find_config(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("orchard.toml"));
    }
}
