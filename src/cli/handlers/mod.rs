mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookqlConfig;
use crate::graphql::{BookqlSchema, build_schema};
use crate::storage::EntityStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers except `init`
pub struct CommandContext {
    pub config: BookqlConfig,
    pub root: PathBuf,
}

impl CommandContext {
    /// Loads `config_path` if given, otherwise searches upward from the
    /// working directory and falls back to defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => BookqlConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir()?;
                BookqlConfig::discover(&cwd).context("Failed to load config")?
            }
        };
        Ok(Self { config, root })
    }

    /// Opens the store the config describes and builds a schema over it.
    pub fn schema(&self) -> Result<BookqlSchema> {
        let store = EntityStore::open(&self.config, &self.root)
            .context("Failed to open entity store")?;
        Ok(build_schema(store.into_shared()))
    }
}
