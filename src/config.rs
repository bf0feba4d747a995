use crate::error::{BookqlError, Result};
use crate::storage::IdPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// YAML dataset to load instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,

    /// Start with no authors and no books.
    #[serde(default)]
    pub empty: bool,
}

impl BookqlConfig {
    /// Loads the config found by walking up from `start_path`, falling back
    /// to defaults rooted at `start_path` when there is none.
    pub fn discover(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load(&config_path),
            None => {
                tracing::debug!(start = %start_path.display(), "No config file found, using defaults");
                Ok((Self::default(), start_path.to_path_buf()))
            }
        }
    }

    /// Loads a config file; its directory becomes the project root.
    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: Option<BookqlConfig> = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BookqlError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config.unwrap_or_default(), project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BookqlConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.graphiql);
        assert_eq!(config.store.id_policy, IdPolicy::Length);
        assert!(config.store.seed.is_none());
        assert!(!config.store.empty);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: BookqlConfig =
            serde_yaml::from_str("store:\n  id_policy: monotonic\n").unwrap();
        assert_eq!(config.store.id_policy, IdPolicy::Monotonic);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "server:\n  port: 4100\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, root) = BookqlConfig::discover(&nested).unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "").unwrap();
        let (config, _) = BookqlConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_save_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let mut config = BookqlConfig::default();
        config.store.id_policy = IdPolicy::Monotonic;
        config.save(&path).unwrap();

        let (loaded, _) = BookqlConfig::load(&path).unwrap();
        assert_eq!(loaded.store.id_policy, IdPolicy::Monotonic);
    }
}
