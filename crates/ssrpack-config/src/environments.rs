//! Environment registry.
//!
//! The bundle configuration depends on a per-environment record (at minimum
//! the public path assets are served from). Environments are registered up
//! front and looked up by name; an unknown name is an explicit error rather
//! than a filesystem probe.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::options::DEV_ENV;

/// Per-environment settings consumed during configuration assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Base URL assets are served from. Trailing slashes are normalized
    /// away during assembly, so `/assets` and `/assets///` are equivalent.
    pub public_path: String,
}

/// Named environments, looked up by the build request's `env`.
///
/// Registration order is preserved so error messages and serialized output
/// are deterministic.
///
/// # Example
///
/// ```
/// use ssrpack_config::{EnvironmentConfig, EnvironmentRegistry};
///
/// let mut registry = EnvironmentRegistry::new();
/// registry.register("production", EnvironmentConfig {
///     public_path: "https://cdn.example.com/build".to_string(),
/// });
/// assert!(registry.get("production").is_ok());
/// assert!(registry.get("qa").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentRegistry {
    environments: IndexMap<String, EnvironmentConfig>,
}

impl EnvironmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock `dev`, `staging` and `production`
    /// environments, all serving assets from the site root.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for env in [DEV_ENV, "staging", "production"] {
            registry.register(
                env,
                EnvironmentConfig {
                    public_path: "/".to_string(),
                },
            );
        }
        registry
    }

    /// Register an environment, replacing any existing one with the same name.
    pub fn register(&mut self, name: impl Into<String>, config: EnvironmentConfig) {
        self.environments.insert(name.into(), config);
    }

    /// Look up an environment by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] naming the requested
    /// environment and the registered ones.
    pub fn get(&self, env: &str) -> Result<&EnvironmentConfig> {
        self.environments
            .get(env)
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                env: env.to_string(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered environment names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// Parse a registry from a TOML document.
    ///
    /// Each table is one environment:
    ///
    /// ```toml
    /// [dev]
    /// public_path = "/"
    ///
    /// [production]
    /// public_path = "https://cdn.example.com/build"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidRegistry(e.to_string()))
    }

    /// Load a registry from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
