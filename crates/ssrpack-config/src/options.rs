//! Build request normalization.
//!
//! A [`BundleRequest`] is the partial options record callers hand us; it is
//! resolved into a fully-populated [`BuildProfile`] before any configuration
//! is assembled. Defaulting depends on the target environment, so `build`
//! and `minify` stay tristate (`None` = unspecified) until resolution.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Name of the development environment. It is the only environment allowed
/// to serve assets on the fly instead of pre-building them.
pub const DEV_ENV: &str = "dev";

/// Partial build request.
///
/// `None` for `build` or `minify` means "not specified" and picks an
/// environment-dependent default. That is not the same as an explicit
/// `Some(false)`, which is validated against the cross-field invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRequest {
    /// Target environment (defaults to [`DEV_ENV`])
    #[serde(default)]
    pub env: Option<String>,

    /// Whether assets are produced in pre-built form
    #[serde(default)]
    pub build: Option<bool>,

    /// Whether output is size-optimized; only meaningful when building
    #[serde(default)]
    pub minify: Option<bool>,
}

impl BundleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    pub fn with_build(mut self, build: bool) -> Self {
        self.build = Some(build);
        self
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = Some(minify);
        self
    }

    /// Fill in defaults, then check the cross-field invariants.
    ///
    /// Outside `dev` both flags default to enabled. Invariants are checked
    /// in a fixed order so the reported error is deterministic:
    ///
    /// 1. Every non-dev environment must produce built assets.
    /// 2. Minification requires built assets.
    ///
    /// # Example
    ///
    /// ```
    /// use ssrpack_config::BundleRequest;
    ///
    /// let profile = BundleRequest::new().with_env("production").resolve().unwrap();
    /// assert!(profile.build);
    /// assert!(profile.minify);
    /// ```
    pub fn resolve(&self) -> Result<BuildProfile> {
        let env = self.env.clone().unwrap_or_else(|| DEV_ENV.to_string());
        let build = self.build.unwrap_or(env != DEV_ENV);
        let minify = self.minify.unwrap_or(env != DEV_ENV);

        if env != DEV_ENV && !build {
            return Err(ConfigError::BuildRequired { env });
        }
        if !build && minify {
            return Err(ConfigError::MinifyWithoutBuild { env });
        }

        Ok(BuildProfile { env, build, minify })
    }
}

/// Fully-resolved build flags.
///
/// Construction goes through [`BundleRequest::resolve`], so a profile always
/// satisfies both invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProfile {
    pub env: String,
    pub build: bool,
    pub minify: bool,
}

impl BuildProfile {
    pub fn is_dev(&self) -> bool {
        self.env == DEV_ENV
    }
}
