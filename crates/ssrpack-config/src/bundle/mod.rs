//! Declarative server-bundle configuration.
//!
//! [`ServerBundleConfig`] is the immutable record handed to the external
//! bundler: one entry point, one output target, resolution aliases, an
//! ordered rule list and an ordered plugin stack. Assembly is a pure
//! function of a resolved [`BuildProfile`] and an environment config.

mod helpers;
mod plugins;
mod rules;
mod styles;
mod types;

pub use plugins::PluginDescriptor;
pub use rules::{LoaderEntry, ModuleRule, RuleMatcher};
pub use types::{LibraryTarget, NodeEnv, OutputOptions, ResolveOptions};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::environments::{EnvironmentConfig, EnvironmentRegistry};
use crate::error::Result;
use crate::options::{BuildProfile, BundleRequest};

/// Name of the single entry point.
pub const SERVER_ENTRY_NAME: &str = "server-renderer";

/// Module the entry point starts from.
pub const SERVER_ENTRY_MODULE: &str = "./src/server-renderer.js";

/// Directory the bundle is written to, relative to the project root.
pub const OUTPUT_DIR: &str = "web/build/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerBundleConfig {
    /// Project root all relative paths are resolved against
    pub context: String,

    /// Entry name → ordered module list
    pub entry: IndexMap<String, Vec<String>>,

    pub output: OutputOptions,

    pub resolve: ResolveOptions,

    /// Transformation rules, applied in order
    pub rules: Vec<ModuleRule>,

    /// Plugin stack, applied in order
    pub plugins: Vec<PluginDescriptor>,

    /// Source maps are never emitted; node does not consume them
    pub devtool: bool,
}

impl ServerBundleConfig {
    /// Assemble the configuration for a resolved profile.
    ///
    /// Pure and deterministic: identical inputs produce structurally
    /// identical records.
    pub fn assemble(profile: &BuildProfile, env_config: &EnvironmentConfig) -> Self {
        let mut entry = IndexMap::new();
        entry.insert(
            SERVER_ENTRY_NAME.to_string(),
            vec![SERVER_ENTRY_MODULE.to_string()],
        );

        let mut alias = IndexMap::new();
        alias.insert(
            "config".to_string(),
            format!("./config/config-{}.js", profile.env),
        );
        alias.insert("shared".to_string(), "./src/shared".to_string());

        Self {
            context: ".".to_string(),
            entry,
            output: OutputOptions {
                path: OUTPUT_DIR.to_string(),
                public_path: helpers::normalize_public_path(&env_config.public_path),
                filename: helpers::ENTRY_FILENAME.to_string(),
                library_target: LibraryTarget::This,
            },
            resolve: ResolveOptions { alias },
            rules: vec![
                rules::script_rule(profile),
                styles::style_rule(profile),
                rules::sprite_svg_rule(),
                rules::inline_svg_rule(),
                rules::raster_image_rule(),
                rules::video_rule(),
                rules::font_rule(),
                rules::server_skip_rule(),
            ],
            plugins: plugins::plugin_stack(profile),
            devtool: false,
        }
    }
}

/// Resolve a request against a registry and assemble the full configuration.
///
/// This is the single-shot entry point: defaults are applied, invariants
/// checked, the environment looked up, and the record built. Any failure
/// aborts with no partial configuration.
///
/// # Example
///
/// ```
/// use ssrpack_config::{BundleRequest, EnvironmentRegistry, build_config};
///
/// let registry = EnvironmentRegistry::builtin();
/// let config = build_config(&BundleRequest::new(), &registry).unwrap();
/// assert_eq!(config.entry["server-renderer"], vec!["./src/server-renderer.js"]);
/// ```
pub fn build_config(
    request: &BundleRequest,
    registry: &EnvironmentRegistry,
) -> Result<ServerBundleConfig> {
    let profile = request.resolve()?;
    let env_config = registry.get(&profile.env)?;
    debug!(
        env = %profile.env,
        build = profile.build,
        minify = profile.minify,
        "assembling server bundle configuration"
    );
    Ok(ServerBundleConfig::assemble(&profile, env_config))
}
