//! Ordered plugin stack handed to the bundler.

use serde::{Deserialize, Serialize};

use crate::bundle::helpers::STYLESHEET_NAME;
use crate::bundle::types::NodeEnv;
use crate::options::BuildProfile;

/// A bundler plugin instance. Position in the plugin list is the order the
/// bundler applies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    /// Only emit output when no module failed
    NoEmitOnErrors,

    /// Forward debug/minimize switches to handlers that still read them
    LoaderOptions { minimize: bool, debug: bool },

    /// Compile-time constant substitution; lets minifiers drop
    /// development-only branches
    Define {
        node_env: NodeEnv,
        client: bool,
        server: bool,
    },

    /// Stable module names in output, for readable stack traces
    NamedModules,

    /// Reject imports whose casing differs from the on-disk path
    CaseSensitivePaths,

    /// Move styles into a separate stylesheet file
    ExtractText { filename: String, all_chunks: bool },

    /// Collect sprite SVGs into one external file
    SvgStore { emit: bool },
}

/// Build the plugin list for a resolved profile. Conditional plugins are
/// appended under their predicate instead of filtered out afterwards.
pub(crate) fn plugin_stack(profile: &BuildProfile) -> Vec<PluginDescriptor> {
    let mut plugins = vec![
        PluginDescriptor::NoEmitOnErrors,
        PluginDescriptor::LoaderOptions {
            minimize: profile.minify,
            debug: profile.is_dev(),
        },
        PluginDescriptor::Define {
            node_env: NodeEnv::from_build(profile.build),
            client: false,
            server: true,
        },
        PluginDescriptor::NamedModules,
        PluginDescriptor::CaseSensitivePaths,
    ];

    // When assets are pre-built the client build owns the stylesheet;
    // otherwise the server bundle extracts it itself
    if !profile.build {
        plugins.push(PluginDescriptor::ExtractText {
            filename: STYLESHEET_NAME.to_string(),
            all_chunks: true,
        });
    }

    plugins.push(PluginDescriptor::SvgStore { emit: false });
    plugins
}
