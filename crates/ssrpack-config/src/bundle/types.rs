use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How the emitted bundle exposes its exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// Assign exports onto `this` (what the server renderer expects)
    #[default]
    This,
    /// CommonJS module exports
    #[serde(rename = "commonjs2")]
    CommonJs,
    /// Global variable assignment
    Var,
}

/// Value substituted for `process.env.NODE_ENV` in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeEnv {
    Development,
    Production,
}

impl NodeEnv {
    /// Built assets advertise production; everything else is development.
    pub fn from_build(build: bool) -> Self {
        if build { NodeEnv::Production } else { NodeEnv::Development }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeEnv::Development => "development",
            NodeEnv::Production => "production",
        }
    }
}

/// Output descriptor handed to the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Directory the bundle is written to
    pub path: String,

    /// Base URL assets are referenced from; always ends with a single `/`
    pub public_path: String,

    /// Filename template for emitted chunks
    pub filename: String,

    /// Export style of the emitted bundle
    pub library_target: LibraryTarget,
}

/// Module resolution settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Import aliases (e.g., "shared" → "./src/shared"); order is preserved
    /// for deterministic output
    #[serde(default)]
    pub alias: IndexMap<String, String>,
}
