//! Transformation rules: declarative pairings of a file matcher with an
//! ordered handler chain, consumed as-is by the external bundler.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::bundle::helpers::{SVG_SPRITE_NAME, hashed_asset_name};
use crate::options::BuildProfile;

/// File-pattern matcher for a transformation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMatcher {
    /// Match any of the given file extensions (no leading dot)
    Extensions(Vec<String>),
    /// Match a filename suffix such as `.inline.svg`
    Suffix(String),
    /// Match an explicit list of module specifiers
    Modules(Vec<String>),
}

impl RuleMatcher {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RuleMatcher::Extensions(exts) => path
                .rsplit_once('.')
                .is_some_and(|(_, ext)| exts.iter().any(|e| e == ext)),
            RuleMatcher::Suffix(suffix) => path.ends_with(suffix.as_str()),
            RuleMatcher::Modules(modules) => modules.iter().any(|m| m == path),
        }
    }
}

/// One handler in a rule's chain, with its forwarded settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderEntry {
    pub loader: String,

    /// Handler-specific settings forwarded verbatim to the bundler
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl LoaderEntry {
    pub fn bare(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

/// A transformation rule: matcher, exclusions, handler chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: RuleMatcher,

    /// Path fragments excluded from the match
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Handlers applied in order
    #[serde(rename = "use")]
    pub handlers: Vec<LoaderEntry>,
}

impl ModuleRule {
    pub fn applies_to(&self, path: &str) -> bool {
        self.test.matches(path) && !self.exclude.iter().any(|fragment| path.contains(fragment))
    }
}

/// Script transpilation. The optimization transforms only make sense for
/// pre-built assets, so they are appended under the build flag.
pub(crate) fn script_rule(profile: &BuildProfile) -> ModuleRule {
    let mut plugins = vec![
        // Replaces a global polyfill
        "transform-runtime".to_string(),
        // Needed for dynamic import() on the server
        "dynamic-import-node".to_string(),
    ];
    if profile.build {
        plugins.push("transform-react-remove-prop-types".to_string());
        plugins.push("transform-react-constant-elements".to_string());
        plugins.push("transform-react-inline-elements".to_string());
    }

    ModuleRule {
        test: RuleMatcher::Extensions(vec!["js".to_string(), "jsx".to_string()]),
        exclude: vec!["node_modules".to_string()],
        handlers: vec![LoaderEntry::with_options(
            "babel-loader",
            json!({
                "cacheDirectory": true,
                "presets": ["es2015", "stage-3", "react"],
                "plugins": plugins,
            }),
        )],
    }
}

/// Sprite SVGs are collected into one external file. Inline SVGs and SVG
/// fonts go through their own rules instead.
pub(crate) fn sprite_svg_rule() -> ModuleRule {
    ModuleRule {
        test: RuleMatcher::Extensions(vec!["svg".to_string()]),
        exclude: vec![
            ".inline.svg".to_string(),
            "src/shared/media/fonts".to_string(),
        ],
        handlers: vec![
            LoaderEntry::with_options(
                "external-svg-sprite-loader",
                json!({
                    "name": SVG_SPRITE_NAME,
                    "prefix": "svg",
                }),
            ),
            LoaderEntry::with_options("svg-css-modules-loader", json!({ "transformId": true })),
        ],
    }
}

/// Inline SVGs for the cases the external sprite cannot cover.
pub(crate) fn inline_svg_rule() -> ModuleRule {
    ModuleRule {
        test: RuleMatcher::Suffix(".inline.svg".to_string()),
        exclude: vec![],
        handlers: vec![
            LoaderEntry::bare("raw-loader"),
            LoaderEntry::with_options(
                "svgo-loader",
                json!({
                    "plugins": [
                        { "removeTitle": true },
                        { "removeDimensions": true },
                    ],
                }),
            ),
            LoaderEntry::with_options("svg-css-modules-loader", json!({ "transformId": true })),
        ],
    }
}

/// Static assets resolve to hashed URLs but are never emitted by the server
/// bundle; the client build owns the files themselves.
fn file_rule(extensions: &[&str], dir: &str) -> ModuleRule {
    ModuleRule {
        test: RuleMatcher::Extensions(extensions.iter().map(|e| e.to_string()).collect()),
        exclude: vec![],
        handlers: vec![LoaderEntry::with_options(
            "file-loader",
            json!({
                "emitFile": false,
                "name": hashed_asset_name(dir),
            }),
        )],
    }
}

pub(crate) fn raster_image_rule() -> ModuleRule {
    file_rule(&["png", "jpg", "jpeg", "gif"], "images")
}

pub(crate) fn video_rule() -> ModuleRule {
    file_rule(&["mp4", "webm", "ogg", "ogv"], "videos")
}

pub(crate) fn font_rule() -> ModuleRule {
    file_rule(&["eot", "ttf", "woff", "woff2"], "fonts")
}

/// Modules that do not work server-side or are unnecessary for rendering.
/// Empty by default; projects append specifiers as they find offenders.
pub(crate) fn server_skip_rule() -> ModuleRule {
    ModuleRule {
        test: RuleMatcher::Modules(vec![]),
        exclude: vec![],
        handlers: vec![LoaderEntry::bare("skip-loader")],
    }
}
