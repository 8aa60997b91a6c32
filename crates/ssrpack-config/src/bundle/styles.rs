//! Stylesheet rule.
//!
//! Built assets ship their stylesheets from the client build, so the server
//! bundle skips CSS entirely when `build` is on. Otherwise styles go through
//! an extraction pipeline ending in the post-processor chain.

use serde_json::{Value, json};

use crate::bundle::rules::{LoaderEntry, ModuleRule, RuleMatcher};
use crate::options::BuildProfile;

pub(crate) fn style_rule(profile: &BuildProfile) -> ModuleRule {
    let handlers = if profile.build {
        vec![LoaderEntry::bare("skip-loader")]
    } else {
        vec![
            // Fallback when extraction is not possible; URL fixing is a
            // dev-server concern only
            LoaderEntry::with_options("style-loader", json!({ "fixUrls": profile.is_dev() })),
            LoaderEntry::with_options(
                "css-loader",
                json!({
                    "sourceMap": true,
                    "importLoaders": 1,
                }),
            ),
            LoaderEntry::with_options("postcss-loader", json!({ "plugins": postcss_plugins() })),
        ]
    };

    ModuleRule {
        test: RuleMatcher::Extensions(vec!["css".to_string()]),
        exclude: vec![],
        handlers,
    }
}

/// Fixed post-processor chain, in application order.
fn postcss_plugins() -> Value {
    json!([
        // Parse @import statements; non-relative imports resolve to the
        // shared styles dir
        {
            "name": "postcss-import",
            "options": { "path": "./src/shared/styles/imports" },
        },
        { "name": "postcss-mixins" },
        // More capable than the cssnext customProperties feature, which is
        // disabled below in its favor
        { "name": "postcss-css-variables" },
        {
            "name": "postcss-cssnext",
            "options": {
                "features": {
                    "overflowWrap": true,
                    "rem": false,
                    "colorRgba": false,
                    "customProperties": false,
                    "autoprefixer": {
                        "browsers": ["last 2 versions", "IE >= 11", "android >= 4.4.4"],
                        "remove": false,
                    },
                },
            },
        },
    ])
}
