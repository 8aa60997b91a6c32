// Helper defaults and normalization

/// Strip any run of trailing slashes and append exactly one, so the public
/// path always ends with a single `/` regardless of how the environment
/// config spells it.
pub(crate) fn normalize_public_path(raw: &str) -> String {
    format!("{}/", raw.trim_end_matches('/'))
}

pub(crate) const ENTRY_FILENAME: &str = "[name].js";

pub(crate) const SVG_SPRITE_NAME: &str = "images/svg-sprite.[hash:15].svg";

pub(crate) const STYLESHEET_NAME: &str = "app.[contenthash:15].css";

pub(crate) fn hashed_asset_name(dir: &str) -> String {
    format!("{dir}/[name].[hash:15].[ext]")
}
