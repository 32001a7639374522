//! Marker appearance configuration – read from a TOML file.
//!
//! Every field has a default, so a partial file (or no file at all) yields
//! the stock wall appearance.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Appearance settings for the built-in wall renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Fixed frame every marker header refers to.
    #[serde(default = "default_frame_id")]
    pub frame_id: String,

    /// Wall cube extent as `[thickness, width, height]` in metres.
    #[serde(default = "default_wall_scale")]
    pub wall_scale: [f64; 3],

    /// Height the wall centre is raised above the pose.
    #[serde(default = "default_wall_height_offset")]
    pub wall_height_offset: f64,

    /// Wall transparency.
    #[serde(default = "default_wall_alpha")]
    pub wall_alpha: f32,

    /// Font height of the label.
    #[serde(default = "default_text_size")]
    pub text_size: f64,

    /// Height the label is raised above the pose.
    #[serde(default = "default_text_height_offset")]
    pub text_height_offset: f64,
}

fn default_frame_id() -> String {
    "map".to_string()
}
fn default_wall_scale() -> [f64; 3] {
    [0.1, 5.0, 2.0]
}
fn default_wall_height_offset() -> f64 {
    1.0
}
fn default_wall_alpha() -> f32 {
    0.5
}
fn default_text_size() -> f64 {
    1.0
}
fn default_text_height_offset() -> f64 {
    2.0
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            frame_id: default_frame_id(),
            wall_scale: default_wall_scale(),
            wall_height_offset: default_wall_height_offset(),
            wall_alpha: default_wall_alpha(),
            text_size: default_text_size(),
            text_height_offset: default_text_height_offset(),
        }
    }
}

impl MarkerConfig {
    /// Parse a config from TOML text.  Env overrides are not applied.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// Load the config from `path`.  Returns `None` if the file does not exist.
pub fn load_from(path: &Path) -> Result<Option<MarkerConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut cfg = MarkerConfig::from_toml_str(&raw)?;
    apply_env_overrides(&mut cfg);
    Ok(Some(cfg))
}

/// Apply `WALLVIZ_*` environment variable overrides to `cfg`.
///
/// | Variable | Config field |
/// |---|---|
/// | `WALLVIZ_FRAME_ID` | `frame_id` |
/// | `WALLVIZ_WALL_ALPHA` | `wall_alpha` (ignored unless it parses as a number in `[0, 1]`) |
pub fn apply_env_overrides(cfg: &mut MarkerConfig) {
    if let Ok(v) = std::env::var("WALLVIZ_FRAME_ID")
        && !v.is_empty()
    {
        cfg.frame_id = v;
    }
    if let Ok(v) = std::env::var("WALLVIZ_WALL_ALPHA")
        && let Ok(alpha) = v.parse::<f32>()
        && (0.0..=1.0).contains(&alpha)
    {
        cfg.wall_alpha = alpha;
    }
}
