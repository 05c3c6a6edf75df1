//! Waymark configuration, loaded from `waymark.toml`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Generation options, loaded from `waymark.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WaymarkConfig {
    /// Append a trailing `/` to every emitted path.
    #[serde(default)]
    pub trailing_slash: bool,
    /// Directory the generated artifacts are written into.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".waymark")
}

impl Default for WaymarkConfig {
    fn default() -> Self {
        Self {
            trailing_slash: false,
            out_dir: default_out_dir(),
        }
    }
}

impl WaymarkConfig {
    /// Load from `waymark.toml` in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(Path::new("waymark.toml"))
    }

    /// Load from a specific path.
    /// Returns default config if the file doesn't exist or fails to parse.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "failed to parse config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
