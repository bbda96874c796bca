//! Configuration loaded from `~/.config/resizable-view/config.yaml`
//!
//! Every field has a default, so a partial file (or no file) is fine:
//!
//! ```yaml
//! window:
//!   width: 1024
//!   height: 720
//! divider:
//!   thickness: 2
//!   hover_color: "#4B6EAF"
//! panels:
//!   leading: 240
//!   bottom: 160
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::theme::DividerStyleData;

/// Initial window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 720,
        }
    }
}

/// Initial size of each panel, keyed by the edge its divider sits on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSizes {
    pub leading: f32,
    pub trailing: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for PanelSizes {
    fn default() -> Self {
        Self {
            leading: 220.0,
            trailing: 250.0,
            top: 120.0,
            bottom: 180.0,
        }
    }
}

impl PanelSizes {
    pub fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Leading => self.leading,
            Edge::Trailing => self.trailing,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    pub fn set_all(&mut self, size: f32) {
        self.leading = size;
        self.trailing = size;
        self.top = size;
        self.bottom = size;
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub divider: DividerStyleData,
    pub panels: PanelSizes,
}

impl Config {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path; fails on unreadable or malformed files
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Parse config from YAML text; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
