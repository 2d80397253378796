use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::data::loader::ParsePolicy;

/// How layers are arranged on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlotMode {
    /// All layers in one plot area, each scaled to fill it.
    #[default]
    Overlay,
    /// One bordered cell per layer, wrapped into rows.
    Collage,
}

impl PlotMode {
    pub const ALL: [PlotMode; 2] = [PlotMode::Overlay, PlotMode::Collage];

    pub fn label(&self) -> &'static str {
        match self {
            PlotMode::Overlay => "Overlay",
            PlotMode::Collage => "Collage",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File opened at start-up when none is given on the command line.
    pub data_file: Option<PathBuf>,
    pub mode: PlotMode,
    pub parse_policy: ParsePolicy,
    pub palette: Palette,
    pub window: WindowConfig,
    pub overlay: OverlayConfig,
    pub collage: CollageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Data units added around each layer's bounding box.
    pub data_padding: f64,
    pub marker_radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollageConfig {
    /// Top-left corner of the first cell, in pixels.
    pub origin: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Space between neighbouring cells.
    pub gap: f32,
    pub title_height: f32,
    /// Right and bottom inset of the data area inside a cell.
    pub data_padding: f32,
    pub marker_diameter: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            mode: PlotMode::default(),
            parse_policy: ParsePolicy::default(),
            palette: Palette::default(),
            window: WindowConfig::default(),
            overlay: OverlayConfig::default(),
            collage: CollageConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 800.0,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            data_padding: 5.0,
            marker_radius: 1.5,
        }
    }
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            origin: 10.0,
            cell_width: 400.0,
            cell_height: 300.0,
            gap: 20.0,
            title_height: 20.0,
            data_padding: 10.0,
            marker_diameter: 5.0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Get the default config path (~/.config/sonar-plot/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sonar-plot").join("config.toml"))
    }

    /// Load config from the default path if it exists.
    /// Parse errors are logged and the defaults are used instead.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("{e:#}; using defaults");
                None
            }
        }
    }
}
