//! User-adjustable look of the panel: theme, size preset and transparency.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MonitorError;

pub const MIN_TRANSPARENCY: u8 = 30;
pub const MAX_TRANSPARENCY: u8 = 100;
pub const DEFAULT_TRANSPARENCY: u8 = 92;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

impl FromStr for Theme {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(MonitorError::config(format!(
                "Unknown theme '{}' (expected dark or light)",
                other
            ))),
        }
    }
}

/// Panel geometry for one size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub width: u16,
    pub height: u16,
    pub font_size: u8,
    pub bar_height: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizePreset {
    pub fn geometry(self) -> PanelGeometry {
        match self {
            SizePreset::Small => PanelGeometry {
                width: 380,
                height: 240,
                font_size: 9,
                bar_height: 10,
            },
            SizePreset::Medium => PanelGeometry {
                width: 460,
                height: 300,
                font_size: 10,
                bar_height: 12,
            },
            SizePreset::Large => PanelGeometry {
                width: 540,
                height: 350,
                font_size: 11,
                bar_height: 14,
            },
        }
    }

    pub fn next(self) -> Self {
        match self {
            SizePreset::Small => SizePreset::Medium,
            SizePreset::Medium => SizePreset::Large,
            SizePreset::Large => SizePreset::Small,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SizePreset::Small => SizePreset::Large,
            SizePreset::Medium => SizePreset::Small,
            SizePreset::Large => SizePreset::Medium,
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizePreset::Small => write!(f, "Small"),
            SizePreset::Medium => write!(f, "Medium"),
            SizePreset::Large => write!(f, "Large"),
        }
    }
}

impl FromStr for SizePreset {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(SizePreset::Small),
            "medium" => Ok(SizePreset::Medium),
            "large" => Ok(SizePreset::Large),
            other => Err(MonitorError::config(format!(
                "Unknown size '{}' (expected small, medium or large)",
                other
            ))),
        }
    }
}

/// Current appearance settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub theme: Theme,
    pub size: SizePreset,
    transparency: u8,
}

impl Appearance {
    pub fn new(theme: Theme, size: SizePreset, transparency: u8) -> Self {
        Self {
            theme,
            size,
            transparency: clamp_transparency(transparency as i32),
        }
    }

    /// Opacity in percent, always within 30..=100
    pub fn transparency(&self) -> u8 {
        self.transparency
    }

    pub fn set_transparency(&mut self, percent: i32) {
        self.transparency = clamp_transparency(percent);
    }

    pub fn adjust_transparency(&mut self, delta: i32) {
        self.set_transparency(self.transparency as i32 + delta);
    }

    pub fn opacity(&self) -> f32 {
        self.transparency as f32 / 100.0
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(Theme::default(), SizePreset::default(), DEFAULT_TRANSPARENCY)
    }
}

fn clamp_transparency(percent: i32) -> u8 {
    percent.clamp(MIN_TRANSPARENCY as i32, MAX_TRANSPARENCY as i32) as u8
}
