//! Render configuration.
//!
//! Loads configuration from JSON strings (file IO left to the app).

use serde::{Deserialize, Serialize};

/// Display mode for the mesh, dispatched once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    Points,
    Wireframe,
    /// A mode string the renderer does not know. Kept rather than
    /// rejected: the loop reports it every frame and draws nothing.
    Unsupported(String),
}

impl DisplayMode {
    pub fn parse(s: &str) -> Self {
        match s {
            "points" => Self::Points,
            "wireframe" => Self::Wireframe,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

/// Root render configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Display mode string, `points` or `wireframe`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Frame rate target for the render loop.
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_mode() -> String {
    "wireframe".to_string()
}

fn default_target_fps() -> u32 {
    60
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            mode: default_mode(),
            target_fps: default_target_fps(),
        }
    }
}

impl RenderConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::parse(&self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.mode, "wireframe");
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = RenderConfig::from_json_str(r#"{"mode": "points"}"#).unwrap();
        assert_eq!(config.display_mode(), DisplayMode::Points);
        assert_eq!(config.width, 800);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_unknown_mode_is_kept() {
        assert_eq!(
            DisplayMode::parse("solid"),
            DisplayMode::Unsupported("solid".to_string())
        );
    }
}
