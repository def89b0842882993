// ABOUTME: Tab bar configuration handling.
// ABOUTME: Loads and saves layout and style settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Color;

/// Geometry inputs of the tab layout, in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the bar, normally the slide width
    pub total_width: f32,

    /// Height of a single-line tab
    pub base_height: f32,

    /// Top edge of the bar
    pub y: f32,

    /// Tab label font size
    pub font_size: f32,

    /// Horizontal padding on each side of a tab label
    pub padding: f32,

    /// Gap between neighbouring tabs
    pub spacing: f32,

    pub min_width: f32,

    /// Upper bound for a wrapped tab's height
    pub max_tab_height: f32,

    /// Height multiplier per wrapped line
    pub line_height_factor: f32,

    pub max_lines: u8,

    /// Estimated glyph advance as a fraction of the font size. Only read by a
    /// measure built with `CharCountMeasure::from(&config.layout)`.
    pub char_width_factor: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            total_width: 720.0,
            base_height: 14.0,
            y: 0.0,
            font_size: 8.0,
            padding: 10.0,
            spacing: 2.0,
            min_width: 50.0,
            max_tab_height: 40.0,
            line_height_factor: 1.2,
            max_lines: 2,
            char_width_factor: 0.6,
        }
    }
}

/// Colors and typography shared by every element a layout pass draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Active tab fill and separator line color
    pub accent_color: String,

    /// Bar and inactive tab fill
    pub background_color: String,

    pub active_text_color: String,

    /// Inactive tab labels and page numbers
    pub inactive_text_color: String,

    pub font_family: String,

    /// Outline weight of the background bar
    pub bar_outline_weight: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            accent_color: "#1F4E79".to_string(),
            background_color: "#FFFFFF".to_string(),
            active_text_color: "#FFFFFF".to_string(),
            inactive_text_color: "#888888".to_string(),
            font_family: "Arial".to_string(),
            bar_outline_weight: 0.1,
        }
    }
}

impl StyleConfig {
    pub fn accent(&self) -> Color {
        Color::from_hex_or_black(&self.accent_color)
    }

    pub fn background(&self) -> Color {
        Color::from_hex_or_black(&self.background_color)
    }

    pub fn active_text(&self) -> Color {
        Color::from_hex_or_black(&self.active_text_color)
    }

    pub fn inactive_text(&self) -> Color {
        Color::from_hex_or_black(&self.inactive_text_color)
    }
}

/// Placement of the "current / total" page number box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageNumberConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub bold: bool,
}

impl Default for PageNumberConfig {
    fn default() -> Self {
        Self {
            x: 665.0,
            y: 370.0,
            width: 50.0,
            height: 30.0,
            font_size: 12.0,
            bold: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab geometry
    pub layout: LayoutConfig,

    /// Colors and font
    pub style: StyleConfig,

    /// Page number overlay
    pub page_number: PageNumberConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/slide-tabs/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("slide-tabs").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .map(|path| Self::load_from_or_default(&path))
            .unwrap_or_default()
    }

    /// Load config from `path`. A missing file silently yields the defaults;
    /// an unreadable or malformed one is logged and also yields the defaults.
    pub fn load_from_or_default(path: &std::path::Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::ReadError(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r##"
            [layout]
            font_size = 10.0

            [style]
            accent_color = "#FF0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout.font_size, 10.0);
        assert_eq!(config.layout.total_width, 720.0);
        assert_eq!(config.layout.max_lines, 2);
        assert_eq!(config.style.accent(), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(config.style.inactive_text_color, "#888888");
        assert_eq!(config.page_number, PageNumberConfig::default());
    }

    #[test]
    fn malformed_style_color_is_black() {
        let style = StyleConfig {
            accent_color: "teal".to_string(),
            ..StyleConfig::default()
        };
        assert_eq!(style.accent(), Color::BLACK);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut config = Config::default();
        config.layout.total_width = 960.0;
        config.style.font_family = "Roboto".to_string();

        let path = std::env::temp_dir()
            .join("slide-tabs-test")
            .join("config_roundtrip.toml");
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_falls_back_for_missing_and_broken_files() {
        let dir = std::env::temp_dir().join("slide-tabs-test");
        let missing = dir.join("never_written.toml");
        assert_eq!(Config::load_from_or_default(&missing), Config::default());

        let broken = dir.join("broken.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&broken, "[layout\nfont_size = ").unwrap();
        assert_eq!(Config::load_from_or_default(&broken), Config::default());

        let good = dir.join("good.toml");
        std::fs::write(&good, "[layout]\nspacing = 4.0\n").unwrap();
        assert_eq!(Config::load_from_or_default(&good).layout.spacing, 4.0);

        let _ = std::fs::remove_file(&broken);
        let _ = std::fs::remove_file(&good);
    }

    #[test]
    fn default_path_is_under_slide_tabs() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with("slide-tabs/config.toml"));
        }
    }

    #[test]
    fn missing_file_is_read_error() {
        let path = std::env::temp_dir().join("slide-tabs-test").join("does_not_exist.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::ReadError(_))));
    }
}
