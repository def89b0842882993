// ABOUTME: Shared types and configuration for slide-tabs.
// ABOUTME: Defines sections, colors, and config file handling.

pub mod color;
pub mod config;
pub mod section;

pub use color::Color;
pub use config::{Config, ConfigError, LayoutConfig, PageNumberConfig, StyleConfig};
pub use section::Section;
