// ABOUTME: Text width measurement used to size tab labels.
// ABOUTME: Character-count estimate by default, real font metrics via fontdue.

use fontdue::{Font, FontSettings};
use tabbar_core::LayoutConfig;

/// Measures the rendered width of a single line of text, in points
pub trait TextMeasure {
    fn measure(&self, text: &str, font_family: &str, font_size: f32) -> f32;
}

/// Estimates width as a fixed advance per character
#[derive(Debug, Clone, Copy)]
pub struct CharCountMeasure {
    /// Advance as a fraction of the font size
    pub char_width_factor: f32,
}

impl CharCountMeasure {
    pub fn new(char_width_factor: f32) -> Self {
        Self { char_width_factor }
    }
}

impl Default for CharCountMeasure {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl From<&LayoutConfig> for CharCountMeasure {
    fn from(config: &LayoutConfig) -> Self {
        Self::new(config.char_width_factor)
    }
}

impl TextMeasure for CharCountMeasure {
    fn measure(&self, text: &str, _font_family: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.char_width_factor
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),
}

/// Sums glyph advances of one loaded font. The family name passed to
/// `measure` is ignored; load the font that matches the configured family.
pub struct FontMeasure {
    font: Font,
}

impl FontMeasure {
    pub fn new(font_data: &[u8]) -> Result<Self, FontError> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::FontLoadError(e.to_string()))?;
        Ok(Self { font })
    }
}

impl TextMeasure for FontMeasure {
    fn measure(&self, text: &str, _font_family: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, font_size).advance_width)
            .sum()
    }
}
