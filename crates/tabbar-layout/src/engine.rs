// ABOUTME: Tab row layout: per-tab width and wrapping, then uniform height and centering.
// ABOUTME: Pure functions of (sections, config); nothing here touches the presentation.

use tabbar_core::{Config, Section};

use crate::TextMeasure;

/// Multi-line tabs are never narrower than this multiple of `min_width`
const MULTILINE_MIN_WIDTH_FACTOR: f32 = 1.5;

/// Size of one section's tab before row-wide adjustments
#[derive(Debug, Clone, PartialEq)]
pub struct TabGeometry {
    pub title: String,
    pub section_id: String,
    /// Slide the section starts at
    pub source_index: usize,
    pub width: f32,
    pub height: f32,
    /// 1 or 2 with the default config
    pub line_count: u8,
}

/// A finished tab row. Tabs share `uniform_height` and start at `start_x`.
///
/// The row is not clamped to the configured total width: with many long
/// titles `row_width()` can exceed it and the tabs run past the right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub tabs: Vec<TabGeometry>,
    pub uniform_height: f32,
    pub start_x: f32,
    pub spacing: f32,
}

impl LayoutResult {
    /// Sum of tab widths plus the gaps between them
    pub fn row_width(&self) -> f32 {
        row_width(&self.tabs, self.spacing)
    }

    /// Left edge of each tab, in order
    pub fn tab_positions(&self) -> Vec<f32> {
        let mut x = self.start_x;
        self.tabs
            .iter()
            .map(|tab| {
                let pos = x;
                x += tab.width + self.spacing;
                pos
            })
            .collect()
    }
}

fn row_width(tabs: &[TabGeometry], spacing: f32) -> f32 {
    let widths: f32 = tabs.iter().map(|t| t.width).sum();
    widths + spacing * tabs.len().saturating_sub(1) as f32
}

/// Size each section's tab independently.
///
/// A tab whose single-line width would exceed its even share of the row is
/// forced to that share and its label wraps, up to `max_lines` lines.
pub fn compute_tab_geometries(
    sections: &[Section],
    config: &Config,
    measure: &dyn TextMeasure,
) -> Vec<TabGeometry> {
    let layout = &config.layout;
    let count = sections.len();
    if count == 0 {
        return Vec::new();
    }

    let max_per_tab = (layout.total_width - (count - 1) as f32 * layout.spacing) / count as f32;
    let max_lines = layout.max_lines.max(1);

    sections
        .iter()
        .map(|section| {
            let text_width = measure.measure(&section.title, &config.style.font_family, layout.font_size);
            let ideal_width = (text_width + layout.padding * 2.0).max(layout.min_width);

            let mut width = ideal_width;
            let mut lines = 1u8;
            if count > 1 && ideal_width > max_per_tab {
                lines = wrapped_line_count(text_width, max_per_tab - layout.padding * 2.0, max_lines);
                width = max_per_tab.max(layout.min_width);
            }

            let multiline_min = layout.min_width * MULTILINE_MIN_WIDTH_FACTOR;
            if lines > 1 && width < multiline_min {
                width = multiline_min;
            }

            let mut height = layout.base_height;
            if lines > 1 {
                height = (layout.base_height * layout.line_height_factor * lines as f32)
                    .min(layout.max_tab_height)
                    .max(layout.base_height);
            }

            tracing::debug!(
                "Tab {:?}: ideal={:.1} width={:.1} height={:.1} lines={}",
                section.title,
                ideal_width,
                width,
                height,
                lines
            );

            TabGeometry {
                title: section.title.clone(),
                section_id: section.section_id.clone(),
                source_index: section.source_index,
                width,
                height,
                line_count: lines,
            }
        })
        .collect()
}

/// Lines needed to fit `text_width` into `available`, clamped to 1..=max_lines
fn wrapped_line_count(text_width: f32, available: f32, max_lines: u8) -> u8 {
    if available <= 0.0 {
        return max_lines;
    }
    let needed = (text_width / available).ceil();
    if needed >= max_lines as f32 {
        max_lines
    } else {
        (needed as u8).max(1)
    }
}

/// Give every tab the tallest tab's height and center the row.
pub fn compute_uniform_layout(tabs: Vec<TabGeometry>, config: &Config) -> LayoutResult {
    let layout = &config.layout;
    let uniform_height = tabs
        .iter()
        .fold(layout.base_height, |max, tab| max.max(tab.height));
    let start_x = ((layout.total_width - row_width(&tabs, layout.spacing)) / 2.0).max(0.0);

    let tabs = tabs
        .into_iter()
        .map(|tab| TabGeometry {
            height: uniform_height,
            ..tab
        })
        .collect();

    LayoutResult {
        tabs,
        uniform_height,
        start_x,
        spacing: layout.spacing,
    }
}

/// Full layout pass. Returns `None` when there are no sections to draw.
pub fn layout(sections: &[Section], config: &Config, measure: &dyn TextMeasure) -> Option<LayoutResult> {
    if sections.is_empty() {
        return None;
    }
    let tabs = compute_tab_geometries(sections, config, measure);
    Some(compute_uniform_layout(tabs, config))
}
