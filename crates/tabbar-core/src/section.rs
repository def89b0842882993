// ABOUTME: Section records discovered from section-header slides.
// ABOUTME: A section anchors a tab to the slide it was read from.

use serde::{Deserialize, Serialize};

/// A titled division of the presentation, anchored at one slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Position of the section-header slide in the deck
    pub source_index: usize,
    /// Object id of the section-header slide, used as the tab's link target
    pub section_id: String,
}

impl Section {
    pub fn new(title: impl Into<String>, source_index: usize, section_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source_index,
            section_id: section_id.into(),
        }
    }
}
