// ABOUTME: Section discovery from section-header slides.
// ABOUTME: Scans slides in order and keeps headers that carry a title.

use tabbar_core::Section;

use crate::SlideSnapshot;

/// Sections in slide order. A section-header slide without any text is skipped.
pub fn extract_sections(slides: &[SlideSnapshot]) -> Vec<Section> {
    slides
        .iter()
        .enumerate()
        .filter(|(_, slide)| slide.is_section_header())
        .filter_map(|(index, slide)| {
            slide
                .first_text_box_text()
                .map(|title| Section::new(title, index, slide.object_id.clone()))
        })
        .collect()
}
