// ABOUTME: Active section tracking while walking slides in order.
// ABOUTME: A forward-only pointer over sections sorted by source slide.

use tabbar_core::Section;

use crate::TabGeometry;

/// Anything that starts at a slide: sections, and the tabs laid out for them
pub trait Anchored {
    fn source_index(&self) -> usize;
}

impl Anchored for Section {
    fn source_index(&self) -> usize {
        self.source_index
    }
}

impl Anchored for TabGeometry {
    fn source_index(&self) -> usize {
        self.source_index
    }
}

/// Tracks which section the current slide belongs to.
///
/// Slides must be visited in ascending order; the pointer only moves
/// forward, so a whole deck costs O(slides + sections).
#[derive(Debug, Clone)]
pub struct ActiveSectionCursor<'a, T = Section> {
    sections: &'a [T],
    current: Option<usize>,
}

impl<'a, T: Anchored> ActiveSectionCursor<'a, T> {
    pub fn new(sections: &'a [T]) -> Self {
        Self {
            sections,
            current: None,
        }
    }

    /// Move to `slide_index` and return the active section, if any.
    /// A lower index than a previous call leaves the pointer where it is.
    pub fn advance_to(&mut self, slide_index: usize) -> Option<usize> {
        loop {
            let next = self.current.map_or(0, |i| i + 1);
            match self.sections.get(next) {
                Some(section) if section.source_index() <= slide_index => self.current = Some(next),
                _ => break,
            }
        }
        self.current
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }
}

/// Greatest section whose source slide is at or before `slide_index`
pub fn assign_active_section(slide_index: usize, sections: &[Section]) -> Option<usize> {
    ActiveSectionCursor::new(sections).advance_to(slide_index)
}
