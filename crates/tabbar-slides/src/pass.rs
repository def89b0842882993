// ABOUTME: One layout pass: snapshot, discover sections, lay out, render, submit.
// ABOUTME: The whole redraw goes to the host as a single batch.

use tabbar_core::Config;
use tabbar_layout::{layout, TextMeasure};

use crate::{extract_sections, render_batch, PresentationService};

#[derive(Debug, thiserror::Error)]
pub enum PassError<E: std::error::Error + 'static> {
    #[error("Failed to read presentation: {0}")]
    Snapshot(#[source] E),

    #[error("Failed to submit batch update: {0}")]
    Submit(#[source] E),
}

/// What a pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub sections: usize,
    /// Tab bars drawn (one per non-cover, non-header slide)
    pub tab_bars: usize,
    /// Artifacts from earlier passes that were removed
    pub deleted: usize,
    pub requests: usize,
}

/// Redraw the tab bar and page numbers across the whole presentation.
///
/// A deck with no titled section headers is left untouched and nothing is
/// submitted.
pub fn run_layout_pass<S: PresentationService>(
    service: &mut S,
    config: &Config,
    measure: &dyn TextMeasure,
) -> Result<PassSummary, PassError<S::Error>> {
    let snapshot = service.snapshot().map_err(PassError::Snapshot)?;
    let sections = extract_sections(&snapshot.slides);
    tracing::info!(
        "Found {} sections across {} slides",
        sections.len(),
        snapshot.slides.len()
    );

    let Some(result) = layout(&sections, config, measure) else {
        tracing::info!("No section headers, skipping layout pass");
        return Ok(PassSummary::default());
    };

    if result.row_width() > config.layout.total_width {
        tracing::warn!(
            "Tab row is {:.1}pt wide and overflows the {:.1}pt bar",
            result.row_width(),
            config.layout.total_width
        );
    }

    let requests = render_batch(&snapshot, &result, config);
    let summary = PassSummary {
        sections: sections.len(),
        tab_bars: snapshot
            .slides
            .iter()
            .skip(1)
            .filter(|slide| !slide.is_section_header())
            .count(),
        deleted: requests.iter().filter(|r| r.is_delete()).count(),
        requests: requests.len(),
    };

    service
        .batch_update(&snapshot.presentation_id, requests)
        .map_err(PassError::Submit)?;
    tracing::info!(
        "Layout pass submitted {} requests ({} deletions, {} tab bars)",
        summary.requests,
        summary.deleted,
        summary.tab_bars
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementTag, MemoryPresentation, PageElement, PresentationSnapshot, SlideLayout, SlideSnapshot};
    use tabbar_layout::CharCountMeasure;

    fn deck(slides: Vec<SlideSnapshot>) -> MemoryPresentation {
        MemoryPresentation::new(PresentationSnapshot {
            presentation_id: "deck".to_string(),
            slides,
        })
    }

    fn sample_deck() -> MemoryPresentation {
        deck(vec![
            SlideSnapshot::new("cover", SlideLayout::Title).with_element(PageElement::text_box("c", "Deck")),
            SlideSnapshot::new("h1", SlideLayout::SectionHeader).with_element(PageElement::text_box("t1", "Intro")),
            SlideSnapshot::new("b1", SlideLayout::TitleAndBody),
            SlideSnapshot::new("b2", SlideLayout::TitleAndBody),
            SlideSnapshot::new("h2", SlideLayout::SectionHeader)
                .with_element(PageElement::text_box("t2", "Results")),
            SlideSnapshot::new("b3", SlideLayout::TitleAndBody),
        ])
    }

    fn tag_counts(host: &MemoryPresentation, slide: usize) -> [usize; 4] {
        let elements = &host.presentation().slides[slide].elements;
        let count = |tag: ElementTag| elements.iter().filter(|e| e.tag == Some(tag)).count();
        [
            count(ElementTag::Tab),
            count(ElementTag::TabBackground),
            count(ElementTag::TabSeparator),
            count(ElementTag::PageNumber),
        ]
    }

    #[test]
    fn pass_draws_tabs_and_page_numbers() {
        let mut host = sample_deck();
        let summary = run_layout_pass(&mut host, &Config::default(), &CharCountMeasure::default()).unwrap();

        assert_eq!(summary.sections, 2);
        assert_eq!(summary.tab_bars, 3);
        assert_eq!(summary.deleted, 0);
        assert_eq!(host.batches_applied(), 1);

        assert_eq!(tag_counts(&host, 0), [0, 0, 0, 0]);
        assert_eq!(tag_counts(&host, 1), [0, 0, 0, 1]);
        assert_eq!(tag_counts(&host, 2), [2, 1, 1, 1]);
        assert_eq!(tag_counts(&host, 5), [2, 1, 1, 1]);
    }

    #[test]
    fn repeated_passes_replace_instead_of_stacking() {
        let mut host = sample_deck();
        let config = Config::default();
        let measure = CharCountMeasure::default();

        let first = run_layout_pass(&mut host, &config, &measure).unwrap();
        let after_first: Vec<[usize; 4]> = (0..6).map(|i| tag_counts(&host, i)).collect();

        let second = run_layout_pass(&mut host, &config, &measure).unwrap();
        let after_second: Vec<[usize; 4]> = (0..6).map(|i| tag_counts(&host, i)).collect();

        assert_eq!(after_first, after_second);
        // 3 bars * (2 tabs + bg + line) + 5 page numbers
        assert_eq!(second.deleted, 17);
        assert_eq!(second.requests, first.requests + 17);
        // User content survives
        assert_eq!(host.presentation().slides[1].first_text_box_text(), Some("Intro"));
    }

    #[test]
    fn deck_without_sections_is_left_alone() {
        let mut host = deck(vec![
            SlideSnapshot::new("cover", SlideLayout::Title),
            SlideSnapshot::new("b1", SlideLayout::TitleAndBody),
        ]);
        let before = host.presentation().clone();

        let summary = run_layout_pass(&mut host, &Config::default(), &CharCountMeasure::default()).unwrap();
        assert_eq!(summary, PassSummary::default());
        assert_eq!(host.batches_applied(), 0);
        assert_eq!(host.presentation(), &before);
    }

    #[test]
    fn page_numbers_show_position_and_total() {
        let mut host = sample_deck();
        run_layout_pass(&mut host, &Config::default(), &CharCountMeasure::default()).unwrap();

        let slide = &host.presentation().slides[3];
        let number = slide
            .elements
            .iter()
            .find(|e| e.tag == Some(ElementTag::PageNumber))
            .unwrap();
        assert_eq!(
            number.kind,
            crate::ElementKind::Shape {
                shape_type: crate::ShapeType::TextBox,
                text: Some("4 / 6".to_string()),
            }
        );
    }
}
