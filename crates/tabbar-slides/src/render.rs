// ABOUTME: Turns a tab row layout into batch requests for every slide.
// ABOUTME: Deletes the previous pass's artifacts, then draws bars and page numbers.

use tabbar_core::{Color, Config};
use tabbar_layout::{ActiveSectionCursor, LayoutResult};

use crate::request::{
    Alignment, ContentAlignment, CreateLine, CreateShape, DeleteObject, Dimension, ElementProperties, Fill,
    InsertText, LineCategory, LineProperties, Link, OptionalColor, Outline, ParagraphStyle, ShapeProperties,
    TextRange, TextStyle, UpdateLineProperties, UpdateParagraphStyle, UpdateShapeProperties, UpdateTextStyle,
};
use crate::{ElementTag, PresentationSnapshot, Request, ShapeType};

/// Style colors resolved once per pass
#[derive(Debug, Clone, Copy)]
struct Palette {
    accent: Color,
    background: Color,
    active_text: Color,
    inactive_text: Color,
}

impl Palette {
    fn from_config(config: &Config) -> Self {
        Self {
            accent: config.style.accent(),
            background: config.style.background(),
            active_text: config.style.active_text(),
            inactive_text: config.style.inactive_text(),
        }
    }
}

struct BatchBuilder<'a> {
    config: &'a Config,
    palette: Palette,
    requests: Vec<Request>,
}

impl<'a> BatchBuilder<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            config,
            palette: Palette::from_config(config),
            requests: Vec::new(),
        }
    }

    fn delete(&mut self, object_id: &str) {
        self.requests.push(Request::DeleteObject(DeleteObject {
            object_id: object_id.to_string(),
        }));
    }

    fn create_shape(&mut self, tag: ElementTag, shape_type: ShapeType, properties: ElementProperties) -> String {
        let object_id = tag.new_object_id(&properties.page_object_id);
        self.requests.push(Request::CreateShape(CreateShape {
            object_id: object_id.clone(),
            shape_type,
            element_properties: properties,
            tag: Some(tag),
        }));
        object_id
    }

    fn centered(&mut self, object_id: &str) {
        self.requests.push(Request::UpdateParagraphStyle(UpdateParagraphStyle {
            object_id: object_id.to_string(),
            text_range: TextRange::ALL,
            style: ParagraphStyle {
                alignment: Alignment::Center,
            },
            fields: "alignment".to_string(),
        }));
    }

    fn page_number(&mut self, slide_id: &str, current_page: usize, total_pages: usize) {
        let config = self.config;
        let page = &config.page_number;
        let properties = ElementProperties::rect(slide_id, page.x, page.y, page.width, page.height);
        let object_id = self.create_shape(ElementTag::PageNumber, ShapeType::TextBox, properties);

        self.requests.push(Request::InsertText(InsertText {
            object_id: object_id.clone(),
            text: format!("{} / {}", current_page, total_pages),
        }));
        self.requests.push(Request::UpdateTextStyle(UpdateTextStyle {
            object_id: object_id.clone(),
            text_range: TextRange::ALL,
            style: TextStyle {
                bold: Some(page.bold),
                font_family: Some(config.style.font_family.clone()),
                font_size: Some(Dimension::pt(page.font_size)),
                foreground_color: Some(OptionalColor::rgb(self.palette.inactive_text)),
                ..TextStyle::default()
            },
            fields: "bold,fontFamily,fontSize,foregroundColor".to_string(),
        }));
        self.centered(&object_id);
    }

    fn tab_bar(&mut self, slide_id: &str, layout: &LayoutResult, active: Option<usize>) {
        self.background(slide_id, layout.uniform_height);
        for (idx, (tab, x)) in layout.tabs.iter().zip(layout.tab_positions()).enumerate() {
            let properties = ElementProperties::rect(slide_id, x, self.config.layout.y, tab.width, tab.height);
            self.tab(properties, &tab.title, &tab.section_id, active == Some(idx));
        }
        self.separator(slide_id, layout.uniform_height);
    }

    fn background(&mut self, slide_id: &str, height: f32) {
        let config = self.config;
        let layout = &config.layout;
        let properties = ElementProperties::rect(slide_id, 0.0, layout.y, layout.total_width, height);
        let object_id = self.create_shape(ElementTag::TabBackground, ShapeType::Rectangle, properties);

        self.requests.push(Request::UpdateShapeProperties(UpdateShapeProperties {
            object_id,
            shape_properties: ShapeProperties {
                shape_background_fill: Some(Fill::solid(self.palette.background)),
                outline: Some(Outline {
                    weight: Dimension::pt(config.style.bar_outline_weight),
                    outline_fill: Fill::solid(self.palette.background),
                }),
                content_alignment: None,
            },
            fields: "shapeBackgroundFill.solidFill.color,outline.weight,outline.outlineFill.solidFill.color"
                .to_string(),
        }));
    }

    fn tab(&mut self, properties: ElementProperties, title: &str, target_slide_id: &str, is_active: bool) {
        let (fill, text_color) = if is_active {
            (self.palette.accent, self.palette.active_text)
        } else {
            (self.palette.background, self.palette.inactive_text)
        };
        let object_id = self.create_shape(ElementTag::Tab, ShapeType::TextBox, properties);

        self.requests.push(Request::InsertText(InsertText {
            object_id: object_id.clone(),
            text: title.to_string(),
        }));
        self.requests.push(Request::UpdateShapeProperties(UpdateShapeProperties {
            object_id: object_id.clone(),
            shape_properties: ShapeProperties {
                shape_background_fill: Some(Fill::solid(fill)),
                outline: None,
                content_alignment: Some(ContentAlignment::Middle),
            },
            fields: "shapeBackgroundFill.solidFill.color,contentAlignment".to_string(),
        }));
        self.requests.push(Request::UpdateTextStyle(UpdateTextStyle {
            object_id: object_id.clone(),
            text_range: TextRange::ALL,
            style: TextStyle {
                bold: Some(true),
                font_family: Some(self.config.style.font_family.clone()),
                font_size: Some(Dimension::pt(self.config.layout.font_size)),
                foreground_color: Some(OptionalColor::rgb(text_color)),
                underline: Some(false),
                link: Some(Link {
                    page_object_id: target_slide_id.to_string(),
                }),
            },
            fields: "bold,fontFamily,fontSize,foregroundColor,underline,link".to_string(),
        }));
        self.centered(&object_id);
    }

    fn separator(&mut self, slide_id: &str, bar_height: f32) {
        let layout = &self.config.layout;
        let properties = ElementProperties::rect(slide_id, 0.0, layout.y + bar_height, layout.total_width, 0.0);
        let object_id = ElementTag::TabSeparator.new_object_id(slide_id);

        self.requests.push(Request::CreateLine(CreateLine {
            object_id: object_id.clone(),
            line_category: LineCategory::Straight,
            element_properties: properties,
            tag: Some(ElementTag::TabSeparator),
        }));
        self.requests.push(Request::UpdateLineProperties(UpdateLineProperties {
            object_id,
            line_properties: LineProperties {
                line_fill: Fill::solid(self.palette.accent),
            },
            fields: "lineFill.solidFill.color".to_string(),
        }));
    }
}

/// Build the full replace-all batch for one layout pass.
///
/// Every tagged element on every slide is deleted first. The cover slide
/// (index 0) gets nothing; every other slide gets a page number, and slides
/// that are not section headers also get the tab bar with the section they
/// belong to highlighted. The active tab is found from each tab's source
/// slide. An empty row means no requests at all.
pub fn render_batch(snapshot: &PresentationSnapshot, layout: &LayoutResult, config: &Config) -> Vec<Request> {
    if layout.tabs.is_empty() {
        return Vec::new();
    }

    let mut batch = BatchBuilder::new(config);
    for slide in &snapshot.slides {
        for element in slide.owned_elements() {
            batch.delete(&element.object_id);
        }
    }

    let total_pages = snapshot.slides.len();
    let mut cursor = ActiveSectionCursor::new(&layout.tabs);
    for (idx, slide) in snapshot.slides.iter().enumerate().skip(1) {
        let active = cursor.advance_to(idx);
        batch.page_number(&slide.object_id, idx + 1, total_pages);
        if slide.is_section_header() {
            continue;
        }
        batch.tab_bar(&slide.object_id, layout, active);
    }

    batch.requests
}
