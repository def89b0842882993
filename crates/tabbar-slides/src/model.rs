// ABOUTME: Read-only snapshot of a presentation's slides and page elements.
// ABOUTME: Only the parts the tab bar needs: layouts, text boxes, and owned artifacts.

use serde::{Deserialize, Serialize};

use crate::ElementTag;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSnapshot {
    pub presentation_id: String,
    pub slides: Vec<SlideSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSnapshot {
    pub object_id: String,
    pub layout: SlideLayout,
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

/// Predefined slide layouts. Only section headers matter here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlideLayout {
    Title,
    SectionHeader,
    TitleAndBody,
    TitleOnly,
    Blank,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    TextBox,
    Rectangle,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Shape {
        #[serde(rename = "shapeType")]
        shape_type: ShapeType,
        #[serde(default)]
        text: Option<String>,
    },
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    pub object_id: String,
    pub kind: ElementKind,
    /// Set on elements a layout pass created; they are replaced on every pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ElementTag>,
}

impl PageElement {
    pub fn text_box(object_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            kind: ElementKind::Shape {
                shape_type: ShapeType::TextBox,
                text: Some(text.into()),
            },
            tag: None,
        }
    }
}

impl SlideSnapshot {
    pub fn new(object_id: impl Into<String>, layout: SlideLayout) -> Self {
        Self {
            object_id: object_id.into(),
            layout,
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: PageElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn is_section_header(&self) -> bool {
        self.layout == SlideLayout::SectionHeader
    }

    /// Trimmed text of the first text box that has any
    pub fn first_text_box_text(&self) -> Option<&str> {
        self.elements.iter().find_map(|element| match &element.kind {
            ElementKind::Shape {
                shape_type: ShapeType::TextBox,
                text: Some(text),
            } => Some(text.trim()).filter(|t| !t.is_empty()),
            _ => None,
        })
    }

    /// Elements left behind by an earlier layout pass
    pub fn owned_elements(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter().filter(|e| e.tag.is_some())
    }
}
