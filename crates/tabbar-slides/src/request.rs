// ABOUTME: Batch update requests sent to the presentation host.
// ABOUTME: Serializes to the host's JSON shape; create requests carry an ownership tag.

use serde::{Deserialize, Serialize};
use tabbar_core::Color;

use crate::{ElementTag, ShapeType};

/// Body of one batch update call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdate {
    pub requests: Vec<Request>,
}

impl BatchUpdate {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    CreateShape(CreateShape),
    CreateLine(CreateLine),
    InsertText(InsertText),
    UpdateShapeProperties(UpdateShapeProperties),
    UpdateTextStyle(UpdateTextStyle),
    UpdateParagraphStyle(UpdateParagraphStyle),
    UpdateLineProperties(UpdateLineProperties),
    DeleteObject(DeleteObject),
}

impl Request {
    /// Object the request creates, edits, or deletes
    pub fn object_id(&self) -> &str {
        match self {
            Request::CreateShape(r) => &r.object_id,
            Request::CreateLine(r) => &r.object_id,
            Request::InsertText(r) => &r.object_id,
            Request::UpdateShapeProperties(r) => &r.object_id,
            Request::UpdateTextStyle(r) => &r.object_id,
            Request::UpdateParagraphStyle(r) => &r.object_id,
            Request::UpdateLineProperties(r) => &r.object_id,
            Request::DeleteObject(r) => &r.object_id,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Request::DeleteObject(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "PT")]
    Pt,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub magnitude: f32,
    pub unit: Unit,
}

impl Dimension {
    pub fn pt(magnitude: f32) -> Self {
        Self {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub unit: Unit,
}

impl AffineTransform {
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: x,
            translate_y: y,
            unit: Unit::Pt,
        }
    }
}

/// Where a new element lands: page, size, and position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProperties {
    pub page_object_id: String,
    pub size: Size,
    pub transform: AffineTransform,
}

impl ElementProperties {
    pub fn rect(page_object_id: &str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            page_object_id: page_object_id.to_string(),
            size: Size {
                width: Dimension::pt(width),
                height: Dimension::pt(height),
            },
            transform: AffineTransform::translate(x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShape {
    pub object_id: String,
    pub shape_type: ShapeType,
    pub element_properties: ElementProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ElementTag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineCategory {
    Straight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLine {
    pub object_id: String,
    pub line_category: LineCategory,
    pub element_properties: ElementProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ElementTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    pub object_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeType {
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    #[serde(rename = "type")]
    pub range_type: RangeType,
}

impl TextRange {
    pub const ALL: Self = Self {
        range_type: RangeType::All,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueColor {
    pub rgb_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidFill {
    pub color: OpaqueColor,
}

/// Solid fill used for shape backgrounds, outlines, and lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub solid_fill: SolidFill,
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Self {
            solid_fill: SolidFill {
                color: OpaqueColor { rgb_color: color },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub weight: Dimension,
    pub outline_fill: Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentAlignment {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_background_fill: Option<Fill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_alignment: Option<ContentAlignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShapeProperties {
    pub object_id: String,
    pub shape_properties: ShapeProperties,
    /// Field mask of the properties being set
    pub fields: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    pub opaque_color: OpaqueColor,
}

impl OptionalColor {
    pub fn rgb(color: Color) -> Self {
        Self {
            opaque_color: OpaqueColor { rgb_color: color },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub page_object_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyle {
    pub object_id: String,
    pub text_range: TextRange,
    pub style: TextStyle,
    pub fields: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyle {
    pub object_id: String,
    pub text_range: TextRange,
    pub style: ParagraphStyle,
    pub fields: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineProperties {
    pub line_fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineProperties {
    pub object_id: String,
    pub line_properties: LineProperties,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObject {
    pub object_id: String,
}
