// ABOUTME: Section tab layout for presentation navigation bars.
// ABOUTME: Computes tab widths, line wrapping, uniform height, and row centering.

mod active;
mod engine;
pub mod measure;

pub use active::{assign_active_section, ActiveSectionCursor, Anchored};
pub use engine::{compute_tab_geometries, compute_uniform_layout, layout, LayoutResult, TabGeometry};
pub use measure::{CharCountMeasure, FontError, FontMeasure, TextMeasure};
