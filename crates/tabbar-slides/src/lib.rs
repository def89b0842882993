// ABOUTME: Presentation adapter for the section tab bar.
// ABOUTME: Reads section headers, renders tab bars and page numbers, submits one batch.

pub mod model;
mod pass;
pub mod render;
pub mod request;
mod sections;
pub mod service;
mod tag;

pub use model::{ElementKind, PageElement, PresentationSnapshot, ShapeType, SlideLayout, SlideSnapshot};
pub use pass::{run_layout_pass, PassError, PassSummary};
pub use render::render_batch;
pub use request::{BatchUpdate, Request};
pub use sections::extract_sections;
pub use service::{MemoryError, MemoryPresentation, PresentationService};
pub use tag::ElementTag;
