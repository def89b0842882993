// ABOUTME: Boundary to the presentation host: read a snapshot, submit one batch.
// ABOUTME: Includes an in-memory host that applies batches atomically.

use crate::{ElementKind, PageElement, PresentationSnapshot, Request};

/// A presentation host. Transport, auth, and retries live behind this trait.
pub trait PresentationService {
    type Error: std::error::Error + 'static;

    fn snapshot(&self) -> Result<PresentationSnapshot, Self::Error>;

    /// Apply all requests as one atomic update
    fn batch_update(&mut self, presentation_id: &str, requests: Vec<Request>) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("Batch addressed to presentation {got}, expected {expected}")]
    WrongPresentation { expected: String, got: String },

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown object: {0}")]
    UnknownObject(String),

    #[error("Object already exists: {0}")]
    DuplicateObject(String),
}

/// Presentation held in memory. A failing batch leaves it unchanged.
#[derive(Debug, Clone)]
pub struct MemoryPresentation {
    presentation: PresentationSnapshot,
    batches_applied: usize,
}

impl MemoryPresentation {
    pub fn new(presentation: PresentationSnapshot) -> Self {
        Self {
            presentation,
            batches_applied: 0,
        }
    }

    pub fn presentation(&self) -> &PresentationSnapshot {
        &self.presentation
    }

    pub fn batches_applied(&self) -> usize {
        self.batches_applied
    }

    fn find_element_mut<'p>(
        presentation: &'p mut PresentationSnapshot,
        object_id: &str,
    ) -> Result<&'p mut PageElement, MemoryError> {
        presentation
            .slides
            .iter_mut()
            .flat_map(|slide| slide.elements.iter_mut())
            .find(|e| e.object_id == object_id)
            .ok_or_else(|| MemoryError::UnknownObject(object_id.to_string()))
    }

    fn create(presentation: &mut PresentationSnapshot, page_id: &str, element: PageElement) -> Result<(), MemoryError> {
        let exists = presentation
            .slides
            .iter()
            .any(|slide| slide.elements.iter().any(|e| e.object_id == element.object_id));
        if exists {
            return Err(MemoryError::DuplicateObject(element.object_id));
        }
        let slide = presentation
            .slides
            .iter_mut()
            .find(|slide| slide.object_id == page_id)
            .ok_or_else(|| MemoryError::UnknownPage(page_id.to_string()))?;
        slide.elements.push(element);
        Ok(())
    }

    fn apply(presentation: &mut PresentationSnapshot, request: Request) -> Result<(), MemoryError> {
        match request {
            Request::CreateShape(r) => {
                let element = PageElement {
                    object_id: r.object_id,
                    kind: ElementKind::Shape {
                        shape_type: r.shape_type,
                        text: None,
                    },
                    tag: r.tag,
                };
                Self::create(presentation, &r.element_properties.page_object_id, element)
            }
            Request::CreateLine(r) => {
                let element = PageElement {
                    object_id: r.object_id,
                    kind: ElementKind::Line,
                    tag: r.tag,
                };
                Self::create(presentation, &r.element_properties.page_object_id, element)
            }
            Request::InsertText(r) => {
                let element = Self::find_element_mut(presentation, &r.object_id)?;
                match &mut element.kind {
                    ElementKind::Shape { text, .. } => {
                        text.get_or_insert_with(String::new).insert_str(0, &r.text);
                        Ok(())
                    }
                    ElementKind::Line => Err(MemoryError::UnknownObject(r.object_id)),
                }
            }
            Request::DeleteObject(r) => {
                for slide in &mut presentation.slides {
                    if let Some(pos) = slide.elements.iter().position(|e| e.object_id == r.object_id) {
                        slide.elements.remove(pos);
                        return Ok(());
                    }
                }
                Err(MemoryError::UnknownObject(r.object_id))
            }
            // Styling is not modelled; the target still has to exist
            other => Self::find_element_mut(presentation, other.object_id()).map(|_| ()),
        }
    }
}

impl PresentationService for MemoryPresentation {
    type Error = MemoryError;

    fn snapshot(&self) -> Result<PresentationSnapshot, Self::Error> {
        Ok(self.presentation.clone())
    }

    fn batch_update(&mut self, presentation_id: &str, requests: Vec<Request>) -> Result<(), Self::Error> {
        if presentation_id != self.presentation.presentation_id {
            return Err(MemoryError::WrongPresentation {
                expected: self.presentation.presentation_id.clone(),
                got: presentation_id.to_string(),
            });
        }

        let mut staged = self.presentation.clone();
        for request in requests {
            Self::apply(&mut staged, request)?;
        }
        self.presentation = staged;
        self.batches_applied += 1;
        Ok(())
    }
}
