// ABOUTME: Ownership tags for elements created by a layout pass.
// ABOUTME: Old artifacts are found by tag, never by parsing object ids.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementTag {
    Tab,
    TabBackground,
    TabSeparator,
    PageNumber,
}

impl ElementTag {
    fn id_stem(&self) -> &'static str {
        match self {
            ElementTag::Tab => "tab",
            ElementTag::TabBackground => "tab_bg",
            ElementTag::TabSeparator => "tab_line",
            ElementTag::PageNumber => "page_num",
        }
    }

    /// Fresh object id for an element of this kind on `slide_id`
    pub fn new_object_id(&self, slide_id: &str) -> String {
        let guid = Uuid::new_v4().simple().to_string();
        format!("{}_{}_{}", self.id_stem(), slide_id, &guid[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_ids_are_unique_and_readable() {
        let a = ElementTag::Tab.new_object_id("p1");
        let b = ElementTag::Tab.new_object_id("p1");
        assert_ne!(a, b);
        assert!(a.starts_with("tab_p1_"));
        assert_eq!(a.len(), "tab_p1_".len() + 8);
    }

    #[test]
    fn tags_serialize_as_snake_case() {
        let json = serde_json::to_string(&ElementTag::TabBackground).unwrap();
        assert_eq!(json, "\"tab_background\"");
    }
}
