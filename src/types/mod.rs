use serde_json::{Map, Value};

/// Free-form key/value data stored after a page's content.
pub type Metadata = Map<String, Value>;

/// A page as held on disk: markup body plus its metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub content: String,
    pub metadata: Metadata,
}

impl Page {
    pub fn new(content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Split into `(content, metadata)`.
    pub fn into_parts(self) -> (String, Metadata) {
        (self.content, self.metadata)
    }
}
