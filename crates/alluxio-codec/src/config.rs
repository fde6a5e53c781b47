/// Controls how wire documents are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentConfig {
    /// Maximum bytes read from one document.
    pub max_document_size: usize,
    /// Maximum number of entities in one document.
    pub max_entities_per_document: usize,
    /// When true, JSON fields the wire entity does not define are rejected.
    pub strict_fields: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_document_size: 4 * 1024 * 1024,
            max_entities_per_document: 1024,
            strict_fields: false,
        }
    }
}
