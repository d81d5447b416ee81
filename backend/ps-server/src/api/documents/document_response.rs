use crate::session::HeldDocument;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document_ref: String,
    pub file_name: String,
    pub size_bytes: usize,
}

impl From<&HeldDocument> for DocumentResponse {
    fn from(document: &HeldDocument) -> Self {
        Self {
            document_ref: document.document_ref.clone(),
            file_name: document.file_name.clone(),
            size_bytes: document.size_bytes,
        }
    }
}
