pub mod document_response;
pub mod documents;
