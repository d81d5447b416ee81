use ps_core::{CoverageReport, Scenario, User};

use uuid::Uuid;

/// A policy document already ingested by the analysis service.
#[derive(Debug, Clone)]
pub struct HeldDocument {
    pub document_ref: String,
    pub file_name: String,
    pub size_bytes: usize,
}

/// Per-login workflow state.
///
/// The workflow position is derived from which fields are filled: no
/// document means nothing to analyze yet, a held document allows analysis,
/// and `last_result` holds the most recent successful report. Logout drops
/// the whole context, which is the single reset operation.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: Uuid,
    pub email: String,
    pub document: Option<HeldDocument>,
    pub scenario: Option<Scenario>,
    pub last_result: Option<CoverageReport>,
}

impl SessionContext {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            document: None,
            scenario: None,
            last_result: None,
        }
    }
}
