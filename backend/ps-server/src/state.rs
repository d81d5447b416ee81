use crate::session::SessionRegistry;

use ps_auth::CredentialStore;
use ps_gateway::PolicyAnalysisGateway;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionRegistry,
    pub credentials: Arc<CredentialStore>,
    pub gateway: Arc<PolicyAnalysisGateway>,
    pub max_upload_bytes: usize,
}
