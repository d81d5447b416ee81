use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// One of the fixed scenario labels from GET /api/v1/scenarios
    pub scenario: String,
}
