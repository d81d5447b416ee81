use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScenarioListResponse {
    pub scenarios: Vec<String>,
}
