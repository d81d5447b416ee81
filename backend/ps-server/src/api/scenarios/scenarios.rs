use crate::api::scenarios::scenario_list_response::ScenarioListResponse;

use ps_core::Scenario;

use axum::Json;

/// GET /api/v1/scenarios
///
/// The fixed disaster-scenario list, in presentation order.
pub async fn list_scenarios() -> Json<ScenarioListResponse> {
    Json(ScenarioListResponse {
        scenarios: Scenario::ALL
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
    })
}
