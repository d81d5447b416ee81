//! Scenario analysis and history handlers

use crate::api::analysis::analysis_response::AnalysisResponse;
use crate::api::analysis::analyze_request::AnalyzeRequest;
use crate::api::analysis::history_entry_dto::HistoryEntryDto;
use crate::api::analysis::history_query::HistoryQuery;
use crate::api::analysis::history_response::HistoryResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::session::CurrentSession;
use crate::state::AppState;

use ps_core::Scenario;
use ps_db::AnalysisRepository;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State},
};
use log::{info, warn};

/// POST /api/v1/analysis
///
/// Runs one gateway call for the held document and the chosen scenario,
/// persists the result, and returns the typed report. Failures leave the
/// session context exactly as it was.
pub async fn run_analysis(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalysisResponse>> {
    let scenario = Scenario::from_str(&request.scenario)
        .map_err(|_| ApiError::validation("Unknown scenario", Some("scenario")))?;

    let Some(document) = &session.context.document else {
        return Err(ApiError::conflict(
            "NO_DOCUMENT",
            "Upload a policy document before requesting analysis",
        ));
    };

    let output = state
        .gateway
        .analyze(&document.document_ref, scenario)
        .await?;

    let repo = AnalysisRepository::new(state.pool.clone());
    let saved = repo
        .save(
            session.context.user_id,
            scenario,
            &document.document_ref,
            &output.raw_json,
            output.report.total_out_of_pocket,
            &output.report.gap_alerts,
        )
        .await?;

    // Context reflects the result only after it is safely persisted
    let report = output.report.clone();
    let updated = state
        .sessions
        .update(session.token, |context| {
            context.scenario = Some(scenario);
            context.last_result = Some(output.report);
        })
        .await;
    if !updated {
        // Logged out mid-flight: the row is persisted, only the cached
        // context is gone
        warn!(
            "Session for user {} ended before analysis {} reached its context",
            session.context.user_id, saved.id
        );
    }

    info!(
        "Analysis {} stored for user {} (scenario '{}')",
        saved.id, session.context.user_id, scenario
    );

    Ok(Json(AnalysisResponse {
        analysis_id: saved.id,
        scenario: scenario.as_str().to_string(),
        health_score: report.health_score(),
        out_of_pocket: report.total_out_of_pocket,
        report,
    }))
}

/// GET /api/v1/analysis/history?limit=N
///
/// Newest-first history for the logged-in user. A read failure degrades
/// to an empty list instead of failing the session.
pub async fn history(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let repo = AnalysisRepository::new(state.pool.clone());

    let analyses = match repo
        .list_by_user(session.context.user_id, query.effective_limit())
        .await
    {
        Ok(rows) => rows.into_iter().map(HistoryEntryDto::from).collect(),
        Err(e) => {
            warn!(
                "History read failed for user {}: {}",
                session.context.user_id, e
            );
            Vec::new()
        }
    };

    Json(HistoryResponse { analyses })
}
