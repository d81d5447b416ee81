use crate::api::analysis::currency::format_usd;

use ps_core::PolicyAnalysis;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HistoryEntryDto {
    pub id: i64,
    pub analyzed_at: String,
    pub scenario: String,
    /// Formatted for display, e.g. "$1,500"; absent when the report had none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_pocket: Option<String>,
    pub health_score: u8,
}

impl From<PolicyAnalysis> for HistoryEntryDto {
    fn from(analysis: PolicyAnalysis) -> Self {
        Self {
            id: analysis.id,
            analyzed_at: analysis.created_at.to_rfc3339(),
            scenario: analysis.scenario.as_str().to_string(),
            out_of_pocket: analysis.out_of_pocket_estimate.map(format_usd),
            health_score: analysis.health_score(),
        }
    }
}
