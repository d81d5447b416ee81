use ps_core::CoverageReport;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: i64,
    pub scenario: String,
    pub health_score: u8,
    pub out_of_pocket: Option<f64>,
    pub report: CoverageReport,
}
