use serde::{Deserialize, Deserializer, Serialize};

/// One item the policy would pay out on, with actual-cash-value math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveredItem {
    pub item: String,
    #[serde(default)]
    pub est_replacement_cost: f64,
    #[serde(default)]
    pub depreciation_pct: f64,
    #[serde(default)]
    pub acv_payout: f64,
}

/// The structured coverage assessment returned by the analysis service.
///
/// This is the full output contract: the arrays and the summary are required,
/// so a payload missing them is a parse failure rather than a silently empty
/// report. `deductible` and `total_out_of_pocket` are nullable by contract and
/// also tolerate a non-numeric "unknown" from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub covered_items: Vec<CoveredItem>,
    pub not_covered_items: Vec<String>,
    #[serde(deserialize_with = "number_or_none")]
    pub deductible: Option<f64>,
    #[serde(deserialize_with = "number_or_none")]
    pub total_out_of_pocket: Option<f64>,
    pub gap_alerts: Vec<String>,
    pub recommendations: Vec<String>,
    pub plain_summary: String,
}

impl CoverageReport {
    /// Derived display metric: 100 minus 20 points per gap alert, floored at 0.
    pub fn health_score(&self) -> u8 {
        let penalty = self.gap_alerts.len().saturating_mul(20);
        u8::try_from(100usize.saturating_sub(penalty)).unwrap_or(0)
    }
}

/// Accepts a JSON number, or maps null / "unknown" / anything non-numeric to
/// `None` instead of failing the whole report.
fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}
