use crate::Scenario;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted analysis run. Immutable after insert.
///
/// `id` is the autoincrement primary key, which doubles as the
/// insertion-order tiebreaker when two rows share a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyAnalysis {
    pub id: i64,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub scenario: Scenario,
    pub document_ref: String,
    /// Raw structured-analysis payload as the service returned it.
    pub response_json: String,
    pub out_of_pocket_estimate: Option<f64>,
    /// Serialized JSON array of gap-alert strings, if any were raised.
    pub gap_alerts: Option<String>,
}

impl PolicyAnalysis {
    /// Gap alerts decoded from their stored JSON form.
    pub fn gap_alert_list(&self) -> Vec<String> {
        self.gap_alerts
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    /// Health score recomputed from the stored gap alerts.
    pub fn health_score(&self) -> u8 {
        let penalty = self.gap_alert_list().len().saturating_mul(20);
        u8::try_from(100usize.saturating_sub(penalty)).unwrap_or(0)
    }
}
