use crate::{DbError, Result as DbErrorResult};

use ps_core::{PolicyAnalysis, Scenario};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AnalysisRepository {
    pool: SqlitePool,
}

impl AnalysisRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one immutable analysis row with a server-assigned timestamp.
    ///
    /// Gap alerts are stored as a JSON array, or NULL when the analysis
    /// raised none.
    pub async fn save(
        &self,
        user_id: Uuid,
        scenario: Scenario,
        document_ref: &str,
        response_json: &str,
        out_of_pocket: Option<f64>,
        gap_alerts: &[String],
    ) -> DbErrorResult<PolicyAnalysis> {
        let user_id_str = user_id.to_string();
        let created_at = Utc::now();
        let created_at_millis = created_at.timestamp_millis();
        let gap_alerts_json = if gap_alerts.is_empty() {
            None
        } else {
            Some(serde_json::to_string(gap_alerts).map_err(|e| DbError::decode(e.to_string()))?)
        };

        let result = sqlx::query(
            r#"
              INSERT INTO policy_analysis_results (
                  user_id, created_at, scenario, document_ref,
                  response_json, out_of_pocket_estimate, gap_alerts
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&user_id_str)
        .bind(created_at_millis)
        .bind(scenario.as_str())
        .bind(document_ref)
        .bind(response_json)
        .bind(out_of_pocket)
        .bind(&gap_alerts_json)
        .execute(&self.pool)
        .await?;

        Ok(PolicyAnalysis {
            id: result.last_insert_rowid(),
            user_id,
            created_at,
            scenario,
            document_ref: document_ref.to_string(),
            response_json: response_json.to_string(),
            out_of_pocket_estimate: out_of_pocket,
            gap_alerts: gap_alerts_json,
        })
    }

    /// The most recent `limit` rows for one user, newest first. Equal
    /// timestamps fall back to insertion order (latest insert first).
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> DbErrorResult<Vec<PolicyAnalysis>> {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
              SELECT id, user_id, created_at, scenario, document_ref,
                     response_json, out_of_pocket_estimate, gap_alerts
              FROM policy_analysis_results
              WHERE user_id = ?
              ORDER BY created_at DESC, id DESC
              LIMIT ?
              "#,
        )
        .bind(&user_id_str)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_analysis_row).collect()
    }

    /// The most recent `limit` rows across all users (administrative view;
    /// deliberately not routed through the public API).
    pub async fn list_recent(&self, limit: i64) -> DbErrorResult<Vec<PolicyAnalysis>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, created_at, scenario, document_ref,
                     response_json, out_of_pocket_estimate, gap_alerts
              FROM policy_analysis_results
              ORDER BY created_at DESC, id DESC
              LIMIT ?
              "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_analysis_row).collect()
    }
}

fn map_analysis_row(row: SqliteRow) -> DbErrorResult<PolicyAnalysis> {
    let user_id: String = row.try_get("user_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let scenario: String = row.try_get("scenario")?;

    Ok(PolicyAnalysis {
        id: row.try_get("id")?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| DbError::decode(format!("analysis user_id: {e}")))?,
        created_at: DateTime::from_timestamp_millis(created_at)
            .ok_or_else(|| DbError::decode("analysis created_at out of range"))?,
        scenario: Scenario::from_str(&scenario)
            .map_err(|_| DbError::decode(format!("unknown stored scenario: {scenario}")))?,
        document_ref: row.try_get("document_ref")?,
        response_json: row.try_get("response_json")?,
        out_of_pocket_estimate: row.try_get("out_of_pocket_estimate")?,
        gap_alerts: row.try_get("gap_alerts")?,
    })
}
