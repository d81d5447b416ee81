use crate::error::{GatewayError, Result};
use crate::prompt;

use ps_core::{CoverageReport, Scenario};

use log::debug;
use reqwest::Client as ReqwestClient;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;

/// HTTP client for the document-analysis service.
///
/// The base URL is configurable so tests can point it at a local mock.
pub struct PolicyAnalysisGateway {
    http: ReqwestClient,
    base_url: String,
    api_key: String,
    model: String,
}

/// A parsed coverage report plus the exact JSON text it came from, kept
/// verbatim for persistence.
#[derive(Debug)]
pub struct AnalysisOutput {
    pub report: CoverageReport,
    pub raw_json: String,
}

#[derive(Deserialize)]
struct FileUploadResponse {
    id: String,
}

#[derive(Deserialize)]
struct ResponsesEnvelope {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Deserialize)]
struct ContentItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl PolicyAnalysisGateway {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Uploads a policy document and returns the service-assigned file id.
    pub async fn upload_document(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        debug!(
            "Uploading policy document '{}' ({} bytes)",
            file_name,
            bytes.len()
        );

        let file_part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new()
            .text("purpose", "assistants")
            .part("file", file_part);

        let response = self
            .http
            .post(format!("{}/v1/files", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let response = check_status(response).await?;
        let upload: FileUploadResponse = response.json().await?;

        debug!("Policy document uploaded as {}", upload.id);
        Ok(upload.id)
    }

    /// Runs one scenario analysis against an uploaded document.
    pub async fn analyze(&self, document_ref: &str, scenario: Scenario) -> Result<AnalysisOutput> {
        debug!("Requesting analysis of {document_ref} for scenario '{scenario}'");

        let body = json!({
            "model": self.model,
            "input": [
                { "role": "system", "content": prompt::SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": [
                        { "type": "input_text", "text": prompt::user_prompt(scenario) },
                        { "type": "input_file", "file_id": document_ref },
                    ],
                },
            ],
            "text": { "format": { "type": "json_object" } },
        });

        let response = self
            .http
            .post(format!("{}/v1/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = check_status(response).await?;
        let envelope: ResponsesEnvelope = response.json().await?;

        let raw_json = output_text(envelope).ok_or_else(GatewayError::missing_output)?;
        let report: CoverageReport =
            serde_json::from_str(&raw_json).map_err(GatewayError::malformed_report)?;

        Ok(AnalysisOutput { report, raw_json })
    }
}

/// First output_text block in the response, if any.
fn output_text(envelope: ResponsesEnvelope) -> Option<String> {
    envelope
        .output
        .into_iter()
        .flat_map(|item| item.content)
        .find(|content| content.kind == "output_text" && !content.text.is_empty())
        .map(|content| content.text)
}

/// Turns a non-2xx response into a Service error, pulling the message out
/// of the service's error envelope when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("error")?
                .get("message")?
                .as_str()
                .map(String::from)
        })
        .unwrap_or(body);

    Err(GatewayError::service(status.as_u16(), message))
}
