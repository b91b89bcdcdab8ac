//! HTTP-backed metadata store client

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Error, Result};

use super::{MetadataStore, RawRecord, RecordPayload};

/// Metadata store adapter speaking JSON over HTTP with bearer auth
#[derive(Debug, Clone)]
pub struct HttpMetadataClient {
    base_url: String,
    access_token: String,
    client: reqwest::Client,
}

impl HttpMetadataClient {
    /// Build a client for the given API base URL and access token
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        let access_token = access_token.into().trim().to_string();
        if access_token.is_empty() {
            return Err(Error::InvalidConfiguration(
                "access token must not be empty".to_string(),
            ));
        }
        Ok(Self {
            base_url,
            access_token,
            client: reqwest::Client::builder().build()?,
        })
    }

    fn records_url(&self) -> String {
        format!("{}/records", self.base_url)
    }

    fn mutation_url(&self, record_type: &str) -> String {
        format!("{}/records/{record_type}", self.base_url)
    }

    fn delete_url(&self, record_type: &str, full_name: &str) -> String {
        format!(
            "{}/records/{record_type}/{}",
            self.base_url,
            urlencoding::encode(full_name)
        )
    }

    async fn check_mutation(response: reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(parse_api_error(status, &body)));
        }
        let outcome = response.json::<MutationResponse>().await?;
        outcome.into_result()
    }
}

#[async_trait]
impl MetadataStore for HttpMetadataClient {
    async fn retrieve_all(&self, fields: &[&str]) -> Result<Vec<RawRecord>> {
        tracing::debug!("Retrieving all records ({} fields)", fields.len());
        let response = self
            .client
            .get(self.records_url())
            .query(&[("fields", fields.join(","))])
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(parse_api_error(status, &body)));
        }
        Ok(response.json::<Vec<RawRecord>>().await?)
    }

    async fn create(&self, record_type: &str, payload: &RecordPayload) -> Result<()> {
        tracing::debug!("Creating record {}", payload.full_name);
        let response = self
            .client
            .post(self.mutation_url(record_type))
            .bearer_auth(&self.access_token)
            .json(payload)
            .send()
            .await?;
        Self::check_mutation(response).await
    }

    async fn update(&self, record_type: &str, payload: &RecordPayload) -> Result<()> {
        tracing::debug!("Updating record {}", payload.full_name);
        let response = self
            .client
            .patch(self.mutation_url(record_type))
            .bearer_auth(&self.access_token)
            .json(payload)
            .send()
            .await?;
        Self::check_mutation(response).await
    }

    async fn delete(&self, record_type: &str, full_name: &str) -> Result<()> {
        tracing::debug!("Deleting record {full_name}");
        let response = self
            .client
            .delete(self.delete_url(record_type, full_name))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        Self::check_mutation(response).await
    }
}

/// Mutation outcome body: `{ "success": bool, "errors": { "message": … }? }`
#[derive(Debug, Deserialize)]
struct MutationResponse {
    success: bool,
    errors: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl MutationResponse {
    fn into_result(self) -> Result<()> {
        if self.success {
            return Ok(());
        }
        let message = self
            .errors
            .and_then(|detail| detail.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "remote store reported failure".to_string());
        Err(Error::remote(message))
    }
}

fn normalize_base_url(base_url: String) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(Error::InvalidConfiguration(format!(
            "API base URL must be http(s), got '{trimmed}'"
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(outcome) = serde_json::from_str::<MutationResponse>(body) {
        if let Some(message) = outcome.errors.and_then(|detail| detail.message) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("HTTP {}: {trimmed}", status.as_u16())
    }
}
