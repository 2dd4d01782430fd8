//! `reqwest`-backed implementation of [`ClinicApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, ClinicApi, Endpoint};
use crate::config::ClientConfig;
use crate::models::{
    AdmissionRecord, ApiEnvelope, ClinicalRecord, Employee, Prescription, Treatment,
};

/// HTTP client for the clinic backend.
#[derive(Debug, Clone)]
pub struct HttpClinicApi {
    base_url: Url,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpClinicApi {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            timeout: config.timeout,
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> ApiResult<Url> {
        endpoint.url(&self.base_url)
    }

    /// GET an endpoint and decode its body as JSON.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> ApiResult<T> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(endpoint = endpoint.name(), %url, "GET");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                endpoint = endpoint.name(),
                path = %endpoint,
                status = status.as_u16(),
                "backend returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.path(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(endpoint, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(endpoint = endpoint.name(), error = %e, "malformed response body");
            ApiError::Decode {
                endpoint: endpoint.path(),
                reason: e.to_string(),
            }
        })
    }

    fn transport_error(&self, endpoint: &Endpoint, e: reqwest::Error) -> ApiError {
        tracing::error!(endpoint = endpoint.name(), error = %e, "request failed");
        if e.is_timeout() {
            let secs = self.timeout.map(|t| t.as_secs()).unwrap_or_default();
            ApiError::Transport(format!("request timed out after {}s", secs))
        } else if e.is_connect() {
            ApiError::Transport(format!("cannot reach backend at {}", self.base_url))
        } else {
            ApiError::Transport(e.to_string())
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<Vec<T>> {
        let envelope: ApiEnvelope<Option<Vec<T>>> = self.get_json(&endpoint).await?;
        Ok(envelope.into_inner().unwrap_or_default())
    }
}

#[async_trait]
impl ClinicApi for HttpClinicApi {
    async fn clinical_record(&self, pet_id: &str) -> ApiResult<Option<ClinicalRecord>> {
        let endpoint = Endpoint::ClinicalRecordByPet(pet_id.to_string());
        let envelope: ApiEnvelope<Option<ClinicalRecord>> = self.get_json(&endpoint).await?;
        tracing::debug!(pet_id, found = envelope.data.is_some(), "clinical record received");
        Ok(envelope.into_inner())
    }

    async fn prescriptions(&self, record_id: &str) -> ApiResult<Vec<Prescription>> {
        self.get_list(Endpoint::PrescriptionsByRecord(record_id.to_string()))
            .await
    }

    async fn treatments(&self, record_id: &str) -> ApiResult<Vec<Treatment>> {
        self.get_list(Endpoint::TreatmentsByRecord(record_id.to_string()))
            .await
    }

    async fn admissions(&self, record_id: &str) -> ApiResult<Vec<AdmissionRecord>> {
        self.get_list(Endpoint::AdmissionsByRecord(record_id.to_string()))
            .await
    }

    async fn employees(&self) -> ApiResult<Vec<Employee>> {
        self.get_list(Endpoint::Employees).await
    }
}
