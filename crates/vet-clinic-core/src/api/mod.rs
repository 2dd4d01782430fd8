//! REST backend access.
//!
//! All calls are unauthenticated GETs returning `{ "data": ... }`. Any
//! non-2xx status is a failure regardless of its code.

mod endpoint;
mod http;
mod mock;

pub use endpoint::*;
pub use http::*;
pub use mock::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AdmissionRecord, ClinicalRecord, Employee, Prescription, Treatment};

/// Backend access errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network unreachable, connection reset, timeout
    #[error("{0}")]
    Transport(String),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, endpoint: String },

    /// Body was not JSON or did not have the expected shape
    #[error("invalid response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The clinic backend, one method per endpoint.
///
/// Each method returns the unwrapped `data` payload.
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// Clinical record for a pet. `None` when the backend sends `data: null`.
    async fn clinical_record(&self, pet_id: &str) -> ApiResult<Option<ClinicalRecord>>;

    async fn prescriptions(&self, record_id: &str) -> ApiResult<Vec<Prescription>>;

    async fn treatments(&self, record_id: &str) -> ApiResult<Vec<Treatment>>;

    async fn admissions(&self, record_id: &str) -> ApiResult<Vec<AdmissionRecord>>;

    /// The full employee collection.
    async fn employees(&self) -> ApiResult<Vec<Employee>>;
}
