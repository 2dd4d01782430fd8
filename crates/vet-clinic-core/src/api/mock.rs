//! In-memory backend for tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{ApiError, ApiResult, ClinicApi, Endpoint};
use crate::models::{AdmissionRecord, ClinicalRecord, Employee, Prescription, Treatment};

/// An injected failure.
#[derive(Debug, Clone)]
enum Failure {
    Error(ApiError),
    /// Answers the status with the requested path, as the HTTP backend does
    Status(u16),
}

/// Mock backend with canned payloads, injectable failures and delays.
///
/// Unknown pets answer `404`; unknown clinical record IDs answer empty lists.
#[derive(Default)]
pub struct MockClinicApi {
    records: HashMap<String, Option<ClinicalRecord>>,
    prescriptions: HashMap<String, Vec<Prescription>>,
    treatments: HashMap<String, Vec<Treatment>>,
    admissions: HashMap<String, Vec<AdmissionRecord>>,
    employees: Vec<Employee>,
    /// Failures keyed by [`Endpoint::name`]
    failures: HashMap<&'static str, Failure>,
    /// Delays keyed by [`Endpoint::path`]
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl MockClinicApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a clinical record for a pet. `None` serves `data: null`.
    pub fn with_record(mut self, pet_id: &str, record: Option<ClinicalRecord>) -> Self {
        self.records.insert(pet_id.to_string(), record);
        self
    }

    pub fn with_prescriptions(mut self, record_id: &str, items: Vec<Prescription>) -> Self {
        self.prescriptions.insert(record_id.to_string(), items);
        self
    }

    pub fn with_treatments(mut self, record_id: &str, items: Vec<Treatment>) -> Self {
        self.treatments.insert(record_id.to_string(), items);
        self
    }

    pub fn with_admissions(mut self, record_id: &str, items: Vec<AdmissionRecord>) -> Self {
        self.admissions.insert(record_id.to_string(), items);
        self
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    /// Make every call to the named endpoint fail.
    pub fn failing(mut self, endpoint_name: &'static str, error: ApiError) -> Self {
        self.failures.insert(endpoint_name, Failure::Error(error));
        self
    }

    /// Make every call to the named endpoint answer with a status code.
    pub fn failing_with_status(mut self, endpoint_name: &'static str, status: u16) -> Self {
        self.failures.insert(endpoint_name, Failure::Status(status));
        self
    }

    /// Delay answers for one exact endpoint path.
    pub fn with_delay(mut self, endpoint: Endpoint, delay: Duration) -> Self {
        self.delays.insert(endpoint.path(), delay);
        self
    }

    /// Paths requested so far, in request order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Check if a path has been requested.
    pub fn was_called(&self, path: &str) -> bool {
        self.calls().iter().any(|call| call == path)
    }

    async fn enter(&self, endpoint: &Endpoint) -> ApiResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(endpoint.path());
        }

        if let Some(delay) = self.delays.get(&endpoint.path()) {
            tokio::time::sleep(*delay).await;
        }

        match self.failures.get(endpoint.name()) {
            Some(Failure::Error(error)) => Err(error.clone()),
            Some(Failure::Status(status)) => Err(ApiError::Status {
                status: *status,
                endpoint: endpoint.path(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ClinicApi for MockClinicApi {
    async fn clinical_record(&self, pet_id: &str) -> ApiResult<Option<ClinicalRecord>> {
        let endpoint = Endpoint::ClinicalRecordByPet(pet_id.to_string());
        self.enter(&endpoint).await?;
        self.records
            .get(pet_id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                endpoint: endpoint.path(),
            })
    }

    async fn prescriptions(&self, record_id: &str) -> ApiResult<Vec<Prescription>> {
        self.enter(&Endpoint::PrescriptionsByRecord(record_id.to_string()))
            .await?;
        Ok(self.prescriptions.get(record_id).cloned().unwrap_or_default())
    }

    async fn treatments(&self, record_id: &str) -> ApiResult<Vec<Treatment>> {
        self.enter(&Endpoint::TreatmentsByRecord(record_id.to_string()))
            .await?;
        Ok(self.treatments.get(record_id).cloned().unwrap_or_default())
    }

    async fn admissions(&self, record_id: &str) -> ApiResult<Vec<AdmissionRecord>> {
        self.enter(&Endpoint::AdmissionsByRecord(record_id.to_string()))
            .await?;
        Ok(self.admissions.get(record_id).cloned().unwrap_or_default())
    }

    async fn employees(&self) -> ApiResult<Vec<Employee>> {
        self.enter(&Endpoint::Employees).await?;
        Ok(self.employees.clone())
    }
}
