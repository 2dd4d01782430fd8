//! Vet-Clinic Core Library
//!
//! Client side of the veterinary clinic management system: typed access to
//! the clinic's REST backend, fetch state shared by every screen, and the
//! screens themselves.
//!
//! # Architecture
//!
//! ```text
//!   Host (routing / modal invocation)
//!        │ show(pet_id) / load()
//!        ▼
//!   ┌───────────────────────────┐      ┌────────────────────────┐
//!   │  Screen                   │      │  Fetcher<T>            │
//!   │  PetHistoryScreen         │─────▶│  generation + cancel   │
//!   │  EmployeeListScreen       │      │  Resource<T>           │
//!   └─────────────┬─────────────┘      └───────────┬────────────┘
//!                 │ view()                         │ spawn
//!                 ▼                                ▼
//!   ScreenView: Loading | Error | Content   ClinicApi (HTTP / mock)
//!               (AccordionView / TableView)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Backend view-models (ClinicalRecord, Employee, etc.)
//! - [`api`]: Endpoint table, `ClinicApi` trait, HTTP and mock backends
//! - [`fetch`]: `FetchState`, generation-tagged `Resource`, async `Fetcher`
//! - [`screens`]: Pet history modal and employee list
//! - [`render`]: Accordion and table views with plain-text rendering
//! - [`config`]: Backend base URL and timeout

pub mod api;
pub mod config;
pub mod fetch;
pub mod models;
pub mod render;
pub mod screens;

// Re-export commonly used types
pub use api::{ApiError, ClinicApi, Endpoint, HttpClinicApi, MockClinicApi};
pub use config::{ClientConfig, ConfigError};
pub use fetch::{FetchState, Fetcher, Resource};
pub use models::{
    AdmissionRecord, ClinicalRecord, Employee, Measure, PetHistory, Prescription, Treatment,
};
pub use render::{AccordionView, RenderText, ScreenView, TableView};
pub use screens::{
    load_pet_history, EmployeeListScreen, PetHistoryScreen, EMPLOYEE_TABLE_HEADS,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;
use std::time::Duration;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetClinicError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request failed: {0}")]
    RequestError(String),

    #[error("Invalid response: {0}")]
    ResponseError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<ConfigError> for VetClinicError {
    fn from(e: ConfigError) -> Self {
        VetClinicError::ConfigError(e.to_string())
    }
}

impl From<ApiError> for VetClinicError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Decode { .. } => VetClinicError::ResponseError(e.to_string()),
            ApiError::InvalidUrl(_) => VetClinicError::ConfigError(e.to_string()),
            ApiError::Transport(_) | ApiError::Status { .. } => {
                VetClinicError::RequestError(e.to_string())
            }
        }
    }
}

impl From<std::io::Error> for VetClinicError {
    fn from(e: std::io::Error) -> Self {
        VetClinicError::RuntimeError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Connect to the clinic backend at the given base URL.
#[uniffi::export]
pub fn open_client(
    base_url: String,
    timeout_secs: Option<u64>,
) -> Result<Arc<VetClinicCore>, VetClinicError> {
    let mut config = ClientConfig::new(&base_url)?;
    if let Some(secs) = timeout_secs.filter(|secs| *secs > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    VetClinicCore::with_config(config).map(Arc::new)
}

/// Connect using `VET_CLINIC_API_URL` / `VET_CLINIC_TIMEOUT_SECS`.
#[uniffi::export]
pub fn open_client_from_env() -> Result<Arc<VetClinicCore>, VetClinicError> {
    let config = ClientConfig::from_env()?;
    VetClinicCore::with_config(config).map(Arc::new)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Blocking facade for native hosts. Owns its own Tokio runtime, so its
/// methods must not be called from inside another Tokio runtime.
#[derive(uniffi::Object)]
pub struct VetClinicCore {
    runtime: tokio::runtime::Runtime,
    api: Arc<HttpClinicApi>,
}

impl VetClinicCore {
    fn with_config(config: ClientConfig) -> Result<Self, VetClinicError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let api = Arc::new(HttpClinicApi::new(&config)?);
        tracing::info!(base_url = %config.base_url, "clinic client opened");
        Ok(Self { runtime, api })
    }
}

#[uniffi::export]
impl VetClinicCore {
    // =========================================================================
    // Data Operations
    // =========================================================================

    /// Load the full medical history of a pet.
    pub fn load_pet_history(&self, pet_id: String) -> Result<FfiPetHistory, VetClinicError> {
        let history = self
            .runtime
            .block_on(load_pet_history(self.api.as_ref(), &pet_id))?;
        Ok(history.into())
    }

    /// Load the employee collection, in source order.
    pub fn list_employees(&self) -> Result<Vec<FfiEmployee>, VetClinicError> {
        let employees = self.runtime.block_on(self.api.employees())?;
        Ok(employees.into_iter().map(|e| e.into()).collect())
    }

    /// Headers of the employee table.
    pub fn employee_table_heads(&self) -> Vec<String> {
        EMPLOYEE_TABLE_HEADS.iter().map(|h| h.to_string()).collect()
    }

    // =========================================================================
    // Screen Operations
    // =========================================================================

    /// Render the pet history modal as text (loading/error states included).
    pub fn render_pet_history(&self, pet_id: String) -> String {
        let api = Arc::clone(&self.api);
        self.runtime.block_on(async move {
            let mut screen = PetHistoryScreen::new(api);
            if let Err(e) = screen.show(&pet_id).await {
                tracing::error!(error = %e, "pet history task failed");
            }
            screen.render()
        })
    }

    /// Render the employee list as text.
    pub fn render_employee_list(&self) -> String {
        let api = Arc::clone(&self.api);
        self.runtime.block_on(async move {
            let mut screen = EmployeeListScreen::new(api);
            if let Err(e) = screen.load().await {
                tracing::error!(error = %e, "employee list task failed");
            }
            screen.render()
        })
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe clinical record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiClinicalRecord {
    pub record_id: Option<String>,
    pub admission_date: String,
    pub conditions: Vec<String>,
    /// Weight as sent by the backend
    pub weight_kg: Option<String>,
    pub observations: String,
    pub history: String,
}

impl From<ClinicalRecord> for FfiClinicalRecord {
    fn from(record: ClinicalRecord) -> Self {
        Self {
            record_id: record.record_id,
            admission_date: record.admission_date,
            conditions: record.conditions,
            weight_kg: record.weight_kg.map(|w| w.to_string()),
            observations: record.observations,
            history: record.history,
        }
    }
}

/// FFI-safe admission record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAdmissionRecord {
    pub symptoms: String,
    pub history: String,
    pub diagnosis: String,
    pub admission_date: String,
    pub discharge_date: String,
    pub observations: String,
    pub temperature_c: Option<String>,
}

impl From<AdmissionRecord> for FfiAdmissionRecord {
    fn from(admission: AdmissionRecord) -> Self {
        Self {
            symptoms: admission.symptoms,
            history: admission.history,
            diagnosis: admission.diagnosis,
            admission_date: admission.admission_date,
            discharge_date: admission.discharge_date,
            observations: admission.observations,
            temperature_c: admission.temperature_c.map(|t| t.to_string()),
        }
    }
}

/// FFI-safe prescription.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescription {
    pub description: String,
    pub vet_name: String,
    pub date: String,
}

impl From<Prescription> for FfiPrescription {
    fn from(prescription: Prescription) -> Self {
        Self {
            description: prescription.description,
            vet_name: prescription.vet_name,
            date: prescription.date,
        }
    }
}

/// FFI-safe treatment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTreatment {
    pub description: String,
    pub date: String,
    pub kind: String,
    pub cost: Option<String>,
}

impl From<Treatment> for FfiTreatment {
    fn from(treatment: Treatment) -> Self {
        Self {
            description: treatment.description,
            date: treatment.date,
            kind: treatment.kind,
            cost: treatment.cost.map(|c| c.to_string()),
        }
    }
}

/// FFI-safe pet history.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPetHistory {
    pub pet_id: String,
    pub clinical_record: Option<FfiClinicalRecord>,
    pub admissions: Vec<FfiAdmissionRecord>,
    pub prescriptions: Vec<FfiPrescription>,
    pub treatments: Vec<FfiTreatment>,
}

impl From<PetHistory> for FfiPetHistory {
    fn from(history: PetHistory) -> Self {
        Self {
            pet_id: history.pet_id,
            clinical_record: history.clinical_record.map(|r| r.into()),
            admissions: history.admissions.into_iter().map(|a| a.into()).collect(),
            prescriptions: history.prescriptions.into_iter().map(|p| p.into()).collect(),
            treatments: history.treatments.into_iter().map(|t| t.into()).collect(),
        }
    }
}

/// FFI-safe employee.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEmployee {
    pub employee_id: Option<String>,
    pub identity_number: String,
    pub given_names: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub birth_date: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: String,
    pub sex: String,
    pub status: String,
    pub role: String,
    pub specialty: String,
}

impl From<Employee> for FfiEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            identity_number: employee.identity_number,
            given_names: employee.given_names,
            paternal_surname: employee.paternal_surname,
            maternal_surname: employee.maternal_surname,
            birth_date: employee.birth_date,
            address: employee.address,
            phone: employee.phone,
            email: employee.email,
            sex: employee.sex,
            status: employee.status,
            role: employee.role,
            specialty: employee.specialty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_client_rejects_bad_url() {
        let result = open_client("nope".into(), None);
        assert!(matches!(result, Err(VetClinicError::ConfigError(_))));
    }

    #[test]
    fn test_error_mapping() {
        let status: VetClinicError = ApiError::Status {
            status: 500,
            endpoint: "/empleados".into(),
        }
        .into();
        assert_eq!(status.to_string(), "Request failed: HTTP error! status: 500");

        let decode: VetClinicError = ApiError::Decode {
            endpoint: "/empleados".into(),
            reason: "expected value".into(),
        }
        .into();
        assert!(matches!(decode, VetClinicError::ResponseError(_)));
    }

    #[test]
    fn test_pet_history_conversion() {
        let history = PetHistory {
            pet_id: "123".into(),
            clinical_record: Some(ClinicalRecord {
                record_id: Some("55".into()),
                weight_kg: Some(4.2.into()),
                ..ClinicalRecord::default()
            }),
            prescriptions: vec![Prescription::default()],
            ..PetHistory::default()
        };

        let ffi: FfiPetHistory = history.into();
        assert_eq!(ffi.pet_id, "123");
        assert_eq!(ffi.prescriptions.len(), 1);
        let record = ffi.clinical_record.expect("record");
        assert_eq!(record.record_id.as_deref(), Some("55"));
        assert_eq!(record.weight_kg.as_deref(), Some("4.2"));
    }

    #[test]
    fn test_open_client_and_heads() {
        let core = open_client("http://localhost:3000".into(), Some(5)).unwrap();
        assert_eq!(core.employee_table_heads().len(), 13);
    }
}
