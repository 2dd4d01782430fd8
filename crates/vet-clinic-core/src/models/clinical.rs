//! Pet medical history models.

use serde::{Deserialize, Serialize};

use super::envelope::{measure, nullable_text, record_key, text_list, Measure};

/// The primary medical profile for a pet (ficha clínica).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClinicalRecord {
    /// Clinical record ID - keys every dependent lookup
    #[serde(
        rename = "idFichaClinica",
        default,
        deserialize_with = "record_key"
    )]
    pub record_id: Option<String>,
    /// Admission date
    #[serde(rename = "fechaIngreso", default, deserialize_with = "nullable_text")]
    pub admission_date: String,
    /// Known conditions
    #[serde(rename = "enfermedades", default, deserialize_with = "text_list")]
    pub conditions: Vec<String>,
    /// Weight in kg, as sent
    #[serde(rename = "peso", default, deserialize_with = "measure")]
    pub weight_kg: Option<Measure>,
    /// Free-form observations
    #[serde(rename = "observaciones", default, deserialize_with = "nullable_text")]
    pub observations: String,
    /// History notes
    #[serde(rename = "antecedentes", default, deserialize_with = "nullable_text")]
    pub history: String,
}

impl ClinicalRecord {
    /// The identifier the dependent sections are fetched by, if present.
    pub fn dependent_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }
}

/// One clinical visit under a clinical record (ficha de ingreso).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdmissionRecord {
    #[serde(rename = "sintomas", default, deserialize_with = "nullable_text")]
    pub symptoms: String,
    #[serde(rename = "antecedentes", default, deserialize_with = "nullable_text")]
    pub history: String,
    #[serde(rename = "diagnostico", default, deserialize_with = "nullable_text")]
    pub diagnosis: String,
    #[serde(rename = "fechaIngreso", default, deserialize_with = "nullable_text")]
    pub admission_date: String,
    /// Empty while the pet has not been discharged
    #[serde(rename = "fechaAlta", default, deserialize_with = "nullable_text")]
    pub discharge_date: String,
    #[serde(rename = "observaciones", default, deserialize_with = "nullable_text")]
    pub observations: String,
    /// Body temperature in °C
    #[serde(rename = "temperatura", default, deserialize_with = "measure")]
    pub temperature_c: Option<Measure>,
}

impl AdmissionRecord {
    /// Check if the admission has a discharge date.
    pub fn is_discharged(&self) -> bool {
        !self.discharge_date.trim().is_empty()
    }
}

/// A medication order tied to a clinical record (receta).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    /// Medication description
    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,
    /// Prescribing veterinarian
    #[serde(rename = "vetName", default, deserialize_with = "nullable_text")]
    pub vet_name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub date: String,
}

/// A billable clinical action tied to a clinical record (tratamiento).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Treatment {
    #[serde(rename = "descripcion", default, deserialize_with = "nullable_text")]
    pub description: String,
    #[serde(rename = "fecha", default, deserialize_with = "nullable_text")]
    pub date: String,
    /// Treatment type (e.g. "Vacuna", "Cirugía")
    #[serde(rename = "tipo", default, deserialize_with = "nullable_text")]
    pub kind: String,
    #[serde(rename = "costo", default, deserialize_with = "measure")]
    pub cost: Option<Measure>,
}

/// Everything the pet history modal shows for one pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PetHistory {
    /// Pet the history was loaded for
    pub pet_id: String,
    /// Primary record; `None` when the backend has no record for the pet
    pub clinical_record: Option<ClinicalRecord>,
    pub admissions: Vec<AdmissionRecord>,
    pub prescriptions: Vec<Prescription>,
    pub treatments: Vec<Treatment>,
}

impl PetHistory {
    /// History with only the primary record (dependent sections skipped).
    pub fn record_only(pet_id: impl Into<String>, record: Option<ClinicalRecord>) -> Self {
        Self {
            pet_id: pet_id.into(),
            clinical_record: record,
            ..Self::default()
        }
    }

    /// Check if all dependent sections are empty.
    pub fn dependents_empty(&self) -> bool {
        self.admissions.is_empty() && self.prescriptions.is_empty() && self.treatments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiEnvelope;

    #[test]
    fn test_clinical_record_from_backend_json() {
        let json = r#"{"data":{
            "idFichaClinica":"55",
            "fechaIngreso":"2024-03-01",
            "enfermedades":["otitis","sarna"],
            "peso":4.2,
            "observaciones":"Tranquilo",
            "antecedentes":"Vacunas al día"
        }}"#;

        let envelope: ApiEnvelope<Option<ClinicalRecord>> = serde_json::from_str(json).unwrap();
        let record = envelope.into_inner().unwrap();

        assert_eq!(record.dependent_id(), Some("55"));
        assert_eq!(record.weight_kg, Some(Measure::Number(4.2)));
        assert_eq!(record.conditions, vec!["otitis", "sarna"]);
        assert_eq!(record.history, "Vacunas al día");
    }

    #[test]
    fn test_clinical_record_without_dependent_id() {
        let json = r#"{"data":{"peso":"3.1","observaciones":null}}"#;
        let envelope: ApiEnvelope<Option<ClinicalRecord>> = serde_json::from_str(json).unwrap();
        let record = envelope.into_inner().unwrap();

        assert_eq!(record.dependent_id(), None);
        assert_eq!(record.weight_kg, Some(Measure::from("3.1")));
        assert_eq!(record.observations, "");
    }

    #[test]
    fn test_null_record() {
        let envelope: ApiEnvelope<Option<ClinicalRecord>> =
            serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.into_inner().is_none());
    }

    #[test]
    fn test_admission_discharge() {
        let json = r#"{"sintomas":"Vómitos","fechaIngreso":"2024-03-01","fechaAlta":null,"temperatura":39.1}"#;
        let admission: AdmissionRecord = serde_json::from_str(json).unwrap();

        assert!(!admission.is_discharged());
        assert_eq!(admission.temperature_c, Some(Measure::Number(39.1)));
    }

    #[test]
    fn test_prescription_and_treatment() {
        let prescription: Prescription = serde_json::from_str(
            r#"{"description":"Amoxicilina 250mg","vetName":"Dra. Rojas","date":"2024-03-02"}"#,
        )
        .unwrap();
        assert_eq!(prescription.vet_name, "Dra. Rojas");

        let treatment: Treatment = serde_json::from_str(
            r#"{"descripcion":"Limpieza de oídos","fecha":"2024-03-02","tipo":"Curación","costo":"15000"}"#,
        )
        .unwrap();
        assert_eq!(treatment.kind, "Curación");
        assert_eq!(treatment.cost, Some(Measure::from("15000")));
    }

    #[test]
    fn test_formatted_cost_and_weight_kept_verbatim() {
        let treatment: Treatment = serde_json::from_str(r#"{"costo":"15.000"}"#).unwrap();
        assert_eq!(treatment.cost.map(|c| c.to_string()), Some("15.000".to_string()));

        let json = r#"{"data":{"idFichaClinica":"55","peso":"4.2 kg"}}"#;
        let envelope: ApiEnvelope<Option<ClinicalRecord>> = serde_json::from_str(json).unwrap();
        let record = envelope.into_inner().unwrap();
        assert_eq!(record.weight_kg, Some(Measure::from("4.2 kg")));
        assert_eq!(record.dependent_id(), Some("55"));
    }

    #[test]
    fn test_zero_record_id_is_missing() {
        let envelope: ApiEnvelope<Option<ClinicalRecord>> =
            serde_json::from_str(r#"{"data":{"idFichaClinica":0,"peso":3}}"#).unwrap();
        assert_eq!(envelope.into_inner().unwrap().dependent_id(), None);
    }

    #[test]
    fn test_record_only_history() {
        let history = PetHistory::record_only("123", Some(ClinicalRecord::default()));
        assert_eq!(history.pet_id, "123");
        assert!(history.clinical_record.is_some());
        assert!(history.dependents_empty());
    }
}
