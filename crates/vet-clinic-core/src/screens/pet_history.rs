//! Pet history modal.
//!
//! Pipeline: clinical record → (prescriptions ∥ treatments ∥ admissions)
//!
//! The three dependent fetches are keyed by the record's `idFichaClinica` and
//! run concurrently. Any failure fails the whole load.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{ApiResult, ClinicApi};
use crate::fetch::{FetchState, Fetcher};
use crate::models::{display_date, ClinicalRecord, Measure, PetHistory};
use crate::render::{AccordionSection, AccordionView, Block, Field, RenderText, ScreenView};

/// Section titles, in display order.
pub const RECORD_SECTION: &str = "Ficha Clínica Principal";
pub const ADMISSIONS_HEADING: &str = "Ficha de Ingreso";
pub const PRESCRIPTIONS_SECTION: &str = "Recetas Recientes";
pub const TREATMENTS_SECTION: &str = "Tratamientos Recientes";

/// Load everything the modal shows for one pet.
///
/// When the clinical record carries no dependent identifier the dependent
/// sections are skipped (logged, not an error) and the record alone is
/// returned.
pub async fn load_pet_history<A>(api: &A, pet_id: &str) -> ApiResult<PetHistory>
where
    A: ClinicApi + ?Sized,
{
    let record = api.clinical_record(pet_id).await?;

    let record_id = match record.as_ref().and_then(ClinicalRecord::dependent_id) {
        Some(id) => id.to_string(),
        None => {
            tracing::warn!(pet_id, "clinical record has no idFichaClinica, skipping dependent sections");
            return Ok(PetHistory::record_only(pet_id, record));
        }
    };

    tracing::debug!(pet_id, record_id = %record_id, "fetching dependent sections");
    let (prescriptions, treatments, admissions) = tokio::try_join!(
        api.prescriptions(&record_id),
        api.treatments(&record_id),
        api.admissions(&record_id),
    )?;

    tracing::info!(
        pet_id,
        record_id = %record_id,
        prescriptions = prescriptions.len(),
        treatments = treatments.len(),
        admissions = admissions.len(),
        "pet history loaded"
    );

    Ok(PetHistory {
        pet_id: pet_id.to_string(),
        clinical_record: record,
        admissions,
        prescriptions,
        treatments,
    })
}

/// Build the three-section accordion for a loaded history.
pub fn history_accordion(history: &PetHistory) -> AccordionView {
    let mut record_section = AccordionSection::new(RECORD_SECTION);
    if let Some(record) = &history.clinical_record {
        record_section.push(Block::Fields(record_fields(record)));
    }
    record_section.push(Block::Heading(ADMISSIONS_HEADING.to_string()));
    for admission in &history.admissions {
        record_section.push(Block::Entry(vec![
            Field::new("Síntomas", admission.symptoms.as_str()),
            Field::new("Antecedentes", admission.history.as_str()),
            Field::new("Diagnóstico", admission.diagnosis.as_str()),
            Field::new("Fecha de Ingreso", display_date(&admission.admission_date)),
            Field::new("Fecha de Alta", display_date(&admission.discharge_date)),
            Field::new("Observaciones", admission.observations.as_str()),
            Field::new("Temperatura", with_unit(admission.temperature_c.as_ref(), "", " °C")),
        ]));
    }

    let mut prescriptions_section = AccordionSection::new(PRESCRIPTIONS_SECTION);
    for prescription in &history.prescriptions {
        prescriptions_section.push(Block::Entry(vec![
            Field::new("Medicamento", prescription.description.as_str()),
            Field::new("Veterinario", prescription.vet_name.as_str()),
            Field::new("Fecha", display_date(&prescription.date)),
        ]));
    }

    let mut treatments_section = AccordionSection::new(TREATMENTS_SECTION);
    for treatment in &history.treatments {
        treatments_section.push(Block::Entry(vec![
            Field::new("Descripción", treatment.description.as_str()),
            Field::new("Fecha", display_date(&treatment.date)),
            Field::new("Tipo", treatment.kind.as_str()),
            Field::new("Costo", with_unit(treatment.cost.as_ref(), "$", "")),
        ]));
    }

    AccordionView::new(vec![record_section, prescriptions_section, treatments_section])
}

fn record_fields(record: &ClinicalRecord) -> Vec<Field> {
    vec![
        Field::new("Fecha de Ingreso", display_date(&record.admission_date)),
        Field::new("Enfermedades", record.conditions.join(", ")),
        Field::new("Peso", with_unit(record.weight_kg.as_ref(), "", " kg")),
        Field::new("Observaciones", record.observations.as_str()),
        Field::new("Antecedentes", record.history.as_str()),
        Field::new("ID Ficha Clínica", record.record_id.clone().unwrap_or_default()),
    ]
}

/// Empty when the measurement is missing.
fn with_unit(value: Option<&Measure>, prefix: &str, suffix: &str) -> String {
    value
        .map(|value| format!("{}{}{}", prefix, value, suffix))
        .unwrap_or_default()
}

/// The pet history modal.
///
/// `show` is re-entered on every identifier change; nothing is cached across
/// identifiers.
pub struct PetHistoryScreen<A: ClinicApi + ?Sized + 'static> {
    api: Arc<A>,
    fetcher: Fetcher<PetHistory>,
    pet_id: Option<String>,
}

impl<A: ClinicApi + ?Sized + 'static> PetHistoryScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            fetcher: Fetcher::new("pet_history"),
            pet_id: None,
        }
    }

    /// Show the history of a pet. The screen is `Loading` when this returns;
    /// the handle completes once the outcome has been applied or discarded.
    pub fn show(&mut self, pet_id: &str) -> JoinHandle<()> {
        tracing::info!(pet_id, "showing pet history");
        self.pet_id = Some(pet_id.to_string());

        let api = Arc::clone(&self.api);
        let pet_id = pet_id.to_string();
        self.fetcher
            .start(async move { load_pet_history(api.as_ref(), &pet_id).await })
    }

    /// Close the modal: cancel in-flight work and drop the data.
    pub fn close(&mut self) {
        if let Some(pet_id) = self.pet_id.take() {
            tracing::debug!(pet_id = %pet_id, "closing pet history");
        }
        self.fetcher.cancel();
    }

    /// Pet currently shown.
    pub fn pet_id(&self) -> Option<&str> {
        self.pet_id.as_deref()
    }

    pub fn state(&self) -> FetchState<PetHistory> {
        self.fetcher.snapshot()
    }

    /// The view for the current state, sections collapsed.
    pub fn view(&self) -> ScreenView<AccordionView> {
        ScreenView::from_state(self.state(), |history| history_accordion(&history))
    }

    /// Plain-text rendering with every section expanded.
    pub fn render(&self) -> String {
        let mut view = self.view();
        if let Some(accordion) = view.content_mut() {
            accordion.expand_all();
        }
        view.render_text()
    }
}
