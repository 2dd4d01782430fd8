//! Backend endpoint table.

use std::fmt;

use reqwest::Url;

use super::{ApiError, ApiResult};

/// The GET endpoints consumed by the screens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/ficha-clinica/mascota/{idMascota}`
    ClinicalRecordByPet(String),
    /// `/recetas-mascota/ficha-ingreso/{idFichaClinica}`
    PrescriptionsByRecord(String),
    /// `/tratamientos-mascotas/ficha-clinica/{idFichaClinica}`
    TreatmentsByRecord(String),
    /// `/ficha-ingreso/Ficha-clinica/{idFichaClinica}`
    AdmissionsByRecord(String),
    /// `/empleados`
    Employees,
}

impl Endpoint {
    /// Short stable name, used in logs and for test fault injection.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::ClinicalRecordByPet(_) => "clinical_record",
            Endpoint::PrescriptionsByRecord(_) => "prescriptions",
            Endpoint::TreatmentsByRecord(_) => "treatments",
            Endpoint::AdmissionsByRecord(_) => "admissions",
            Endpoint::Employees => "employees",
        }
    }

    /// Path segments, identifiers unencoded.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::ClinicalRecordByPet(id) => vec!["ficha-clinica", "mascota", id.as_str()],
            Endpoint::PrescriptionsByRecord(id) => {
                vec!["recetas-mascota", "ficha-ingreso", id.as_str()]
            }
            Endpoint::TreatmentsByRecord(id) => {
                vec!["tratamientos-mascotas", "ficha-clinica", id.as_str()]
            }
            // The backend route really is capitalised this way.
            Endpoint::AdmissionsByRecord(id) => {
                vec!["ficha-ingreso", "Ficha-clinica", id.as_str()]
            }
            Endpoint::Employees => vec!["empleados"],
        }
    }

    /// Path relative to the base URL, identifiers unencoded.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Resolve against a base URL. Identifiers are percent-encoded as single
    /// path segments.
    pub fn url(&self, base: &Url) -> ApiResult<Url> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(base.to_string()))?;
            segments.pop_if_empty();
            segments.extend(self.segments());
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(
            Endpoint::ClinicalRecordByPet("123".into()).path(),
            "/ficha-clinica/mascota/123"
        );
        assert_eq!(
            Endpoint::PrescriptionsByRecord("55".into()).path(),
            "/recetas-mascota/ficha-ingreso/55"
        );
        assert_eq!(
            Endpoint::TreatmentsByRecord("55".into()).path(),
            "/tratamientos-mascotas/ficha-clinica/55"
        );
        assert_eq!(
            Endpoint::AdmissionsByRecord("55".into()).path(),
            "/ficha-ingreso/Ficha-clinica/55"
        );
        assert_eq!(Endpoint::Employees.path(), "/empleados");
    }

    #[test]
    fn test_url_with_base_path() {
        let base = Url::parse("http://localhost:3000/api").unwrap();
        let url = Endpoint::ClinicalRecordByPet("123".into()).url(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/ficha-clinica/mascota/123");

        let base = Url::parse("http://localhost:3000/api/").unwrap();
        let url = Endpoint::Employees.url(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/empleados");
    }

    #[test]
    fn test_url_encodes_identifier() {
        let base = Url::parse("http://localhost:3000").unwrap();
        let url = Endpoint::ClinicalRecordByPet("12/3 x".into()).url(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/ficha-clinica/mascota/12%2F3%20x");
    }
}
