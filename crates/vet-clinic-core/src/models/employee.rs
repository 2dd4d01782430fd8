//! Employee models.

use serde::{Deserialize, Serialize};

use super::envelope::{display_date, nullable_text, string_or_number};

/// A clinic employee as listed by `/empleados`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Backend ID, when the listing includes it
    #[serde(
        rename = "idEmpleado",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_id: Option<String>,
    /// National identity number (RUT)
    #[serde(rename = "rut", default, deserialize_with = "nullable_text")]
    pub identity_number: String,
    /// Given names
    #[serde(rename = "nombres", default, deserialize_with = "nullable_text")]
    pub given_names: String,
    #[serde(
        rename = "paterno",
        alias = "apellidoPaterno",
        default,
        deserialize_with = "nullable_text"
    )]
    pub paternal_surname: String,
    #[serde(
        rename = "materno",
        alias = "apellidoMaterno",
        default,
        deserialize_with = "nullable_text"
    )]
    pub maternal_surname: String,
    #[serde(rename = "fechaNacimiento", default, deserialize_with = "nullable_text")]
    pub birth_date: String,
    #[serde(rename = "direccion", default, deserialize_with = "nullable_text")]
    pub address: String,
    #[serde(rename = "telefono", default, deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    #[serde(rename = "correo", default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(rename = "sexo", default, deserialize_with = "nullable_text")]
    pub sex: String,
    /// Employment status (e.g. "Activo")
    #[serde(rename = "estado", default, deserialize_with = "nullable_text")]
    pub status: String,
    /// Role (cargo)
    #[serde(rename = "cargo", default, deserialize_with = "nullable_text")]
    pub role: String,
    #[serde(rename = "especialidad", default, deserialize_with = "nullable_text")]
    pub specialty: String,
}

impl Employee {
    /// Full name in display order.
    pub fn full_name(&self) -> String {
        [&self.given_names, &self.paternal_surname, &self.maternal_surname]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Data cells in employee table column order (without the operations column).
    pub fn table_cells(&self) -> Vec<String> {
        vec![
            self.identity_number.clone(),
            self.given_names.clone(),
            self.paternal_surname.clone(),
            self.maternal_surname.clone(),
            display_date(&self.birth_date),
            self.address.clone(),
            self.phone.clone().unwrap_or_default(),
            self.email.clone(),
            self.sex.clone(),
            self.status.clone(),
            self.role.clone(),
            self.specialty.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_from_backend_json() {
        let json = r#"{
            "idEmpleado": 7,
            "rut": "12.345.678-9",
            "nombres": "Ana María",
            "apellidoPaterno": "Soto",
            "materno": "Pérez",
            "fechaNacimiento": "1990-05-20T00:00:00.000Z",
            "direccion": "Av. Siempre Viva 742",
            "telefono": 56912345678,
            "correo": "ana@clinica.cl",
            "sexo": "F",
            "estado": "Activo",
            "cargo": "Veterinaria",
            "especialidad": "Felinos"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, Some("7".into()));
        assert_eq!(employee.paternal_surname, "Soto");
        assert_eq!(employee.phone, Some("56912345678".into()));
        assert_eq!(employee.full_name(), "Ana María Soto Pérez");
    }

    #[test]
    fn test_table_cells_order() {
        let employee = Employee {
            identity_number: "1-9".into(),
            given_names: "Luis".into(),
            birth_date: "1985-01-02".into(),
            specialty: "Cirugía".into(),
            ..Employee::default()
        };

        let cells = employee.table_cells();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], "1-9");
        assert_eq!(cells[1], "Luis");
        assert_eq!(cells[4], "02-01-1985");
        assert_eq!(cells[11], "Cirugía");
    }
}
