//! Patient models.

use serde::{Deserialize, Serialize};

/// A stored patient record.
///
/// Ids are store-generated and stable; names are not guaranteed unique, so
/// name searches may match more than one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Store-generated identifier
    pub id: i64,
    /// Display name
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    /// Creation timestamp (set by the store)
    pub created_at: String,
}

/// Fields for a patient that has not been stored yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
}

impl NewPatient {
    /// Create a new patient with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_patient() {
        let patient = NewPatient::named("Juan Pérez");
        assert_eq!(patient.name, "Juan Pérez");
        assert!(patient.phone.is_none());
        assert!(patient.address.is_none());
    }

    #[test]
    fn test_patient_serializes() {
        let patient = Patient {
            id: 7,
            name: "Ana Gómez".into(),
            phone: Some("123456789".into()),
            email: None,
            date_of_birth: None,
            address: None,
            created_at: "2024-01-15 10:00:00".into(),
        };

        let json = serde_json::to_string(&patient).unwrap();
        let back: Patient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, patient);
    }
}
