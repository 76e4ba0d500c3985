//! Appointment models.

use serde::{Deserialize, Serialize};

/// A stored appointment.
///
/// `date` is a sortable text value (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM`).
/// The store orders and range-filters these lexically, so values must be
/// zero-padded; a bare month "9" would sort after "10".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    /// Owning patient; deleting the patient deletes the appointment
    pub patient_id: i64,
    pub date: String,
    pub notes: Option<String>,
    pub treatment: Option<String>,
}

/// Fields for an appointment that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub patient_id: i64,
    pub date: String,
    pub notes: Option<String>,
    pub treatment: Option<String>,
}

impl NewAppointment {
    /// Create an appointment for a patient on a given date.
    pub fn on(patient_id: i64, date: impl Into<String>) -> Self {
        Self {
            patient_id,
            date: date.into(),
            notes: None,
            treatment: None,
        }
    }

    pub fn with_treatment(mut self, treatment: impl Into<String>) -> Self {
        self.treatment = Some(treatment.into());
        self
    }
}

/// One row of the upcoming-appointments listing: the appointment joined to
/// its patient's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingAppointment {
    pub patient_name: String,
    pub date: String,
    pub treatment: Option<String>,
}
