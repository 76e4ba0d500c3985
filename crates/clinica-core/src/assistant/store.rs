//! The record-store capability the assistant reads through.

use crate::db::{Database, DbResult};
use crate::models::UpcomingAppointment;

/// Read operations the question resolver depends on.
///
/// The assistant is handed a store at construction and never opens its own
/// connection. Tests substitute fakes to drive empty-result and
/// store-failure paths deterministically.
///
/// All date parameters are zero-padded sortable strings (`YYYY-MM-DD`, or
/// `YYYY-MM` for the month prefix); implementations compare them lexically.
pub trait RecordStore {
    /// Distinct patients with an appointment in the inclusive range.
    fn count_patients_with_appointment_between(&self, start: &str, end: &str) -> DbResult<i64>;

    /// `(patient_name, latest_date)` for a name-fragment match, if any.
    fn latest_visit_by_name_fragment(&self, fragment: &str) -> DbResult<Option<(String, String)>>;

    /// Appointments on or after `since`, ascending, at most `limit` rows.
    fn upcoming_appointments(&self, since: &str, limit: usize)
        -> DbResult<Vec<UpcomingAppointment>>;

    /// Distinct patient names holding a tag containing the fragment.
    fn patient_names_by_tag_fragment(&self, fragment: &str) -> DbResult<Vec<String>>;

    /// Total patient count.
    fn count_patients(&self) -> DbResult<i64>;

    /// Appointments whose date starts with the `YYYY-MM` prefix.
    fn count_appointments_in_month(&self, month_prefix: &str) -> DbResult<i64>;
}

impl RecordStore for Database {
    fn count_patients_with_appointment_between(&self, start: &str, end: &str) -> DbResult<i64> {
        Database::count_patients_with_appointment_between(self, start, end)
    }

    fn latest_visit_by_name_fragment(&self, fragment: &str) -> DbResult<Option<(String, String)>> {
        Database::latest_visit_by_name_fragment(self, fragment)
    }

    fn upcoming_appointments(
        &self,
        since: &str,
        limit: usize,
    ) -> DbResult<Vec<UpcomingAppointment>> {
        Database::upcoming_appointments(self, since, limit)
    }

    fn patient_names_by_tag_fragment(&self, fragment: &str) -> DbResult<Vec<String>> {
        Database::patient_names_by_tag_fragment(self, fragment)
    }

    fn count_patients(&self) -> DbResult<i64> {
        Database::count_patients(self)
    }

    fn count_appointments_in_month(&self, month_prefix: &str) -> DbResult<i64> {
        Database::count_appointments_in_month(self, month_prefix)
    }
}
