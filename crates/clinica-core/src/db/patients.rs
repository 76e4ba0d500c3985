//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{NewPatient, Patient};

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        date_of_birth: row.get(4)?,
        address: row.get(5)?,
        created_at: row.get(6)?,
    })
}

const PATIENT_COLUMNS: &str = "id, name, phone, email, date_of_birth, address, created_at";

impl Database {
    /// Insert a new patient, returning the generated id.
    pub fn add_patient(&self, patient: &NewPatient) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO patients (name, phone, email, date_of_birth, address)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                patient.name,
                patient.phone,
                patient.email,
                patient.date_of_birth,
                patient.address,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing patient's contact fields.
    pub fn update_patient(&self, id: i64, patient: &NewPatient) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE patients SET
                name = ?2,
                phone = ?3,
                email = ?4,
                date_of_birth = ?5,
                address = ?6
            WHERE id = ?1
            "#,
            params![
                id,
                patient.name,
                patient.phone,
                patient.email,
                patient.date_of_birth,
                patient.address,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?"),
                [id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Search patients by name (substring match, case-insensitive for ASCII).
    pub fn search_patients(&self, query: &str) -> DbResult<Vec<Patient>> {
        let pattern = format!("%{}%", query);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE name LIKE ? ORDER BY name"
        ))?;

        let rows = stmt.query_map([pattern], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all patients ordered by name.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY name"))?;

        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count all patients.
    pub fn count_patients(&self) -> DbResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// Delete a patient and everything that references it.
    ///
    /// Tag associations, photo references and appointments go first to
    /// respect the foreign keys; the whole cascade is one transaction, so a
    /// failure rolls back all four deletions.
    pub fn delete_patient(&mut self, id: i64) -> DbResult<bool> {
        let tx = self.transaction()?;

        tx.execute("DELETE FROM patient_tags WHERE patient_id = ?", [id])?;
        tx.execute("DELETE FROM photos WHERE patient_id = ?", [id])?;
        tx.execute("DELETE FROM appointments WHERE patient_id = ?", [id])?;
        let rows_affected = tx.execute("DELETE FROM patients WHERE id = ?", [id])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewAppointment;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let db = setup_db();

        let mut patient = NewPatient::named("Juan Pérez");
        patient.phone = Some("123456789".into());
        patient.email = Some("juan@email.com".into());

        let id = db.add_patient(&patient).unwrap();

        let retrieved = db.get_patient(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Juan Pérez");
        assert_eq!(retrieved.phone, Some("123456789".into()));
        assert!(!retrieved.created_at.is_empty());
    }

    #[test]
    fn test_get_missing_patient() {
        let db = setup_db();
        assert!(db.get_patient(999).unwrap().is_none());
    }

    #[test]
    fn test_update_patient() {
        let db = setup_db();

        let id = db.add_patient(&NewPatient::named("Ana")).unwrap();

        let mut updated = NewPatient::named("Ana Gómez");
        updated.address = Some("Calle Mayor 1".into());
        assert!(db.update_patient(id, &updated).unwrap());

        let retrieved = db.get_patient(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Ana Gómez");
        assert_eq!(retrieved.address, Some("Calle Mayor 1".into()));

        // Updating a missing id affects no rows
        assert!(!db.update_patient(999, &updated).unwrap());
    }

    #[test]
    fn test_search_patients_substring() {
        let db = setup_db();

        db.add_patient(&NewPatient::named("Juan Pérez")).unwrap();
        db.add_patient(&NewPatient::named("María Juanes")).unwrap();
        db.add_patient(&NewPatient::named("Ana López")).unwrap();

        // Substring, not prefix: "Juan" also matches inside "Juanes"
        let results = db.search_patients("Juan").unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|p| p.name == "Juan Pérez"));
        assert!(results.iter().any(|p| p.name == "María Juanes"));
    }

    #[test]
    fn test_list_patients_ordered_by_name() {
        let db = setup_db();

        db.add_patient(&NewPatient::named("María")).unwrap();
        db.add_patient(&NewPatient::named("Ana")).unwrap();
        db.add_patient(&NewPatient::named("Juan")).unwrap();

        let names: Vec<String> = db
            .list_patients()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Juan", "María"]);
    }

    #[test]
    fn test_count_patients() {
        let db = setup_db();
        assert_eq!(db.count_patients().unwrap(), 0);

        db.add_patient(&NewPatient::named("Juan")).unwrap();
        db.add_patient(&NewPatient::named("Ana")).unwrap();
        assert_eq!(db.count_patients().unwrap(), 2);
    }

    #[test]
    fn test_delete_patient_cascades() {
        let mut db = setup_db();

        let id = db.add_patient(&NewPatient::named("Juan")).unwrap();
        db.add_appointment(&NewAppointment::on(id, "2024-01-15"))
            .unwrap();
        db.add_photo(id, "fotos/juan_1.jpg", Some("antes")).unwrap();
        db.assign_tag(id, "diabetes").unwrap();

        assert!(db.delete_patient(id).unwrap());

        assert!(db.get_patient(id).unwrap().is_none());
        assert!(db.appointments_for_patient(id).unwrap().is_empty());
        assert!(db.photos_for_patient(id).unwrap().is_empty());
        assert!(db.tags_for_patient(id).unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_patient() {
        let mut db = setup_db();
        assert!(!db.delete_patient(42).unwrap());
    }
}
