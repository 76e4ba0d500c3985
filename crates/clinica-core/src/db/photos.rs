//! Photo reference database operations.

use chrono::Local;
use rusqlite::params;

use super::{Database, DbResult};
use crate::models::Photo;

impl Database {
    /// Insert a photo reference, stamped with the current local time.
    pub fn add_photo(
        &self,
        patient_id: i64,
        file_path: &str,
        description: Option<&str>,
    ) -> DbResult<i64> {
        let date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.conn.execute(
            r#"
            INSERT INTO photos (patient_id, date, file_path, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![patient_id, date, file_path, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All photo references for one patient, newest first.
    pub fn photos_for_patient(&self, patient_id: i64) -> DbResult<Vec<Photo>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, date, file_path, description
            FROM photos
            WHERE patient_id = ?
            ORDER BY date DESC
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| {
            Ok(Photo {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                date: row.get(2)?,
                file_path: row.get(3)?,
                description: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPatient;

    #[test]
    fn test_add_and_list_photos() {
        let db = Database::open_in_memory().unwrap();
        let id = db.add_patient(&NewPatient::named("Juan")).unwrap();

        db.add_photo(id, "fotos/juan_1.jpg", Some("antes del tratamiento"))
            .unwrap();
        db.add_photo(id, "fotos/juan_2.jpg", None).unwrap();

        let photos = db.photos_for_patient(id).unwrap();
        assert_eq!(photos.len(), 2);
        assert!(photos.iter().any(|p| p.file_path == "fotos/juan_1.jpg"));
        assert!(photos.iter().all(|p| !p.date.is_empty()));
    }

    #[test]
    fn test_photos_empty_for_unknown_patient() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.photos_for_patient(99).unwrap().is_empty());
    }
}
