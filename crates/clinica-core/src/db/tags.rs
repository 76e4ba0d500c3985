//! Tag catalog and patient-tag association operations.

use rusqlite::params;

use super::{Database, DbError, DbResult};
use crate::models::Tag;

impl Database {
    /// Add a tag to the catalog if absent, returning its id either way.
    ///
    /// Never errors on a name collision: the catalog contract is
    /// insert-if-absent.
    pub fn add_tag(&self, name: &str) -> DbResult<i64> {
        self.conn
            .execute("INSERT OR IGNORE INTO tags (name) VALUES (?)", [name])?;
        self.conn
            .query_row("SELECT id FROM tags WHERE name = ?", [name], |row| {
                row.get(0)
            })
            .map_err(Into::into)
    }

    /// All catalog tags ordered by name.
    pub fn list_tags(&self) -> DbResult<Vec<Tag>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, category FROM tags ORDER BY name")?;

        let rows = stmt.query_map([], |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
                category: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Assign a tag to a patient, cataloging the name first if unknown.
    ///
    /// Assigning the same tag twice is a no-op; the (patient, tag) pair is
    /// unique in the store.
    pub fn assign_tag(&self, patient_id: i64, name: &str) -> DbResult<()> {
        if self.get_patient(patient_id)?.is_none() {
            return Err(DbError::NotFound(format!("patient {}", patient_id)));
        }
        let tag_id = self.add_tag(name)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO patient_tags (patient_id, tag_id) VALUES (?1, ?2)",
            [patient_id, tag_id],
        )?;
        Ok(())
    }

    /// Tag names assigned to one patient.
    pub fn tags_for_patient(&self, patient_id: i64) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT t.name
            FROM tags t
            JOIN patient_tags pt ON t.id = pt.tag_id
            WHERE pt.patient_id = ?
            ORDER BY t.name
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Remove a tag from a patient. The catalog entry stays.
    pub fn unassign_tag(&self, patient_id: i64, name: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            DELETE FROM patient_tags
            WHERE patient_id = ?1 AND tag_id IN (
                SELECT id FROM tags WHERE name = ?2
            )
            "#,
            params![patient_id, name],
        )?;
        Ok(rows_affected > 0)
    }

    /// Names of patients holding a tag whose name contains the fragment
    /// (case-insensitive for ASCII). One row per matching patient, ordered
    /// by patient id, the store's natural order, so rendering is
    /// deterministic.
    pub fn patient_names_by_tag_fragment(&self, fragment: &str) -> DbResult<Vec<String>> {
        let pattern = format!("%{}%", fragment);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT p.name
            FROM patients p
            JOIN patient_tags pt ON p.id = pt.patient_id
            JOIN tags t ON pt.tag_id = t.id
            WHERE t.name LIKE ?
            GROUP BY p.id
            ORDER BY p.id
            "#,
        )?;

        let rows = stmt.query_map([pattern], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPatient;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_add_tag_is_upsert() {
        let db = setup_db();

        let first = db.add_tag("vendaje").unwrap();
        let second = db.add_tag("vendaje").unwrap();
        assert_eq!(first, second);

        // Seeded tags resolve to their existing id too
        let seeded = db.add_tag("diabetes").unwrap();
        assert!(seeded > 0);
    }

    #[test]
    fn test_assign_catalogs_unknown_tag() {
        let db = setup_db();
        let id = db.add_patient(&NewPatient::named("Juan")).unwrap();

        db.assign_tag(id, "pie cavo").unwrap();

        let tags = db.list_tags().unwrap();
        let created = tags.iter().find(|t| t.name == "pie cavo").unwrap();
        assert_eq!(created.category, Tag::DEFAULT_CATEGORY);
        assert_eq!(db.tags_for_patient(id).unwrap(), vec!["pie cavo"]);
    }

    #[test]
    fn test_assign_twice_is_noop() {
        let db = setup_db();
        let id = db.add_patient(&NewPatient::named("Juan")).unwrap();

        db.assign_tag(id, "diabetes").unwrap();
        db.assign_tag(id, "diabetes").unwrap();

        assert_eq!(db.tags_for_patient(id).unwrap().len(), 1);
    }

    #[test]
    fn test_assign_to_missing_patient() {
        let db = setup_db();
        let result = db.assign_tag(42, "diabetes");
        assert!(matches!(result, Err(DbError::NotFound(_))));
    }

    #[test]
    fn test_unassign_keeps_catalog_entry() {
        let db = setup_db();
        let id = db.add_patient(&NewPatient::named("Juan")).unwrap();

        db.assign_tag(id, "hongos").unwrap();
        assert!(db.unassign_tag(id, "hongos").unwrap());
        assert!(!db.unassign_tag(id, "hongos").unwrap());

        assert!(db.tags_for_patient(id).unwrap().is_empty());
        assert!(db.list_tags().unwrap().iter().any(|t| t.name == "hongos"));
    }

    #[test]
    fn test_fragment_matches_superstrings() {
        let db = setup_db();
        let juan = db.add_patient(&NewPatient::named("Juan")).unwrap();
        let ana = db.add_patient(&NewPatient::named("Ana")).unwrap();
        let luis = db.add_patient(&NewPatient::named("Luis")).unwrap();

        db.assign_tag(juan, "diabetes").unwrap();
        db.assign_tag(ana, "diabetes tipo 2").unwrap();
        db.assign_tag(luis, "hongos").unwrap();

        let names = db.patient_names_by_tag_fragment("diabetes").unwrap();
        assert_eq!(names, vec!["Juan", "Ana"]);
    }

    #[test]
    fn test_fragment_distinct_names() {
        let db = setup_db();
        let juan = db.add_patient(&NewPatient::named("Juan")).unwrap();

        // Two matching tags on the same patient yield one row
        db.assign_tag(juan, "diabetes").unwrap();
        db.assign_tag(juan, "diabetes tipo 2").unwrap();

        let names = db.patient_names_by_tag_fragment("diabetes").unwrap();
        assert_eq!(names, vec!["Juan"]);
    }
}
