//! SQLite schema definition.

/// Complete database schema for the clinic record store.
///
/// Appointment and photo dates are stored as sortable text. Callers must
/// supply zero-padded `YYYY-MM-DD[ HH:MM]` values: range filters and
/// ordering in the query layer compare these strings lexically.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone TEXT,
    email TEXT,
    date_of_birth TEXT,
    address TEXT,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

-- ============================================================================
-- Appointments
-- ============================================================================

CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    date TEXT NOT NULL,
    notes TEXT,
    treatment TEXT
);

CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id);
CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date);

-- ============================================================================
-- Photos (binaries live on the file system; rows hold path references)
-- ============================================================================

CREATE TABLE IF NOT EXISTS photos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    date TEXT NOT NULL,
    file_path TEXT NOT NULL,
    description TEXT
);

CREATE INDEX IF NOT EXISTS idx_photos_patient ON photos(patient_id);

-- ============================================================================
-- Tag catalog and patient-tag associations
-- ============================================================================

CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL,
    category TEXT NOT NULL DEFAULT 'general'
);

CREATE TABLE IF NOT EXISTS patient_tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    tag_id INTEGER NOT NULL REFERENCES tags(id),
    UNIQUE(patient_id, tag_id)
);

CREATE INDEX IF NOT EXISTS idx_patient_tags_patient ON patient_tags(patient_id);
CREATE INDEX IF NOT EXISTS idx_patient_tags_tag ON patient_tags(tag_id);

-- Seed the common clinic vocabulary
INSERT OR IGNORE INTO tags (name) VALUES
    ('diabetes'),
    ('uñero'),
    ('hongos'),
    ('callos'),
    ('juanetes'),
    ('pie plano'),
    ('espolón'),
    ('circulación'),
    ('anciano'),
    ('deportista'),
    ('niño'),
    ('adulto mayor'),
    ('diabético'),
    ('postoperatorio');
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        // Second run must not error or duplicate seed tags
        conn.execute_batch(SCHEMA).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM tags WHERE name = 'diabetes'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_tag_name_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute("INSERT INTO tags (name) VALUES ('vendaje')", [])
            .unwrap();
        let result = conn.execute("INSERT INTO tags (name) VALUES ('vendaje')", []);
        assert!(result.is_err());

        // INSERT OR IGNORE on a collision must succeed without duplicating
        conn.execute("INSERT OR IGNORE INTO tags (name) VALUES ('vendaje')", [])
            .unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tags WHERE name = 'vendaje'", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_patient_tag_pair_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute("INSERT INTO patients (name) VALUES ('Ana')", [])
            .unwrap();
        let patient_id = conn.last_insert_rowid();
        let tag_id: i64 = conn
            .query_row("SELECT id FROM tags WHERE name = 'diabetes'", [], |r| {
                r.get(0)
            })
            .unwrap();

        conn.execute(
            "INSERT INTO patient_tags (patient_id, tag_id) VALUES (?1, ?2)",
            [patient_id, tag_id],
        )
        .unwrap();
        let result = conn.execute(
            "INSERT INTO patient_tags (patient_id, tag_id) VALUES (?1, ?2)",
            [patient_id, tag_id],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_tags_present() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))
            .unwrap();
        assert!(count >= 14);
    }
}
