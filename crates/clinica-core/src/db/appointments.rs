//! Appointment database operations.
//!
//! Dates are compared lexically. Every query here assumes zero-padded
//! `YYYY-MM-DD[ HH:MM]` strings, matching what the write path stores.

use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::{Appointment, NewAppointment, UpcomingAppointment};

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        date: row.get(2)?,
        notes: row.get(3)?,
        treatment: row.get(4)?,
    })
}

impl Database {
    /// Insert a new appointment, returning the generated id.
    pub fn add_appointment(&self, appointment: &NewAppointment) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO appointments (patient_id, date, notes, treatment)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                appointment.patient_id,
                appointment.date,
                appointment.notes,
                appointment.treatment,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All appointments for one patient, newest first.
    pub fn appointments_for_patient(&self, patient_id: i64) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, date, notes, treatment
            FROM appointments
            WHERE patient_id = ?
            ORDER BY date DESC
            "#,
        )?;

        let rows = stmt.query_map([patient_id], appointment_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Appointments on a specific day (prefix match, so a bare `YYYY-MM-DD`
    /// also finds timed entries).
    pub fn appointments_on(&self, date: &str) -> DbResult<Vec<Appointment>> {
        let pattern = format!("{}%", date);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, date, notes, treatment
            FROM appointments
            WHERE date LIKE ?
            ORDER BY date
            "#,
        )?;

        let rows = stmt.query_map([pattern], appointment_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Distinct patients with an appointment in the inclusive date range.
    pub fn count_patients_with_appointment_between(
        &self,
        start: &str,
        end: &str,
    ) -> DbResult<i64> {
        self.conn
            .query_row(
                r#"
                SELECT COUNT(DISTINCT patient_id)
                FROM appointments
                WHERE date BETWEEN ?1 AND ?2
                "#,
                [start, end],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    /// Latest appointment date for a patient whose name contains the
    /// fragment. Returns `(patient_name, latest_date)` for the first
    /// matching name, or `None` when no match has any appointment.
    pub fn latest_visit_by_name_fragment(
        &self,
        fragment: &str,
    ) -> DbResult<Option<(String, String)>> {
        let pattern = format!("%{}%", fragment);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT p.name, MAX(a.date)
            FROM appointments a
            JOIN patients p ON a.patient_id = p.id
            WHERE p.name LIKE ?
            GROUP BY p.name
            "#,
        )?;

        let mut rows = stmt.query([pattern])?;
        match rows.next()? {
            Some(row) => Ok(Some((row.get(0)?, row.get(1)?))),
            None => Ok(None),
        }
    }

    /// Appointments on or after `since`, ascending, joined to the patient
    /// name, capped at `limit` rows.
    pub fn upcoming_appointments(
        &self,
        since: &str,
        limit: usize,
    ) -> DbResult<Vec<UpcomingAppointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT p.name, a.date, a.treatment
            FROM appointments a
            JOIN patients p ON a.patient_id = p.id
            WHERE a.date >= ?
            ORDER BY a.date
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map(params![since, limit as i64], |row| {
            Ok(UpcomingAppointment {
                patient_name: row.get(0)?,
                date: row.get(1)?,
                treatment: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Appointments whose date starts with the `YYYY-MM` prefix.
    pub fn count_appointments_in_month(&self, month_prefix: &str) -> DbResult<i64> {
        let pattern = format!("{}%", month_prefix);
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM appointments WHERE date LIKE ?",
                [pattern],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }
}
