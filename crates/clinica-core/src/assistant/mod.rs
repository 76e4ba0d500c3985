//! Natural-language question resolver.
//!
//! Pipeline: Normalize → Classify intent → Extract parameters → Query the
//! record store → Format the answer.
//!
//! The public entry point is [`Assistant::resolve`], which is total: every
//! failure kind (unknown intent, missing parameter, empty result, store or
//! date fault) comes back as an answer string. Formatting is interleaved
//! with row iteration in the per-intent executors; the literal templates
//! below are the output contract.

mod extract;
mod intent;
mod store;
mod window;

pub use intent::Intent;
pub use store::RecordStore;
pub use window::WeekWindow;

use chrono::{Local, NaiveDate};
use log::debug;
use thiserror::Error;

use crate::db::DbError;

/// Resolver errors. These never cross [`Assistant::resolve`]; the dispatch
/// layer renders them into per-intent error strings.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error(transparent)]
    Store(#[from] DbError),

    #[error("{0}")]
    InvalidDate(String),
}

pub type AssistantResult<T> = Result<T, AssistantError>;

/// Maximum rows in the upcoming-appointments listing.
const UPCOMING_LIMIT: usize = 5;

/// Fixed fallback answer listing what the assistant understands.
const CAPABILITY_MENU: &str = "Puedo ayudarte con:\n\
• Contar pacientes por semana\n\
• Última visita de un paciente\n\
• Próximas citas\n\
• Buscar por etiquetas\n\
• Estadísticas generales";

/// The question resolver. Holds a borrowed store handle for its lifetime;
/// each call is independent and opens nothing of its own.
pub struct Assistant<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> Assistant<'a, S> {
    /// Create an assistant over an existing store handle.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve a free-text question to an answer string.
    ///
    /// Total: never panics and never returns an error. The "today" anchor
    /// is read from the system clock once per call.
    pub fn resolve(&self, question: &str) -> String {
        self.resolve_at(question, Local::now().date_naive())
    }

    /// [`resolve`](Self::resolve) with an explicit "today" anchor.
    ///
    /// The anchor feeds the default counting window, the upcoming listing
    /// and the statistics month; given the same anchor and unchanged store
    /// contents, identical questions yield identical answers.
    pub fn resolve_at(&self, question: &str, today: NaiveDate) -> String {
        let normalized = intent::normalize(question);
        let intent = intent::classify(&normalized);
        debug!("event=question_classified intent={:?}", intent);

        match intent {
            Intent::CountWeek => self
                .count_week(&normalized, today)
                .unwrap_or_else(|e| format!("Error al contar pacientes: {}", e)),
            Intent::LastVisit => self
                .last_visit(&normalized)
                .unwrap_or_else(|e| format!("Error al buscar la última visita: {}", e)),
            Intent::Upcoming => self
                .upcoming(today)
                .unwrap_or_else(|e| format!("Error al consultar las próximas citas: {}", e)),
            Intent::TagSearch => self
                .tag_search(&normalized)
                .unwrap_or_else(|e| format!("Error al buscar por etiqueta: {}", e)),
            Intent::Statistics => self
                .statistics(today)
                .unwrap_or_else(|e| format!("Error al calcular las estadísticas: {}", e)),
            Intent::Unknown => CAPABILITY_MENU.to_string(),
        }
    }

    /// Counting intent: distinct patients seen inside the 7-day window.
    fn count_week(&self, normalized: &str, today: NaiveDate) -> AssistantResult<String> {
        let window = window::week_window(normalized, today)?;
        let count = self
            .store
            .count_patients_with_appointment_between(&window.start, &window.end)?;
        Ok(format!(
            "En la semana del {} al {} hubo {} pacientes",
            window.start, window.end, count
        ))
    }

    /// Last-visit intent: latest appointment of the named patient.
    fn last_visit(&self, normalized: &str) -> AssistantResult<String> {
        let Some(fragment) = extract::name_fragment(normalized) else {
            return Ok(
                "¿De qué paciente quieres saber la última visita? \
                 Ej: 'última vez del paciente Juan'"
                    .to_string(),
            );
        };

        match self.store.latest_visit_by_name_fragment(&fragment)? {
            Some((name, date)) => Ok(format!(
                "El paciente {} vino por última vez el {}",
                name, date
            )),
            None => Ok(format!(
                "No se encontraron visitas para pacientes que coincidan con '{}'",
                fragment
            )),
        }
    }

    /// Upcoming intent: next appointments from today, earliest first.
    fn upcoming(&self, today: NaiveDate) -> AssistantResult<String> {
        let since = today.format("%Y-%m-%d").to_string();
        let rows = self.store.upcoming_appointments(&since, UPCOMING_LIMIT)?;

        if rows.is_empty() {
            return Ok("No hay próximas citas programadas".to_string());
        }

        let mut answer = String::from("Próximas citas:\n");
        for row in rows {
            answer.push_str(&format!(
                "• {} - {} - {}\n",
                row.patient_name,
                row.date,
                row.treatment.unwrap_or_default()
            ));
        }
        Ok(answer)
    }

    /// Tag-search intent: patients holding a tag containing the fragment.
    fn tag_search(&self, normalized: &str) -> AssistantResult<String> {
        let Some(fragment) = extract::tag_fragment(normalized) else {
            return Ok("¿Qué etiqueta buscas? Ej: 'pacientes con diabetes'".to_string());
        };

        let names = self.store.patient_names_by_tag_fragment(&fragment)?;
        if names.is_empty() {
            return Ok(format!("No hay pacientes con la etiqueta '{}'", fragment));
        }

        let mut answer = format!("Pacientes con etiqueta '{}':\n", fragment);
        for name in names {
            answer.push_str(&format!("• {}\n", name));
        }
        Ok(answer)
    }

    /// Statistics intent: patient total and this month's appointment count.
    fn statistics(&self, today: NaiveDate) -> AssistantResult<String> {
        let month = today.format("%Y-%m").to_string();
        let total = self.store.count_patients()?;
        let this_month = self.store.count_appointments_in_month(&month)?;
        Ok(format!(
            "Estadísticas:\n• Total pacientes: {}\n• Citas este mes: {}",
            total, this_month
        ))
    }
}
