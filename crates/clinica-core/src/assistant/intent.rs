//! Question intent classification.
//!
//! The classifier tests the normalized question against fixed keyword sets
//! in a fixed priority order; the first set that matches wins. The sets are
//! not mutually exclusive ("etiqueta" and "semana" can both appear in one
//! question), so the order below is part of the observable contract and
//! must not be rearranged.

/// Counting intent: both a patient-count phrase and the week word.
const COUNT_PATIENT_PHRASES: &[&str] = &["cuántos pacientes", "cuantos pacientes"];
const COUNT_WEEK_PHRASES: &[&str] = &["semana"];

/// Last-visit intent.
const LAST_VISIT_PHRASES: &[&str] = &["última vez", "ultima vez", "cuándo vino", "cuando vino"];

/// Upcoming-appointments intent.
const UPCOMING_PHRASES: &[&str] = &["próximas citas", "proximas citas", "citas de hoy"];

/// Tag-search intent.
const TAG_SEARCH_PHRASES: &[&str] = &["pacientes con", "etiqueta"];

/// Statistics intent.
const STATISTICS_PHRASES: &[&str] = &["estadísticas", "estadisticas", "resumen"];

/// The classified purpose of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Count distinct patients seen in a 7-day window
    CountWeek,
    /// Latest visit date of a named patient
    LastVisit,
    /// Next appointments from today
    Upcoming,
    /// Patients holding a tag
    TagSearch,
    /// Clinic totals
    Statistics,
    /// No keyword set matched; answer with the capability menu
    Unknown,
}

/// Lowercase and trim a raw question before classification and extraction.
pub fn normalize(question: &str) -> String {
    question.to_lowercase().trim().to_string()
}

/// Classify a normalized question. First match in priority order wins.
pub fn classify(normalized: &str) -> Intent {
    if contains_any(normalized, COUNT_PATIENT_PHRASES)
        && contains_any(normalized, COUNT_WEEK_PHRASES)
    {
        Intent::CountWeek
    } else if contains_any(normalized, LAST_VISIT_PHRASES) {
        Intent::LastVisit
    } else if contains_any(normalized, UPCOMING_PHRASES) {
        Intent::Upcoming
    } else if contains_any(normalized, TAG_SEARCH_PHRASES) {
        Intent::TagSearch
    } else if contains_any(normalized, STATISTICS_PHRASES) {
        Intent::Statistics
    } else {
        Intent::Unknown
    }
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}
