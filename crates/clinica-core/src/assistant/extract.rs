//! Parameter extraction from question text.
//!
//! Each extractor pulls one search term out of the normalized question with
//! a fixed pattern. Extractors return `None` when the pattern is absent;
//! the caller turns that into a usage-hint answer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Explicit date token: `D/M/YYYY` or `D-M-YYYY`, 1-2 digit day and month.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{4})").expect("date pattern is valid")
});

/// First word after the literal token "paciente".
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"paciente\s+(\w+)").expect("name pattern is valid"));

/// Tag term: first word after "etiqueta", or after "con".
///
/// The "con" alternative also fires on unrelated phrases ("pacientes con
/// cita hoy" extracts "cita"). That looseness is inherited behavior the
/// product relies on; do not tighten it here.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"etiqueta\s+(\w+)|con\s+(\w+)").expect("tag pattern is valid"));

/// A day/month/year triple as written in the question, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// Find an explicit date token in the question.
pub fn date_token(text: &str) -> Option<DateToken> {
    let caps = DATE_PATTERN.captures(text)?;
    // The sub-patterns are all-digit and short enough that parsing can only
    // fail on a year above i32::MAX, which four digits cannot reach.
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    Some(DateToken { day, month, year })
}

/// Extract the patient-name fragment following "paciente".
pub fn name_fragment(text: &str) -> Option<String> {
    NAME_PATTERN
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Extract the tag fragment: the first non-empty capture group wins.
pub fn tag_fragment(text: &str) -> Option<String> {
    let caps = TAG_PATTERN.captures(text)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
