//! Clinica Core Library
//!
//! Local-first records core for a single-operator clinic, plus a
//! natural-language question resolver over those records.
//!
//! # Architecture
//!
//! ```text
//! Question (free text, Spanish)
//!        │
//!        ▼
//! Intent Classifier ── ordered keyword sets, first match wins
//!        │
//!        ▼
//! Parameter Extractors ── date / patient-name fragment / tag fragment
//!        │
//!        ▼
//! Query Executor ──────► Record Store (SQLite)
//!        │                    patients, appointments, photos,
//!        ▼                    tag catalog, patient-tag links
//! Answer string (fixed Spanish templates)
//! ```
//!
//! # Core Principle
//!
//! **`Assistant::resolve` is total.** Every failure path — unknown intent,
//! missing parameter, empty result, store fault — terminates in a returned
//! answer string, never a panic or an error propagated to the caller.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer (the Record Store)
//! - [`models`]: Domain types (Patient, Appointment, Photo, Tag)
//! - [`assistant`]: Question resolver (classifier + extractors + executors)
//! - [`logging`]: File-based logging bootstrap

pub mod assistant;
pub mod db;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use assistant::{Assistant, AssistantError, Intent, RecordStore};
pub use db::Database;
pub use models::{
    Appointment, NewAppointment, NewPatient, Patient, Photo, Tag, UpcomingAppointment,
};
