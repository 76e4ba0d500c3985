//! Domain models for the clinic record store.

mod appointment;
mod patient;
mod photo;
mod tag;

pub use appointment::*;
pub use patient::*;
pub use photo::*;
pub use tag::*;
