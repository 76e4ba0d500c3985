//! Photo reference models.
//!
//! Photo binaries live on the file system; the store only keeps the path.

use serde::{Deserialize, Serialize};

/// A stored photo reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: i64,
    pub patient_id: i64,
    /// Capture timestamp, `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    /// Path to the image file outside the database
    pub file_path: String,
    pub description: Option<String>,
}
