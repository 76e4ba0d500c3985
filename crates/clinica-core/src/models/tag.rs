//! Tag catalog models.

use serde::{Deserialize, Serialize};

/// A catalog tag. Names are unique; the catalog lifecycle is independent of
/// patients, and assigning an unknown name catalogs it implicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub category: String,
}

impl Tag {
    /// Default category for implicitly created tags.
    pub const DEFAULT_CATEGORY: &'static str = "general";
}
