//! JSON catalog format.
//!
//! A catalog document maps course names to their definitions:
//!
//! ```json
//! { "Algorithms": { "prerequisites": ["Data Structures"], "description": "..." } }
//! ```
//!
//! Document order is kept and becomes registry order.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use super::{AppError, CourseId, CourseRecord, CourseRegistry};

const DEFAULT_CATALOG: &str = include_str!("../assets/default_catalog.json");

#[derive(Debug, Deserialize)]
struct CourseEntry {
    #[serde(default)]
    prerequisites: Vec<CourseId>,
    #[serde(default)]
    description: Option<String>,
}

/// Catalog entries in document order.
struct CatalogDocument(Vec<(CourseId, CourseEntry)>);

impl<'de> Deserialize<'de> for CatalogDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = CatalogDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of course names to course definitions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<CourseId, CourseEntry>()? {
                    entries.push(entry);
                }
                Ok(CatalogDocument(entries))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// Parse a JSON catalog document into a registry.
pub fn parse_catalog(content: &str) -> Result<CourseRegistry, AppError> {
    let document: CatalogDocument =
        serde_json::from_str(content).map_err(|e| AppError::parse_error("course catalog", e))?;

    CourseRegistry::from_records(document.0.into_iter().map(|(id, entry)| CourseRecord {
        id,
        description: entry.description.unwrap_or_default(),
        prerequisites: entry.prerequisites,
    }))
}

/// The built-in catalog used when no catalog file exists.
pub fn default_registry() -> Result<CourseRegistry, AppError> {
    parse_catalog(DEFAULT_CATALOG)
}
