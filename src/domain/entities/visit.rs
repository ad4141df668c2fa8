//! Visit entity: a dated note attached to a pet.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::identity::EntityId;

/// A single clinic visit.
///
/// Owned exclusively by its pet. The date defaults to the current day at
/// construction; the description is required and checked at validation
/// time, not here.
#[derive(Debug, Clone, Serialize)]
pub struct Visit {
    pub id: EntityId,
    pub date: NaiveDate,
    pub description: String,
}

impl Visit {
    /// Creates an unsaved visit dated today, with an empty description.
    pub fn new() -> Self {
        Self {
            id: EntityId::unassigned(),
            date: Local::now().date_naive(),
            description: String::new(),
        }
    }
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}
