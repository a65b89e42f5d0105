//! Breed models and request DTOs.
//!
//! [`BreedRow`] mirrors the `breed` table; [`Breed`] is the full aggregate
//! (base row plus category and alternate names) that the API serves and
//! accepts on PUT. Validation collects every offending JSON field name into
//! one aggregated error, per the rules in `warren_core::validation`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use warren_core::error::CoreError;
use warren_core::types::DbId;
use warren_core::validation;

/// A row from the `breed` table (base fields only).
#[derive(Debug, Clone, FromRow)]
pub struct BreedRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// The breed aggregate: base row plus child name lists.
///
/// Also the PUT request body, where the client supplies the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category_names: Vec<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
}

impl Breed {
    /// Assemble the aggregate from a base row and its child name lists.
    pub fn assemble(row: BreedRow, category_names: Vec<String>, alternate_names: Vec<String>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            category_names,
            alternate_names,
        }
    }

    /// Validate all fields, including the id, which must be positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut fields = Vec::new();
        if self.id <= 0 {
            fields.push("id");
        }
        collect_breed_fields(
            &mut fields,
            &self.name,
            &self.description,
            &self.category_names,
            &self.alternate_names,
        );
        validation::reject_fields(fields)
    }
}

/// POST request body for adding a breed. The id is server-generated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBreedRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category_names: Vec<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
}

impl AddBreedRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut fields = Vec::new();
        collect_breed_fields(
            &mut fields,
            &self.name,
            &self.description,
            &self.category_names,
            &self.alternate_names,
        );
        validation::reject_fields(fields)
    }
}

/// Push the JSON name of every failing field. A list field is reported once
/// even when several of its elements are invalid.
fn collect_breed_fields(
    fields: &mut Vec<&'static str>,
    name: &str,
    description: &str,
    category_names: &[String],
    alternate_names: &[String],
) {
    if !validation::breed_name_ok(name) {
        fields.push("name");
    }
    if !validation::description_ok(description) {
        fields.push("description");
    }
    if !category_names.iter().all(|c| validation::category_name_ok(c)) {
        fields.push("categoryNames");
    }
    if !alternate_names.iter().all(|a| validation::alternate_name_ok(a)) {
        fields.push("alternateNames");
    }
}
