//! Domain logic for the rabbit-breed registry.
//!
//! Pure types and rules shared by the database and API crates: the error
//! taxonomy, the common id type, and the field-validation rules. No database
//! or HTTP dependencies.

pub mod error;
pub mod types;
pub mod validation;
