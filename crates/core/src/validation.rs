//! Field-validation rules for inbound breed data.
//!
//! Pure character-class and length checks, no database dependencies. The API
//! layer collects the names of every failing field into one aggregated
//! [`CoreError::Validation`] message before any storage call happens.

use crate::error::CoreError;

/// Breed names: 2-64 word characters and spaces.
pub const BREED_NAME_MIN: usize = 2;
pub const BREED_NAME_MAX: usize = 64;

/// Descriptions: 2-4096 characters from a restricted punctuation set.
pub const DESCRIPTION_MIN: usize = 2;
pub const DESCRIPTION_MAX: usize = 4096;

/// Category names: 2-32 word characters, hyphens, and spaces.
pub const CATEGORY_NAME_MIN: usize = 2;
pub const CATEGORY_NAME_MAX: usize = 32;

/// Alternate names: 2-64 word characters, hyphens, and spaces.
pub const ALTERNATE_NAME_MIN: usize = 2;
pub const ALTERNATE_NAME_MAX: usize = 64;

/// Separator used when joining offending field names into one message.
pub const FIELD_SEPARATOR: &str = ", ";

/// ASCII word character, matching the `\w` class: `[A-Za-z0-9_]`.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn in_bounds(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    !value.trim().is_empty() && len >= min && len <= max
}

/// `[\w ]{2,64}`, non-blank.
pub fn breed_name_ok(value: &str) -> bool {
    in_bounds(value, BREED_NAME_MIN, BREED_NAME_MAX)
        && value.chars().all(|c| is_word_char(c) || c == ' ')
}

/// `[\w\s.,!"'$%@#^&*()?]{2,4096}`, non-blank.
pub fn description_ok(value: &str) -> bool {
    const PUNCTUATION: &str = ".,!\"'$%@#^&*()?";
    in_bounds(value, DESCRIPTION_MIN, DESCRIPTION_MAX)
        && value
            .chars()
            .all(|c| is_word_char(c) || c.is_whitespace() || PUNCTUATION.contains(c))
}

/// `[\w- ]{2,32}`, non-blank.
pub fn category_name_ok(value: &str) -> bool {
    in_bounds(value, CATEGORY_NAME_MIN, CATEGORY_NAME_MAX)
        && value.chars().all(|c| is_word_char(c) || c == '-' || c == ' ')
}

/// `[\w- ]{2,64}`, non-blank.
pub fn alternate_name_ok(value: &str) -> bool {
    in_bounds(value, ALTERNATE_NAME_MIN, ALTERNATE_NAME_MAX)
        && value.chars().all(|c| is_word_char(c) || c == '-' || c == ' ')
}

/// Build the aggregated validation error from the offending JSON field names.
///
/// Returns `Ok(())` when the list is empty.
pub fn reject_fields(fields: Vec<&'static str>) -> Result<(), CoreError> {
    if fields.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid field(s): {}",
            fields.join(FIELD_SEPARATOR)
        )))
    }
}
