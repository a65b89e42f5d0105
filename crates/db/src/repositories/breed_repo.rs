//! Repository for the `breed`, `category`, `alt_name`, and `breed_category`
//! tables.
//!
//! Every statement uses bound parameters; no user input reaches the SQL
//! text. Methods take a `&mut PgConnection` so the service layer can run a
//! whole request inside one transaction.

use sqlx::PgConnection;
use warren_core::types::DbId;

use crate::models::breed::{BreedRow, Category};

/// Column list for `breed` queries.
const BREED_COLUMNS: &str = "id, name, description";

/// Provides the statement set for breeds and their child tables.
pub struct BreedRepo;

impl BreedRepo {
    // -----------------------------------------------------------------------
    // Breed base rows
    // -----------------------------------------------------------------------

    /// All breeds (base fields only), sorted by name.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<BreedRow>, sqlx::Error> {
        let query = format!("SELECT {BREED_COLUMNS} FROM breed ORDER BY name");
        sqlx::query_as::<_, BreedRow>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a breed by id. `None` means not found, not an error.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<BreedRow>, sqlx::Error> {
        let query = format!("SELECT {BREED_COLUMNS} FROM breed WHERE id = $1");
        sqlx::query_as::<_, BreedRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Insert a breed and return the generated id.
    ///
    /// A duplicate name violates `uq_breed_name` and surfaces as a database
    /// error with code 23505; classification happens in the caller.
    pub async fn insert(
        conn: &mut PgConnection,
        name: &str,
        description: &str,
    ) -> Result<DbId, sqlx::Error> {
        tracing::debug!(name, "Inserting breed");
        sqlx::query_scalar("INSERT INTO breed (name, description) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(description)
            .fetch_one(&mut *conn)
            .await
    }

    /// Update a breed's base fields. Returns `false` when the id is unknown.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        name: &str,
        description: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE breed SET name = $1, description = $2 WHERE id = $3")
            .bind(name)
            .bind(description)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Delete a breed. Child rows go with it via ON DELETE CASCADE.
    /// Returns `false` when the id is unknown.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        tracing::debug!(breed_id = id, "Deleting breed");
        let result = sqlx::query("DELETE FROM breed WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    // -----------------------------------------------------------------------
    // Alternate names
    // -----------------------------------------------------------------------

    /// Alternate names for a breed, sorted lexically.
    pub async fn alternate_names(
        conn: &mut PgConnection,
        breed_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM alt_name WHERE breed_id = $1 ORDER BY name")
            .bind(breed_id)
            .fetch_all(&mut *conn)
            .await
    }

    pub async fn insert_alternate_name(
        conn: &mut PgConnection,
        breed_id: DbId,
        name: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO alt_name (breed_id, name) VALUES ($1, $2)")
            .bind(breed_id)
            .bind(name)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn delete_alternate_names(
        conn: &mut PgConnection,
        breed_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM alt_name WHERE breed_id = $1")
            .bind(breed_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Categories and associations
    // -----------------------------------------------------------------------

    /// Category names linked to a breed, sorted lexically.
    pub async fn category_names(
        conn: &mut PgConnection,
        breed_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT c.name FROM category c \
             JOIN breed_category bc ON bc.category_id = c.id \
             WHERE bc.breed_id = $1 \
             ORDER BY c.name",
        )
        .bind(breed_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Look up a category by name, creating it on first reference.
    ///
    /// The common case is a plain SELECT. On a miss the insert uses
    /// `ON CONFLICT DO UPDATE ... RETURNING` so two concurrent requests
    /// creating the same name converge on the single winning row instead of
    /// one of them failing on `uq_category_name`.
    pub async fn find_or_create_category(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let existing = sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(category) = existing {
            return Ok(category);
        }

        sqlx::query_as::<_, Category>(
            "INSERT INTO category (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn link_category(
        conn: &mut PgConnection,
        breed_id: DbId,
        category_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO breed_category (breed_id, category_id) VALUES ($1, $2)")
            .bind(breed_id)
            .bind(category_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn delete_category_links(
        conn: &mut PgConnection,
        breed_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM breed_category WHERE breed_id = $1")
            .bind(breed_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
