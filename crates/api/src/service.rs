//! Breed aggregate assembly.
//!
//! [`BreedService`] composes full breed records from the base row plus two
//! child-row queries, and owns the transaction boundary: every operation
//! runs its statements inside one transaction that commits before the
//! response is produced and rolls back on any failure, so writes are
//! all-or-nothing.

use sqlx::PgConnection;
use warren_core::error::CoreError;
use warren_core::types::DbId;
use warren_db::models::breed::{AddBreedRequest, Breed};
use warren_db::repositories::BreedRepo;
use warren_db::DbPool;

use crate::error::{AppError, AppResult};

/// Stateless component over a connection pool. Constructed explicitly and
/// stored in `AppState`; no process-wide singletons.
#[derive(Clone)]
pub struct BreedService {
    pool: DbPool,
}

impl BreedService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All breeds with children attached, ordered by the base query (name
    /// ascending).
    pub async fn list_breeds(&self) -> AppResult<Vec<Breed>> {
        let mut tx = self.pool.begin().await?;

        let rows = BreedRepo::list_all(&mut tx).await?;
        let mut breeds = Vec::with_capacity(rows.len());
        for row in rows {
            let alternates = BreedRepo::alternate_names(&mut tx, row.id).await?;
            let categories = BreedRepo::category_names(&mut tx, row.id).await?;
            breeds.push(Breed::assemble(row, categories, alternates));
        }

        tx.commit().await?;
        Ok(breeds)
    }

    /// One breed with children attached, or NotFound.
    pub async fn get_breed(&self, id: DbId) -> AppResult<Breed> {
        let mut tx = self.pool.begin().await?;
        let breed = fetch_breed(&mut tx, id).await?;
        tx.commit().await?;
        Ok(breed)
    }

    /// Insert the base row, then reuse-or-create and link each category and
    /// insert each alternate name, all in request order. Returns the
    /// assembled breed with the generated id and the submitted children
    /// echoed back.
    ///
    /// Duplicate names within one request are deliberately not deduplicated;
    /// they produce duplicate child rows.
    pub async fn add_breed(&self, request: AddBreedRequest) -> AppResult<Breed> {
        let mut tx = self.pool.begin().await?;

        let id = BreedRepo::insert(&mut tx, &request.name, &request.description)
            .await
            .map_err(classify_duplicate_name)?;
        insert_children(&mut tx, id, &request.category_names, &request.alternate_names).await?;

        tx.commit().await?;
        tracing::info!(breed_id = id, name = %request.name, "Breed added");

        Ok(Breed {
            id,
            name: request.name,
            description: request.description,
            category_names: request.category_names,
            alternate_names: request.alternate_names,
        })
    }

    /// Update the base row, then wholesale-replace the children: delete all
    /// existing alternate names and category links, reinsert from the
    /// request. An unknown id fails with NotFound before any child rows are
    /// touched.
    pub async fn modify_breed(&self, breed: Breed) -> AppResult<Breed> {
        let mut tx = self.pool.begin().await?;

        let updated = BreedRepo::update(&mut tx, breed.id, &breed.name, &breed.description)
            .await
            .map_err(classify_duplicate_name)?;
        if !updated {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Breed",
                id: breed.id,
            }));
        }

        BreedRepo::delete_alternate_names(&mut tx, breed.id).await?;
        BreedRepo::delete_category_links(&mut tx, breed.id).await?;
        insert_children(&mut tx, breed.id, &breed.category_names, &breed.alternate_names).await?;

        tx.commit().await?;
        tracing::info!(breed_id = breed.id, name = %breed.name, "Breed modified");

        Ok(breed)
    }

    /// Re-fetch the breed to assert existence, then delete the base row.
    /// Children go with it via cascade. A delete that affects no rows after
    /// the existence check is a fatal DeleteFailed, distinct from NotFound.
    pub async fn delete_breed(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        fetch_breed(&mut tx, id).await?;
        if !BreedRepo::delete(&mut tx, id).await? {
            return Err(AppError::Core(CoreError::DeleteFailed {
                entity: "Breed",
                id,
            }));
        }

        tx.commit().await?;
        tracing::info!(breed_id = id, "Breed deleted");
        Ok(())
    }
}

/// Fetch a breed and attach its children, or fail with NotFound.
async fn fetch_breed(conn: &mut PgConnection, id: DbId) -> AppResult<Breed> {
    let row = BreedRepo::find_by_id(conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Breed",
            id,
        }))?;
    let alternates = BreedRepo::alternate_names(conn, id).await?;
    let categories = BreedRepo::category_names(conn, id).await?;
    Ok(Breed::assemble(row, categories, alternates))
}

/// Insert category links (reuse-or-create per name) and alternate names in
/// request order.
async fn insert_children(
    conn: &mut PgConnection,
    breed_id: DbId,
    category_names: &[String],
    alternate_names: &[String],
) -> AppResult<()> {
    for name in category_names {
        let category = BreedRepo::find_or_create_category(conn, name).await?;
        BreedRepo::link_category(conn, breed_id, category.id).await?;
    }
    for name in alternate_names {
        BreedRepo::insert_alternate_name(conn, breed_id, name).await?;
    }
    Ok(())
}

/// Map a `uq_breed_name` violation to a Conflict with a generic message;
/// the storage detail stays out of the response.
fn classify_duplicate_name(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some("uq_breed_name")
        {
            return AppError::Core(CoreError::Conflict("Duplicate key".to_string()));
        }
    }
    AppError::Database(err)
}
