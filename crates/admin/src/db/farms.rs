//! Farm repository.

use sqlx::PgPool;

use fraiche_core::{Farm, FarmId};

use super::RepositoryError;

/// Input for farm creation and update.
#[derive(Debug, Clone)]
pub struct NewFarm {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
}

/// Repository for admin farm operations.
pub struct FarmRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FarmRepository<'a> {
    /// Create a new farm repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All farms ordered by name, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Farm>, RepositoryError> {
        let farms = sqlx::query_as(
            r"
            SELECT id, name, description, location, image, is_active, created_at, updated_at
            FROM shop.farms
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(farms)
    }

    /// One farm by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: FarmId) -> Result<Option<Farm>, RepositoryError> {
        let farm = sqlx::query_as(
            r"
            SELECT id, name, description, location, image, is_active, created_at, updated_at
            FROM shop.farms
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(farm)
    }

    /// Create a farm.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: NewFarm) -> Result<Farm, RepositoryError> {
        let farm = sqlx::query_as(
            r"
            INSERT INTO shop.farms (name, description, location, image, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, location, image, is_active, created_at, updated_at
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.location)
        .bind(&input.image)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(farm)
    }

    /// Update a farm. Returns `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: FarmId,
        input: NewFarm,
    ) -> Result<Option<Farm>, RepositoryError> {
        let farm = sqlx::query_as(
            r"
            UPDATE shop.farms
            SET name = $2, description = $3, location = $4, image = $5, is_active = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, location, image, is_active, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.location)
        .bind(&input.image)
        .bind(input.is_active)
        .fetch_optional(self.pool)
        .await?;

        Ok(farm)
    }

    /// Delete a farm. Products referencing it keep existing with their
    /// `farm_id` cleared. Returns whether a row existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: FarmId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.farms WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
