//! Category repository.

use sqlx::PgPool;

use fraiche_core::{Category, CategoryId};

use super::RepositoryError;

/// Input for category creation and update.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub position: i32,
}

/// Repository for admin category operations.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories in display order, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as(
            r"
            SELECT id, name, description, image, is_active, position, created_at, updated_at
            FROM shop.categories
            ORDER BY position, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// One category by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as(
            r"
            SELECT id, name, description, image, is_active, position, created_at, updated_at
            FROM shop.categories
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: NewCategory) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as(
            r"
            INSERT INTO shop.categories (name, description, image, is_active, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, image, is_active, position, created_at, updated_at
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.is_active)
        .bind(input.position)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// Update a category. Returns `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: CategoryId,
        input: NewCategory,
    ) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as(
            r"
            UPDATE shop.categories
            SET name = $2, description = $3, image = $4, is_active = $5, position = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, image, is_active, position, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.is_active)
        .bind(input.position)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Delete a category. Returns whether a row existed.
    ///
    /// Fails while products still reference the category; deactivate or
    /// reassign those first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails (including
    /// the foreign-key violation above).
    pub async fn delete(&self, id: CategoryId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
