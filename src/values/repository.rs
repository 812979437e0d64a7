// Database repository for the leadership value catalog

use sqlx::PgPool;

use crate::error::ApiError;
use crate::values::models::LeadershipValue;

/// Repository for leadership value operations
#[derive(Clone)]
pub struct ValuesRepository {
    pool: PgPool,
}

impl ValuesRepository {
    /// Create a new ValuesRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new leadership value
    pub async fn create(&self, value: &str, description: &str) -> Result<LeadershipValue, ApiError> {
        let created = sqlx::query_as::<_, LeadershipValue>(
            r#"
            INSERT INTO leadership_values (value, description)
            VALUES ($1, $2)
            RETURNING id, value, description
            "#,
        )
        .bind(value)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// List all leadership values
    pub async fn find_all(&self) -> Result<Vec<LeadershipValue>, ApiError> {
        let values = sqlx::query_as::<_, LeadershipValue>(
            "SELECT id, value, description FROM leadership_values ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(values)
    }

    /// Find a leadership value by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<LeadershipValue>, ApiError> {
        let value = sqlx::query_as::<_, LeadershipValue>(
            "SELECT id, value, description FROM leadership_values WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    /// Replace a leadership value, returning None when the id is unknown
    pub async fn update(
        &self,
        id: i32,
        value: &str,
        description: &str,
    ) -> Result<Option<LeadershipValue>, ApiError> {
        let updated = sqlx::query_as::<_, LeadershipValue>(
            r#"
            UPDATE leadership_values
            SET value = $1, description = $2
            WHERE id = $3
            RETURNING id, value, description
            "#,
        )
        .bind(value)
        .bind(description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a leadership value, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM leadership_values WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
